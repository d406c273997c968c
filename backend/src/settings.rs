//! Environment-driven application settings.
//!
//! Values are read through [`mockable::Env`] so parsing can be exercised with
//! `MockEnv`. Unset variables take their documented defaults; malformed
//! values abort startup.

use mockable::Env;

use crate::domain::UserId;

pub use crate::outbound::persistence::DEFAULT_POOL_MAX_SIZE;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const HOST_ENV: &str = "HOST";
const PORT_ENV: &str = "PORT";
const POOL_MAX_SIZE_ENV: &str = "DATABASE_POOL_MAX_SIZE";
const RUN_MIGRATIONS_ENV: &str = "RUN_MIGRATIONS";
const DEFAULT_USER_ENV: &str = "DEFAULT_USER_ID";

/// Accepted spellings for boolean toggles.
pub(crate) const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 4000;
/// Member selected for clients that never picked one.
pub const DEFAULT_USER_ID: i32 = 1;

/// Errors raised while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Name of the environment variable.
        name: &'static str,
        /// Value that was supplied.
        value: String,
        /// Description of the expected value.
        expected: &'static str,
    },
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// PostgreSQL URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Maximum pooled connections.
    pub pool_max_size: u32,
    /// Apply embedded migrations before serving.
    ///
    /// When left off, the database must already carry the schema, including
    /// the unique `(user_id, country_code)` key on `visited_countries` that
    /// the visit insert's `ON CONFLICT` clause names.
    pub run_migrations: bool,
    /// Member a fresh client starts on; `None` means no member.
    pub default_user: Option<UserId>,
}

impl AppSettings {
    /// Read settings from the environment.
    ///
    /// # Examples
    /// ```
    /// use mockable::MockEnv;
    /// use travel_tracker::settings::AppSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PORT" => Some("8080".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 8080));
    /// assert!(settings.database_url.is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEnv`] naming the first malformed
    /// variable.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let database_url = non_blank(env, DATABASE_URL_ENV);
        let host = non_blank(env, HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parsed(env, PORT_ENV, "a port number (1-65535)", |raw| {
            raw.parse::<u16>().ok().filter(|port| *port > 0)
        })?
        .unwrap_or(DEFAULT_PORT);
        let pool_max_size = parsed(env, POOL_MAX_SIZE_ENV, "a positive integer", |raw| {
            raw.parse::<u32>().ok().filter(|size| *size > 0)
        })?
        .unwrap_or(DEFAULT_POOL_MAX_SIZE);
        let run_migrations =
            parsed(env, RUN_MIGRATIONS_ENV, BOOL_EXPECTED, parse_bool)?.unwrap_or(false);
        let default_user = parsed(
            env,
            DEFAULT_USER_ENV,
            "a positive integer, 0 or none",
            parse_default_user,
        )?
        .unwrap_or_else(|| UserId::new(DEFAULT_USER_ID).ok());

        Ok(Self {
            database_url,
            host,
            port,
            pool_max_size,
            run_migrations,
            default_user,
        })
    }

    /// Address to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parsed<E, T, F>(
    env: &E,
    name: &'static str,
    expected: &'static str,
    parse: F,
) -> Result<Option<T>, SettingsError>
where
    E: Env,
    F: FnOnce(&str) -> Option<T>,
{
    let Some(value) = non_blank(env, name) else {
        return Ok(None);
    };
    parse(&value)
        .map(Some)
        .ok_or(SettingsError::InvalidEnv {
            name,
            value,
            expected,
        })
}

fn parse_default_user(raw: &str) -> Option<Option<UserId>> {
    if raw == "0" || raw.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    raw.parse::<i32>().ok().and_then(|id| UserId::new(id).ok()).map(Some)
}

/// Parse a boolean toggle.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn env_with(vars: &[(&'static str, &'static str)]) -> MockEnv {
        let owned = vars.to_vec();
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| {
            owned
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        });
        env
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = AppSettings::from_env(&env_with(&[])).expect("valid settings");

        assert_eq!(
            settings,
            AppSettings {
                database_url: None,
                host: DEFAULT_HOST.to_owned(),
                port: DEFAULT_PORT,
                pool_max_size: DEFAULT_POOL_MAX_SIZE,
                run_migrations: false,
                default_user: UserId::new(DEFAULT_USER_ID).ok(),
            }
        );
    }

    #[rstest]
    fn explicit_values_are_used() {
        let env = env_with(&[
            ("DATABASE_URL", "postgres://localhost/world"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_POOL_MAX_SIZE", "3"),
            ("RUN_MIGRATIONS", "yes"),
            ("DEFAULT_USER_ID", "7"),
        ]);
        let settings = AppSettings::from_env(&env).expect("valid settings");

        assert_eq!(settings.database_url.as_deref(), Some("postgres://localhost/world"));
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 8080));
        assert_eq!(settings.pool_max_size, 3);
        assert!(settings.run_migrations);
        assert_eq!(settings.default_user.map(UserId::get), Some(7));
    }

    #[rstest]
    #[case("0")]
    #[case("none")]
    #[case("NONE")]
    fn default_user_can_be_disabled(#[case] raw: &'static str) {
        let settings = AppSettings::from_env(&env_with(&[("DEFAULT_USER_ID", raw)]))
            .expect("valid settings");
        assert!(settings.default_user.is_none());
    }

    #[rstest]
    fn blank_database_url_counts_as_unset() {
        let settings = AppSettings::from_env(&env_with(&[("DATABASE_URL", "  ")]))
            .expect("valid settings");
        assert!(settings.database_url.is_none());
    }

    #[rstest]
    #[case("PORT", "0")]
    #[case("PORT", "http")]
    #[case("PORT", "70000")]
    #[case("DATABASE_POOL_MAX_SIZE", "0")]
    #[case("RUN_MIGRATIONS", "maybe")]
    #[case("DEFAULT_USER_ID", "-3")]
    #[case("DEFAULT_USER_ID", "ann")]
    fn malformed_values_name_the_variable(#[case] name: &'static str, #[case] value: &'static str) {
        let err = AppSettings::from_env(&env_with(&[(name, value)])).expect_err("rejected");
        let SettingsError::InvalidEnv {
            name: reported,
            value: reported_value,
            ..
        } = err;
        assert_eq!(reported, name);
        assert_eq!(reported_value, value);
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("TRUE", Some(true))]
    #[case(" n ", Some(false))]
    #[case("off", None)]
    fn bool_parsing(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }
}
