//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write as _;

use mockable::MockEnv;
use rstest::rstest;
use tempfile::NamedTempFile;

use super::*;

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temporary key file");
    file.write_all(&vec![b'k'; len]).expect("write key bytes");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |name| vars.get(name).cloned());
    env
}

fn release_vars(key_path: String) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key_path),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn expect_error(result: Result<SessionSettings, SessionConfigError>) -> SessionConfigError {
    match result {
        Ok(_) => panic!("configuration should be rejected"),
        Err(error) => error,
    }
}

#[rstest]
fn release_accepts_complete_configuration() {
    let key = key_file(SESSION_KEY_MIN_LEN);
    let env = mock_env(release_vars(path_of(&key)));

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid configuration");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(#[case] missing: &'static str) {
    let key = key_file(SESSION_KEY_MIN_LEN);
    let mut vars = release_vars(path_of(&key));
    vars.remove(missing);

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sideways")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_malformed_toggles(#[case] name: &'static str, #[case] value: &str) {
    let key = key_file(SESSION_KEY_MIN_LEN);
    let mut vars = release_vars(path_of(&key));
    vars.insert(name, value.to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(
        err,
        SessionConfigError::InvalidEnv { name: reported, .. } if reported == name
    ));
}

#[rstest]
fn debug_falls_back_to_safe_defaults() {
    let env = mock_env(HashMap::from([(
        KEY_FILE_ENV,
        "/nonexistent/travel-tracker/key".to_owned(),
    )]));

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn release_rejects_same_site_none_without_secure_cookie() {
    let key = key_file(SESSION_KEY_MIN_LEN);
    let mut vars = release_vars(path_of(&key));
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_rejects_ephemeral_keys() {
    let key = key_file(SESSION_KEY_MIN_LEN);
    let mut vars = release_vars(path_of(&key));
    vars.insert(ALLOW_EPHEMERAL_ENV, "1".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
#[case(BuildMode::Release, SESSION_KEY_MIN_LEN - 1)]
#[case(BuildMode::Debug, KEY_DERIVE_MIN_LEN - 1)]
fn short_keys_are_rejected(#[case] mode: BuildMode, #[case] len: usize) {
    let key = key_file(len);
    let err = expect_error(session_settings_from_env(
        &mock_env(release_vars(path_of(&key))),
        mode,
    ));

    assert!(matches!(err, SessionConfigError::KeyTooShort { length, .. } if length == len));
}

#[rstest]
fn release_requires_readable_key_file() {
    let vars = release_vars("/nonexistent/travel-tracker/key".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}
