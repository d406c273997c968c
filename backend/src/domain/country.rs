//! Country reference values.
//!
//! Countries are read-only reference data. Visits store only the short code,
//! so the domain needs just two values: the code itself and the free-text
//! query a visitor typed to find it.

use std::fmt;

/// Code stored for the British Indian Ocean Territory.
pub const BRITISH_INDIAN_OCEAN_TERRITORY: &str = "IO";
/// Code stored for India.
pub const INDIA: &str = "IN";

/// Validation errors for [`CountryCode`] and [`CountryQuery`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryValidationError {
    /// The code was blank.
    #[error("country code must not be empty")]
    EmptyCode,
    /// The code had surrounding whitespace or non-alphanumeric characters.
    #[error("country code must be alphanumeric: {0:?}")]
    InvalidCode(String),
    /// The query was blank once trimmed.
    #[error("country name must not be empty")]
    EmptyQuery,
}

/// Short region identifier such as `FR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and construct a code. Codes are normalised to upper case.
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::CountryCode;
    ///
    /// let code = CountryCode::new("fr").expect("valid code");
    /// assert_eq!(code.as_ref(), "FR");
    /// ```
    pub fn new(code: impl AsRef<str>) -> Result<Self, CountryValidationError> {
        let raw = code.as_ref();
        if raw.is_empty() {
            return Err(CountryValidationError::EmptyCode);
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CountryValidationError::InvalidCode(raw.to_owned()));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Apply the region remap used when recording a visit.
    ///
    /// The British Indian Ocean Territory has no region of its own on the
    /// map, so it is recorded as India. Every other code passes through.
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::CountryCode;
    ///
    /// let territory = CountryCode::new("IO").expect("valid code");
    /// assert_eq!(territory.into_map_region().as_ref(), "IN");
    /// ```
    #[must_use]
    pub fn into_map_region(self) -> Self {
        if self.0 == BRITISH_INDIAN_OCEAN_TERRITORY {
            Self(INDIA.to_owned())
        } else {
            self
        }
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive fragment of a country name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryQuery(String);

impl CountryQuery {
    /// Build a query from visitor input: trimmed and lower-cased.
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::CountryQuery;
    ///
    /// let query = CountryQuery::new("  FRANC ").expect("non-empty");
    /// assert_eq!(query.needle(), "franc");
    /// assert!(CountryQuery::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, CountryValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CountryValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Lower-cased fragment to search for.
    #[must_use]
    pub fn needle(&self) -> &str {
        self.0.as_str()
    }

    /// `LIKE` pattern matching names that contain the fragment.
    ///
    /// `\`, `%` and `_` in the input are escaped with a backslash so they
    /// match literally.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Whether a country name contains the fragment, ignoring case.
    #[must_use]
    pub fn matches(&self, country_name: &str) -> bool {
        country_name.to_lowercase().contains(self.0.as_str())
    }

    /// Whether a country name equals the fragment, ignoring case.
    #[must_use]
    pub fn is_exact(&self, country_name: &str) -> bool {
        country_name.to_lowercase() == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("IO", "IN")]
    #[case("io", "IN")]
    #[case("IN", "IN")]
    #[case("FR", "FR")]
    fn region_remap_only_touches_the_territory(#[case] raw: &str, #[case] expected: &str) {
        let code = CountryCode::new(raw).expect("valid code");
        assert_eq!(code.into_map_region().as_ref(), expected);
    }

    #[rstest]
    #[case("", CountryValidationError::EmptyCode)]
    #[case(" F", CountryValidationError::InvalidCode(" F".to_owned()))]
    #[case("F-R", CountryValidationError::InvalidCode("F-R".to_owned()))]
    fn invalid_codes_are_rejected(#[case] raw: &str, #[case] expected: CountryValidationError) {
        assert_eq!(CountryCode::new(raw), Err(expected));
    }

    #[rstest]
    #[case("franc", "%franc%")]
    #[case("100%", "%100\\%%")]
    #[case("a_b", "%a\\_b%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn like_pattern_escapes_wildcards(#[case] raw: &str, #[case] expected: &str) {
        let query = CountryQuery::new(raw).expect("non-empty");
        assert_eq!(query.like_pattern(), expected);
    }

    #[rstest]
    fn matching_ignores_case() {
        let query = CountryQuery::new("FrAnC").expect("non-empty");
        assert!(query.matches("France"));
        assert!(!query.matches("Germany"));
        assert!(!query.is_exact("France"));
        assert!(CountryQuery::new("france").expect("non-empty").is_exact("FRANCE"));
    }
}
