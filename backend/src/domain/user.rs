//! Household member data model.
//!
//! A member owns a name, an optional display colour and a list of visited
//! countries. Ids are generated by the store; the domain only validates that
//! they are positive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The id was zero or negative.
    #[error("user id must be a positive integer")]
    InvalidId,
    /// The name was blank once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// The name exceeded [`USER_NAME_MAX`] characters.
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The colour exceeded [`USER_COLOR_MAX`] characters.
    #[error("colour must be at most {max} characters")]
    ColorTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Maximum allowed length for a member name, matching the column width.
pub const USER_NAME_MAX: usize = 64;
/// Maximum allowed length for a colour value, matching the column width.
pub const USER_COLOR_MAX: usize = 32;

/// Store-generated user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::UserId;
    ///
    /// assert_eq!(UserId::new(7).map(|id| id.get()), Ok(7));
    /// assert!(UserId::new(0).is_err());
    /// ```
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Interpret a submitted selector value.
    ///
    /// Anything that is not a positive integer yields `None`, which callers
    /// treat as "no current user".
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::UserId;
    ///
    /// assert_eq!(UserId::parse_selection(" 3 ").map(|id| id.get()), Some(3));
    /// assert!(UserId::parse_selection("abc").is_none());
    /// assert!(UserId::parse_selection("").is_none());
    /// ```
    #[must_use]
    pub fn parse_selection(raw: &str) -> Option<Self> {
        raw.trim().parse::<i32>().ok().and_then(|id| Self::new(id).ok())
    }

    /// Access the raw integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trimmed, non-empty member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`]; surrounding whitespace is
    /// removed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: USER_NAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display colour chosen for a member, typically a CSS hex value.
///
/// The value is stored verbatim; browsers ignore colours they cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserColor(String);

impl UserColor {
    /// Interpret a submitted colour. Blank input means "no colour".
    pub fn parse(raw: &str) -> Result<Option<Self>, UserValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > USER_COLOR_MAX {
            return Err(UserValidationError::ColorTooLong {
                max: USER_COLOR_MAX,
            });
        }
        Ok(Some(Self(trimmed.to_owned())))
    }
}

impl AsRef<str> for UserColor {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A persisted household member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    color: Option<UserColor>,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub const fn new(id: UserId, name: UserName, color: Option<UserColor>) -> Self {
        Self { id, name, color }
    }

    /// Build a user from raw column values, as read from a store.
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::User;
    ///
    /// let user = User::try_from_parts(1, "Ann", Some("#ff0000")).expect("valid user");
    /// assert_eq!(user.name().as_ref(), "Ann");
    /// assert_eq!(user.color().map(AsRef::as_ref), Some("#ff0000"));
    /// ```
    pub fn try_from_parts(
        id: i32,
        name: &str,
        color: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        let parsed_color = color.map(UserColor::parse).transpose()?.flatten();
        Ok(Self::new(
            UserId::new(id)?,
            UserName::new(name)?,
            parsed_color,
        ))
    }

    /// Store-generated identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Member name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Display colour, if the member picked one.
    #[must_use]
    pub const fn color(&self) -> Option<&UserColor> {
        self.color.as_ref()
    }
}

/// Validated input for creating a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
    color: Option<UserColor>,
}

impl NewUser {
    /// Validate submitted form values.
    pub fn try_from_form(name: &str, color: &str) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            color: UserColor::parse(color)?,
        })
    }

    /// Member name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Display colour, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&UserColor> {
        self.color.as_ref()
    }

    /// Attach the generated id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.color)
    }
}
