//! Fixed visitor-facing messages.
//!
//! The page shows these verbatim, so changing one is a visible change.

/// Shown when the home page data cannot be loaded.
pub const FETCH_FAILED: &str = "Error fetching data";
/// Shown when the country field is blank.
pub const EMPTY_COUNTRY: &str = "Country name cannot be empty, please try again";
/// Shown when no country name contains the input, and for unexpected
/// failures while recording a visit.
pub const UNKNOWN_COUNTRY: &str = "Country name does not exist, try again";
/// Shown when the member already has the country.
pub const DUPLICATE_COUNTRY: &str = "Country already added, try again";
/// Shown when the new member name is blank.
pub const EMPTY_NAME: &str = "Name cannot be empty, please try again";
/// Shown when the member could not be stored.
pub const ADD_MEMBER_FAILED: &str = "Error adding new member, try again";
/// Shown when an action needs a selected member and there is none.
pub const NO_USER_SELECTED: &str = "No user selected, try again";
/// Shown when the member could not be removed.
pub const DELETE_FAILED: &str = "Error deleting user data, try again";
