//! Read model for the home page.

use super::{CountryCode, User};

/// Everything the home page shows for one visitor.
///
/// `current` is `None` when the visitor has no selected member or the
/// selected id no longer exists; renderers supply a default colour then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    /// Codes visited by the current member, in insertion order.
    pub visited: Vec<CountryCode>,
    /// The current member, when one resolves.
    pub current: Option<User>,
    /// Every member, ordered by id.
    pub users: Vec<User>,
}

impl HomeView {
    /// Number of visited countries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.visited.len()
    }
}
