//! HTTP inbound adapter serving the HTML pages.

pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod travel;
pub mod views;

pub use travel::configure;
