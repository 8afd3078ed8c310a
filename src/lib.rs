pub mod config;
pub mod domain;
pub mod ui_dioxus;
pub mod utils;

// Render helpers for unit tests and, with `test-helpers`, integration tests
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
