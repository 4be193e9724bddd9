/// This is the library part of passgen, it generates passwords from a set of character classes
/// and hands them to the clipboard.
pub mod password_generator;
/// The state of one running frontend: the configuration and the last generated password.
pub mod session;

pub mod clipboard;
pub mod notify;
pub mod settings;

mod error;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub(crate) mod test_helpers;
