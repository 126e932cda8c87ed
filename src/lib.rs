use serde::Serialize;

pub mod charset;
mod config;
pub mod entropy;
pub mod password_generation;

pub use charset::{CharacterClass, ClassSet};
pub use config::{GeneratorConfig, ValidationError, ValidationErrorKind};
pub use entropy::EntropySource;
pub use password_generation::PasswordGenerator;

/// A generated password.
///
/// The `Debug` output never shows the contents; use [`Secret::as_str`] to get at them.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. Generated passwords are pure ASCII, so this is also the byte length.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
