//! Utilities for generating passwords.

use rand::rngs::OsRng;

use crate::charset::CharacterClass;
use crate::config::{GeneratorConfig, ValidationError};
use crate::entropy::{ByteStream, EntropySource};

/// Generates passwords by filtering random bytes against a set of character classes.
///
/// Each random byte is read as an ASCII code. Bytes outside the printable band `33..=126` are
/// thrown away, as are printable characters that belong to no enabled class; everything else is
/// kept, until the password is long enough.
///
/// Every character of the result belongs to an enabled class, but the classes are *not* equally
/// represented: each one shows up in proportion to its size (26 upper, 26 lower, 10 digits, 10
/// special).
#[derive(Clone, Debug, Default)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
}

impl PasswordGenerator {
    pub fn new<I>(length: i64, classes: I) -> Result<PasswordGenerator, ValidationError>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Ok(PasswordGenerator::from_config(GeneratorConfig::new(
            length, classes,
        )?))
    }

    pub fn from_config(config: GeneratorConfig) -> PasswordGenerator {
        PasswordGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a password using the operating system's random number generator.
    pub fn generate(&self) -> crate::Secret {
        self.generate_with(&mut OsRng)
    }

    /// Generate a password from the bytes of the given source.
    ///
    /// The source is only borrowed for the duration of the call. Generation stops at the first
    /// byte that completes the password, so the rest of the last block is never used.
    pub fn generate_with<S>(&self, source: &mut S) -> crate::Secret
    where
        S: EntropySource + ?Sized,
    {
        let classes = self.config.classes();
        let length = self.config.length();
        tracing::trace!(length, ?classes, "generating password");

        let password = ByteStream::new(source)
            .filter(|b| (33..=126).contains(b))
            .map(char::from)
            .filter(|ch| classes.admits(*ch))
            .take(length)
            .collect::<String>();
        crate::Secret(password)
    }
}
