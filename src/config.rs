use serde::Serialize;

use crate::charset::{CharacterClass, ClassSet};

/// Validated, immutable parameters for a [`crate::PasswordGenerator`].
///
/// There are no setters: changing the length or the classes means building a new config, which
/// resets anything not given back to its default.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GeneratorConfig {
    length: usize,
    classes: ClassSet,
}

impl GeneratorConfig {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 1024;
    pub const DEFAULT_LENGTH: usize = 16;

    /// Validate `length` and capture the class set.
    ///
    /// An empty set of classes is not an error; it means "every class".
    pub fn new<I>(length: i64, classes: I) -> Result<GeneratorConfig, ValidationError>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let length = usize::try_from(length)
            .ok()
            .filter(|l| (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(l))
            .ok_or(ValidationErrorRepr::InvalidLength(length))?;

        let mut classes = classes.into_iter().collect::<ClassSet>();
        if classes.is_empty() {
            classes = ClassSet::all();
        }

        tracing::debug!(length, ?classes, "created generator config");
        Ok(GeneratorConfig { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            length: Self::DEFAULT_LENGTH,
            classes: ClassSet::all(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    InvalidLength,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ValidationError(ValidationErrorRepr);

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self.0 {
            ValidationErrorRepr::InvalidLength(_) => ValidationErrorKind::InvalidLength,
        }
    }
}

impl From<ValidationErrorRepr> for ValidationError {
    fn from(err: ValidationErrorRepr) -> ValidationError {
        ValidationError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ValidationErrorRepr {
    #[error(
        "invalid password length {0}: must be between {} and {}",
        GeneratorConfig::MIN_LENGTH,
        GeneratorConfig::MAX_LENGTH
    )]
    InvalidLength(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_lengths_are_rejected() {
        for length in [i64::MIN, -1, 0, 3, 1025, i64::MAX] {
            let err = GeneratorConfig::new(length, CharacterClass::ALL).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidLength);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(GeneratorConfig::new(4, ClassSet::empty()).unwrap().length(), 4);
        assert_eq!(GeneratorConfig::new(1024, ClassSet::empty()).unwrap().length(), 1024);
    }

    #[test]
    fn empty_classes_mean_all_classes() {
        let config = GeneratorConfig::new(16, ClassSet::empty()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.classes(), ClassSet::all());
    }

    #[test]
    fn error_message_names_the_bound() {
        let err = GeneratorConfig::new(3, ClassSet::empty()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid password length 3: must be between 4 and 1024"
        );
    }
}
