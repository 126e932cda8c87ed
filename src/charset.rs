//! The fixed character classes passwords are built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

static UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SPECIAL: &str = "!#$%@=^*+-";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharacterClass {
    /// Every class, in the order membership is tested.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// The characters belonging to this class. The four tables are disjoint.
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPER,
            CharacterClass::Lower => LOWER,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        self.chars().contains(ch)
    }

    fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown character class {0:?} (expected one of: upper, lower, digits, special)")]
pub struct UnknownClass(String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<CharacterClass, UnknownClass> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownClass(s.to_owned()))
    }
}

/// A set of character classes, each present at most once.
///
/// Iteration always yields classes in [`CharacterClass::ALL`] order, regardless of insertion
/// order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> ClassSet {
        ClassSet(0)
    }

    pub fn all() -> ClassSet {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            next: 0,
        }
    }

    /// Whether `ch` belongs to any class in the set.
    pub fn admits(&self, ch: char) -> bool {
        self.iter().any(|class| class.contains(ch))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> ClassSet {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl IntoIterator for ClassSet {
    type Item = CharacterClass;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the classes of a [`ClassSet`], in [`CharacterClass::ALL`] order.
#[derive(Clone, Debug)]
pub struct Iter {
    set: ClassSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = CharacterClass;

    fn next(&mut self) -> Option<CharacterClass> {
        while let Some(&class) = CharacterClass::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(class) {
                return Some(class);
            }
        }
        None
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for ClassSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ClassSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let classes = Vec::<CharacterClass>::deserialize(deserializer)?;
        Ok(classes.into_iter().collect())
    }
}
