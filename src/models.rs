// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::GeneratorError;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
/// Used for both generation and strength detection. Must stay bit-exact.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Text shown in place of a password when no class is enabled.
pub const NO_SELECTION_PLACEHOLDER: &str = "Select options";

/// A named alphabet category. Declaration order is the canonical order used
/// for mandatory characters and for the combined alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum CharacterClass {
    #[serde(rename = "upper")]
    Uppercase,
    #[serde(rename = "lower")]
    Lowercase,
    #[serde(rename = "digit")]
    Digit,
    #[serde(rename = "symbol")]
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => SYMBOL_CHARS.contains(c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "upper",
            CharacterClass::Lowercase => "lower",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            other => Err(GeneratorError::UnknownClass(other.to_string())),
        }
    }
}

/// Set of enabled character classes, always iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSet(BTreeSet<CharacterClass>);

impl ClassSet {
    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_flags(uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> Self {
        let mut set = Self::none();
        set.set(CharacterClass::Uppercase, uppercase);
        set.set(CharacterClass::Lowercase, lowercase);
        set.set(CharacterClass::Digit, digits);
        set.set(CharacterClass::Symbol, symbols);
        set
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0.contains(&class)
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.0.insert(class);
        } else {
            self.0.remove(&class);
        }
    }

    /// Flips a class and returns whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.contains(class);
        self.set(class, enabled);
        enabled
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        ClassSet(iter.into_iter().collect())
    }
}

impl FromStr for ClassSet {
    type Err = GeneratorError;

    /// Parses a comma separated list such as `upper,lower,digit`. An empty
    /// string (or `none`) is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(ClassSet::none());
        }
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(CharacterClass::from_str)
            .collect()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        f.write_str(&names.join(","))
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Result<Self, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::ZeroLength);
        }
        Ok(Self { length, classes })
    }
}

/// Result of a build: either a password or the "no class selected" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Generated {
    Password(String),
    NoSelection,
}

impl Generated {
    pub fn as_password(&self) -> Option<&str> {
        match self {
            Generated::Password(password) => Some(password),
            Generated::NoSelection => None,
        }
    }

    pub fn is_no_selection(&self) -> bool {
        matches!(self, Generated::NoSelection)
    }

    /// Text to render: the password itself or the placeholder.
    pub fn display_text(&self) -> &str {
        self.as_password().unwrap_or(NO_SELECTION_PLACEHOLDER)
    }
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    NoSelection,
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::NoSelection => "SELECT OPTIONS",
            StrengthTier::TooWeak => "TOO WEAK",
            StrengthTier::Weak => "WEAK",
            StrengthTier::Medium => "MEDIUM",
            StrengthTier::Strong => "STRONG",
        }
    }

    pub fn active_bars(self) -> u8 {
        match self {
            StrengthTier::NoSelection => 0,
            StrengthTier::TooWeak => 1,
            StrengthTier::Weak => 2,
            StrengthTier::Medium => 3,
            StrengthTier::Strong => 4,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthAssessment {
    pub tier: StrengthTier,
    /// Number of character classes observed in the password (0-4)
    pub diversity_score: u8,
    /// Number of lit strength bars (0-4)
    pub active_bars: u8,
}

impl StrengthAssessment {
    pub const TOTAL_BARS: u8 = 4;

    pub fn new(tier: StrengthTier, diversity_score: u8) -> Self {
        Self {
            tier,
            diversity_score,
            active_bars: tier.active_bars(),
        }
    }
}
