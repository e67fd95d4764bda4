// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CharacterClass, ClassSet, StrengthAssessment};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured default, usually 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: configured classes)
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default: configured classes)
    pub lowercase: Option<bool>,
    /// Include digits (default: configured classes)
    pub digits: Option<bool>,
    /// Include symbols (default: configured classes)
    pub symbols: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Missing flags fall back to `defaults`.
    pub fn classes(&self, defaults: &ClassSet) -> ClassSet {
        let pick = |flag: Option<bool>, class| flag.unwrap_or_else(|| defaults.contains(class));
        ClassSet::from_flags(
            pick(self.uppercase, CharacterClass::Uppercase),
            pick(self.lowercase, CharacterClass::Lowercase),
            pick(self.digits, CharacterClass::Digit),
            pick(self.symbols, CharacterClass::Symbol),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (absent when no class was selected)
    pub password: Option<String>,
    /// True when no character class was selected
    pub no_selection: bool,
    /// Requested length
    pub length: Option<usize>,
    /// Strength of the generated password
    pub strength: Option<StrengthAssessment>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            no_selection: false,
            length: None,
            strength: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to score
    pub password: String,
    /// Length the password was requested with (default: its character count)
    pub target_length: Option<usize>,
    /// Whether any character class is enabled (default: true)
    pub any_enabled: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength tier, diversity score and active bars
    pub strength: StrengthAssessment,
    /// Tier label as shown by the widget
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassInfo {
    pub class: CharacterClass,
    pub alphabet: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassListResponse {
    pub success: bool,
    pub classes: Vec<ClassInfo>,
    /// Length bounds accepted by the generator
    pub min_length: usize,
    pub max_length: usize,
}
