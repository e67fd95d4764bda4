// src/generators/strength.rs
use crate::models::{CharacterClass, Generated, StrengthAssessment, StrengthTier};

/// Counts how many of the four classes occur in `password`.
pub fn diversity_score(password: &str) -> u8 {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count() as u8
}

/// Classifies a displayed value. `any_enabled == false` wins over everything
/// else; otherwise the rendered text is scored, placeholder included.
pub fn score(generated: &Generated, target_length: usize, any_enabled: bool) -> StrengthAssessment {
    score_str(generated.display_text(), target_length, any_enabled)
}

pub fn score_str(password: &str, target_length: usize, any_enabled: bool) -> StrengthAssessment {
    if !any_enabled {
        return StrengthAssessment::new(StrengthTier::NoSelection, 0);
    }

    let diversity = diversity_score(password);
    // First match wins; the tiers are not monotonic in either input alone.
    let tier = if target_length >= 16 && diversity >= 4 {
        StrengthTier::Strong
    } else if target_length >= 12 && diversity >= 3 {
        StrengthTier::Strong
    } else if target_length >= 8 && diversity >= 2 {
        StrengthTier::Medium
    } else if target_length >= 8 && diversity >= 1 {
        StrengthTier::Weak
    } else {
        StrengthTier::TooWeak
    };

    StrengthAssessment::new(tier, diversity)
}
