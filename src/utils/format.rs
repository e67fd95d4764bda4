// src/utils/format.rs
use console::{style, Color, StyledObject};

use crate::models::{StrengthAssessment, StrengthTier};

const BAR: &str = "▮";

// Colour of lit bars for each tier
pub fn tier_color(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::NoSelection => Color::Color256(240),
        StrengthTier::TooWeak => Color::Red,
        StrengthTier::Weak => Color::Color256(208),
        StrengthTier::Medium => Color::Yellow,
        StrengthTier::Strong => Color::Green,
    }
}

/// Plain-text bars, e.g. `[##--]`.
pub fn plain_bars(strength: &StrengthAssessment) -> String {
    let lit = strength.active_bars.min(StrengthAssessment::TOTAL_BARS) as usize;
    let unlit = StrengthAssessment::TOTAL_BARS as usize - lit;
    format!("[{}{}]", "#".repeat(lit), "-".repeat(unlit))
}

// Four bars, lit ones in the tier colour, the rest gray
pub fn styled_bars(strength: &StrengthAssessment) -> String {
    let color = tier_color(strength.tier);
    (0..StrengthAssessment::TOTAL_BARS)
        .map(|i| {
            let bar = style(BAR);
            if i < strength.active_bars {
                bar.fg(color).to_string()
            } else {
                bar.fg(Color::Color256(240)).to_string()
            }
        })
        .collect()
}

pub fn styled_label(strength: &StrengthAssessment) -> StyledObject<&'static str> {
    style(strength.tier.label()).fg(tier_color(strength.tier)).bold()
}

// Single summary line used by the CLI; plain bars when colours are off
pub fn strength_line(strength: &StrengthAssessment) -> String {
    if console::colors_enabled() {
        format!(
            "{} {} (classes: {}/4)",
            styled_bars(strength),
            styled_label(strength),
            strength.diversity_score
        )
    } else {
        format!(
            "{} {} (classes: {}/4)",
            plain_bars(strength),
            strength.tier.label(),
            strength.diversity_score
        )
    }
}
