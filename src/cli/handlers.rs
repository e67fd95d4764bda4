// src/cli/handlers.rs
use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::cli::commands::ClassFlags;
use crate::core::config::Config;
use crate::generators::{strength, PasswordGenerator};
use crate::models::{CharacterClass, ClassSet, GenerationRequest, StrengthAssessment};
use crate::utils;

#[derive(Debug, Serialize)]
struct GeneratedOutput {
    password: Option<String>,
    no_selection: bool,
    length: usize,
    classes: ClassSet,
    strength: StrengthAssessment,
}

#[derive(Debug, Serialize)]
struct ScoreOutput {
    target_length: usize,
    label: &'static str,
    strength: StrengthAssessment,
}

// Handlers for CLI commands
pub fn handle_generate<W: Write>(
    out: &mut W,
    config: &Config,
    length: Option<usize>,
    flags: &ClassFlags,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    let length = config.check_length(length.unwrap_or(config.default_length))?;
    let classes = flags.apply(&config.default_classes);
    let any_enabled = !classes.is_empty();
    let request = GenerationRequest::new(length, classes)?;
    let generator = PasswordGenerator::new(config.rng_source);

    for _ in 0..count {
        let generated = generator.generate_password(&request);
        let strength = generator.analyze_password_strength(&generated, length, any_enabled);

        if json {
            let output = GeneratedOutput {
                password: generated.as_password().map(str::to_string),
                no_selection: generated.is_no_selection(),
                length,
                classes: request.classes.clone(),
                strength,
            };
            let line = serde_json::to_string(&output).context("Failed to serialize password")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", generated)?;
            writeln!(out, "  {}", utils::strength_line(&strength))?;
        }
    }

    Ok(())
}

pub fn handle_score<W: Write>(
    out: &mut W,
    config: &Config,
    password: &str,
    length: Option<usize>,
    flags: &ClassFlags,
    json: bool,
) -> anyhow::Result<()> {
    let target_length = length.unwrap_or_else(|| password.chars().count());
    let any_enabled = !flags.apply(&config.default_classes).is_empty();
    let assessment = strength::score_str(password, target_length, any_enabled);

    if json {
        let output = ScoreOutput {
            target_length,
            label: assessment.tier.label(),
            strength: assessment,
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    } else {
        writeln!(out, "{}", utils::strength_line(&assessment))?;
    }

    Ok(())
}

pub fn handle_classes<W: Write>(out: &mut W, config: &Config) -> anyhow::Result<()> {
    for class in CharacterClass::ALL {
        let marker = if config.default_classes.contains(class) { "x" } else { " " };
        writeln!(out, "[{}] {:<7} {}", marker, class.name(), class.alphabet())?;
    }
    writeln!(out, "length: {}-{} (default {})", config.min_length, config.max_length, config.default_length)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    fn run_generate(length: Option<usize>, flags: ClassFlags, count: usize) -> anyhow::Result<Vec<serde_json::Value>> {
        let mut out = Vec::new();
        handle_generate(&mut out, &Config::default(), length, &flags, count, true)?;
        Ok(String::from_utf8(out)?
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect())
    }

    #[test]
    fn generate_json_lines() {
        let rows = run_generate(Some(12), ClassFlags { no_lowercase: true, ..ClassFlags::default() }, 3).unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let password = row["password"].as_str().unwrap();
            assert_eq!(password.len(), 12);
            assert!(!password.chars().any(|c| c.is_ascii_lowercase()));
            assert_eq!(row["classes"], serde_json::json!(["upper", "digit", "symbol"]));
            assert_eq!(row["strength"]["tier"], "strong");
        }
    }

    #[test]
    fn generate_without_classes_reports_no_selection() {
        let flags = ClassFlags { no_uppercase: true, no_lowercase: true, no_digits: true, no_symbols: true };
        let rows = run_generate(None, flags, 1).unwrap();
        assert_eq!(rows[0]["no_selection"], true);
        assert!(rows[0]["password"].is_null());
        assert_eq!(rows[0]["strength"]["active_bars"], 0);
    }

    #[test]
    fn generate_rejects_length_outside_bounds() {
        let err = run_generate(Some(100), ClassFlags::default(), 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::InvalidLength { length: 100, .. })
        ));
    }

    #[test]
    fn score_uses_password_length_by_default() {
        let mut out = Vec::new();
        handle_score(&mut out, &Config::default(), "abcdefgh", None, &ClassFlags::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["target_length"], 8);
        assert_eq!(value["label"], "WEAK");
        assert_eq!(value["strength"]["active_bars"], 2);
    }

    #[test]
    fn score_with_all_classes_disabled() {
        let mut out = Vec::new();
        let flags = ClassFlags { no_uppercase: true, no_lowercase: true, no_digits: true, no_symbols: true };
        handle_score(&mut out, &Config::default(), "Aa1!Aa1!Aa1!Aa1!", Some(16), &flags, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["strength"]["tier"], "no_selection");
    }

    #[test]
    fn classes_lists_alphabets() {
        let mut out = Vec::new();
        handle_classes(&mut out, &Config::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("!@#$%^&*()_+-=[]{}|;:,.<>?"));
        assert!(text.contains("length: 4-64 (default 16)"));
    }
}
