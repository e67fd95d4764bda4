// src/generators/mod.rs
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::{build, PasswordGenerator};
pub use strength::score;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    ZeroLength,

    #[error("Password length {length} is outside the allowed range {min}-{max}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("Unknown character class: {0}")]
    UnknownClass(String),

    #[error("Unknown random source: {0}")]
    UnknownRngSource(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Where randomness comes from in production. Tests inject their own `Rng`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RngSource {
    /// Thread-local generator from `rand`
    #[default]
    Thread,
    /// Operating system CSPRNG
    Os,
}

impl FromStr for RngSource {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "thread" => Ok(RngSource::Thread),
            "os" | "osrng" => Ok(RngSource::Os),
            other => Err(GeneratorError::UnknownRngSource(other.to_string())),
        }
    }
}

impl std::fmt::Display for RngSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RngSource::Thread => write!(f, "thread"),
            RngSource::Os => write!(f, "os"),
        }
    }
}

/// Checks a requested length against configured bounds (inclusive).
pub fn check_length(length: usize, min: usize, max: usize) -> Result<usize> {
    if length < min || length > max {
        return Err(GeneratorError::InvalidLength { length, min, max });
    }
    Ok(length)
}
