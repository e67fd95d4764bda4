// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::ClassSet;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(long, short)]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassFlags,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score an existing password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,

        /// Target length (defaults to the password's length)
        #[arg(long, short)]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassFlags,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List character classes and their alphabets
    Classes,

    /// Run the interactive generator
    Interactive,

    /// Run the HTTP API server
    Serve {
        /// API server port
        #[arg(long, env = "PASSFORGE_API_PORT")]
        port: Option<u16>,
    },
}

/// Checkbox-style switches. Every class starts enabled unless the configured
/// defaults say otherwise.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ClassFlags {
    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,
}

impl ClassFlags {
    pub fn apply(&self, defaults: &ClassSet) -> ClassSet {
        use crate::models::CharacterClass::*;
        ClassSet::from_flags(
            defaults.contains(Uppercase) && !self.no_uppercase,
            defaults.contains(Lowercase) && !self.no_lowercase,
            defaults.contains(Digit) && !self.no_digits,
            defaults.contains(Symbol) && !self.no_symbols,
        )
    }
}
