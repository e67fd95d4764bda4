// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_core::OsRng;

use crate::generators::RngSource;
use crate::models::{Generated, GenerationRequest, StrengthAssessment};

pub struct PasswordGenerator {
    source: RngSource,
}

impl PasswordGenerator {
    pub fn new(source: RngSource) -> Self {
        PasswordGenerator { source }
    }

    pub fn generate_password(&self, request: &GenerationRequest) -> Generated {
        log::debug!(
            "Generating password: length={}, classes={}, rng={}",
            request.length, request.classes, self.source
        );
        match self.source {
            RngSource::Thread => build(request, &mut rand::thread_rng()),
            RngSource::Os => build(request, &mut OsRng),
        }
    }

    pub fn analyze_password_strength(&self, generated: &Generated, target_length: usize, any_enabled: bool) -> StrengthAssessment {
        crate::generators::score(generated, target_length, any_enabled)
    }
}

/// Builds a password that holds at least one character of every enabled
/// class, fills the rest from the union of enabled alphabets and shuffles.
///
/// When `length` is smaller than the number of enabled classes no fill takes
/// place and the result is one character per class, longer than requested.
pub fn build<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> Generated {
    if request.classes.is_empty() {
        return Generated::NoSelection;
    }

    let mut combined = Vec::new();
    let mut chars = Vec::with_capacity(request.length.max(request.classes.len()));

    for class in request.classes.iter() {
        let alphabet = class.alphabet().as_bytes();
        chars.push(random_char(alphabet, rng));
        combined.extend_from_slice(alphabet);
    }

    let remaining = request.length.saturating_sub(chars.len());
    let dist = Uniform::from(0..combined.len());
    chars.extend((0..remaining).map(|_| combined[dist.sample(rng)] as char));

    shuffle(&mut chars, rng);
    Generated::Password(chars.into_iter().collect())
}

/// Uniform pick from a non-empty ASCII alphabet.
pub fn random_char<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}

/// Fisher-Yates: walk from the last index down, swapping each slot with a
/// uniformly chosen index in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
