// src/core/widget.rs
use rand::Rng;
use rand_core::OsRng;

use crate::core::config::Config;
use crate::generators::{self, RngSource};
use crate::models::{CharacterClass, ClassSet, Generated, GenerationRequest, StrengthAssessment};

/// Owns the control state of the generator (length, enabled classes and the
/// value on display). Each event reads this state once and re-runs the pure
/// builder and scorer.
pub struct GeneratorWidget {
    length: usize,
    classes: ClassSet,
    displayed: Generated,
    min_length: usize,
    max_length: usize,
    rng_source: RngSource,
}

impl GeneratorWidget {
    /// Starts from the configured defaults and generates once.
    pub fn new(config: &Config) -> Self {
        let mut widget = Self::idle(config);
        widget.regenerate();
        widget
    }

    /// Same as `new` but nothing is generated yet; the display shows the
    /// placeholder until the first `generate`.
    pub fn idle(config: &Config) -> Self {
        Self {
            length: config.default_length,
            classes: config.default_classes.clone(),
            displayed: Generated::NoSelection,
            min_length: config.min_length,
            max_length: config.max_length,
            rng_source: config.rng_source,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn displayed(&self) -> &Generated {
        &self.displayed
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    /// Slider moved. The displayed value is kept; only the strength changes.
    pub fn set_length(&mut self, length: usize) -> generators::Result<StrengthAssessment> {
        self.length = generators::check_length(length, self.min_length, self.max_length)?;
        log::debug!("Length set to {}", self.length);
        Ok(self.strength())
    }

    /// Checkbox flipped. Like `set_length`, this does not regenerate.
    pub fn toggle_class(&mut self, class: CharacterClass) -> StrengthAssessment {
        let enabled = self.classes.toggle(class);
        log::debug!("Class {} {}", class, if enabled { "enabled" } else { "disabled" });
        self.strength()
    }

    /// The generate button is disabled while no class is checked.
    pub fn can_generate(&self) -> bool {
        !self.classes.is_empty()
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StrengthAssessment {
        let request = self.request();
        log::debug!("Generating password: length={}, classes={}", request.length, request.classes);
        self.displayed = generators::build(&request, rng);
        self.strength()
    }

    /// Generates with the configured random source.
    pub fn regenerate(&mut self) -> StrengthAssessment {
        match self.rng_source {
            RngSource::Thread => self.generate(&mut rand::thread_rng()),
            RngSource::Os => self.generate(&mut OsRng),
        }
    }

    pub fn strength(&self) -> StrengthAssessment {
        generators::score(&self.displayed, self.length, !self.classes.is_empty())
    }

    /// Text suitable for copying; the placeholder is never copied.
    pub fn copyable(&self) -> Option<&str> {
        self.displayed.as_password()
    }

    fn request(&self) -> GenerationRequest {
        // `length` is always within validated bounds, which start at 1.
        GenerationRequest {
            length: self.length,
            classes: self.classes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;
    use crate::models::StrengthTier;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn widget() -> GeneratorWidget {
        GeneratorWidget::idle(&Config::default())
    }

    #[test]
    fn new_widget_generates_on_start() {
        let widget = GeneratorWidget::new(&Config::default());
        let password = widget.copyable().expect("password on start");
        assert_eq!(password.len(), 16);
        assert_eq!(widget.strength().tier, StrengthTier::Strong);
    }

    #[test]
    fn idle_widget_shows_placeholder() {
        let widget = widget();
        assert!(widget.displayed().is_no_selection());
        assert!(widget.copyable().is_none());
    }

    #[test]
    fn changing_length_rescores_old_password() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut widget = widget();
        widget.generate(&mut rng);
        let before = widget.displayed().clone();

        let strength = widget.set_length(4).unwrap();
        assert_eq!(widget.displayed(), &before);
        assert_eq!(strength.tier, StrengthTier::TooWeak);
        assert_eq!(strength.diversity_score, 4);
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let mut widget = widget();
        assert!(matches!(
            widget.set_length(65),
            Err(GeneratorError::InvalidLength { length: 65, .. })
        ));
        assert!(widget.set_length(3).is_err());
        assert_eq!(widget.length(), 16);
    }

    #[test]
    fn unchecking_everything_disables_generation() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut widget = widget();
        widget.generate(&mut rng);

        let mut last = None;
        for class in CharacterClass::ALL {
            last = Some(widget.toggle_class(class));
        }
        let strength = last.unwrap();
        assert_eq!(strength.tier, StrengthTier::NoSelection);
        assert_eq!(strength.active_bars, 0);
        assert!(!widget.can_generate());
        // The previous password stays on display.
        assert!(widget.copyable().is_some());

        widget.generate(&mut rng);
        assert!(widget.displayed().is_no_selection());
        assert!(widget.copyable().is_none());
    }

    #[test]
    fn lowercase_only_scores_weak() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut widget = widget();
        for class in [CharacterClass::Uppercase, CharacterClass::Digit, CharacterClass::Symbol] {
            widget.toggle_class(class);
        }
        assert_eq!(widget.classes(), &ClassSet::from_flags(false, true, false, false));
        widget.set_length(8).unwrap();
        let strength = widget.generate(&mut rng);
        assert_eq!(widget.copyable().unwrap().len(), 8);
        assert_eq!(strength.diversity_score, 1);
        assert_eq!(strength.tier, StrengthTier::Weak);
        assert_eq!(strength.active_bars, 2);
    }

    #[test]
    fn rechecking_a_class_scores_the_placeholder() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = Config { default_classes: ClassSet::none(), ..Config::default() };
        let mut widget = GeneratorWidget::idle(&config);
        widget.generate(&mut rng);
        assert!(widget.displayed().is_no_selection());

        let strength = widget.toggle_class(CharacterClass::Lowercase);
        assert_eq!(widget.displayed().to_string(), "Select options");
        assert_eq!(strength.diversity_score, 2);
        assert_eq!(strength.tier, StrengthTier::Medium);
        assert_eq!(strength.active_bars, 3);
    }

    #[test]
    fn regenerate_uses_configured_source() {
        let config = Config { rng_source: RngSource::Os, ..Config::default() };
        let mut widget = GeneratorWidget::idle(&config);
        let strength = widget.regenerate();
        assert_eq!(widget.copyable().unwrap().len(), 16);
        assert_eq!(strength.tier, StrengthTier::Strong);
    }
}
