//! Count-up animation for the landing-page stat figures.
use crate::constants::{STAT_ANIMATION_MS, STAT_TICK_MS};
use serde::{Deserialize, Serialize};

/// How the animated value is rendered, taken from the figure's final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSuffix {
    /// `50K+`
    Thousands,
    /// `2.5 Lacks` (lakh, 100 000)
    Lacks,
    /// `120+`
    Plain,
}

impl StatSuffix {
    fn detect(text: &str) -> Self {
        if text.contains('K') {
            Self::Thousands
        } else if text.contains("Lacks") {
            Self::Lacks
        } else {
            Self::Plain
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn render(self, value: u64) -> String {
        match self {
            Self::Thousands => format!("{}K+", value / 1_000),
            Self::Lacks => format!("{:.1} Lacks", value as f64 / 100_000.0),
            Self::Plain => format!("{value}+"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatCounter {
    target: u64,
    suffix: StatSuffix,
    step: f64,
}

impl StatCounter {
    /// Read the number and suffix out of a figure like `50K+` or
    /// `2.5 Lacks`. The target is the scaled value, so the last frame renders
    /// the original text again.
    ///
    /// Returns `None` when the text carries no non-zero number; such figures
    /// are left static.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn parse(text: &str) -> Option<Self> {
        let number: String = text
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .filter(|c| *c != ',')
            .collect();
        let value = number.parse::<f64>().ok()?;
        let suffix = StatSuffix::detect(text);
        let scaled = match suffix {
            StatSuffix::Thousands => value * 1_000.0,
            StatSuffix::Lacks => value * 100_000.0,
            StatSuffix::Plain => value,
        };
        let target = scaled.round() as u64;
        (target > 0).then(|| Self::new(target, suffix))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, suffix: StatSuffix) -> Self {
        let ticks_per_run = f64::from(STAT_ANIMATION_MS) / f64::from(STAT_TICK_MS);
        Self {
            target,
            suffix,
            step: target as f64 / ticks_per_run,
        }
    }

    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub const fn suffix(&self) -> StatSuffix {
        self.suffix
    }

    /// Number of ticks until the counter lands on its target.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn tick_count(&self) -> u32 {
        (self.target as f64 / self.step).ceil().max(1.0) as u32
    }

    /// Value shown after `tick` ticks, clamped to the target.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn value_at(&self, tick: u32) -> u64 {
        let current = self.step * f64::from(tick);
        if tick >= self.tick_count() || current >= self.target as f64 {
            self.target
        } else {
            current.floor() as u64
        }
    }

    #[must_use]
    pub fn frame(&self, tick: u32) -> String {
        self.suffix.render(self.value_at(tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffix_kinds() {
        let k = StatCounter::parse("50K+").unwrap();
        assert_eq!(k.target(), 50_000);
        assert_eq!(k.suffix(), StatSuffix::Thousands);
        assert_eq!(k.frame(k.tick_count()), "50K+");

        let lacks = StatCounter::parse("2.5 Lacks").unwrap();
        assert_eq!(lacks.target(), 250_000);
        assert_eq!(lacks.suffix(), StatSuffix::Lacks);
        assert_eq!(lacks.frame(lacks.tick_count()), "2.5 Lacks");

        let plain = StatCounter::parse("1,200+").unwrap();
        assert_eq!(plain.target(), 1_200);
        assert_eq!(plain.suffix(), StatSuffix::Plain);

        assert!(StatCounter::parse("many").is_none());
        assert!(StatCounter::parse("0+").is_none());
    }

    #[test]
    fn frames_count_up_to_target() {
        let counter = StatCounter::new(500, StatSuffix::Plain);
        assert_eq!(counter.tick_count(), 125);
        assert_eq!(counter.frame(0), "0+");
        assert_eq!(counter.value_at(1), 4);
        assert_eq!(counter.frame(counter.tick_count()), "500+");
        assert_eq!(counter.value_at(10_000), 500);
    }

    #[test]
    fn renders_each_suffix() {
        assert_eq!(StatSuffix::Thousands.render(50_000), "50K+");
        assert_eq!(StatSuffix::Lacks.render(250_000), "2.5 Lacks");
        assert_eq!(StatSuffix::Plain.render(7), "7+");
    }
}
