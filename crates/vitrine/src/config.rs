//! # Scene Configuration
//!
//! Everything tunable about the hero scene, loaded once at startup from a
//! TOML file. Every field has a default, so an empty file (or no file at
//! all) yields the reference showcase behavior.
//!
//! ```toml
//! [challenge]
//! tick_step = 0.01
//!
//! [quality]
//! promote_fps = 55.0
//! demote_fps = 45.0
//! window_secs = 0.5
//!
//! [effects.eco]
//! orbit_instances = 16
//! sparkle_count = 0
//! dim_accents = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use vitrine_challenge::ChallengeConfig;
use vitrine_quality::{QualityConfig, QualityTier};

use crate::effects::EffectBudget;

/// Errors loading or validating a scene configuration.
#[derive(Error, Debug)]
pub enum SceneConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but make no sense together.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Per-tier effect budget overrides.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectBudgets {
    /// Budget while the scene runs high-fidelity.
    pub high: EffectBudget,
    /// Budget while the scene runs in economy mode.
    pub eco: EffectBudget,
}

impl EffectBudgets {
    /// The configured budget for a tier.
    #[inline]
    #[must_use]
    pub const fn budget_for(&self, tier: QualityTier) -> EffectBudget {
        match tier {
            QualityTier::High => self.high,
            QualityTier::Eco => self.eco,
        }
    }
}

impl Default for EffectBudgets {
    fn default() -> Self {
        Self {
            high: EffectBudget::for_tier(QualityTier::High),
            eco: EffectBudget::for_tier(QualityTier::Eco),
        }
    }
}

/// The complete hero-scene configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Challenge engine tuning.
    pub challenge: ChallengeConfig,
    /// Quality controller thresholds.
    pub quality: QualityConfig,
    /// Decorative effect budgets per tier.
    pub effects: EffectBudgets,
}

impl SceneConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneConfigError::Parse`] on malformed TOML and
    /// [`SceneConfigError::Invalid`] on values that parse but cannot work.
    pub fn from_toml_str(text: &str) -> Result<Self, SceneConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneConfigError::Io`] if the file cannot be read, plus
    /// everything [`Self::from_toml_str`] can return.
    pub fn load(path: &Path) -> Result<Self, SceneConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SceneConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if self.challenge.tick_step <= 0.0 {
            return Err(SceneConfigError::Invalid(format!(
                "challenge.tick_step must be positive, got {}",
                self.challenge.tick_step
            )));
        }
        if self.quality.window_secs <= 0.0 {
            return Err(SceneConfigError::Invalid(format!(
                "quality.window_secs must be positive, got {}",
                self.quality.window_secs
            )));
        }
        if self.quality.demote_fps >= self.quality.promote_fps {
            return Err(SceneConfigError::Invalid(format!(
                "quality.demote_fps ({}) must stay below promote_fps ({}); \
                 the dead band is what prevents tier flicker",
                self.quality.demote_fps, self.quality.promote_fps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_reference_behavior() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert!((config.challenge.tick_step - 0.01).abs() < 1e-12);
        assert!((config.quality.promote_fps - 55.0).abs() < 1e-12);
        assert!((config.quality.demote_fps - 45.0).abs() < 1e-12);
        assert_eq!(config.effects.high, EffectBudget::HIGH);
        assert_eq!(config.effects.eco, EffectBudget::ECO);
    }

    #[test]
    fn test_partial_override() {
        let config = SceneConfig::from_toml_str(
            r#"
            [quality]
            promote_fps = 58.0

            [effects.eco]
            orbit_instances = 8
            sparkle_count = 0
            dim_accents = true
            "#,
        )
        .unwrap();
        assert!((config.quality.promote_fps - 58.0).abs() < 1e-12);
        assert!((config.quality.demote_fps - 45.0).abs() < 1e-12);
        assert_eq!(config.effects.eco.orbit_instances, 8);
        // The untouched tier keeps its default budget.
        assert_eq!(config.effects.high, EffectBudget::HIGH);
    }

    #[test]
    fn test_default_budgets_follow_builtin_tier_mapping() {
        let budgets = EffectBudgets::default();
        for tier in [QualityTier::High, QualityTier::Eco] {
            assert_eq!(budgets.budget_for(tier), EffectBudget::for_tier(tier));
        }
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = SceneConfig::from_toml_str(
            r#"
            [quality]
            promote_fps = 40.0
            demote_fps = 50.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_tick_step_rejected() {
        let err = SceneConfig::from_toml_str(
            r#"
            [challenge]
            tick_step = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            SceneConfig::from_toml_str("[quality"),
            Err(SceneConfigError::Parse(_))
        ));
    }
}
