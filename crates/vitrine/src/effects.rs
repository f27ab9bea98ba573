//! # Effect Budgets
//!
//! Maps a quality tier to the decorative parameters the hero scene renders
//! with. The tier itself stays a pure classification signal: the controller
//! never learns what these numbers gate, and new downstream effects only
//! touch this table.

use serde::{Deserialize, Serialize};
use vitrine_quality::QualityTier;

/// Decorative effect parameters for one quality tier.
///
/// Overriding a budget in scene TOML replaces it wholesale: a partial
/// budget is ambiguous (lean or lush for the missing fields?), so all
/// three parameters must be given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBudget {
    /// Instanced orbiting chips around the hero mesh.
    pub orbit_instances: u32,
    /// Ambient sparkle particles; zero disables the system entirely.
    pub sparkle_count: u32,
    /// Render accents at reduced opacity.
    pub dim_accents: bool,
}

impl EffectBudget {
    /// Full decorative load.
    pub const HIGH: Self = Self {
        orbit_instances: 36,
        sparkle_count: 26,
        dim_accents: false,
    };

    /// Reduced load for struggling hosts.
    pub const ECO: Self = Self {
        orbit_instances: 16,
        sparkle_count: 0,
        dim_accents: true,
    };

    /// The default budget for a tier.
    #[inline]
    #[must_use]
    pub const fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::High => Self::HIGH,
            QualityTier::Eco => Self::ECO,
        }
    }
}

impl Default for EffectBudget {
    fn default() -> Self {
        Self::HIGH
    }
}

/// The badge text the scene overlays for a tier.
#[inline]
#[must_use]
pub const fn tier_badge(tier: QualityTier) -> &'static str {
    match tier {
        QualityTier::High => "High FX",
        QualityTier::Eco => "Eco Mode",
    }
}
