//! # VITRINE
//!
//! The frame-driven core of the 3D product-configurator showcase.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                       VITRINE HERO SCENE                      │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  ┌──────────────┐   clock samples    ┌──────────────────┐    │
//! │  │  Frame loop  │───────────────────>│ QualityController│    │
//! │  │  (host)      │                    │  High/Eco tier   │    │
//! │  │              │   scheduled ticks  └────────┬─────────┘    │
//! │  │              │──────────┐                  │ tier edges   │
//! │  └──────────────┘          v                  v              │
//! │                   ┌─────────────────┐  ┌──────────────┐      │
//! │                   │ ChallengeEngine │  │ EffectBudget │      │
//! │                   │  target/choice  │  │ 36 bits vs 16│      │
//! │                   │  timer/win      │  └──────────────┘      │
//! │                   └─────────────────┘                        │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: scene configuration loaded from TOML
//! - `effects`: tier → decorative effect budget mapping
//! - `scene`: the hero scene loop wiring everything together

pub mod config;
pub mod effects;
pub mod scene;

// Re-export the subsystems
pub use vitrine_challenge as challenge;
pub use vitrine_core as core;
pub use vitrine_quality as quality;

// Re-export commonly used types
pub use config::{SceneConfig, SceneConfigError};
pub use effects::EffectBudget;
pub use scene::HeroScene;
