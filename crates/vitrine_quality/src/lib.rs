//! # VITRINE Quality
//!
//! Adaptive render-quality classification for the hero scene.
//!
//! Single-frame FPS measurement is noisy, so the controller averages over a
//! trailing half-second window and applies a hysteresis dead band before it
//! flips between the high-fidelity and economy tiers. Consumers gate
//! decorative instance counts and particle effects on the tier; the
//! controller neither knows nor cares what they gate.
//!
//! ```text
//! frame clock ──> window (≥0.5s) ──> fps ──> hysteresis ──> tier edge
//!                                             ┌─────────────────────┐
//!                                fps ≥ 55 ──> │ High                │
//!                                fps ≤ 45 ──> │ Eco                 │
//!                                45..55   ──> │ hold previous tier  │
//!                                             └─────────────────────┘
//! ```

pub mod controller;

pub use controller::{QualityConfig, QualityController, QualityEvent, QualityTier};
