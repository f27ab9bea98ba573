//! # VITRINE Challenge
//!
//! The Speed-Match Challenge: the engine hands the player a random product
//! configuration, the player rebuilds it one attribute at a time, and the
//! frame-tick timer freezes the moment the last attribute falls into place.
//!
//! ## Shape
//!
//! ```text
//! ┌──────────────┐  set_choice   ┌──────────────────┐   Won { elapsed }
//! │ Presentation │──────────────>│  ChallengeEngine │───────────────────>
//! │    layer     │<──────────────│                  │   (event channel)
//! └──────────────┘   state()     └────────┬─────────┘
//!                                         │ request_frame / cancel
//!                                         v
//!                                  FrameScheduler
//! ```
//!
//! The engine owns no loop of its own: the host scheduler invokes `tick`
//! once per rendered frame while the game runs, and the engine keeps at
//! most one frame request outstanding so a win or stop leaves nothing
//! behind to fire late.
//!
//! ## Modules
//!
//! - `domain`: configuration attributes and their fixed value domains
//! - `engine`: the state machine itself
//! - `error`: fail-fast error types for out-of-domain input

pub mod domain;
pub mod engine;
pub mod error;

pub use domain::{Attribute, Body, Choice, Color, Configuration, Selection, Wheels};
pub use engine::{ChallengeConfig, ChallengeEngine, ChallengeEvent, ChallengeState};
pub use error::{ChallengeError, ChallengeResult};
