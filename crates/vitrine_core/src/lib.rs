//! # VITRINE Core
//!
//! The plumbing every frame-driven component in the showcase stands on:
//!
//! - [`scheduler`]: a cancellable "call me on the next rendered frame"
//!   abstraction. The challenge timer and the quality sampler both depend
//!   only on this capability, never on a concrete render loop.
//! - [`events`]: bounded channels for edge-triggered notifications
//!   (win reports, quality-tier flips) flowing from the core to the
//!   presentation layer.
//!
//! Everything here is single-threaded and cooperative: the host invokes
//! callbacks at most once per rendered frame, in arrival order, never
//! concurrently.

pub mod events;
pub mod scheduler;

pub use events::{EventBus, EventReceiver, EventSender};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler, SchedulerError};
