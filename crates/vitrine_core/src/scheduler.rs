//! # Frame Scheduler
//!
//! The showcase runs on a host-provided animation-frame loop: components ask
//! for "one callback on the next rendered frame" and may cancel a request
//! that has not fired yet. This module is that seam.
//!
//! ```text
//! Component                    Host loop
//!    │  request_frame() ──────────> │  (handle pending)
//!    │ <────────── FrameHandle      │
//!    │                              │  ...next frame...
//!    │ <───────── tick(handle)      │  (handle consumed)
//!    │  cancel(handle) ───────────> │  (never fires)
//! ```
//!
//! A component holds AT MOST ONE outstanding handle. Starting over cancels
//! the prior handle first; stopping cancels the pending one so no stray
//! callback lands after the component has gone quiet.

use thiserror::Error;

/// Opaque identifier for a pending frame request.
///
/// Handles are never reused within a scheduler's lifetime, so a stale handle
/// cancels nothing instead of cancelling someone else's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Returns the raw handle value (for logs and diagnostics).
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Errors from the scheduling seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The host environment cannot provide frame callbacks.
    ///
    /// Components must degrade to a stopped state on this, not crash.
    #[error("host cannot provide frame callbacks")]
    Unavailable,
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// "Invoke me on the next rendered frame" with cancellation.
///
/// Implementations are driven by the host render loop; this trait is not
/// itself a scheduler thread. All methods are called from the single UI
/// thread, never concurrently.
pub trait FrameScheduler {
    /// Requests a callback on the next rendered frame.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Unavailable`] if the host cannot schedule
    /// frames (e.g. the surface is gone).
    fn request_frame(&mut self) -> SchedulerResult<FrameHandle>;

    /// Cancels a previously requested frame.
    ///
    /// Cancelling a handle that already fired or was already cancelled is a
    /// no-op, not an error.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Reference scheduler for headless hosts and tests.
///
/// The host pumps it explicitly: [`ManualScheduler::take_pending`] returns
/// the handle that should fire this frame (consuming it), mirroring a real
/// animation-frame queue with a depth of one per requester.
#[derive(Debug)]
pub struct ManualScheduler {
    next_handle: u64,
    pending: Vec<FrameHandle>,
    available: bool,
}

impl ManualScheduler {
    /// Creates a scheduler that accepts frame requests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::with_capacity(4),
            available: true,
        }
    }

    /// Creates a scheduler that refuses all requests.
    ///
    /// Models a host without a render surface; used to exercise the
    /// degrade-to-stopped path.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
            available: false,
        }
    }

    /// Takes the oldest pending handle, if any.
    ///
    /// The host calls this once per simulated frame and invokes the
    /// requester's callback for the returned handle.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Returns the number of pending frame requests.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if a frame request is pending.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> SchedulerResult<FrameHandle> {
        if !self.available {
            return Err(SchedulerError::Unavailable);
        }
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(handle);
        Ok(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
