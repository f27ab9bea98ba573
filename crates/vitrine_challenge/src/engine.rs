//! # Challenge State Machine
//!
//! Owns the random target, the player's partial choice, and the elapsed
//! timer. Every mutation goes through the engine's methods so the win check
//! runs on every choice change - the presentation layer never pokes fields.
//!
//! ## Timer semantics
//!
//! The timer advances by a fixed nominal step per scheduled frame (0.01 s by
//! default), rounded to two decimals for display stability. This reproduces
//! the reference showcase, which assumes the host fires at roughly 100 Hz;
//! under a slower frame rate the counter undercounts wall-clock time. The
//! step is configurable so a host that measures real frame deltas can feed
//! one in, but the default is the faithful fixed step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vitrine_core::{EventBus, EventReceiver, EventSender, FrameHandle, FrameScheduler};

use crate::domain::{Choice, Configuration, Selection};
use crate::error::ChallengeResult;

/// Configuration for the challenge engine.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Nominal seconds added per frame tick.
    pub tick_step: f64,
    /// Win-event channel capacity.
    pub event_capacity: usize,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            tick_step: 0.01,
            event_capacity: 64,
        }
    }
}

/// Terminal notifications from the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChallengeEvent {
    /// The choice matched the target while running. Sent exactly once per
    /// win, carrying the frozen elapsed time.
    Won {
        /// Final elapsed seconds, two-decimal rounded.
        elapsed: f64,
    },
}

/// Snapshot of the engine's state for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChallengeState {
    /// The configuration to match.
    pub target: Configuration,
    /// The player's pick so far.
    pub choice: Choice,
    /// Elapsed seconds, two-decimal rounded.
    pub elapsed: f64,
    /// True while the timer advances.
    pub running: bool,
}

/// The Speed-Match Challenge engine.
///
/// Single active instance per scene. All methods are called from the one UI
/// thread; the scheduler guarantees serialized callbacks, so there is no
/// shared mutable state to guard.
pub struct ChallengeEngine<R: Rng = StdRng> {
    /// The configuration the player must match.
    target: Configuration,
    /// The player's pick so far.
    choice: Choice,
    /// Elapsed seconds, two-decimal rounded.
    elapsed: f64,
    /// True while the timer advances.
    running: bool,
    /// The one outstanding frame request, if any.
    pending: Option<FrameHandle>,
    /// Engine configuration.
    config: ChallengeConfig,
    /// Random source for target generation.
    rng: R,
    /// Win notification sender.
    events: EventSender<ChallengeEvent>,
    /// Prototype receiver handed out by `subscribe`.
    subscription: EventReceiver<ChallengeEvent>,
}

impl ChallengeEngine<StdRng> {
    /// Creates an engine with an entropy-seeded random source.
    #[must_use]
    pub fn new(config: ChallengeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> ChallengeEngine<R> {
    /// Creates an engine with an explicit random source.
    ///
    /// Tests substitute a seeded generator here to make target generation
    /// deterministic.
    pub fn with_rng(config: ChallengeConfig, mut rng: R) -> Self {
        let (events, subscription) = EventBus::create_pair(config.event_capacity);
        let target = Configuration::sample(&mut rng);
        Self {
            target,
            choice: Choice::empty(),
            elapsed: 0.0,
            running: false,
            pending: None,
            config,
            rng,
            events,
            subscription,
        }
    }

    /// Returns a receiver for win notifications.
    #[must_use]
    pub fn subscribe(&self) -> EventReceiver<ChallengeEvent> {
        self.subscription.clone()
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ChallengeState {
        ChallengeState {
            target: self.target,
            choice: self.choice,
            elapsed: self.elapsed,
            running: self.running,
        }
    }

    /// The configuration to match.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Configuration {
        self.target
    }

    /// The player's pick so far.
    #[inline]
    #[must_use]
    pub fn choice(&self) -> Choice {
        self.choice
    }

    /// Elapsed seconds, two-decimal rounded.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// True while the timer advances.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True if a frame request is outstanding.
    #[inline]
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fresh game: reset, then begin ticking.
    ///
    /// Any frame request left over from a previous game is cancelled first,
    /// so restarting mid-game never leaves two callbacks in flight.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ChallengeError::CannotStart`] if the host
    /// cannot schedule frames; the engine stays stopped.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) -> ChallengeResult<()> {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.running = false;
        self.reset();

        let handle = scheduler.request_frame()?;
        self.pending = Some(handle);
        self.running = true;
        tracing::info!(target_config = ?self.target, "challenge started");
        Ok(())
    }

    /// Reinitializes the game state: zero timer, cleared choice, fresh
    /// random target. `running` is left unchanged - the caller decides
    /// whether to start.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.choice = Choice::empty();
        self.target = Configuration::sample(&mut self.rng);
        tracing::debug!(target_config = ?self.target, "challenge reset");
    }

    /// Stops the game without declaring a result.
    ///
    /// Cancels the pending frame request so no stray tick lands afterwards.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if self.running {
            tracing::info!(elapsed = self.elapsed, "challenge stopped");
        }
        self.running = false;
    }

    /// Advances the timer by one frame tick and requests the next frame.
    ///
    /// Invoked by the host when the engine's scheduled frame fires. A tick
    /// arriving after the game stopped is a no-op, not an error. If the
    /// scheduler can no longer provide frames mid-game, the engine degrades
    /// to a stopped state.
    pub fn tick(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.running {
            return;
        }

        // The handle that just fired is consumed by the host.
        self.pending = None;
        self.elapsed = round2(self.elapsed + self.config.tick_step);

        match scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => {
                tracing::warn!(%err, "scheduler lost mid-game, stopping challenge");
                self.running = false;
            }
        }
    }

    /// Overwrites one attribute of the choice and checks for a win.
    ///
    /// Returns true iff this mutation completed the match.
    pub fn set_choice(&mut self, scheduler: &mut dyn FrameScheduler, selection: Selection) -> bool {
        self.choice.apply(selection);
        tracing::debug!(attribute = %selection.attribute(), "choice updated");
        self.check_win(scheduler)
    }

    /// String-input variant of [`Self::set_choice`] for picker events.
    ///
    /// # Errors
    ///
    /// Fails fast on an unknown attribute name or out-of-domain value; the
    /// choice is left untouched in that case.
    pub fn set_choice_str(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        attribute: &str,
        value: &str,
    ) -> ChallengeResult<bool> {
        let selection = Selection::parse(attribute, value)?;
        Ok(self.set_choice(scheduler, selection))
    }

    /// True iff the game is running and the choice matches the target.
    ///
    /// On a win the engine freezes the timer, cancels the pending frame
    /// request, and emits [`ChallengeEvent::Won`] exactly once. Invoked
    /// while not running it is a no-op returning false.
    pub fn check_win(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if !self.running || !self.choice.matches(&self.target) {
            return false;
        }

        self.running = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        tracing::info!(elapsed = self.elapsed, "challenge won");
        self.events.send(ChallengeEvent::Won {
            elapsed: self.elapsed,
        });
        true
    }
}

/// Rounds to two decimal digits for display stability.
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
