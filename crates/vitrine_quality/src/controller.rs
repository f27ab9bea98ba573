//! # Quality Tier Controller
//!
//! Consumes one monotonic clock sample per rendered frame and emits a tier
//! transition when the windowed frame rate crosses a hysteresis threshold.
//! It is not a scheduler: the host render loop calls [`QualityController::sample`]
//! from its own frame callback.

use serde::{Deserialize, Serialize};

use vitrine_core::{EventBus, EventReceiver, EventSender};

/// Binary rendering-fidelity classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// Full decorative load.
    High,
    /// Reduced decorative load for struggling hosts.
    Eco,
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => f.write_str("high"),
            Self::Eco => f.write_str("eco"),
        }
    }
}

/// Thresholds and window length for the controller.
///
/// The dead band between `demote_fps` and `promote_fps` is what prevents
/// tier flicker under transient frame-time spikes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Promote to [`QualityTier::High`] at or above this frame rate.
    pub promote_fps: f64,
    /// Demote to [`QualityTier::Eco`] at or below this frame rate.
    pub demote_fps: f64,
    /// Seconds of sample-clock time per evaluation window.
    pub window_secs: f64,
    /// Tier-change event channel capacity.
    pub event_capacity: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            promote_fps: 55.0,
            demote_fps: 45.0,
            window_secs: 0.5,
            event_capacity: 64,
        }
    }
}

/// Edge-triggered notifications from the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QualityEvent {
    /// The windowed frame rate crossed a threshold. Sent once per
    /// transition, never per sample.
    TierChanged {
        /// Tier before the transition.
        from: QualityTier,
        /// Tier after the transition.
        to: QualityTier,
        /// Frame rate of the window that triggered it.
        fps: f64,
    },
}

/// The adaptive quality controller.
///
/// Starts optimistically at [`QualityTier::High`]; nothing persists across
/// the hosting scene's lifecycle.
pub struct QualityController {
    config: QualityConfig,
    tier: QualityTier,
    /// Frames counted since the window opened.
    frames: u32,
    /// Clock value at which the current window opened. None until the
    /// first sample arrives.
    window_start: Option<f64>,
    /// Frame rate computed for the most recently closed window.
    last_fps: Option<f64>,
    /// Windows evaluated since creation or reset.
    windows_evaluated: u64,
    /// Tier-change notification sender.
    events: EventSender<QualityEvent>,
    /// Prototype receiver handed out by `subscribe`.
    subscription: EventReceiver<QualityEvent>,
}

impl QualityController {
    /// Creates a controller with the given thresholds.
    #[must_use]
    pub fn new(config: QualityConfig) -> Self {
        let (events, subscription) = EventBus::create_pair(config.event_capacity);
        Self {
            config,
            tier: QualityTier::High,
            frames: 0,
            window_start: None,
            last_fps: None,
            windows_evaluated: 0,
            events,
            subscription,
        }
    }

    /// Returns a receiver for tier-change notifications.
    #[must_use]
    pub fn subscribe(&self) -> EventReceiver<QualityEvent> {
        self.subscription.clone()
    }

    /// The current tier.
    #[inline]
    #[must_use]
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Frame rate of the most recently closed window, if any.
    #[inline]
    #[must_use]
    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Number of windows evaluated since creation or reset.
    #[inline]
    #[must_use]
    pub fn windows_evaluated(&self) -> u64 {
        self.windows_evaluated
    }

    /// Feeds one frame's clock sample (monotonic elapsed seconds).
    ///
    /// Returns `Some(tier)` only when this sample closed a window whose
    /// frame rate crossed a threshold - consumers react to transitions,
    /// never to every sample. Each transition is also posted as a
    /// [`QualityEvent::TierChanged`] for [`subscribe`](Self::subscribe)
    /// holders.
    pub fn sample(&mut self, now_secs: f64) -> Option<QualityTier> {
        let Some(window_start) = self.window_start else {
            // First sample opens the window; there is nothing to average yet.
            self.window_start = Some(now_secs);
            return None;
        };

        self.frames += 1;
        let window = now_secs - window_start;
        if window < self.config.window_secs {
            return None;
        }

        let fps = f64::from(self.frames) / window;
        self.frames = 0;
        self.window_start = Some(now_secs);
        self.last_fps = Some(fps);
        self.windows_evaluated += 1;

        let next = if fps >= self.config.promote_fps {
            QualityTier::High
        } else if fps <= self.config.demote_fps {
            QualityTier::Eco
        } else {
            // Dead band: hold the previous tier to avoid oscillation.
            self.tier
        };

        if next == self.tier {
            return None;
        }
        tracing::info!(fps, from = %self.tier, to = %next, "quality tier changed");
        self.events.send(QualityEvent::TierChanged {
            from: self.tier,
            to: next,
            fps,
        });
        self.tier = next;
        Some(next)
    }

    /// Discards the open window and the tier, as on scene re-mount.
    pub fn reset(&mut self) {
        self.tier = QualityTier::High;
        self.frames = 0;
        self.window_start = None;
        self.last_fps = None;
        self.windows_evaluated = 0;
    }
}

impl Default for QualityController {
    fn default() -> Self {
        Self::new(QualityConfig::default())
    }
}
