//! # Hero Scene Loop
//!
//! The composition root: one challenge engine, one quality controller, one
//! frame scheduler, advanced together by [`HeroScene::frame`] once per
//! rendered frame. The presentation layer reads state snapshots and the
//! current effect budget; all mutation goes through scene methods.
//!
//! The scene owns a [`ManualScheduler`], making it a complete headless host:
//! the demo binary and the integration tests drive it with synthetic frame
//! clocks and real hosts embed it behind their render callback.

use rand::rngs::StdRng;
use rand::Rng;

use vitrine_challenge::{
    ChallengeEngine, ChallengeEvent, ChallengeResult, ChallengeState, Selection,
};
use vitrine_core::{EventReceiver, ManualScheduler};
use vitrine_quality::{QualityController, QualityEvent, QualityTier};

use crate::config::SceneConfig;
use crate::effects::{tier_badge, EffectBudget};

/// The hero scene: challenge + adaptive quality, frame-driven.
pub struct HeroScene<R: Rng = StdRng> {
    scheduler: ManualScheduler,
    engine: ChallengeEngine<R>,
    controller: QualityController,
    config: SceneConfig,
    budget: EffectBudget,
    wins: EventReceiver<ChallengeEvent>,
    last_win: Option<f64>,
}

impl HeroScene<StdRng> {
    /// Creates a scene with an entropy-seeded challenge engine.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        let engine = ChallengeEngine::new(config.challenge.clone());
        Self::assemble(config, engine)
    }
}

impl<R: Rng> HeroScene<R> {
    /// Creates a scene around an engine with an explicit random source.
    pub fn with_rng(config: SceneConfig, rng: R) -> Self {
        let engine = ChallengeEngine::with_rng(config.challenge.clone(), rng);
        Self::assemble(config, engine)
    }

    fn assemble(config: SceneConfig, engine: ChallengeEngine<R>) -> Self {
        let wins = engine.subscribe();
        let controller = QualityController::new(config.quality);
        let budget = config.effects.budget_for(QualityTier::High);
        Self {
            scheduler: ManualScheduler::new(),
            engine,
            controller,
            config,
            budget,
            wins,
            last_win: None,
        }
    }

    /// Advances the scene by one rendered frame.
    ///
    /// `now_secs` is the host's monotonic frame clock. Order within the
    /// frame: quality sample first (it only classifies), then the engine's
    /// scheduled tick if one is due, then event drain - the same serialized
    /// callback order a real frame loop guarantees.
    pub fn frame(&mut self, now_secs: f64) {
        if let Some(tier) = self.controller.sample(now_secs) {
            self.budget = self.config.effects.budget_for(tier);
            tracing::info!(
                %tier,
                orbit_instances = self.budget.orbit_instances,
                sparkle_count = self.budget.sparkle_count,
                "effect budget switched"
            );
        }

        if self.scheduler.take_pending().is_some() {
            self.engine.tick(&mut self.scheduler);
        }

        for event in self.wins.drain() {
            let ChallengeEvent::Won { elapsed } = event;
            self.last_win = Some(elapsed);
        }
    }

    /// Returns a receiver for quality tier-change notifications.
    ///
    /// The presentation layer listens here instead of polling
    /// [`tier`](Self::tier) every frame.
    #[must_use]
    pub fn subscribe_tier(&self) -> EventReceiver<QualityEvent> {
        self.controller.subscribe()
    }

    /// Starts (or restarts) the speed-match challenge.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's cannot-start error if the scheduler refuses.
    pub fn start_challenge(&mut self) -> ChallengeResult<()> {
        self.last_win = None;
        self.engine.start(&mut self.scheduler)
    }

    /// Stops the challenge without a result.
    pub fn stop_challenge(&mut self) {
        self.engine.stop(&mut self.scheduler);
    }

    /// Applies a typed picker selection. Returns true on the winning pick.
    pub fn select(&mut self, selection: Selection) -> bool {
        self.engine.set_choice(&mut self.scheduler, selection)
    }

    /// Applies a picker selection from (attribute, value) strings.
    ///
    /// # Errors
    ///
    /// Fails fast on out-of-domain input; the choice is left untouched.
    pub fn select_str(&mut self, attribute: &str, value: &str) -> ChallengeResult<bool> {
        self.engine
            .set_choice_str(&mut self.scheduler, attribute, value)
    }

    /// Snapshot of the challenge state for the presentation layer.
    #[must_use]
    pub fn challenge(&self) -> ChallengeState {
        self.engine.state()
    }

    /// The effect budget the scene currently renders with.
    #[inline]
    #[must_use]
    pub fn budget(&self) -> EffectBudget {
        self.budget
    }

    /// The current quality tier.
    #[inline]
    #[must_use]
    pub fn tier(&self) -> QualityTier {
        self.controller.tier()
    }

    /// The overlay badge text for the current tier.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        tier_badge(self.controller.tier())
    }

    /// Final time of the most recent win, cleared on the next start.
    #[inline]
    #[must_use]
    pub fn last_win(&self) -> Option<f64> {
        self.last_win
    }
}
