//! Frame driver owning the world.
//!
//! One call to [`Runtime::frame`] walks every [`Phase`] in order. The
//! `Update` phase first resolves the turn cascade: non-player actors act
//! until a player is ready, then queued intents are spent one by one on the
//! waiting player, each followed by the cascade it unblocks. Scenes see each
//! phase afterwards, and scene changes they request are applied once the
//! frame is over.

use tactics_core::{
    ActionOutcome, GameConfig, GameEnv, GameEvent, PcgRng, RngOracle, SchedulerOutcome,
    TurnScheduler, World,
};
use tracing::{debug, info};

use crate::error::Result;
use crate::intent::{IntentQueue, PlayerIntent};
use crate::phase::{FrameContext, Phase};
use crate::report::FrameReport;
use crate::scene::{Scene, SceneDirector};

pub struct Runtime {
    world: World,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    scenes: SceneDirector,
    intents: IntentQueue,
    frame: u64,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of frames driven so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn scenes(&self) -> &SceneDirector {
        &self.scenes
    }

    pub fn intents(&self) -> &IntentQueue {
        &self.intents
    }

    pub fn push_intent(&mut self, intent: PlayerIntent) {
        self.intents.push(intent);
    }

    pub fn start_scene(&mut self, name: &str) -> Result<()> {
        self.scenes.start(name, &mut self.world)
    }

    pub fn end_scene(&mut self) -> Result<Option<String>> {
        self.scenes.end(&mut self.world)
    }

    /// Drives one frame through every phase.
    pub fn frame(&mut self) -> Result<FrameReport> {
        let mut report = FrameReport::new(self.frame);
        let mut request = None;

        for phase in Phase::ALL {
            if phase == Phase::Update {
                self.update(&mut report)?;
            }

            let mut ctx = FrameContext {
                frame: self.frame,
                phase,
                world: &mut self.world,
                config: &self.config,
                intents: &mut self.intents,
                events: &report.events,
                outcome: report.outcome,
                request: None,
            };
            self.scenes.dispatch(&mut ctx)?;
            if let Some(requested) = ctx.request.take() {
                request = Some(requested);
            }
        }

        if let Some(request) = request {
            self.scenes.apply(request, &mut self.world)?;
        }

        debug!(
            frame = self.frame,
            turns = report.turns(),
            outcome = ?report.outcome,
            "frame complete"
        );
        self.frame += 1;
        Ok(report)
    }

    fn update(&mut self, report: &mut FrameReport) -> Result<()> {
        if self.world.current_level().is_none() {
            return Ok(());
        }

        let env = GameEnv::new(&self.config, self.rng.as_ref());
        let mut scheduler = TurnScheduler::new(&mut self.world, env);

        let mut outcome = scheduler.run()?;
        while let SchedulerOutcome::AwaitingInput(player) = outcome {
            let Some(intent) = self.intents.pop() else {
                break;
            };
            if let ActionOutcome::Rejected(reason) = scheduler.act(player, intent.into())? {
                debug!(%player, ?intent, %reason, "intent rejected");
                report.rejected.push((intent, reason));
            }
            outcome = scheduler.run()?;
        }

        if outcome == SchedulerOutcome::Idle && !self.intents.is_empty() {
            debug!(dropped = self.intents.len(), "nobody to act, intents dropped");
            self.intents.clear();
        }
        report.outcome = Some(outcome);
        report.events = self.world.drain_events();

        for event in &report.events {
            if let GameEvent::Died { entity, killer } = *event
                && self.world.entity(entity).is_ok_and(|dead| dead.is_player())
            {
                info!(player = %entity, %killer, "player died");
                report.player_deaths.push(entity);
            }
        }
        Ok(())
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: GameConfig,
    world: World,
    rng: Option<Box<dyn RngOracle>>,
    scenes: Vec<Box<dyn Scene>>,
    initial_scene: Option<String>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            world: World::new(),
            rng: None,
            scenes: Vec::new(),
            initial_scene: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Starting world, typically a spawned level layout.
    pub fn world(mut self, world: World) -> Self {
        self.world = world;
        self
    }

    /// Replaces the built-in PCG generator.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn scene(mut self, scene: impl Scene + 'static) -> Self {
        self.scenes.push(Box::new(scene));
        self
    }

    /// Scene started by [`build`](Self::build).
    pub fn initial_scene(mut self, name: impl Into<String>) -> Self {
        self.initial_scene = Some(name.into());
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let mut scenes = SceneDirector::new();
        for scene in self.scenes {
            scenes.register(scene)?;
        }

        let mut runtime = Runtime {
            world: self.world,
            config: self.config,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            scenes,
            intents: IntentQueue::new(),
            frame: 0,
        };
        if let Some(name) = self.initial_scene {
            runtime.start_scene(&name)?;
        }
        Ok(runtime)
    }
}
