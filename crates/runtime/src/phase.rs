//! Frame phases and the context scenes receive in each of them.

use tactics_core::{GameConfig, GameEvent, SchedulerOutcome, World};

use crate::intent::IntentQueue;

/// Phases of one frame, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    BeforeUpdate,
    /// Queued intents are applied and the turn cascade runs before scenes
    /// see this phase.
    Update,
    AfterUpdate,
    BeforeDraw,
    Draw,
    AfterDraw,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::BeforeUpdate,
        Phase::Update,
        Phase::AfterUpdate,
        Phase::BeforeDraw,
        Phase::Draw,
        Phase::AfterDraw,
    ];

    pub fn is_draw(self) -> bool {
        matches!(self, Phase::BeforeDraw | Phase::Draw | Phase::AfterDraw)
    }
}

/// Scene change requested from inside a phase, applied once the frame ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneRequest {
    Start(String),
    End,
}

/// Everything a scene may touch while handling a phase.
pub struct FrameContext<'a> {
    pub frame: u64,
    pub phase: Phase,
    pub world: &'a mut World,
    pub config: &'a GameConfig,
    /// Input collaborators push player intents here.
    pub intents: &'a mut IntentQueue,
    /// Events resolved so far in this frame. Empty before `Update`.
    pub events: &'a [GameEvent],
    /// Scheduler state after this frame's cascade, once it has run.
    pub outcome: Option<SchedulerOutcome>,
    pub(crate) request: Option<SceneRequest>,
}

impl FrameContext<'_> {
    /// Switches to `scene` after this frame. The current scene is kept in
    /// the history.
    pub fn start_scene(&mut self, scene: impl Into<String>) {
        self.request = Some(SceneRequest::Start(scene.into()));
    }

    /// Ends the current scene after this frame and resumes the previous one.
    pub fn end_scene(&mut self) {
        self.request = Some(SceneRequest::End);
    }

    pub fn requested_scene_change(&self) -> Option<&SceneRequest> {
        self.request.as_ref()
    }
}
