//! What happened during one frame.

use tactics_core::{EntityId, GameEvent, Rejection, SchedulerOutcome};

use crate::intent::PlayerIntent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    /// Scheduler state after the cascade, `None` when no level is current.
    pub outcome: Option<SchedulerOutcome>,
    /// Turn events in the order they were resolved.
    pub events: Vec<GameEvent>,
    /// Intents that were consumed without ending the player's turn.
    pub rejected: Vec<(PlayerIntent, Rejection)>,
    /// Players that died during this frame.
    pub player_deaths: Vec<EntityId>,
}

impl FrameReport {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn player_died(&self) -> bool {
        !self.player_deaths.is_empty()
    }

    pub fn awaiting_input(&self) -> Option<EntityId> {
        match self.outcome {
            Some(SchedulerOutcome::AwaitingInput(player)) => Some(player),
            _ => None,
        }
    }

    /// Turns concluded during this frame.
    pub fn turns(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GameEvent::TurnConcluded { .. }))
            .count()
    }
}
