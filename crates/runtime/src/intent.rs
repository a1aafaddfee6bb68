//! Player intents queued by input collaborators.

use std::collections::VecDeque;

use tactics_core::{Action, Direction};

/// What the player asked for, independent of how the input was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerIntent {
    Move(Direction),
    UseItem(usize),
    Pass,
}

impl From<PlayerIntent> for Action {
    fn from(intent: PlayerIntent) -> Self {
        match intent {
            PlayerIntent::Move(direction) => Action::Act(direction),
            PlayerIntent::UseItem(slot) => Action::UseItem(slot),
            PlayerIntent::Pass => Action::Pass,
        }
    }
}

/// FIFO of intents waiting for the player's next turn.
#[derive(Clone, Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<PlayerIntent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: PlayerIntent) {
        self.pending.push_back(intent);
    }

    pub fn pop(&mut self) -> Option<PlayerIntent> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
