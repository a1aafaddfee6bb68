//! Journal of what happened during turn resolution.
//!
//! Rules append to the journal as they mutate the world. Readers (the frame
//! driver, logs, tests) drain it; nothing in the core reacts to it.

use super::types::{EntityId, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The actor's turn is over; `action_ticks` is its new energy debt.
    TurnConcluded { actor: EntityId, action_ticks: i64 },
    Passed { actor: EntityId },
    Moved {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    Attacked {
        attacker: EntityId,
        target: EntityId,
        damage: i32,
    },
    /// A non-player actor switched sides after being struck.
    Provoked { target: EntityId, is_enemy: bool },
    Died { entity: EntityId, killer: EntityId },
    CoinsCollected { collector: EntityId, amount: i64 },
    ItemPickedUp { collector: EntityId, item: EntityId },
    ItemUsed { user: EntityId, item: EntityId },
    Summoned { summoner: EntityId, summoned: EntityId },
    Teleported { entity: EntityId, to: Position },
    EggDispensed {
        machine: EntityId,
        egg: EntityId,
        customer: EntityId,
    },
}

impl GameEvent {
    /// The entity primarily responsible for the event.
    pub fn subject(&self) -> EntityId {
        match self {
            GameEvent::TurnConcluded { actor, .. } | GameEvent::Passed { actor } => *actor,
            GameEvent::Moved { entity, .. } | GameEvent::Teleported { entity, .. } => *entity,
            GameEvent::Attacked { attacker, .. } => *attacker,
            GameEvent::Provoked { target, .. } => *target,
            GameEvent::Died { entity, .. } => *entity,
            GameEvent::CoinsCollected { collector, .. }
            | GameEvent::ItemPickedUp { collector, .. } => *collector,
            GameEvent::ItemUsed { user, .. } => *user,
            GameEvent::Summoned { summoner, .. } => *summoner,
            GameEvent::EggDispensed { customer, .. } => *customer,
        }
    }
}

/// Append-only event buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
