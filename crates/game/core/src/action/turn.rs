use tracing::trace;

use super::{ActionError, ActionOutcome};
use crate::env::GameEnv;
use crate::state::{EntityId, GameEvent, World, attr};

/// Charges the actor's action cost and advances the action nonce.
///
/// Returns the actor's new `action_ticks`.
pub fn conclude_turn(
    world: &mut World,
    env: GameEnv<'_>,
    actor: EntityId,
) -> Result<i64, ActionError> {
    let record = world.entity_mut(actor)?;
    if !record.is_actor() {
        return Err(ActionError::NotAnActor(actor));
    }

    let cost = record
        .action_cost()
        .unwrap_or(env.config.default_action_cost);
    let action_ticks = record.action_ticks().unwrap_or(0) + cost;
    record.set(attr::ACTION_TICKS, action_ticks);

    world.advance_nonce();
    world.record(GameEvent::TurnConcluded {
        actor,
        action_ticks,
    });
    trace!(%actor, action_ticks, "turn concluded");
    Ok(action_ticks)
}

/// Ends the turn without acting. The cost is still charged.
pub fn pass_turn(
    world: &mut World,
    env: GameEnv<'_>,
    actor: EntityId,
) -> Result<ActionOutcome, ActionError> {
    world.record(GameEvent::Passed { actor });
    conclude_turn(world, env, actor)?;
    Ok(ActionOutcome::Concluded)
}
