//! Energy-debt turn scheduling.
//!
//! Every actor in the current level carries `action_ticks`, its energy debt.
//! An actor with zero ticks is ready. Acting charges its `action_cost`. When
//! nobody is ready, the smallest positive debt is subtracted from every
//! waiting actor, so at least one of them becomes ready and cheaper actors
//! act proportionally more often.
//!
//! [`TurnScheduler::run`] resolves ready non-player actors one at a time, in
//! ascending id order, until a player is ready (and must wait for input) or
//! nobody is left to act.

mod errors;

pub use errors::TurnError;

use tracing::{debug, info, trace, warn};

use crate::action::{ActionOutcome, Action};
use crate::ai::{AiContext, Behavior, Decision, npc_behavior};
use crate::env::GameEnv;
use crate::query::Query;
use crate::state::{EntityId, LevelId, World, attr};

/// Why [`TurnScheduler::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerOutcome {
    /// A player actor is ready and waits for an intent.
    AwaitingInput(EntityId),
    /// No actor in the current level can act.
    Idle,
    /// The per-update action budget ran out before a player became ready.
    Stalled,
}

/// Drives turn order over a borrowed world.
pub struct TurnScheduler<'a> {
    world: &'a mut World,
    env: GameEnv<'a>,
}

impl<'a> TurnScheduler<'a> {
    pub fn new(world: &'a mut World, env: GameEnv<'a>) -> Self {
        Self { world, env }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    /// Runs the non-player cascade for the current level.
    pub fn run(&mut self) -> Result<SchedulerOutcome, TurnError> {
        let Some(level) = self.world.current_level() else {
            return Ok(SchedulerOutcome::Idle);
        };

        let mut actions = 0;
        loop {
            self.seed_actors(level)?;

            if let Some(actor) = self.next_ready_npc(level) {
                if actions >= self.env.config.max_actions_per_update {
                    warn!(actions, "action budget exhausted without player input");
                    return Ok(SchedulerOutcome::Stalled);
                }
                self.take_npc_turn(actor)?;
                actions += 1;
                continue;
            }

            if let Some(player) = self.ready_player(level) {
                trace!(%player, actions, "awaiting input");
                return Ok(SchedulerOutcome::AwaitingInput(player));
            }

            if self.fast_forward(level)?.is_none() {
                return Ok(SchedulerOutcome::Idle);
            }
        }
    }

    /// Actors placed in `level` that still have health, by ascending id.
    pub fn participants(&self, level: LevelId) -> Vec<EntityId> {
        Query::new()
            .filter(attr::IS_ACTOR, true)
            .matching(attr::HEALTH, |_| true)
            .equals(attr::CURRENT_LEVEL, level)
            .find(self.world.entities().iter())
            .map(|entity| entity.id)
            .collect()
    }

    /// Gives `action_ticks` to actors seen for the first time.
    ///
    /// Players start ready. Non-player actors start one action late: the
    /// configured initial delay, or else their own action cost.
    pub fn seed_actors(&mut self, level: LevelId) -> Result<(), TurnError> {
        for id in self.participants(level) {
            let config = self.env.config;
            let entity = self.world.entity_mut(id)?;
            if entity.action_ticks().is_some() {
                continue;
            }

            let ticks = if entity.is_player() {
                0
            } else {
                config
                    .initial_npc_delay
                    .unwrap_or_else(|| entity.action_cost().unwrap_or(config.default_action_cost))
                    .max(1)
            };
            entity.set(attr::ACTION_TICKS, ticks);
            trace!(actor = %id, ticks, "seeded action ticks");
        }
        Ok(())
    }

    fn is_ready(&self, id: EntityId) -> bool {
        self.world
            .entity(id)
            .ok()
            .and_then(|entity| entity.action_ticks())
            .is_some_and(|ticks| ticks <= 0)
    }

    /// Lowest-id ready non-player actor.
    pub fn next_ready_npc(&self, level: LevelId) -> Option<EntityId> {
        self.participants(level).into_iter().find(|&id| {
            self.is_ready(id)
                && self
                    .world
                    .entity(id)
                    .is_ok_and(|entity| !entity.is_player())
        })
    }

    /// Lowest-id ready player actor.
    pub fn ready_player(&self, level: LevelId) -> Option<EntityId> {
        self.participants(level).into_iter().find(|&id| {
            self.is_ready(id)
                && self
                    .world
                    .entity(id)
                    .is_ok_and(|entity| entity.is_player())
        })
    }

    /// Subtracts the smallest positive debt from every waiting actor.
    ///
    /// Returns the amount subtracted, or `None` if nobody was waiting.
    pub fn fast_forward(&mut self, level: LevelId) -> Result<Option<i64>, TurnError> {
        let participants = self.participants(level);

        let mut waiting = Vec::new();
        for &id in &participants {
            if let Some(ticks) = self.world.entity(id)?.action_ticks()
                && ticks > 0
            {
                waiting.push((id, ticks));
            }
        }

        let Some(step) = waiting.iter().map(|&(_, ticks)| ticks).min() else {
            return Ok(None);
        };
        for (id, ticks) in waiting {
            self.world
                .entity_mut(id)?
                .set(attr::ACTION_TICKS, ticks - step);
        }
        debug!(step, "fast-forwarded");
        Ok(Some(step))
    }

    /// Lets a ready non-player actor decide and act. Concludes its turn.
    pub fn take_npc_turn(&mut self, actor: EntityId) -> Result<Decision, TurnError> {
        let record = self.world.entity(actor)?;
        if !record.is_actor() {
            return Err(TurnError::NotAnActor(actor));
        }
        let action_ticks = record.action_ticks().unwrap_or(0);
        if action_ticks > 0 {
            return Err(TurnError::NotReady {
                actor,
                action_ticks,
            });
        }
        let (level, position) = crate::action::placement(self.world, actor)?;
        let origin = self.world.find_tile_in_level(level, position)?;

        let mut ctx = AiContext::new(self.world, self.env, actor, level, position, origin);
        npc_behavior().tick(&mut ctx)?;
        let decision = ctx.decision.unwrap_or(Decision::Pass);

        info!(%actor, ?decision, "npc acted");
        Ok(decision)
    }

    /// Applies an externally chosen action for a ready actor.
    pub fn act(&mut self, actor: EntityId, action: Action) -> Result<ActionOutcome, TurnError> {
        let action_ticks = self.world.entity(actor)?.action_ticks().unwrap_or(0);
        if action_ticks > 0 {
            return Err(TurnError::NotReady {
                actor,
                action_ticks,
            });
        }
        Ok(action.apply(self.world, self.env, actor)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Attributes, Health, Position};
    use crate::templates;

    fn actor(is_enemy: bool, cost: i64) -> Attributes {
        Attributes::new()
            .with(attr::IS_ACTOR, true)
            .with(attr::IS_NON_PLAYER, true)
            .with(attr::IS_SOLID, true)
            .with(attr::IS_ENEMY, is_enemy)
            .with(attr::HEALTH, Health::full(3))
            .with(attr::ACTION_COST, cost)
    }

    fn place(world: &mut World, attributes: Attributes, x: i32, y: i32) -> EntityId {
        let level = world.current_level().unwrap();
        let id = world.create_entity(attributes);
        world
            .add_entity_to_level(id, level, Position::new(x, y))
            .unwrap();
        id
    }

    #[test]
    fn adjacent_enemy_is_attacked() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 3);
        let a = place(&mut world, actor(false, 100).with(attr::ACTION_TICKS, 0), 0, 0);
        let b = place(&mut world, actor(true, 100), 1, 0);

        let decision = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap();

        assert_eq!(decision, Decision::Attack { target: b });
        assert_eq!(world.entity(b).unwrap().health(), Some(Health::new(2, 3)));
        assert_eq!(world.entity(a).unwrap().action_ticks(), Some(100));
    }

    #[test]
    fn distant_enemy_is_approached() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 3);
        let a = place(&mut world, actor(false, 100).with(attr::ACTION_TICKS, 0), 0, 0);
        place(&mut world, actor(true, 100), 2, 2);

        let decision = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap();

        let Decision::Step { to } = decision else {
            panic!("expected a step, got {decision:?}");
        };
        assert_eq!(to.manhattan_distance(Position::new(2, 2)), 3);
        assert_eq!(world.entity(a).unwrap().position(), Some(to));
    }

    #[test]
    fn lone_actor_wanders_to_a_neighbour() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 3);
        let a = place(&mut world, actor(true, 100).with(attr::ACTION_TICKS, 0), 1, 1);

        let decision = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap();

        let Decision::Wander { to } = decision else {
            panic!("expected a wander, got {decision:?}");
        };
        assert_eq!(to.manhattan_distance(Position::new(1, 1)), 1);
        assert_eq!(world.entity(a).unwrap().position(), Some(to));
        assert_eq!(world.entity(a).unwrap().action_ticks(), Some(100));
    }

    #[test]
    fn walled_in_actor_passes_and_pays() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 3);
        let a = place(&mut world, actor(true, 100).with(attr::ACTION_TICKS, 0), 1, 1);
        for (x, y) in [(1, 0), (0, 1), (2, 1), (1, 2)] {
            place(&mut world, templates::wall(), x, y);
        }

        let decision = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap();

        assert_eq!(decision, Decision::Pass);
        assert_eq!(world.entity(a).unwrap().position(), Some(Position::new(1, 1)));
        assert_eq!(world.entity(a).unwrap().action_ticks(), Some(100));
    }

    #[test]
    fn ally_on_the_route_forces_a_pass() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 1);
        let a = place(&mut world, actor(false, 100).with(attr::ACTION_TICKS, 0), 0, 0);
        let ally = place(&mut world, actor(false, 100).with(attr::ACTION_TICKS, 50), 1, 0);
        let enemy = place(&mut world, actor(true, 100), 2, 0);

        let decision = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap();

        assert_eq!(decision, Decision::Pass);
        assert_eq!(world.entity(a).unwrap().position(), Some(Position::new(0, 0)));
        assert_eq!(world.entity(a).unwrap().action_ticks(), Some(100));
        assert_eq!(world.entity(ally).unwrap().health(), Some(Health::full(3)));
        assert_eq!(world.entity(enemy).unwrap().health(), Some(Health::full(3)));
    }

    #[test]
    fn waiting_actor_cannot_be_driven() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(2, 2);
        let a = place(&mut world, actor(false, 100).with(attr::ACTION_TICKS, 40), 0, 0);

        let error = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .take_npc_turn(a)
            .unwrap_err();

        assert_eq!(
            error,
            TurnError::NotReady {
                actor: a,
                action_ticks: 40
            }
        );
    }

    #[test]
    fn seeding_distinguishes_players() {
        let config = GameConfig::new();
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        let player = place(&mut world, templates::player(), 0, 0);
        let frog = place(&mut world, templates::frog(true), 2, 2);
        let quick = place(&mut world, actor(true, 30), 2, 0);

        TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .seed_actors(level)
            .unwrap();

        assert_eq!(world.entity(player).unwrap().action_ticks(), Some(0));
        assert_eq!(world.entity(frog).unwrap().action_ticks(), Some(100));
        assert_eq!(world.entity(quick).unwrap().action_ticks(), Some(30));
    }

    #[test]
    fn configured_delay_overrides_action_cost() {
        let config = GameConfig::new().with_initial_npc_delay(7);
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        let frog = place(&mut world, templates::frog(true), 2, 2);

        TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .seed_actors(level)
            .unwrap();

        assert_eq!(world.entity(frog).unwrap().action_ticks(), Some(7));
    }

    #[test]
    fn fast_forward_readies_the_smallest_debt() {
        let config = GameConfig::new();
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        let slow = place(&mut world, actor(true, 100).with(attr::ACTION_TICKS, 90), 0, 0);
        let fast = place(&mut world, actor(true, 50).with(attr::ACTION_TICKS, 40), 2, 2);

        let step = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .fast_forward(level)
            .unwrap();

        assert_eq!(step, Some(40));
        assert_eq!(world.entity(slow).unwrap().action_ticks(), Some(50));
        assert_eq!(world.entity(fast).unwrap().action_ticks(), Some(0));
    }

    #[test]
    fn nothing_to_fast_forward() {
        let config = GameConfig::new();
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);

        let step = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .fast_forward(level)
            .unwrap();

        assert_eq!(step, None);
    }

    #[test]
    fn run_stops_for_the_player() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(5, 5);
        let player = place(&mut world, templates::player(), 0, 0);
        place(&mut world, templates::frog(true), 4, 4);

        let outcome = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .run()
            .unwrap();

        assert_eq!(outcome, SchedulerOutcome::AwaitingInput(player));
        assert!(world.events().is_empty());
    }

    #[test]
    fn player_action_requires_readiness() {
        let config = GameConfig::new();
        let mut world = World::new();
        world.create_grid_level(3, 3);
        let player = place(&mut world, templates::player().with(attr::ACTION_TICKS, 100), 1, 1);

        let result = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .act(player, Action::Pass);

        assert!(matches!(result, Err(TurnError::NotReady { .. })));
    }

    #[test]
    fn empty_world_is_idle() {
        let config = GameConfig::new();
        let mut world = World::new();

        let outcome = TurnScheduler::new(&mut world, GameEnv::with_config(&config))
            .run()
            .unwrap();

        assert_eq!(outcome, SchedulerOutcome::Idle);
    }
}
