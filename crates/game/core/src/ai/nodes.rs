use arrayvec::ArrayVec;
use grid_graph::{Goal, a_star, breadth_first_search, flood_fill, resolve_path};
use tracing::{debug, trace};

use super::behavior::{Behavior, Blackboard, Selector, Sequence, Status};
use super::context::{AiContext, Decision, Target};
use crate::action::{attack, conclude_turn, move_actor, pass_turn};
use crate::config::GameConfig;
use crate::engine::TurnError;
use crate::navigation::LevelGraph;
use crate::rng::context;
use crate::state::{EntityId, TileId};

/// Blackboard family for non-player actors.
pub struct Npc;

impl Blackboard for Npc {
    type Context<'a> = AiContext<'a>;
}

/// Decision tree every non-player actor runs:
///
/// ```text
/// Selector
/// ├── Sequence
/// │   ├── AcquireTarget
/// │   ├── PlanRoute
/// │   └── Selector [AttackIfAdjacent, StepTowardTarget, Pass]
/// ├── Wander
/// └── Pass
/// ```
pub fn npc_behavior() -> Selector<Npc> {
    Selector::new(vec![
        Box::new(Sequence::<Npc>::new(vec![
            Box::new(AcquireTarget),
            Box::new(PlanRoute),
            Box::new(Selector::<Npc>::new(vec![
                Box::new(AttackIfAdjacent),
                Box::new(StepTowardTarget),
                Box::new(Pass),
            ])),
        ])),
        Box::new(Wander),
        Box::new(Pass),
    ])
}

/// Picks the closest reachable opposing actor.
///
/// Builds the playable graph, flood-fills from the actor's tile to collect
/// every reachable opponent, then runs a breadth-first search that stops at
/// the first tile holding one. Among equally close opponents the one found
/// first wins.
pub struct AcquireTarget;

impl Behavior<Npc> for AcquireTarget {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        let graph = LevelGraph::playable(ctx.world, ctx.level, ctx.env.config.connectivity)?;
        if !graph.contains(ctx.origin) {
            return Ok(Status::Failure);
        }

        let actor = ctx.world.entity(ctx.actor)?;
        let view = actor.as_actor().ok_or(TurnError::NotAnActor(ctx.actor))?;

        let mut candidates: Vec<(TileId, EntityId)> = Vec::new();
        for tile in flood_fill(graph.graph(), ctx.origin)? {
            let opponent = ctx
                .world
                .entities_on_tile(tile, &[ctx.actor])?
                .into_iter()
                .find(|entity| view.opposes(entity));
            if let Some(opponent) = opponent {
                candidates.push((tile, opponent.id));
            }
        }
        if candidates.is_empty() {
            trace!(actor = %ctx.actor, "no reachable opponent");
            return Ok(Status::Failure);
        }

        let is_candidate = |tile: TileId| candidates.iter().any(|&(held, _)| held == tile);
        let results =
            breadth_first_search(graph.graph(), ctx.origin, Goal::Matching(&is_candidate))?;

        let mut closest: Option<(f64, Target)> = None;
        for &(tile, entity) in &candidates {
            let Some(distance) = results.distance(tile) else {
                continue;
            };
            if closest.is_none_or(|(best, _)| distance < best) {
                closest = Some((distance, Target { entity, tile }));
            }
        }

        let Some((distance, target)) = closest else {
            return Ok(Status::Failure);
        };
        debug!(actor = %ctx.actor, target = %target.entity, distance, "target acquired");
        ctx.target = Some(target);
        ctx.graph = Some(graph);
        Ok(Status::Success)
    }
}

/// A* route from the actor to its target using the Manhattan heuristic.
pub struct PlanRoute;

impl Behavior<Npc> for PlanRoute {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        let (Some(graph), Some(target)) = (ctx.graph.as_ref(), ctx.target) else {
            return Ok(Status::Failure);
        };

        let results = a_star(graph.graph(), ctx.origin, target.tile, |from, to| {
            graph.manhattan(from, to)
        })?;
        if !results.contains(target.tile) {
            return Ok(Status::Failure);
        }

        let route = resolve_path(ctx.origin, target.tile, &results)?;
        if route.is_empty() {
            return Ok(Status::Failure);
        }
        trace!(actor = %ctx.actor, steps = route.len(), "route planned");
        ctx.route = route;
        Ok(Status::Success)
    }
}

/// Attacks when the first step of the route is the target's tile.
pub struct AttackIfAdjacent;

impl Behavior<Npc> for AttackIfAdjacent {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        let (Some(target), Some(&first)) = (ctx.target, ctx.route.first()) else {
            return Ok(Status::Failure);
        };
        if first != target.tile {
            return Ok(Status::Failure);
        }

        attack(ctx.world, ctx.env, ctx.actor, target.entity)?;
        conclude_turn(ctx.world, ctx.env, ctx.actor)?;
        ctx.decision = Some(Decision::Attack {
            target: target.entity,
        });
        Ok(Status::Success)
    }
}

/// Takes the first step of the route unless something solid stands there.
pub struct StepTowardTarget;

impl Behavior<Npc> for StepTowardTarget {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        let Some(&first) = ctx.route.first() else {
            return Ok(Status::Failure);
        };
        let blocked = ctx
            .world
            .entities_on_tile(first, &[ctx.actor])?
            .iter()
            .any(|entity| entity.is_solid());
        if blocked {
            return Ok(Status::Failure);
        }

        let to = ctx.world.tile(first)?.position;
        move_actor(ctx.world, ctx.actor, to)?;
        conclude_turn(ctx.world, ctx.env, ctx.actor)?;
        ctx.decision = Some(Decision::Step { to });
        Ok(Status::Success)
    }
}

/// Moves to a uniformly chosen surrounding tile without solid entities.
pub struct Wander;

impl Behavior<Npc> for Wander {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        let mut open: ArrayVec<TileId, { GameConfig::MAX_NEIGHBOURS }> = ArrayVec::new();
        for tile in ctx
            .world
            .find_surrounding_tiles(ctx.level, ctx.position, ctx.directions())?
        {
            let solid = ctx
                .world
                .entities_on_tile(tile, &[])?
                .iter()
                .any(|entity| entity.is_solid());
            if !solid && open.try_push(tile).is_err() {
                break;
            }
        }

        let nonce = ctx.world.nonce();
        let Some(index) = ctx
            .env
            .choose_index(nonce, ctx.actor, context::WANDER, open.len())
        else {
            return Ok(Status::Failure);
        };

        let to = ctx.world.tile(open[index])?.position;
        move_actor(ctx.world, ctx.actor, to)?;
        conclude_turn(ctx.world, ctx.env, ctx.actor)?;
        ctx.decision = Some(Decision::Wander { to });
        Ok(Status::Success)
    }
}

/// Gives up the turn. Always succeeds.
pub struct Pass;

impl Behavior<Npc> for Pass {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Result<Status, TurnError> {
        pass_turn(ctx.world, ctx.env, ctx.actor)?;
        ctx.decision = Some(Decision::Pass);
        Ok(Status::Success)
    }
}
