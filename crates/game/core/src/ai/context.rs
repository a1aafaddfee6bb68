use grid_graph::Direction;

use crate::env::GameEnv;
use crate::navigation::LevelGraph;
use crate::state::{EntityId, LevelId, Position, TileId, World};

/// Opposing entity chosen for this turn and the tile it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub entity: EntityId,
    pub tile: TileId,
}

/// What a non-player actor ended up doing with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Attack { target: EntityId },
    Step { to: Position },
    Wander { to: Position },
    Pass,
}

/// Blackboard shared by the nodes of one decision.
///
/// Nodes fill it in as they go: [`AcquireTarget`](super::AcquireTarget)
/// stores the graph and target, [`PlanRoute`](super::PlanRoute) the route,
/// and the acting node the final [`Decision`].
pub struct AiContext<'a> {
    pub world: &'a mut World,
    pub env: GameEnv<'a>,
    pub actor: EntityId,
    pub level: LevelId,
    pub position: Position,
    pub origin: TileId,

    pub graph: Option<LevelGraph>,
    pub target: Option<Target>,
    /// Tiles from the actor to the target, start-exclusive, goal-inclusive.
    pub route: Vec<TileId>,
    pub decision: Option<Decision>,
}

impl<'a> AiContext<'a> {
    pub fn new(
        world: &'a mut World,
        env: GameEnv<'a>,
        actor: EntityId,
        level: LevelId,
        position: Position,
        origin: TileId,
    ) -> Self {
        Self {
            world,
            env,
            actor,
            level,
            position,
            origin,
            graph: None,
            target: None,
            route: Vec::new(),
            decision: None,
        }
    }

    pub fn directions(&self) -> &'static [Direction] {
        self.env.config.connectivity.directions()
    }
}
