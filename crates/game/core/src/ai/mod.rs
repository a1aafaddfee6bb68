//! Decision making for non-player actors.
//!
//! Each ready non-player actor evaluates [`npc_behavior`] against a fresh
//! [`AiContext`]. Exactly one node in the tree acts, and every acting node
//! concludes the actor's turn.

mod behavior;
mod context;
mod nodes;

pub use behavior::{Behavior, Blackboard, Selector, Sequence, Status};
pub use context::{AiContext, Decision, Target};
pub use nodes::{
    AcquireTarget, AttackIfAdjacent, Npc, Pass, PlanRoute, StepTowardTarget, Wander, npc_behavior,
};
