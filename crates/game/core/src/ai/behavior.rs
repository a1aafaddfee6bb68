//! Minimal behavior tree.
//!
//! Turn-based semantics: a node finishes within the tick it is evaluated in,
//! so there is no `Running` status. Nodes may fail hard with a [`TurnError`]
//! when they hit a broken world invariant; composites propagate it.
//!
//! Trees are built once per [`Blackboard`] family rather than per context
//! type, so a context that borrows the world for a single decision can still
//! be evaluated by boxed, `'static` nodes.

use crate::engine::TurnError;

/// Outcome of evaluating a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// `Success` when `condition` holds.
    #[inline]
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Names the context type a tree runs against, for any borrow lifetime.
pub trait Blackboard: 'static {
    type Context<'a>;
}

/// A node evaluated against the context of blackboard `B`.
pub trait Behavior<B: Blackboard> {
    fn tick(&self, ctx: &mut B::Context<'_>) -> Result<Status, TurnError>;
}

impl<B: Blackboard> Behavior<B> for Box<dyn Behavior<B>> {
    #[inline]
    fn tick(&self, ctx: &mut B::Context<'_>) -> Result<Status, TurnError> {
        (**self).tick(ctx)
    }
}

/// Runs children in order until one fails (logical AND).
pub struct Sequence<B: Blackboard> {
    children: Vec<Box<dyn Behavior<B>>>,
}

impl<B: Blackboard> Sequence<B> {
    pub fn new(children: Vec<Box<dyn Behavior<B>>>) -> Self {
        Self { children }
    }
}

impl<B: Blackboard> Behavior<B> for Sequence<B> {
    fn tick(&self, ctx: &mut B::Context<'_>) -> Result<Status, TurnError> {
        for child in &self.children {
            if child.tick(ctx)?.is_failure() {
                return Ok(Status::Failure);
            }
        }
        Ok(Status::Success)
    }
}

/// Runs children in order until one succeeds (logical OR).
pub struct Selector<B: Blackboard> {
    children: Vec<Box<dyn Behavior<B>>>,
}

impl<B: Blackboard> Selector<B> {
    pub fn new(children: Vec<Box<dyn Behavior<B>>>) -> Self {
        Self { children }
    }
}

impl<B: Blackboard> Behavior<B> for Selector<B> {
    fn tick(&self, ctx: &mut B::Context<'_>) -> Result<Status, TurnError> {
        for child in &self.children {
            if child.tick(ctx)?.is_success() {
                return Ok(Status::Success);
            }
        }
        Ok(Status::Failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        visits: Vec<&'static str>,
    }

    impl Blackboard for Counter {
        type Context<'a> = Counter;
    }

    struct Leaf(&'static str, Status);

    impl Behavior<Counter> for Leaf {
        fn tick(&self, ctx: &mut Counter) -> Result<Status, TurnError> {
            ctx.visits.push(self.0);
            Ok(self.1)
        }
    }

    struct Broken;

    impl Behavior<Counter> for Broken {
        fn tick(&self, _: &mut Counter) -> Result<Status, TurnError> {
            Err(TurnError::NotAnActor(crate::state::EntityId(0)))
        }
    }

    #[test]
    fn sequence_short_circuits_on_failure() {
        let tree: Sequence<Counter> = Sequence::new(vec![
            Box::new(Leaf("a", Status::Success)),
            Box::new(Leaf("b", Status::Failure)),
            Box::new(Leaf("c", Status::Success)),
        ]);
        let mut ctx = Counter { visits: Vec::new() };

        assert_eq!(tree.tick(&mut ctx).unwrap(), Status::Failure);
        assert_eq!(ctx.visits, vec!["a", "b"]);
    }

    #[test]
    fn selector_stops_at_first_success() {
        let tree: Selector<Counter> = Selector::new(vec![
            Box::new(Leaf("a", Status::Failure)),
            Box::new(Leaf("b", Status::Success)),
            Box::new(Leaf("c", Status::Success)),
        ]);
        let mut ctx = Counter { visits: Vec::new() };

        assert_eq!(tree.tick(&mut ctx).unwrap(), Status::Success);
        assert_eq!(ctx.visits, vec!["a", "b"]);
    }

    #[test]
    fn errors_abort_the_tree() {
        let tree: Selector<Counter> = Selector::new(vec![
            Box::new(Broken),
            Box::new(Leaf("never", Status::Success)),
        ]);
        let mut ctx = Counter { visits: Vec::new() };

        assert!(tree.tick(&mut ctx).is_err());
        assert!(ctx.visits.is_empty());
    }
}
