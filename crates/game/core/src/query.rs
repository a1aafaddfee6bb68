//! Structural entity queries.
//!
//! A [`Query`] is a conjunction of per-attribute [`Matcher`]s. It is
//! evaluated against attribute bags only, so it never mutates anything and
//! running it twice over the same store yields the same entities in the same
//! order.

use std::fmt;

use crate::state::{Entity, EntityStore, Value};

/// Condition on a single attribute.
pub enum Matcher {
    /// Attribute present with a truthy value.
    Truthy,
    /// Attribute missing, or present with a falsy value.
    Falsy,
    /// Predicate over the value. A missing attribute never matches.
    Predicate(Box<dyn Fn(&Value) -> bool>),
    /// Attribute present and equal to the literal.
    Equals(Value),
}

impl Matcher {
    pub fn predicate(predicate: impl Fn(&Value) -> bool + 'static) -> Self {
        Matcher::Predicate(Box::new(predicate))
    }

    pub fn matches(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Matcher::Truthy, value) => value.is_some_and(Value::is_truthy),
            (Matcher::Falsy, value) => !value.is_some_and(Value::is_truthy),
            (Matcher::Predicate(predicate), Some(value)) => predicate(value),
            (Matcher::Equals(expected), Some(value)) => expected == value,
            (Matcher::Predicate(_) | Matcher::Equals(_), None) => false,
        }
    }
}

impl From<bool> for Matcher {
    fn from(value: bool) -> Self {
        if value { Matcher::Truthy } else { Matcher::Falsy }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Truthy => f.write_str("Truthy"),
            Matcher::Falsy => f.write_str("Falsy"),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
            Matcher::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
        }
    }
}

/// Attribute filter map. All entries must match.
#[derive(Debug, Default)]
pub struct Query {
    filters: Vec<(String, Matcher)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a matcher; `true`/`false` convert to truthy/falsy checks.
    pub fn filter(mut self, name: &str, matcher: impl Into<Matcher>) -> Self {
        self.filters.push((name.to_owned(), matcher.into()));
        self
    }

    pub fn equals(self, name: &str, value: impl Into<Value>) -> Self {
        self.filter(name, Matcher::Equals(value.into()))
    }

    pub fn matching(self, name: &str, predicate: impl Fn(&Value) -> bool + 'static) -> Self {
        self.filter(name, Matcher::predicate(predicate))
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        self.filters
            .iter()
            .all(|(name, matcher)| matcher.matches(entity.get(name)))
    }

    /// Lazily yields the entities that satisfy every filter.
    pub fn find<'a, I>(&self, entities: I) -> impl Iterator<Item = &'a Entity>
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        entities
            .into_iter()
            .filter(move |entity| self.matches(entity))
    }
}

/// All entities in the store matching `query`, in id order.
pub fn find_entities<'a>(store: &'a EntityStore, query: &Query) -> Vec<&'a Entity> {
    query.find(store.iter()).collect()
}

/// First entity in id order matching `query`.
pub fn find_entity<'a>(store: &'a EntityStore, query: &Query) -> Option<&'a Entity> {
    query.find(store.iter()).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attributes, EntityId, Health, attr};

    fn store() -> EntityStore {
        let mut store = EntityStore::new();
        store.create(
            Attributes::new()
                .with(attr::IS_ACTOR, true)
                .with(attr::IS_PLAYER, true)
                .with(attr::HEALTH, Health::full(5))
                .with(attr::COINS, 99),
        );
        store.create(
            Attributes::new()
                .with(attr::IS_ACTOR, true)
                .with(attr::IS_ENEMY, true)
                .with(attr::HEALTH, Health::full(3))
                .with(attr::COINS, 0),
        );
        store.create(Attributes::new().with(attr::IS_SOLID, true));
        store
    }

    fn ids(entities: Vec<&Entity>) -> Vec<EntityId> {
        entities.iter().map(|entity| entity.id).collect()
    }

    #[test]
    fn true_requires_a_truthy_value() {
        let store = store();
        let query = Query::new().filter(attr::COINS, true);

        assert_eq!(ids(find_entities(&store, &query)), vec![EntityId(1)]);
    }

    #[test]
    fn false_accepts_missing_or_falsy() {
        let store = store();
        let query = Query::new().filter(attr::COINS, false);

        assert_eq!(
            ids(find_entities(&store, &query)),
            vec![EntityId(2), EntityId(3)]
        );
    }

    #[test]
    fn predicates_never_match_missing_attributes() {
        let store = store();
        let query = Query::new().matching(attr::COINS, |_| true);

        assert_eq!(
            ids(find_entities(&store, &query)),
            vec![EntityId(1), EntityId(2)]
        );
    }

    #[test]
    fn literals_use_strict_equality() {
        let store = store();

        let ints = Query::new().equals(attr::COINS, 99);
        assert_eq!(ids(find_entities(&store, &ints)), vec![EntityId(1)]);

        // `Bool(true)` is not `Int(1)`
        let bools = Query::new().equals(attr::COINS, true);
        assert!(find_entities(&store, &bools).is_empty());
    }

    #[test]
    fn filters_combine_with_and() {
        let store = store();
        let query = Query::new()
            .filter(attr::IS_ACTOR, true)
            .filter(attr::IS_ENEMY, false)
            .matching(attr::HEALTH, |value| {
                value.as_health().is_some_and(|health| health.max > 4)
            });

        assert_eq!(find_entity(&store, &query).map(|entity| entity.id), Some(EntityId(1)));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let store = store();
        let query = Query::new().filter(attr::IS_ACTOR, true);

        assert_eq!(find_entities(&store, &query), find_entities(&store, &query));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let store = store();
        let query = Query::new().filter(attr::IS_GOCHAPON_MACHINE, true);

        assert!(find_entity(&store, &query).is_none());
    }
}
