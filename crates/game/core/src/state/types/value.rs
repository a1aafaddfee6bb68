use super::{EntityId, Health, LevelId, Position};

/// Value stored under an entity attribute.
///
/// Attributes are schemaless: any name can hold any variant. Truthiness
/// follows the loose rules the query engine relies on (see [`Value::is_truthy`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Position(Position),
    Health(Health),
    Level(LevelId),
    Entity(EntityId),
    Entities(Vec<EntityId>),
}

impl Value {
    /// `false`, `0` and the empty string are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Text(value) => !value.is_empty(),
            Value::Position(_)
            | Value::Health(_)
            | Value::Level(_)
            | Value::Entity(_)
            | Value::Entities(_) => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_position(&self) -> Option<Position> {
        match self {
            Value::Position(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_health(&self) -> Option<Health> {
        match self {
            Value::Health(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_level(&self) -> Option<LevelId> {
        match self {
            Value::Level(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<EntityId> {
        match self {
            Value::Entity(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_entities(&self) -> Option<&[EntityId]> {
        match self {
            Value::Entities(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Position> for Value {
    fn from(value: Position) -> Self {
        Value::Position(value)
    }
}

impl From<Health> for Value {
    fn from(value: Health) -> Self {
        Value::Health(value)
    }
}

impl From<LevelId> for Value {
    fn from(value: LevelId) -> Self {
        Value::Level(value)
    }
}

impl From<EntityId> for Value {
    fn from(value: EntityId) -> Self {
        Value::Entity(value)
    }
}

impl From<Vec<EntityId>> for Value {
    fn from(value: Vec<EntityId>) -> Self {
        Value::Entities(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matches_loose_rules() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Int(-3).is_truthy());
        assert!(!Value::Text(String::new()).is_truthy());
        assert!(Value::Entities(Vec::new()).is_truthy());
        assert!(Value::Health(Health::new(0, 3)).is_truthy());
    }

    #[test]
    fn typed_accessors_reject_other_variants() {
        let value = Value::from(7);

        assert_eq!(value.as_int(), Some(7));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_text(), None);
    }
}
