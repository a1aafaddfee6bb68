//! Plain data types stored in the world arenas.
mod common;
mod entity;
mod item;
mod tile;
mod value;

pub use common::{EntityId, Health, LevelId, Position, TileId};
pub use entity::{ActorView, Attributes, Entity, attr};
pub use item::{ItemKind, ItemPool};
pub use tile::{Level, Tile};
pub use value::Value;
