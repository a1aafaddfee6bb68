//! Names level layouts use to place entities.

use tactics_core::{Attributes, ItemKind, templates};

/// Everything a layout can place on a tile.
///
/// Allegiance is part of the kind: `frog` and `hornet` are enemies, the
/// `friendly_` variants fight on the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Player,
    Frog,
    FriendlyFrog,
    Hornet,
    FriendlyHornet,
    GochaponMachine,
    PileOfCoins(i64),
    Item(ItemKind),
    Wall,
    Entrance,
    Exit,
}

impl EntityKind {
    /// Fresh attribute bag for one entity of this kind.
    pub fn attributes(self) -> Attributes {
        match self {
            EntityKind::Player => templates::player(),
            EntityKind::Frog => templates::frog(true),
            EntityKind::FriendlyFrog => templates::frog(false),
            EntityKind::Hornet => templates::hornet(true),
            EntityKind::FriendlyHornet => templates::hornet(false),
            EntityKind::GochaponMachine => templates::gochapon_machine(),
            EntityKind::PileOfCoins(amount) => templates::pile_of_coins(amount),
            EntityKind::Item(kind) => templates::item(kind),
            EntityKind::Wall => templates::wall(),
            EntityKind::Entrance => templates::entrance(),
            EntityKind::Exit => templates::exit(),
        }
    }

    pub fn is_actor(self) -> bool {
        matches!(
            self,
            EntityKind::Player
                | EntityKind::Frog
                | EntityKind::FriendlyFrog
                | EntityKind::Hornet
                | EntityKind::FriendlyHornet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{Entity, EntityId, attr};

    fn build(kind: EntityKind) -> Entity {
        Entity::new(EntityId(1), kind.attributes())
    }

    #[test]
    fn allegiance_follows_the_kind() {
        assert!(build(EntityKind::Frog).is_enemy());
        assert!(!build(EntityKind::FriendlyFrog).is_enemy());
        assert!(build(EntityKind::Hornet).is_enemy());
        assert!(!build(EntityKind::Player).is_enemy());
    }

    #[test]
    fn actor_kinds_build_actors() {
        for kind in [
            EntityKind::Player,
            EntityKind::Frog,
            EntityKind::FriendlyHornet,
            EntityKind::Wall,
            EntityKind::GochaponMachine,
            EntityKind::Item(ItemKind::WitchHat),
        ] {
            assert_eq!(build(kind).as_actor().is_some(), kind.is_actor(), "{kind}");
        }
    }

    #[test]
    fn piles_carry_their_amount() {
        let pile = build(EntityKind::PileOfCoins(3));

        assert_eq!(pile.int(attr::AMOUNT), Some(3));
        assert_eq!(pile.text(attr::SPRITE), Some("three-coins"));
    }
}
