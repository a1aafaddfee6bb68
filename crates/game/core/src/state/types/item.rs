/// Every kind of usable item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Summons a frog buddy.
    WitchHat,
    /// Summons a hornet buddy.
    HornetBox,
    /// Restores one health.
    HealingRing,
    /// Teleports the user to a random free tile.
    BlackOpalPendant,
    /// Rerolls every item in the inventory.
    FourSidedDie,
    /// Launches a fireball. Not wired to any effect yet.
    ScrollOfFire,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::WitchHat,
        ItemKind::HornetBox,
        ItemKind::HealingRing,
        ItemKind::BlackOpalPendant,
        ItemKind::FourSidedDie,
        ItemKind::ScrollOfFire,
    ];

    /// Display name shown to the player.
    pub const fn title(self) -> &'static str {
        match self {
            ItemKind::WitchHat => "witch's hat",
            ItemKind::HornetBox => "box with an H on it",
            ItemKind::HealingRing => "emerald ring",
            ItemKind::BlackOpalPendant => "black opal pendant",
            ItemKind::FourSidedDie => "four-sided die",
            ItemKind::ScrollOfFire => "scroll of fire",
        }
    }

    pub const fn effect_description(self) -> &'static str {
        match self {
            ItemKind::WitchHat => "summon a frog buddy",
            ItemKind::HornetBox => "summon a hornet",
            ItemKind::HealingRing => "+1 health",
            ItemKind::BlackOpalPendant => "teleport!",
            ItemKind::FourSidedDie => "reroll your items",
            ItemKind::ScrollOfFire => "launch a fireball",
        }
    }

    pub const fn cost(self) -> i64 {
        match self {
            ItemKind::WitchHat => 2,
            _ => 1,
        }
    }

    pub const fn sprite(self) -> &'static str {
        match self {
            ItemKind::WitchHat => "witchhat",
            ItemKind::HornetBox => "hornet-box",
            ItemKind::HealingRing => "green-ring",
            ItemKind::BlackOpalPendant => "black-opal-pendant",
            ItemKind::FourSidedDie => "d4",
            ItemKind::ScrollOfFire => "firescroll",
        }
    }
}

/// Bag of item kinds drawn without replacement.
///
/// Once every kind has been drawn the bag refills with all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPool {
    available: Vec<ItemKind>,
}

impl ItemPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds still in the bag before the next refill.
    pub fn remaining(&self) -> &[ItemKind] {
        &self.available
    }

    /// Removes and returns the kind picked by `pick`, which receives the
    /// number of candidates and returns an index below it.
    pub fn draw(&mut self, pick: impl FnOnce(usize) -> usize) -> ItemKind {
        if self.available.is_empty() {
            self.available.extend_from_slice(&ItemKind::ALL);
        }
        let index = pick(self.available.len()).min(self.available.len() - 1);
        self.available.remove(index)
    }
}
