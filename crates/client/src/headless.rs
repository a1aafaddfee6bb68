//! Headless frontend: scripted input and a text rendering of the level.

use std::collections::VecDeque;

use anyhow::{Context, Result, bail};
use tactics_core::{Direction, Entity, GameEvent, World, attr};
use tactics_runtime::{FrameContext, Phase, PlayerIntent, Scene};
use tracing::{debug, info, warn};

/// Arena used when no layout file is configured.
pub const DEFAULT_LEVEL: &str = r#"(
    width: 7,
    height: 7,
    entities: [
        (0, 0, entrance),
        (6, 6, exit),
        (3, 3, player),
        (1, 5, frog),
        (5, 1, hornet),
        (3, 0, gochapon_machine),
        (2, 2, wall),
        (4, 4, wall),
        (5, 3, item(healing_ring)),
        (1, 3, pile_of_coins(2)),
    ],
)"#;

/// Parses one scripted intent: a direction name, `pass`, or `use <slot>`.
pub fn parse_intent(token: &str) -> Result<PlayerIntent> {
    let token = token.trim().to_ascii_lowercase();
    let direction = match token.as_str() {
        "n" | "north" | "up" => Direction::North,
        "ne" | "northeast" => Direction::NorthEast,
        "e" | "east" | "right" => Direction::East,
        "se" | "southeast" => Direction::SouthEast,
        "s" | "south" | "down" => Direction::South,
        "sw" | "southwest" => Direction::SouthWest,
        "w" | "west" | "left" => Direction::West,
        "nw" | "northwest" => Direction::NorthWest,
        "pass" | "wait" => return Ok(PlayerIntent::Pass),
        other => {
            let Some(slot) = other.strip_prefix("use") else {
                bail!("unknown intent `{other}`");
            };
            let slot = slot
                .trim()
                .parse()
                .with_context(|| format!("invalid inventory slot in `{other}`"))?;
            return Ok(PlayerIntent::UseItem(slot));
        }
    };
    Ok(PlayerIntent::Move(direction))
}

/// Parses a comma-separated script. Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<PlayerIntent>> {
    script
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(parse_intent)
        .collect()
}

fn glyph(entity: &Entity) -> char {
    if entity.is_player() {
        '@'
    } else if entity.as_actor().is_some() {
        if entity.is_enemy() { 'E' } else { 'a' }
    } else if entity.flag(attr::IS_GOCHAPON_MACHINE) {
        'G'
    } else if entity.has_health() {
        'o'
    } else if entity.is_solid() {
        '#'
    } else if entity.flag(attr::IS_PILE_OF_COINS) {
        '$'
    } else if entity.flag(attr::IS_ITEM) {
        '!'
    } else if entity.flag(attr::IS_ENTRANCE) {
        '<'
    } else if entity.flag(attr::IS_EXIT) {
        '>'
    } else {
        '?'
    }
}

/// Text rendering of the current level, one line per row.
pub fn render(world: &World) -> Result<String> {
    let Some(level) = world.current_level() else {
        return Ok(String::new());
    };

    let mut cells = Vec::new();
    for tile in world.tiles_in_level(level)? {
        let position = world.tile(tile)?.position;
        let glyph = world
            .entities_on_tile(tile, &[])?
            .into_iter()
            .map(glyph)
            .next()
            .unwrap_or('.');
        cells.push((position, glyph));
    }

    let width = cells.iter().map(|(p, _)| p.x + 1).max().unwrap_or(0).max(0) as usize;
    let height = cells.iter().map(|(p, _)| p.y + 1).max().unwrap_or(0).max(0) as usize;
    let mut rows = vec![vec![' '; width]; height];
    for (position, glyph) in cells {
        if let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) {
            rows[y][x] = glyph;
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Feeds scripted intents to the runtime and logs what happens.
///
/// Once the script runs out the player passes every turn.
pub struct HeadlessScene {
    script: VecDeque<PlayerIntent>,
}

impl HeadlessScene {
    pub const NAME: &'static str = "headless";

    pub fn new(script: Vec<PlayerIntent>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl Scene for HeadlessScene {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_start(&mut self, world: &mut World) -> tactics_runtime::Result<()> {
        info!(entities = world.entities().len(), "headless session started");
        Ok(())
    }

    fn on_phase(&mut self, ctx: &mut FrameContext<'_>) -> tactics_runtime::Result<()> {
        match ctx.phase {
            Phase::BeforeUpdate if ctx.intents.is_empty() => {
                let intent = self.script.pop_front().unwrap_or(PlayerIntent::Pass);
                ctx.intents.push(intent);
            }
            Phase::AfterUpdate => {
                for event in ctx.events {
                    match event {
                        GameEvent::Died { entity, killer } => {
                            info!(%entity, %killer, "died")
                        }
                        GameEvent::Attacked {
                            attacker,
                            target,
                            damage,
                        } => debug!(%attacker, %target, damage, "attacked"),
                        other => debug!(event = ?other),
                    }
                }
            }
            Phase::Draw => match render(ctx.world) {
                Ok(map) => debug!(frame = ctx.frame, "\n{map}"),
                Err(error) => warn!(%error, "render failed"),
            },
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tactics_content::LevelLoader;

    use super::*;

    #[test]
    fn scripts_parse_directions_and_slots() {
        let script = parse_script("east, N ,use 2,,pass").unwrap();

        assert_eq!(
            script,
            vec![
                PlayerIntent::Move(Direction::East),
                PlayerIntent::Move(Direction::North),
                PlayerIntent::UseItem(2),
                PlayerIntent::Pass,
            ]
        );
    }

    #[test]
    fn unknown_tokens_are_errors() {
        assert!(parse_intent("jump").is_err());
        assert!(parse_intent("use x").is_err());
    }

    #[test]
    fn default_level_renders() {
        let mut world = World::new();
        LevelLoader::parse(DEFAULT_LEVEL)
            .unwrap()
            .spawn(&mut world)
            .unwrap();

        let map = render(&world).unwrap();
        let rows: Vec<&str> = map.lines().collect();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3].chars().nth(3), Some('@'));
        assert_eq!(rows[0].chars().nth(0), Some('<'));
        assert_eq!(rows[2].chars().nth(2), Some('#'));
        assert_eq!(rows[5].chars().nth(1), Some('E'));
    }
}
