use std::cell::RefCell;
use std::rc::Rc;

use tactics_content::LevelLoader;
use tactics_core::{
    Direction, EntityId, GameConfig, GameEvent, Health, Rejection, SchedulerOutcome, World, attr,
};
use tactics_runtime::{FrameContext, Phase, PlayerIntent, Runtime, Scene};

fn spawn(layout: &str) -> World {
    let mut world = World::new();
    LevelLoader::parse(layout)
        .unwrap()
        .spawn(&mut world)
        .unwrap();
    world
}

fn player_of(runtime: &Runtime) -> EntityId {
    runtime
        .world()
        .find_entities_with_attribute(attr::IS_PLAYER, None)[0]
}

const CORRIDOR: &str = "(width: 3, height: 1, entities: [(0, 0, player), (2, 0, frog)])";

#[test]
fn first_frame_waits_for_the_player() {
    let mut runtime = Runtime::builder().world(spawn(CORRIDOR)).build().unwrap();
    let player = player_of(&runtime);

    let report = runtime.frame().unwrap();

    assert_eq!(report.frame, 0);
    assert_eq!(report.awaiting_input(), Some(player));
    assert!(report.events.is_empty());
}

#[test]
fn intent_unblocks_the_cascade() {
    let mut runtime = Runtime::builder().world(spawn(CORRIDOR)).build().unwrap();
    let player = player_of(&runtime);
    runtime.frame().unwrap();

    runtime.push_intent(PlayerIntent::Move(Direction::East));
    let report = runtime.frame().unwrap();

    assert_eq!(report.awaiting_input(), Some(player));
    assert_eq!(report.turns(), 2);
    assert!(report.events.contains(&GameEvent::Attacked {
        attacker: EntityId(2),
        target: player,
        damage: 1,
    }));
    assert!(runtime.intents().is_empty());
}

#[test]
fn rejected_intents_keep_the_turn() {
    let mut runtime = Runtime::builder().world(spawn(CORRIDOR)).build().unwrap();
    let player = player_of(&runtime);

    runtime.push_intent(PlayerIntent::Move(Direction::West));
    let report = runtime.frame().unwrap();

    assert_eq!(
        report.rejected,
        vec![(PlayerIntent::Move(Direction::West), Rejection::OutOfBounds)]
    );
    assert_eq!(report.awaiting_input(), Some(player));
    assert_eq!(report.turns(), 0);
}

#[test]
fn player_death_is_reported() {
    let config = GameConfig {
        max_actions_per_update: 16,
        ..GameConfig::default()
    };
    let mut world = spawn("(width: 2, height: 1, entities: [(0, 0, player), (1, 0, frog)])");
    let player = world.find_entities_with_attribute(attr::IS_PLAYER, None)[0];
    world
        .entity_mut(player)
        .unwrap()
        .set(attr::HEALTH, Health::new(1, 5));
    let mut runtime = Runtime::builder().config(config).world(world).build().unwrap();

    runtime.push_intent(PlayerIntent::Pass);
    let report = runtime.frame().unwrap();

    assert!(report.player_died());
    assert_eq!(report.player_deaths, vec![player]);
    assert_eq!(report.outcome, Some(SchedulerOutcome::Stalled));
}

struct Script {
    log: Rc<RefCell<Vec<(u64, Phase)>>>,
}

impl Scene for Script {
    fn name(&self) -> &str {
        "script"
    }

    fn on_phase(&mut self, ctx: &mut FrameContext<'_>) -> tactics_runtime::Result<()> {
        self.log.borrow_mut().push((ctx.frame, ctx.phase));
        match ctx.phase {
            Phase::BeforeUpdate => ctx.intents.push(PlayerIntent::Pass),
            Phase::AfterDraw if ctx.frame == 0 => ctx.start_scene("pause"),
            _ => {}
        }
        Ok(())
    }
}

struct Pause;

impl Scene for Pause {
    fn name(&self) -> &str {
        "pause"
    }

    fn on_phase(&mut self, _ctx: &mut FrameContext<'_>) -> tactics_runtime::Result<()> {
        Ok(())
    }
}

#[test]
fn scenes_see_every_phase_in_order() {
    let log = Rc::default();
    let mut runtime = Runtime::builder()
        .world(spawn(CORRIDOR))
        .scene(Script {
            log: Rc::clone(&log),
        })
        .scene(Pause)
        .initial_scene("script")
        .build()
        .unwrap();

    let report = runtime.frame().unwrap();

    let phases: Vec<Phase> = log.borrow().iter().map(|&(_, phase)| phase).collect();
    assert_eq!(phases, Phase::ALL);
    // The intent pushed before the update is spent in the same frame.
    assert!(report.turns() >= 1);
    assert_eq!(runtime.scenes().current(), Some("pause"));
    assert_eq!(runtime.scenes().history(), ["script".to_owned()]);

    runtime.frame().unwrap();
    assert_eq!(log.borrow().len(), Phase::ALL.len());
}
