//! Tactics client binary.
//!
//! ```bash
//! TACTICS_DATA_DIR=data TACTICS_SCRIPT="east,east,pass" RUST_LOG=debug \
//!     cargo run -p tactics-client
//! ```

use anyhow::{Context, Result};
use tactics_client::{ClientConfig, HeadlessScene, parse_script};
use tactics_core::World;
use tactics_runtime::Runtime;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();

    let (game_config, layout) = config.load_content()?;
    let mut world = World::new();
    layout.spawn(&mut world)?;

    let script = parse_script(&config.script).context("invalid TACTICS_SCRIPT")?;
    info!(
        frames = config.frames,
        seed = game_config.game_seed,
        scripted = script.len(),
        "starting tactics client"
    );

    let mut runtime = Runtime::builder()
        .config(game_config)
        .world(world)
        .scene(HeadlessScene::new(script))
        .initial_scene(HeadlessScene::NAME)
        .build()?;

    for _ in 0..config.frames {
        let report = runtime.frame()?;
        if report.player_died() {
            info!(frame = report.frame, "player died, stopping");
            break;
        }
    }

    info!(frames = runtime.frame_count(), "session over");
    Ok(())
}
