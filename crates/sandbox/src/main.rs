//! Headless sandbox
//!
//! Runs the asteroid field demo for a fixed number of frames and logs how
//! many orphaned bodies the world swept. Pass a `.toml` or `.ron` world
//! configuration path as the first argument to override the defaults.

mod components;
mod field;

use field::{AsteroidField, FieldArgs};
use game_library::foundation::logging;
use game_library::prelude::*;
use std::time::Duration;

const FRAMES: u64 = 600;
const FRAME_STEP: Duration = Duration::from_millis(16);

fn load_config() -> Result<WorldConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading world configuration from {}", path);
            Ok(WorldConfig::load_from_file(&path)?)
        }
        None => Ok(WorldConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config()?;
    let host = HostContext::headless().with_viewport(Vec2::new(1280.0, 720.0));
    let world = World::with_hooks(host, config, AsteroidField::new(7))?;

    let mut content = MemoryContent::new()
        .with_asset("rock.png", vec![0u8; 64])
        .with_asset("theme.ogg", vec![0u8; 128]);

    let mut runner = GameRunner::new(world);
    runner.start(&mut content, &FieldArgs::default())?;

    for frame in 0..FRAMES {
        if runner.run_frames(1, FRAME_STEP)? == 0 {
            break;
        }
        let report = runner.world().last_reconcile();
        runner.world_mut().hooks_mut().record_sweep(report);
        if report.removed() > 0 {
            log::debug!("Frame {}: swept {} orphaned bodies", frame, report.removed());
        }
        if frame == FRAMES / 2 {
            runner.world_mut().set_speed(0.5)?;
        }
    }

    let world = runner.into_world();
    let field = world.hooks();
    log::info!(
        "Ran {} frames: {} rocks destroyed, {} bodies swept",
        FRAMES,
        field.destroyed(),
        field.bodies_swept()
    );
    Ok(())
}
