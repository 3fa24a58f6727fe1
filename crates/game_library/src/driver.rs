//! Frame driver
//!
//! [`GameRunner`] owns a [`World`] and walks it through its lifecycle: it
//! starts the world, feeds it frames from a [`Timer`] (wall clock or fixed
//! step), and fires the exit hook exactly once when asked to stop.

use crate::content::ContentSource;
use crate::foundation::time::{FrameTime, Stopwatch, Timer};
use crate::world::{LifecycleState, NoHooks, World, WorldError, WorldHooks};
use std::time::Duration;

/// Runs a world frame by frame
pub struct GameRunner<H: WorldHooks = NoHooks> {
    world: World<H>,
    timer: Timer,
    running: bool,
    busy_time: Duration,
}

impl<H: WorldHooks> GameRunner<H> {
    /// Wrap a freshly constructed world
    pub fn new(world: World<H>) -> Self {
        Self {
            world,
            timer: Timer::new(),
            running: false,
            busy_time: Duration::ZERO,
        }
    }

    /// Initialize the world and load its content
    pub fn start(&mut self, content: &mut dyn ContentSource, args: &H::Args) -> Result<(), WorldError> {
        log::info!("Starting '{}'", self.world.name());
        self.world.initialize()?;
        self.world.load_content(content, args)?;
        self.timer = Timer::new();
        self.running = true;
        Ok(())
    }

    /// Run one update and draw with an explicit frame time
    ///
    /// Returns `Ok(false)` without touching the world once exit was requested.
    pub fn tick(&mut self, frame: FrameTime) -> Result<bool, WorldError> {
        if !self.running {
            return Ok(false);
        }

        let stopwatch = Stopwatch::start_new();
        let result = self
            .world
            .update(&frame)
            .and_then(|()| self.world.draw(&frame));
        self.busy_time += stopwatch.elapsed();

        if let Err(error) = result {
            log::error!("Frame failed: {}", error);
            self.exit();
            return Err(error);
        }
        Ok(true)
    }

    /// Run one frame timed by the wall clock
    pub fn tick_realtime(&mut self) -> Result<bool, WorldError> {
        let frame = self.timer.tick();
        self.tick(frame)
    }

    /// Run up to `frames` frames of fixed length `step`
    ///
    /// Stops early if exit is requested; returns the number of frames run.
    pub fn run_frames(&mut self, frames: u64, step: Duration) -> Result<u64, WorldError> {
        let mut ran = 0;
        while ran < frames && self.running {
            let frame = self.timer.advance(step);
            if !self.tick(frame)? {
                break;
            }
            ran += 1;
        }
        Ok(ran)
    }

    /// Stop running and fire the world's exit hook (only the first call acts)
    pub fn exit(&mut self) {
        if self.world.state() == LifecycleState::Exited {
            return;
        }
        log::info!(
            "Exiting '{}' after {} frames ({:.1} fps average)",
            self.world.name(),
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        self.running = false;
        self.world.on_exit();
    }

    /// Whether frames are still being accepted
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames fed to the world since `start`
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Wall time spent inside `update` and `draw`
    pub fn busy_time(&self) -> Duration {
        self.busy_time
    }

    /// The driven world
    pub fn world(&self) -> &World<H> {
        &self.world
    }

    /// Mutable access to the driven world
    pub fn world_mut(&mut self) -> &mut World<H> {
        &mut self.world
    }

    /// Exit if needed and hand back the world
    pub fn into_world(mut self) -> World<H> {
        self.exit();
        self.world
    }
}
