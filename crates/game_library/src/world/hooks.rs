//! Game-specific extension points
//!
//! A game customizes the world by implementing [`WorldHooks`]. Every method
//! has a no-op default, so a game only overrides the stages it cares about.

use super::{Scene, WorldError};
use crate::content::ContentSource;
use crate::ecs::SystemManager;
use crate::foundation::time::FrameTime;

/// Callbacks the world invokes at fixed points of its lifecycle
pub trait WorldHooks {
    /// Argument bundle handed to `load_content`
    type Args;

    /// Display label; `None` falls back to the configured name
    fn name(&self) -> Option<&str> {
        None
    }

    /// Register game systems after the built-in ones
    fn build_systems(&mut self, _systems: &mut SystemManager) -> Result<(), WorldError> {
        Ok(())
    }

    /// Load the assets entity templates need
    fn build_templates(
        &mut self,
        _scene: &mut Scene,
        _content: &mut dyn ContentSource,
        _args: &Self::Args,
    ) -> Result<(), WorldError> {
        Ok(())
    }

    /// Spawn the initial entities
    fn build_entities(&mut self, _scene: &mut Scene, _args: &Self::Args) -> Result<(), WorldError> {
        Ok(())
    }

    /// Called first thing in every `update`
    fn loop_start(&mut self, _scene: &mut Scene, _frame: &FrameTime) -> Result<(), WorldError> {
        Ok(())
    }

    /// Called once when the world shuts down
    fn on_exit(&mut self, _scene: &mut Scene) {}
}

/// Hooks that do nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl WorldHooks for NoHooks {
    type Args = ();
}
