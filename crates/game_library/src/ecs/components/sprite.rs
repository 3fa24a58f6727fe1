//! Sprite component

use crate::content::AssetHandle;
use crate::ecs::Component;

/// Renderable image attached to an entity with a transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Texture, if loaded
    pub texture: Option<AssetHandle>,

    /// Depth layer (lower is drawn first)
    pub layer: i32,

    /// Hidden sprites are skipped by the render system
    pub visible: bool,
}

impl Component for Sprite {}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(None, 0)
    }
}

impl Sprite {
    /// Visible sprite on `layer`
    pub fn new(texture: Option<AssetHandle>, layer: i32) -> Self {
        Self {
            texture,
            layer,
            visible: true,
        }
    }
}
