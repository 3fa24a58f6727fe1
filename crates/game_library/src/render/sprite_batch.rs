//! Sprite batch: the draw-command sink the render system fills each frame
//!
//! The batch only collects commands; turning them into pixels is left to
//! the host's renderer, which reads [`SpriteBatch::commands`] after `draw`.

use crate::content::AssetHandle;
use crate::foundation::math::{Mat3, Point2, Vec2};

/// One queued sprite
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Texture to draw, if loaded
    pub texture: Option<AssetHandle>,
    /// Screen-space position
    pub position: Point2,
    /// Rotation in radians
    pub rotation: f32,
    /// Scale factors
    pub scale: Vec2,
    /// Source frame index within the texture strip
    pub frame: u32,
    /// Depth layer (lower is drawn first)
    pub layer: i32,
}

/// Collects draw commands between `begin` and `end`
#[derive(Debug, Default)]
pub struct SpriteBatch {
    view: Mat3,
    commands: Vec<DrawCommand>,
    drawing: bool,
}

impl SpriteBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            view: Mat3::identity(),
            commands: Vec::new(),
            drawing: false,
        }
    }

    /// Start a new batch with the given view transform, dropping old commands
    pub fn begin(&mut self, view: Mat3) {
        if self.drawing {
            log::warn!("SpriteBatch::begin called twice without end");
        }
        self.view = view;
        self.commands.clear();
        self.drawing = true;
    }

    /// Queue a sprite at a world-space position
    pub fn draw(&mut self, mut command: DrawCommand) {
        if !self.drawing {
            log::warn!("SpriteBatch::draw called outside begin/end; command dropped");
            return;
        }
        command.position = self.view.transform_point(&command.position);
        self.commands.push(command);
    }

    /// Finish the batch, sorting commands by layer
    pub fn end(&mut self) {
        self.commands.sort_by_key(|command| command.layer);
        self.drawing = false;
    }

    /// Commands of the last finished batch
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether a batch is open
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
