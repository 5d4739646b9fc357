//! Host collaborators used while drawing: canvas, pointer, and scene flags.
//!
//! These are thin capabilities; the crate never owns textures or fonts. A host
//! implements them once and hands references to the monitors per callback.

use crate::layout::{Point, Rect};

/// Sprite sheets the host knows how to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SpriteSheet {
    /// The shared object sprite sheet (crops, fruit, fish).
    Objects,
}

/// Font used for hover text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TooltipFont {
    #[default]
    Dialogue,
    Small,
}

/// Source region of an icon inside a sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSprite {
    pub sheet: SpriteSheet,
    pub source: Rect,
}

impl IconSprite {
    pub const fn objects(x: i32, y: i32) -> Self {
        Self {
            sheet: SpriteSheet::Objects,
            source: Rect::new(x, y, 16, 16),
        }
    }
}

/// Drawing surface for the HUD layer.
pub trait HudCanvas {
    /// Draws `sprite` scaled by `scale` into `destination`.
    fn draw_icon(&mut self, sprite: &IconSprite, scale: f32, destination: Rect);

    /// Draws a hover box with `text` next to the pointer.
    fn draw_hover_text(&mut self, text: &str, font: TooltipFont);
}

/// Pointer state for one viewer.
pub trait PointerInput {
    fn pointer_position(&self) -> Point;

    /// Whether the secondary (right) button is currently held down.
    fn is_secondary_down(&self) -> bool;
}

/// Scene-level flags that gate drawing.
pub trait SceneState {
    /// True while a cutscene or scripted event is playing.
    fn is_event_up(&self) -> bool;
}

/// Fixed scene state, handy for hosts that do not model cutscenes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticScene {
    pub event_up: bool,
}

impl SceneState for StaticScene {
    fn is_event_up(&self) -> bool {
        self.event_up
    }
}
