//! Text stand-ins for the host's drawing and input surfaces.
use watch_core::{HudCanvas, IconSprite, Point, PointerInput, Rect, TooltipFont, ViewerId};

/// Logs icon draws and prints tooltips to stdout.
#[derive(Debug)]
pub struct TerminalCanvas {
    viewer: ViewerId,
    icons_drawn: usize,
}

impl TerminalCanvas {
    pub fn new(viewer: ViewerId) -> Self {
        Self {
            viewer,
            icons_drawn: 0,
        }
    }

    pub fn icons_drawn(&self) -> usize {
        self.icons_drawn
    }
}

impl HudCanvas for TerminalCanvas {
    fn draw_icon(&mut self, sprite: &IconSprite, scale: f32, destination: Rect) {
        self.icons_drawn += 1;
        tracing::trace!(
            viewer = %self.viewer,
            sheet = %sprite.sheet,
            x = destination.x,
            y = destination.y,
            scale,
            "icon"
        );
    }

    fn draw_hover_text(&mut self, text: &str, font: TooltipFont) {
        println!("[{} | {font}]\n{text}\n", self.viewer);
    }
}

/// Pointer driven by the simulation script.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedPointer {
    pub at: Point,
    pub secondary: bool,
}

impl ScriptedPointer {
    pub fn away() -> Self {
        Self {
            at: Point::new(-1, -1),
            secondary: false,
        }
    }

    /// Resting on the centre of `rect`.
    pub fn over(rect: Rect) -> Self {
        Self {
            at: Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2),
            secondary: false,
        }
    }
}

impl PointerInput for ScriptedPointer {
    fn pointer_position(&self) -> Point {
        self.at
    }

    fn is_secondary_down(&self) -> bool {
        self.secondary
    }
}
