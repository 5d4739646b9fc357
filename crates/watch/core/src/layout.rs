//! Screen geometry and the shared icon slot allocator.
//!
//! Every enabled monitor asks the allocator for a position while drawing. The
//! allocator hands out slots from a fixed anchor at the top-right of the play
//! area, moving left one stride per slot and wrapping to a new row before a slot
//! would cross the left margin. The cursor is reset by the host exactly once per
//! frame, so the same set of monitors lands on the same slots frame after frame.

use crate::config::WatchConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `contains` is inclusive on the top-left edge and
/// exclusive on the bottom-right edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(origin: Point, size: i32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Placement rules for icon slots, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotLayout {
    pub icon_size: i32,
    pub stride: i32,
    pub right_margin: i32,
    pub top_margin: i32,
    pub left_margin: i32,
}

impl SlotLayout {
    pub fn from_config(config: &WatchConfig) -> Self {
        let config = config.clone().normalized();
        Self {
            icon_size: config.icon_size,
            stride: config.slot_stride,
            right_margin: config.right_margin,
            top_margin: config.top_margin,
            left_margin: config.left_margin,
        }
    }
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

/// Per-frame layout cursor shared by all monitors of one host.
#[derive(Clone, Debug)]
pub struct IconSlotAllocator {
    layout: SlotLayout,
    play_area_width: i32,
    cursor: usize,
    issued: usize,
}

impl IconSlotAllocator {
    /// Slots are at least one icon wide so that they never overlap.
    pub fn new(mut layout: SlotLayout) -> Self {
        layout.icon_size = layout.icon_size.max(1);
        layout.stride = layout.stride.max(layout.icon_size);
        Self {
            layout,
            play_area_width: 0,
            cursor: 0,
            issued: 0,
        }
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// Starts a new frame: rewinds the cursor and records the play area width.
    pub fn begin_frame(&mut self, play_area_width: i32) {
        self.play_area_width = play_area_width;
        self.cursor = 0;
        self.issued = 0;
    }

    /// Skips `count` slots occupied by other HUD elements this frame.
    pub fn reserve_leading_slots(&mut self, count: usize) {
        self.cursor += count;
    }

    /// Returns the top-left corner of the next free slot.
    pub fn next_slot(&mut self) -> Point {
        let position = self.position_of(self.cursor);
        self.cursor += 1;
        self.issued += 1;
        position
    }

    /// Slots handed out since the last [`Self::begin_frame`], reservations excluded.
    pub fn slots_issued(&self) -> usize {
        self.issued
    }

    fn position_of(&self, index: usize) -> Point {
        let layout = &self.layout;
        let first_x = (self.play_area_width - layout.right_margin).max(layout.left_margin);
        let columns = ((first_x - layout.left_margin) / layout.stride) as usize + 1;

        let row = (index / columns) as i32;
        let column = (index % columns) as i32;
        Point::new(
            first_x - layout.stride * column,
            layout.top_margin + layout.stride * row,
        )
    }
}

impl Default for IconSlotAllocator {
    fn default() -> Self {
        Self::new(SlotLayout::default())
    }
}
