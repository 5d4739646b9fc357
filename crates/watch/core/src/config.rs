use crate::hud::TooltipFont;

/// Tunable parameters shared by every monitor and the slot allocator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchConfig {
    /// Periodic ticks between incremental refreshes. At 60 ticks per second
    /// this is about ten in-game minutes.
    pub refresh_cadence: u64,
    /// Edge length of the square icon destination, in screen pixels.
    pub icon_size: i32,
    /// Distance between two consecutive slot origins. Must be >= `icon_size`.
    pub slot_stride: i32,
    /// Gap between the right edge of the play area and the first slot.
    pub right_margin: i32,
    pub top_margin: i32,
    /// Slots never start left of this x coordinate; the allocator wraps instead.
    pub left_margin: i32,
    /// Scale applied to the 16px source sprite.
    pub sprite_scale: f32,
    pub tooltip_font: TooltipFont,
}

impl WatchConfig {
    pub const DEFAULT_REFRESH_CADENCE: u64 = 600;
    pub const DEFAULT_ICON_SIZE: i32 = 40;
    pub const DEFAULT_SLOT_STRIDE: i32 = 48;
    pub const DEFAULT_RIGHT_MARGIN: i32 = 70;
    pub const DEFAULT_TOP_MARGIN: i32 = 12;
    pub const DEFAULT_SPRITE_SCALE: f32 = 2.5;

    pub fn new() -> Self {
        Self {
            refresh_cadence: Self::DEFAULT_REFRESH_CADENCE,
            icon_size: Self::DEFAULT_ICON_SIZE,
            slot_stride: Self::DEFAULT_SLOT_STRIDE,
            right_margin: Self::DEFAULT_RIGHT_MARGIN,
            top_margin: Self::DEFAULT_TOP_MARGIN,
            left_margin: 0,
            sprite_scale: Self::DEFAULT_SPRITE_SCALE,
            tooltip_font: TooltipFont::Dialogue,
        }
    }

    pub fn with_refresh_cadence(mut self, cadence: u64) -> Self {
        self.refresh_cadence = cadence;
        self
    }

    /// Clamps values that would break allocator or cadence invariants.
    ///
    /// A zero cadence becomes 1 (refresh every tick); a stride smaller than the
    /// icon grows to the icon size so slots cannot overlap.
    pub fn normalized(mut self) -> Self {
        self.refresh_cadence = self.refresh_cadence.max(1);
        self.icon_size = self.icon_size.max(1);
        self.slot_stride = self.slot_stride.max(self.icon_size);
        self.left_margin = self.left_margin.max(0);
        self
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
