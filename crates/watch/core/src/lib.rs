//! Readiness monitors for a farming-simulation HUD.
//!
//! `watch-core` holds the pure logic behind the "something is ready" icons: it
//! scans regions of a read-only world model, caches which regions hold ready
//! entities, renders a hover summary, and places icons through a shared slot
//! allocator. Nothing here performs I/O or owns host resources; hosts implement
//! the oracle and HUD traits and drive the callbacks on [`ReadinessMonitor`].
pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod hud;
pub mod layout;
pub mod monitor;
pub mod summary;
pub mod viewer;

pub use config::WatchConfig;
pub use domain::{Eligibility, MonitorDomain, MonitorKind, Readiness, SummaryStyle};
pub use env::{
    CropPlot, Entity, EntityKind, FishPond, FruitTree, ItemId, NameOracle, OracleError, RegionId,
    RegionInfo, RegionTraits, WorldOracle,
};
pub use error::{ErrorSeverity, MonitorError, WatchError};
pub use hud::{
    HudCanvas, IconSprite, PointerInput, SceneState, SpriteSheet, StaticScene, TooltipFont,
};
pub use layout::{IconSlotAllocator, Point, Rect, SlotLayout};
pub use monitor::{HoverOutcome, MonitorState, ReadinessMonitor, RefreshMode};
pub use summary::{Summary, SummaryBuilder};
pub use viewer::{PerViewer, ViewerId};
