use watch_core::{
    CropPlot, Entity, FishPond, FruitTree, HoverOutcome, HudCanvas, IconSprite, ItemId,
    MonitorDomain, Point, PointerInput, Rect, RegionId, RegionInfo, RegionTraits, StaticScene,
    TooltipFont, ViewerId, WatchConfig,
};
use watch_runtime::{
    EventHub, HostEvents, MonitorHost, NameOracleImpl, OracleManager, RuntimeError, Signal,
    WorldOracleImpl,
};

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Icon(Rect),
    Tooltip(String),
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<Draw>,
}

impl RecordingCanvas {
    fn tooltips(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Draw::Tooltip(text) => Some(text.as_str()),
                Draw::Icon(_) => None,
            })
            .collect()
    }
}

impl HudCanvas for RecordingCanvas {
    fn draw_icon(&mut self, _: &IconSprite, _: f32, destination: Rect) {
        self.calls.push(Draw::Icon(destination));
    }

    fn draw_hover_text(&mut self, text: &str, _: TooltipFont) {
        self.calls.push(Draw::Tooltip(text.to_string()));
    }
}

struct Pointer {
    at: Point,
    secondary: bool,
}

impl Pointer {
    fn away() -> Self {
        Self {
            at: Point::new(-100, -100),
            secondary: false,
        }
    }

    fn over(rect: Rect) -> Self {
        Self {
            at: Point::new(rect.x + 1, rect.y + 1),
            secondary: false,
        }
    }

    fn clicking(rect: Rect) -> Self {
        Self {
            secondary: true,
            ..Self::over(rect)
        }
    }
}

impl PointerInput for Pointer {
    fn pointer_position(&self) -> Point {
        self.at
    }

    fn is_secondary_down(&self) -> bool {
        self.secondary
    }
}

const MAIN: ViewerId = ViewerId::MAIN;
const BERRY: ItemId = ItemId(1);
const ROOT: ItemId = ItemId(2);
const APPLE: ItemId = ItemId(3);

fn crop(item: ItemId, ready: bool) -> Entity {
    CropPlot::new(item, ready).into()
}

fn oracles() -> OracleManager {
    let world = WorldOracleImpl::new()
        .with_region(
            RegionInfo::new(RegionId(1), "A", RegionTraits::FARM),
            vec![
                crop(BERRY, true),
                crop(BERRY, true),
                crop(ROOT, true),
                crop(BERRY, true),
                FruitTree::new(APPLE, 3).into(),
            ],
        )
        .with_region(
            RegionInfo::new(RegionId(2), "B", RegionTraits::FARM),
            vec![crop(BERRY, false)],
        )
        .with_region(
            RegionInfo::new(RegionId(3), "Town", RegionTraits::empty()),
            vec![crop(ROOT, true)],
        );
    let names = NameOracleImpl::new()
        .with(BERRY, "Berry")
        .with(ROOT, "Root")
        .with(APPLE, "Apple");
    OracleManager::new(world, names)
}

fn host_with(domains: &[MonitorDomain]) -> MonitorHost {
    let mut host = MonitorHost::new(WatchConfig::default()).with_play_area_width(1280);
    for domain in domains {
        host.register(*domain);
    }
    host
}

#[test]
fn enable_disable_scenario() {
    let mut oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().expect("registered");

    // Enabling runs a reset and attaches all four signals.
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();
    let monitor = host.monitor(crops).unwrap();
    assert_eq!(monitor.summary(MAIN), "A\n  - Berry: 3\n  - Root: 1");
    for signal in Signal::ALL {
        assert_eq!(host.events().subscribers(signal), vec![crops.subscription()]);
    }

    // Frame: icon appears, hovering shows the summary.
    let mut canvas = RecordingCanvas::default();
    let report = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);
    let (_, icon) = report.icons[0];
    assert!(report.hovers.is_empty());

    let report = host.render_frame(MAIN, &StaticScene::default(), &Pointer::over(icon), &mut canvas);
    assert_eq!(report.hovers, vec![(crops, HoverOutcome::Shown)]);
    assert_eq!(canvas.tooltips(), vec!["A\n  - Berry: 3\n  - Root: 1"]);

    // Crops get harvested; the next due tick empties the monitor.
    for entity in oracles.world_mut().all_entities_mut() {
        if let Entity::CropPlot(plot) = entity {
            plot.ready_for_harvest = false;
        }
    }
    assert_eq!(host.update_ticked(MAIN, 599, &oracles), 0);
    assert_eq!(host.update_ticked(MAIN, 600, &oracles), 1);
    assert_eq!(host.monitor(crops).unwrap().summary(MAIN), "");

    // Idle until the next day starts.
    assert_eq!(host.update_ticked(MAIN, 1200, &oracles), 0);

    // Disabling detaches and forgets everything.
    host.set_enabled(crops, MAIN, false, &oracles).unwrap();
    assert!(!host.is_enabled(crops));
    assert!(host.events().is_empty());
    assert!(host.monitor(crops).unwrap().state(MAIN).is_none());
}

#[test]
fn disabled_monitor_stays_silent_and_disable_is_idempotent() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().expect("registered");
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();

    let mut canvas = RecordingCanvas::default();
    let report = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);
    let (_, icon) = report.icons[0];

    host.set_enabled(crops, MAIN, false, &oracles).unwrap();
    host.set_enabled(crops, MAIN, false, &oracles).unwrap();
    assert!(host.events().is_empty());

    let mut canvas = RecordingCanvas::default();
    let report = host.render_frame(MAIN, &StaticScene::default(), &Pointer::clicking(icon), &mut canvas);
    assert!(report.icons.is_empty());
    assert!(report.hovers.is_empty());
    assert!(canvas.calls.is_empty());

    assert_eq!(host.update_ticked(MAIN, 600, &oracles), 0);
    host.day_started(MAIN, &oracles);
    assert!(host.monitor(crops).unwrap().state(MAIN).is_none());
}

#[test]
fn repeated_enable_leaves_one_subscription_per_signal() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().unwrap();

    for _ in 0..3 {
        host.set_enabled(crops, MAIN, true, &oracles).unwrap();
    }

    assert_eq!(host.events().len(), Signal::ALL.len());
}

#[test]
fn every_pre_render_runs_before_any_post_render() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops(), MonitorDomain::trees()]);
    let ids: Vec<_> = host.monitor_ids().collect();
    for id in &ids {
        host.set_enabled(*id, MAIN, true, &oracles).unwrap();
    }

    let mut probe = RecordingCanvas::default();
    let first = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut probe);
    let (_, tree_icon) = first.icons[1];

    let mut canvas = RecordingCanvas::default();
    host.render_frame(MAIN, &StaticScene::default(), &Pointer::over(tree_icon), &mut canvas);

    assert!(matches!(canvas.calls[0], Draw::Icon(_)));
    assert!(matches!(canvas.calls[1], Draw::Icon(_)));
    assert_eq!(canvas.calls[2], Draw::Tooltip("A\n  - Apple: 1".to_string()));
}

#[test]
fn icons_of_one_frame_never_overlap_and_are_stable_across_frames() {
    let oracles = oracles();
    let mut host = host_with(&[
        MonitorDomain::crops(),
        MonitorDomain::trees(),
        MonitorDomain::crops(),
    ]);
    let ids: Vec<_> = host.monitor_ids().collect();
    for id in &ids {
        host.set_enabled(*id, MAIN, true, &oracles).unwrap();
    }

    let mut canvas = RecordingCanvas::default();
    let first = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);
    let second = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);

    assert_eq!(first.icons.len(), 3);
    assert_eq!(first.icons, second.icons);
    for (i, (_, a)) in first.icons.iter().enumerate() {
        for (_, b) in &first.icons[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn reserved_slot_shifts_first_icon() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().unwrap();
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();

    let mut canvas = RecordingCanvas::default();
    let plain = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);
    host.set_reserved_slots(1);
    let shifted = host.render_frame(MAIN, &StaticScene::default(), &Pointer::away(), &mut canvas);

    assert_eq!(shifted.icons[0].1.x, plain.icons[0].1.x - WatchConfig::DEFAULT_SLOT_STRIDE);
}

#[test]
fn dismissal_is_per_viewer_and_undone_by_next_day() {
    let oracles = oracles();
    let second = ViewerId(1);
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().unwrap();
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();
    host.day_started(second, &oracles);

    let mut canvas = RecordingCanvas::default();
    let frame = host.render_frame(second, &StaticScene::default(), &Pointer::away(), &mut canvas);
    let (_, icon) = frame.icons[0];
    let frame = host.render_frame(second, &StaticScene::default(), &Pointer::clicking(icon), &mut canvas);
    assert_eq!(frame.hovers, vec![(crops, HoverOutcome::Dismissed)]);

    let monitor = host.monitor(crops).unwrap();
    assert!(monitor.active_regions(second).is_empty());
    assert_eq!(monitor.active_regions(MAIN).len(), 1);

    let frame = host.render_frame(second, &StaticScene::default(), &Pointer::away(), &mut canvas);
    assert!(frame.icons.is_empty());

    host.day_started(second, &oracles);
    let frame = host.render_frame(second, &StaticScene::default(), &Pointer::away(), &mut canvas);
    assert_eq!(frame.icons.len(), 1);
}

#[test]
fn event_scene_draws_nothing() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().unwrap();
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();

    let mut canvas = RecordingCanvas::default();
    let cutscene = StaticScene { event_up: true };
    let frame = host.render_frame(MAIN, &cutscene, &Pointer::over(Rect::new(1210, 12, 40, 40)), &mut canvas);

    assert!(frame.icons.is_empty());
    assert!(frame.hovers.is_empty());
    assert!(canvas.calls.is_empty());
}

#[test]
fn offline_world_keeps_previous_summary() {
    let mut oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops()]);
    let crops = host.monitor_ids().next().unwrap();
    host.set_enabled(crops, MAIN, true, &oracles).unwrap();

    oracles.world_mut().set_online(false);
    host.update_ticked(MAIN, 600, &oracles);
    host.day_started(MAIN, &oracles);

    assert_eq!(
        host.monitor(crops).unwrap().summary(MAIN),
        "A\n  - Berry: 3\n  - Root: 1"
    );
}

#[test]
fn pond_monitor_only_watches_buildable_regions_with_ponds() {
    let world = WorldOracleImpl::new()
        .with_region(
            RegionInfo::new(RegionId(1), "Farm", RegionTraits::FARM | RegionTraits::BUILDABLE),
            vec![FishPond::new(ItemId(10)).wanting(ItemId(11), 3).into()],
        )
        .with_region(
            RegionInfo::new(RegionId(2), "Beach", RegionTraits::empty()),
            vec![FishPond::new(ItemId(10)).wanting(ItemId(11), 1).into()],
        );
    let names = NameOracleImpl::new().with(ItemId(10), "Sturgeon").with(ItemId(11), "Coral");
    let oracles = OracleManager::new(world, names);
    let mut host = host_with(&[MonitorDomain::ponds()]);
    let ponds = host.monitor_ids().next().unwrap();

    host.set_enabled(ponds, MAIN, true, &oracles).unwrap();

    assert_eq!(host.monitor(ponds).unwrap().summary(MAIN), "Sturgeon: 3 Coral");
}

#[test]
fn rejected_subscription_leaves_monitor_detached() {
    let oracles = oracles();
    let mut hub = EventHub::new();
    hub.close(Signal::PeriodicTick);
    let mut host = MonitorHost::with_events(hub, WatchConfig::default());
    let crops = host.register(MonitorDomain::crops());

    let err = host.set_enabled(crops, MAIN, true, &oracles).unwrap_err();

    assert!(matches!(err, RuntimeError::Host(_)));
    assert!(host.events().is_empty());
    assert!(!host.is_enabled(crops));
    assert!(host.monitor(crops).unwrap().state(MAIN).is_none());
}

#[test]
fn unknown_monitor_is_reported() {
    let oracles = oracles();
    let mut host = host_with(&[]);
    let missing = watch_runtime::MonitorId(7);

    assert_eq!(
        host.set_enabled(missing, MAIN, true, &oracles),
        Err(RuntimeError::UnknownMonitor(missing))
    );
    assert_eq!(host.dispose(missing), Err(RuntimeError::UnknownMonitor(missing)));
}

#[test]
fn dispose_all_detaches_every_monitor() {
    let oracles = oracles();
    let mut host = host_with(&[MonitorDomain::crops(), MonitorDomain::trees()]);
    let ids: Vec<_> = host.monitor_ids().collect();
    for id in &ids {
        host.set_enabled(*id, MAIN, true, &oracles).unwrap();
    }

    host.dispose_all();

    assert!(host.events().is_empty());
    assert!(ids.iter().all(|id| host.monitor(*id).unwrap().state(MAIN).is_none()));
}
