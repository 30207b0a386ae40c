// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behaviour of the comparison tools over headless views.

use hindsight::footprints::{FootprintFeature, PlanarGeometry, Polygon};
use hindsight::layers::LayerInfo;
use hindsight::magnifier::MagnifierState;
use hindsight::tools::{Tool, ToolAction, ViewEvent};
use hindsight::view2d::{GoTo, MapId, MapView, MapViewport};
use hindsight::{HindsightConfig, HistoricalImagery, HostTime, SetupError, StaticMapSource};
use kurbo::{Point, Rect, Size};
use ui_events::pointer::PointerButton;

type App = HistoricalImagery<MapViewport, MapViewport, PlanarGeometry>;

fn source() -> StaticMapSource {
    StaticMapSource::new()
        .with_layer(LayerInfo::new("Preserve - 2016"))
        .with_layer(
            LayerInfo::new("Preserve - 1994")
                .with_description("Black and white survey flight"),
        )
        .with_layer(LayerInfo::new("Preserve - 2005"))
        .with_footprint_layer(
            "Imagery Footprints",
            [
                FootprintFeature::new(
                    2016,
                    Polygon::from_rect(Rect::new(5_000.0, 5_000.0, 6_000.0, 6_000.0)),
                )
                .with_color_type("Color")
                .with_percent_coverage(12.5),
                FootprintFeature::new(
                    1994,
                    Polygon::from_rect(Rect::new(-500.0, -500.0, 500.0, 500.0)),
                )
                .with_color_type("B&W"),
                FootprintFeature::new(
                    2005,
                    Polygon::from_rect(Rect::new(0.0, 0.0, 2_000.0, 2_000.0)),
                )
                .with_percent_coverage(100.0),
            ],
        )
        .with_boundary_layer(
            "Preserve Boundary",
            [Polygon::from_rect(Rect::new(
                -1_000.0, -1_000.0, 1_000.0, 1_000.0,
            ))],
        )
}

fn app() -> App {
    HistoricalImagery::new(
        &HindsightConfig::default(),
        &source(),
        MapViewport::new(MapId(1), Size::new(1_000.0, 800.0)),
        MapViewport::new(MapId(1), Size::new(150.0, 150.0)),
        PlanarGeometry::default(),
    )
    .expect("setup succeeds")
}

/// Advances host time deadline by deadline until no timer is left.
fn run_until_idle(app: &mut App, mut now: HostTime) -> (usize, HostTime) {
    let mut ticks = 0;
    while let Some(deadline) = app.next_deadline() {
        now = deadline;
        ticks += app.advance(now);
    }
    (ticks, now)
}

fn opacities(app: &App) -> Vec<f64> {
    app.layers().iter().map(|l| l.opacity()).collect()
}

#[test]
fn starts_on_the_first_year_with_no_tool() {
    let app = app();
    assert_eq!(app.visible_year(), Some(1994));
    assert_eq!(app.active_tool(), Tool::None);
    assert_eq!(app.overlay().current_year(), Some(1994));

    let years: Vec<_> = app.entries().iter().map(|e| e.year).collect();
    assert_eq!(years, vec![1994, 2005, 2016]);
    assert!(app.entries()[0].selected);
    assert_eq!(app.entries()[0].type_label(), "B&W");
    assert_eq!(app.entries()[0].coverage_label(), "n/a%");
    assert_eq!(app.entries()[1].type_label(), "n/a");
    assert_eq!(app.entries()[1].coverage_label(), "100%");

    let report = app.last_report().expect("initial report");
    assert_eq!(report.count_label(), "2 of 3");
    assert!(!app.entries()[2].enabled);
    assert!(app.next_deadline().is_none());
}

#[test]
fn magnifier_must_draw_the_primary_map() {
    let err = HistoricalImagery::new(
        &HindsightConfig::default(),
        &source(),
        MapViewport::new(MapId(1), Size::new(1_000.0, 800.0)),
        MapViewport::new(MapId(2), Size::new(150.0, 150.0)),
        PlanarGeometry::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SetupError::MagnifierMapMismatch {
            primary: MapId(1),
            magnifier: MapId(2)
        }
    ));
}

#[test]
fn tools_are_mutually_exclusive() {
    let mut app = app();
    app.activate_zoom_window(true);
    assert!(app.chrome().zoom_window_selected);
    app.activate_layer_fade(true);
    assert_eq!(app.active_tool(), Tool::LayerFade);
    assert!(!app.chrome().zoom_window_selected);
    assert!(app.chrome().layer_fade_selected);

    // Disabling the inactive tool does nothing.
    assert!(!app.activate_zoom_window(false).changed());
    assert_eq!(app.active_tool(), Tool::LayerFade);

    app.toggle_tool(Tool::LayerFade);
    assert_eq!(app.active_tool(), Tool::None);
}

#[test]
fn zoom_window_follows_the_pointer() {
    let mut app = app();
    app.activate_zoom_window(true);

    let secondary = app.dispatch(
        ViewEvent::Down {
            position: Point::new(100.0, 100.0),
            button: PointerButton::Secondary,
        },
        HostTime::ZERO,
    );
    assert!(secondary.consumed);
    assert_eq!(app.magnifier_state(), MagnifierState::Hidden);

    let position = Point::new(950.0, 750.0);
    let dispatch = app.dispatch(
        ViewEvent::Down {
            position,
            button: PointerButton::Primary,
        },
        HostTime::ZERO,
    );
    assert_eq!(dispatch.action, Some(ToolAction::Magnify(position)));
    assert_eq!(app.magnifier_state(), MagnifierState::Tracking);

    let panel = app.magnifier_panel().expect("panel shown");
    assert!(panel.offset.x < 0.0);
    assert!(panel.offset.y < 0.0);

    let go_to = app.magnifier().last_go_to().expect("magnifier moved");
    assert!(!go_to.animate);
    assert_eq!(app.magnifier().zoom(), app.primary().zoom() + 3.0);
    let expected = app.primary().to_map(position).expect("on map");
    assert!((app.magnifier().center() - expected).hypot() < 1e-9);

    // Dragging off the view hides the panel.
    app.dispatch(
        ViewEvent::DragUpdate {
            position: Point::new(1_200.0, 10.0),
        },
        HostTime::ZERO,
    );
    assert_eq!(app.magnifier_state(), MagnifierState::Hidden);

    app.dispatch(
        ViewEvent::DragUpdate {
            position: Point::new(10.0, 10.0),
        },
        HostTime::ZERO,
    );
    assert_eq!(app.magnifier_state(), MagnifierState::Tracking);
    app.dispatch(ViewEvent::Leave, HostTime::ZERO);
    assert!(app.magnifier_panel().is_none());
}

#[test]
fn switching_tools_hides_the_magnifier() {
    let mut app = app();
    app.activate_zoom_window(true);
    app.dispatch(
        ViewEvent::Down {
            position: Point::new(10.0, 10.0),
            button: PointerButton::Primary,
        },
        HostTime::ZERO,
    );
    assert_eq!(app.magnifier_state(), MagnifierState::Tracking);
    let transition = app.toggle_tool(Tool::LayerFade);
    assert_eq!(transition.deactivated(), Some(Tool::ZoomWindow));
    assert_eq!(app.magnifier_state(), MagnifierState::Hidden);
}

#[test]
fn hold_fades_out_and_release_fades_back_in() {
    let mut app = app();
    app.set_group_opacity(0.8);
    app.activate_layer_fade(true);

    let hold = app.dispatch(
        ViewEvent::HoldStart {
            position: Point::new(10.0, 10.0),
        },
        HostTime::ZERO,
    );
    assert!(hold.consumed);
    assert_eq!(app.next_deadline(), Some(HostTime::ZERO));

    let (ticks, now) = run_until_idle(&mut app, HostTime::ZERO);
    assert_eq!(ticks, 80);
    assert!(opacities(&app).iter().all(|&o| o == 0.0));
    assert_eq!(app.group_opacity(), 0.0);

    let release = app.dispatch(
        ViewEvent::Up {
            position: Point::new(10.0, 10.0),
        },
        now,
    );
    assert!(release.consumed);
    let (ticks, _) = run_until_idle(&mut app, now);
    assert_eq!(ticks, 80);
    assert!(opacities(&app).iter().all(|&o| o == 0.8));
    assert_eq!(app.visible_year(), Some(1994));
}

#[test]
fn early_release_keeps_a_single_pending_tick() {
    let mut app = app();
    app.activate_layer_fade(true);
    app.dispatch(
        ViewEvent::HoldStart {
            position: Point::new(10.0, 10.0),
        },
        HostTime::ZERO,
    );
    let mut now = HostTime::ZERO;
    for _ in 0..20 {
        now = app.next_deadline().expect("fading");
        assert_eq!(app.advance(now), 1);
    }
    let faded = app.layers().opacity(1994).expect("layer");
    assert!((faded - 0.8).abs() < 1e-9);

    app.dispatch(
        ViewEvent::Up {
            position: Point::new(10.0, 10.0),
        },
        now,
    );
    let session = app.fade_session().expect("fading in");
    assert_eq!(session.start_opacity(), faded);
    assert_eq!(app.next_deadline(), Some(now));

    let (ticks, _) = run_until_idle(&mut app, now);
    assert_eq!(ticks, 20);
    assert!(opacities(&app).iter().all(|&o| o == 1.0));
}

#[test]
fn deactivating_fade_restores_opacity_and_clears_timer() {
    let mut app = app();
    app.set_group_opacity(0.6);
    app.activate_layer_fade(true);
    app.dispatch(
        ViewEvent::HoldStart {
            position: Point::new(10.0, 10.0),
        },
        HostTime::ZERO,
    );
    for _ in 0..10 {
        let now = app.next_deadline().expect("fading");
        app.advance(now);
    }
    assert!(app.layers().opacity(1994).expect("layer") < 0.6);

    app.activate_zoom_window(true);
    assert!(app.next_deadline().is_none());
    assert!(app.fade_session().is_none());
    assert!(opacities(&app).iter().all(|&o| o == 0.6));
}

#[test]
fn fade_events_are_ignored_without_the_tool() {
    let mut app = app();
    let dispatch = app.dispatch(
        ViewEvent::HoldStart {
            position: Point::new(10.0, 10.0),
        },
        HostTime::ZERO,
    );
    assert_eq!(dispatch.action, None);
    assert!(!dispatch.consumed);
    assert!(app.next_deadline().is_none());
}

#[test]
fn extent_changes_refilter_entries_and_move_the_mask() {
    let mut app = app();
    app.primary_mut()
        .go_to(GoTo::new(Point::new(5_500.0, 5_500.0)).immediate());
    let report = app.on_extent_changed();
    assert_eq!(report.enabled, vec![2016]);
    assert_eq!(report.count_label(), "1 of 3");

    let enabled: Vec<_> = app.entries().iter().map(|e| e.enabled).collect();
    assert_eq!(enabled, vec![false, false, true]);
    // Filtering never changes the selection.
    assert_eq!(app.visible_year(), Some(1994));

    let overlay = app.overlay();
    assert_eq!(overlay.extent(), Some(app.primary().extent()));
    let mask = overlay.mask().expect("mask");
    assert!(mask.hole.is_none());
    assert!(mask.contains(Point::new(5_500.0, 5_500.0)));

    let overview = app.overview_extent();
    assert!((overview.width() - 1_200.0).abs() < 1e-6);
    assert!((overview.height() - 960.0).abs() < 1e-6);
}

#[test]
fn the_preserve_is_not_masked_at_the_start() {
    let app = app();
    let mask = app.overlay().mask().expect("mask");
    assert!(mask.hole.is_some());
    assert!(!mask.contains(Point::ZERO));
    // The whole padded view lies within the buffered boundary.
    assert!(!mask.contains(Point::new(540.0, 430.0)));
}

#[test]
fn selecting_and_hovering_entries() {
    let mut app = app();
    assert!(app.select_entry(2016));
    assert_eq!(app.visible_year(), Some(2016));
    assert_eq!(
        app.layers().iter().filter(|l| l.is_visible()).count(),
        1
    );
    assert_eq!(
        app.overlay()
            .current_footprint(app.footprints())
            .and_then(Polygon::bounding_box),
        Some(Rect::new(5_000.0, 5_000.0, 6_000.0, 6_000.0))
    );
    assert!(!app.select_entry(1850));
    assert_eq!(app.visible_year(), Some(2016));

    app.hover_entry(Some(2005));
    assert_eq!(app.overlay().hover_year(), Some(2005));
    app.hover_entry(None);
    assert!(app.overlay().hover_footprint(app.footprints()).is_none());
    assert_eq!(app.overlay().current_year(), Some(2016));
}

#[test]
fn layer_details_and_opacity_slider() {
    let mut app = app();
    let details = app.layer_details(1994).expect("details");
    assert_eq!(details.title, "Preserve - 1994");
    assert_eq!(
        details.description.as_deref(),
        Some("Black and white survey flight")
    );
    assert!(app.layer_details(1850).is_none());

    assert_eq!(app.group_opacity(), 1.0);
    app.set_group_opacity(0.35);
    assert_eq!(app.group_opacity(), 0.35);
    assert!(opacities(&app).iter().all(|&o| o == 0.35));

    assert!(app.set_visible_year(2005));
    assert!(!app.set_visible_year(2005));
    assert_eq!(app.group_opacity(), 0.35);
}
