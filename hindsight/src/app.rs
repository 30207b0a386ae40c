// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_fade::{AnimationSession, FadeAnimator, FadeTick};
use hindsight_footprints::{
    DatasetEntry, DatasetList, ExtentFilter, ExtentReport, FootprintIndex, FootprintOverlay,
    GeometryEngine, expand_rect,
};
use hindsight_layers::{LayerMetadata, NO_YEAR, TemporalLayerSet};
use hindsight_magnifier::{MagnifierState, MagnifierSync, PanelPlacement, shares_map};
use hindsight_timing::{HostTime, TimerQueue};
use hindsight_tools::{
    Dispatch, Tool, ToolAction, ToolChrome, ToolCoordinator, ToolTransition, ViewEvent,
};
use hindsight_view2d::MapView;
use kurbo::Rect;

use crate::config::HindsightConfig;
use crate::error::SetupError;
use crate::setup::{Catalog, Setup};
use crate::source::MapSource;

/// The imagery comparison tools bound to a primary view, a magnifier view and
/// a geometry engine.
///
/// The host forwards view events to [`dispatch`](Self::dispatch), calls
/// [`on_extent_changed`](Self::on_extent_changed) after the primary camera
/// moves, and calls [`advance`](Self::advance) when
/// [`next_deadline`](Self::next_deadline) passes. Layer visibility and opacity
/// live in [`layers`](Self::layers); the host mirrors them onto its real
/// layers, using the revision counter to skip unchanged frames.
#[derive(Debug)]
pub struct HistoricalImagery<P, M, G> {
    primary: P,
    magnifier: M,
    engine: G,
    layers: TemporalLayerSet,
    filter: ExtentFilter,
    overlay: FootprintOverlay,
    dataset: DatasetList,
    tools: ToolCoordinator,
    magnifier_sync: MagnifierSync,
    fade: FadeAnimator,
    timers: TimerQueue<FadeTick>,
    overview_expand: f64,
    last_report: Option<ExtentReport>,
}

impl<P, M, G> HistoricalImagery<P, M, G>
where
    P: MapView,
    M: MapView,
    G: GeometryEngine,
{
    /// Runs setup against `source` and brings the tools up.
    ///
    /// The first dataset entry is selected and the extent filter runs once
    /// for the primary view's current extent. No tool is active.
    pub fn new<S>(
        config: &HindsightConfig,
        source: &S,
        primary: P,
        magnifier: M,
        engine: G,
    ) -> Result<Self, SetupError>
    where
        S: MapSource + ?Sized,
    {
        if !shares_map(&primary, &magnifier) {
            return Err(SetupError::MagnifierMapMismatch {
                primary: primary.map_id(),
                magnifier: magnifier.map_id(),
            });
        }
        let catalog = Setup::new(config).run(source, &engine)?;
        Ok(Self::from_catalog(config, catalog, primary, magnifier, engine))
    }

    /// Brings the tools up from an already loaded catalog.
    ///
    /// The caller is responsible for `magnifier` drawing the same map as
    /// `primary`.
    pub fn from_catalog(
        config: &HindsightConfig,
        catalog: Catalog,
        primary: P,
        magnifier: M,
        engine: G,
    ) -> Self {
        let (mut layers, footprints, boundary_buffer) = catalog.into_parts();
        layers.set_visible_year(NO_YEAR);
        let dataset = DatasetList::from_index(&footprints);
        let filter = ExtentFilter::new(footprints, boundary_buffer)
            .with_mask_expand(config.extent.mask_expand);

        let mut this = Self {
            primary,
            magnifier,
            engine,
            layers,
            filter,
            overlay: FootprintOverlay::new(),
            dataset,
            tools: ToolCoordinator::new(),
            magnifier_sync: MagnifierSync::new(config.magnifier_config()),
            fade: FadeAnimator::new(config.fade_config()),
            timers: TimerQueue::new(),
            overview_expand: config.extent.overview_expand,
            last_report: None,
        };
        if let Some(first) = this.dataset.first().map(|entry| entry.year) {
            this.select_entry(first);
        }
        this.on_extent_changed();
        log::info!("historical imagery ready with {} entries", this.dataset.len());
        this
    }

    /// Enables or disables the zoom window tool.
    pub fn activate_zoom_window(&mut self, enabled: bool) -> ToolTransition {
        let transition = self.tools.set_enabled(Tool::ZoomWindow, enabled);
        self.apply_transition(transition)
    }

    /// Enables or disables the layer fade tool.
    pub fn activate_layer_fade(&mut self, enabled: bool) -> ToolTransition {
        let transition = self.tools.set_enabled(Tool::LayerFade, enabled);
        self.apply_transition(transition)
    }

    /// Tool button click: selects `tool`, or deselects it when already active.
    pub fn toggle_tool(&mut self, tool: Tool) -> ToolTransition {
        let transition = self.tools.toggle(tool);
        self.apply_transition(transition)
    }

    /// The active tool.
    #[must_use]
    pub fn active_tool(&self) -> Tool {
        self.tools.active()
    }

    /// Handles one primary view event at host time `now`.
    ///
    /// The returned [`Dispatch`] tells the host whether to withhold the event
    /// from the view's default navigation.
    pub fn dispatch(&mut self, event: ViewEvent, now: HostTime) -> Dispatch {
        let dispatch = self.tools.dispatch(&event);
        match dispatch.action {
            Some(ToolAction::Magnify(position)) => {
                self.magnifier_sync
                    .track(position, &self.primary, &mut self.magnifier);
            }
            Some(ToolAction::HideMagnifier) => self.magnifier_sync.hide(),
            Some(ToolAction::BeginFade) => {
                self.fade.hold_start(now, &self.layers, &mut self.timers);
            }
            Some(ToolAction::EndFade) => {
                self.fade.release(now, &self.layers, &mut self.timers);
            }
            None => {}
        }
        dispatch
    }

    /// Runs every timer due at `now`; returns how many ran.
    pub fn advance(&mut self, now: HostTime) -> usize {
        let mut ran = 0;
        while let Some((id, FadeTick)) = self.timers.pop_due(now) {
            if self.fade.on_tick(id, now, &mut self.layers, &mut self.timers) {
                ran += 1;
            }
        }
        ran
    }

    /// When [`advance`](Self::advance) should next be called.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.timers.next_deadline()
    }

    /// Makes `year` the only visible layer; [`NO_YEAR`] hides all.
    pub fn set_visible_year(&mut self, year: i32) -> bool {
        self.layers.set_visible_year(year)
    }

    /// Year of the visible layer.
    #[must_use]
    pub fn visible_year(&self) -> Option<i32> {
        self.layers.visible_year()
    }

    /// Opacity slider input: applies `opacity` to every imagery layer.
    pub fn set_group_opacity(&mut self, opacity: f64) -> bool {
        self.layers.set_group_opacity(opacity)
    }

    /// Opacity the slider should display.
    #[must_use]
    pub fn group_opacity(&self) -> f64 {
        self.layers.group_opacity()
    }

    /// Re-runs the extent filter for the primary view's current extent.
    pub fn on_extent_changed(&mut self) -> ExtentReport {
        let report = self
            .filter
            .apply(self.primary.extent(), &self.engine, &mut self.overlay);
        self.dataset.apply(&report);
        self.last_report = Some(report.clone());
        report
    }

    /// The most recent extent report.
    #[must_use]
    pub fn last_report(&self) -> Option<&ExtentReport> {
        self.last_report.as_ref()
    }

    /// Dataset entry click: shows `year` and makes its footprint current.
    ///
    /// Returns `false` for a year without an entry.
    pub fn select_entry(&mut self, year: i32) -> bool {
        if !self.dataset.select(year) {
            return false;
        }
        self.layers.set_visible_year(year);
        self.overlay.set_current(Some(year));
        true
    }

    /// Dataset entry hover; `None` on hover-leave.
    pub fn hover_entry(&mut self, year: Option<i32>) {
        let hovered = self.dataset.hover(year);
        self.overlay.set_hover(hovered);
    }

    /// Title and description of `year`'s layer.
    #[must_use]
    pub fn layer_details(&self, year: i32) -> Option<&LayerMetadata> {
        let details = self.layers.details(year);
        if details.is_none() {
            log::warn!("no layer metadata for year {year}");
        }
        details
    }

    /// Dataset entries in year order.
    #[must_use]
    pub fn entries(&self) -> &[DatasetEntry] {
        self.dataset.entries()
    }

    /// Overview overlay shapes and the primary view's mask.
    #[must_use]
    pub fn overlay(&self) -> &FootprintOverlay {
        &self.overlay
    }

    /// Footprints, for resolving the overlay's hover and current shapes.
    #[must_use]
    pub fn footprints(&self) -> &FootprintIndex {
        self.filter.index()
    }

    /// Placement of the magnifier panel while it is shown.
    #[must_use]
    pub fn magnifier_panel(&self) -> Option<PanelPlacement> {
        self.magnifier_sync.panel()
    }

    /// Whether the magnifier is shown.
    #[must_use]
    pub fn magnifier_state(&self) -> MagnifierState {
        self.magnifier_sync.state()
    }

    /// Running fade, if any.
    #[must_use]
    pub fn fade_session(&self) -> Option<&AnimationSession> {
        self.fade.session()
    }

    /// Button indicators and cursor for the active tool.
    #[must_use]
    pub fn chrome(&self) -> ToolChrome {
        ToolChrome::for_tool(self.tools.active())
    }

    /// Extent the overview map should show.
    #[must_use]
    pub fn overview_extent(&self) -> Rect {
        expand_rect(self.primary.extent(), self.overview_expand)
    }

    /// The imagery layers.
    #[must_use]
    pub fn layers(&self) -> &TemporalLayerSet {
        &self.layers
    }

    /// The primary view.
    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Mutable access to the primary view, for camera changes. Call
    /// [`on_extent_changed`](Self::on_extent_changed) afterwards.
    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    /// The magnifier view.
    #[must_use]
    pub fn magnifier(&self) -> &M {
        &self.magnifier
    }

    fn apply_transition(&mut self, transition: ToolTransition) -> ToolTransition {
        match transition.deactivated() {
            Some(Tool::ZoomWindow) => self.magnifier_sync.hide(),
            Some(Tool::LayerFade) => {
                self.fade.cancel(&mut self.timers, &mut self.layers);
            }
            Some(Tool::None) | None => {}
        }
        transition
    }
}
