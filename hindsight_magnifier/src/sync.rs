// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_view2d::{GoTo, MapView};
use kurbo::{Point, Size, Vec2};

use crate::pointer::PointerState;

/// Magnifier geometry and zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifierConfig {
    /// Zoom levels added to the primary view's zoom.
    pub zoom_offset: f64,
    /// Side length of the square panel, in pixels.
    pub panel_size: f64,
    /// Gap between the pointer and the panel, in pixels.
    pub margin: f64,
    /// Distance from the far viewport edge at which the panel flips to the
    /// other side of the pointer.
    pub edge_threshold: f64,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            zoom_offset: 3.0,
            panel_size: 150.0,
            margin: 12.0,
            edge_threshold: 200.0,
        }
    }
}

impl MagnifierConfig {
    /// Offset of the panel's top-left corner from the pointer.
    ///
    /// On each axis the panel sits `margin` past the pointer, unless the
    /// pointer is within `edge_threshold` of the far edge, in which case it
    /// sits `panel_size + margin` before it.
    #[must_use]
    pub fn panel_offset(&self, pos: Point, viewport: Size) -> Vec2 {
        let axis = |p: f64, dimension: f64| {
            if p < dimension - self.edge_threshold {
                self.margin
            } else {
                -(self.panel_size + self.margin)
            }
        };
        Vec2::new(axis(pos.x, viewport.width), axis(pos.y, viewport.height))
    }
}

/// Where the magnifier panel is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPlacement {
    /// Top-left corner in primary viewport pixels.
    pub top_left: Point,
    /// Offset from the pointer to `top_left`.
    pub offset: Vec2,
}

/// Whether the magnifier is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MagnifierState {
    /// Not shown.
    #[default]
    Hidden,
    /// Shown and following the pointer.
    Tracking,
}

/// Keeps a magnifier view centered under the pointer of a primary view.
#[derive(Clone, Debug, Default)]
pub struct MagnifierSync {
    config: MagnifierConfig,
    state: MagnifierState,
    pointer: PointerState,
    panel: Option<PanelPlacement>,
}

impl MagnifierSync {
    /// Creates a hidden magnifier.
    #[must_use]
    pub fn new(config: MagnifierConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The geometry and zoom settings.
    #[must_use]
    pub fn config(&self) -> &MagnifierConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> MagnifierState {
        self.state
    }

    /// Panel placement while tracking.
    #[must_use]
    pub fn panel(&self) -> Option<PanelPlacement> {
        self.panel
    }

    /// Last accepted pointer position.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Follows the pointer at `pos` (primary viewport pixels).
    ///
    /// The magnifier is shown only when `pos` lies strictly inside the primary
    /// viewport and resolves to a map point; otherwise it is hidden. While
    /// shown, `magnifier` jumps to the resolved point at the primary zoom plus
    /// the configured offset.
    pub fn track<P, M>(&mut self, pos: Point, primary: &P, magnifier: &mut M) -> MagnifierState
    where
        P: MapView + ?Sized,
        M: MapView + ?Sized,
    {
        if !primary.is_within_view(pos) {
            self.hide();
            return self.state;
        }
        let Some(center) = primary.to_map(pos) else {
            log::trace!("magnifier: {pos:?} does not resolve to a map point");
            self.hide();
            return self.state;
        };

        self.pointer.update(pos);
        let offset = self.config.panel_offset(pos, primary.size());
        self.panel = Some(PanelPlacement {
            top_left: pos + offset,
            offset,
        });
        magnifier.go_to(
            GoTo::new(center)
                .zoom(primary.zoom() + self.config.zoom_offset)
                .immediate(),
        );
        self.state = MagnifierState::Tracking;
        log::trace!("magnifier tracking {pos:?} -> {center:?}");
        self.state
    }

    /// Hides the magnifier and forgets the pointer.
    pub fn hide(&mut self) {
        if self.state == MagnifierState::Tracking {
            log::trace!("magnifier hidden");
        }
        self.state = MagnifierState::Hidden;
        self.pointer.clear();
        self.panel = None;
    }
}

/// Returns `true` if `magnifier` draws the same map as `primary`, so its
/// content is always live.
pub fn shares_map<P, M>(primary: &P, magnifier: &M) -> bool
where
    P: MapView + ?Sized,
    M: MapView + ?Sized,
{
    primary.map_id() == magnifier.map_id()
}
