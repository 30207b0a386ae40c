// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Identity of the map (layers plus basemap) a view draws.
///
/// Two views with the same id render the same live layer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapId(pub u64);

/// A camera request: center, optional zoom level and whether to animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoTo {
    /// Map point to center on.
    pub center: Point,
    /// Target zoom level; `None` keeps the current level.
    pub zoom: Option<f64>,
    /// Whether the view may animate the transition.
    pub animate: bool,
}

impl GoTo {
    /// Centers on `center`, keeping the zoom and animating.
    #[must_use]
    pub fn new(center: Point) -> Self {
        Self {
            center,
            zoom: None,
            animate: true,
        }
    }

    /// Sets the target zoom level.
    #[must_use]
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Requests an instantaneous jump.
    #[must_use]
    pub fn immediate(mut self) -> Self {
        self.animate = false;
        self
    }
}

/// The capabilities this workspace needs from an interactive map view.
pub trait MapView {
    /// Which map this view draws.
    fn map_id(&self) -> MapId;

    /// Viewport size in pixels.
    fn size(&self) -> Size;

    /// Visible region in map units.
    fn extent(&self) -> Rect;

    /// Current zoom level.
    fn zoom(&self) -> f64;

    /// Resolves a viewport pixel position to a map coordinate.
    ///
    /// Returns `None` when the position does not land on the map.
    fn to_map(&self, screen: Point) -> Option<Point>;

    /// Moves the camera.
    fn go_to(&mut self, target: GoTo);

    /// Returns `true` if `screen` lies strictly inside the viewport.
    fn is_within_view(&self, screen: Point) -> bool {
        let size = self.size();
        screen.x > 0.0 && screen.x < size.width && screen.y > 0.0 && screen.y < size.height
    }
}
