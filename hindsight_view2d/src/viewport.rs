// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::view::{GoTo, MapId, MapView};

/// Headless map camera with web-map style zoom levels.
///
/// The camera maps a map-space center into the middle of a pixel viewport.
/// Scale (pixels per map unit) is `2^zoom`. Map `y` grows upwards while
/// screen `y` grows downwards.
///
/// When world bounds are set, pixel positions whose map coordinate falls
/// outside them do not resolve; this models a view whose pointer is off the
/// map surface.
#[derive(Clone, Debug)]
pub struct MapViewport {
    map_id: MapId,
    size: Size,
    center: Point,
    zoom: f64,
    world_bounds: Option<Rect>,
    last_go_to: Option<GoTo>,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl MapViewport {
    const MIN_ZOOM: f64 = -24.0;
    const MAX_ZOOM: f64 = 24.0;

    /// Creates a viewport of `size` pixels centered on the map origin at zoom
    /// level `0` with one pixel per map unit.
    #[must_use]
    pub fn new(map_id: MapId, size: Size) -> Self {
        let mut vp = Self {
            map_id,
            size,
            center: Point::ZERO,
            zoom: 0.0,
            world_bounds: None,
            last_go_to: None,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Sets the region outside which pixel positions do not resolve.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        self.world_bounds = bounds;
    }

    /// Current map-space center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The last camera request received through [`MapView::go_to`].
    #[must_use]
    pub fn last_go_to(&self) -> Option<GoTo> {
        self.last_go_to
    }

    fn rebuild_transforms(&mut self) {
        let scale = self.zoom.exp2();
        let view_center = Vec2::new(self.size.width * 0.5, self.size.height * 0.5);
        // Map → view: move the center to the origin, flip y, scale, then move
        // into the middle of the viewport.
        self.world_to_view = Affine::translate(view_center)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate(-self.center.to_vec2());
        self.view_to_world = self.world_to_view.inverse();
    }
}

impl MapView for MapViewport {
    fn map_id(&self) -> MapId {
        self.map_id
    }

    fn size(&self) -> Size {
        self.size
    }

    fn extent(&self) -> Rect {
        // The y flip swaps the corners, so rebuild from both.
        let a = self.view_to_world * Point::ZERO;
        let b = self.view_to_world * Point::new(self.size.width, self.size.height);
        Rect::from_points(a, b)
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn to_map(&self, screen: Point) -> Option<Point> {
        let pt = self.view_to_world * screen;
        if !pt.x.is_finite() || !pt.y.is_finite() {
            return None;
        }
        match self.world_bounds {
            Some(bounds)
                if pt.x < bounds.x0 || pt.x > bounds.x1 || pt.y < bounds.y0 || pt.y > bounds.y1 =>
            {
                None
            }
            _ => Some(pt),
        }
    }

    fn go_to(&mut self, target: GoTo) {
        self.last_go_to = Some(target);
        if let Some(zoom) = target.zoom {
            self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        }
        self.center = target.center;
        self.rebuild_transforms();
    }
}
