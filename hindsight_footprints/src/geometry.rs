// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon primitives and the geometry engine seam.
//!
//! Real deployments delegate buffering and overlay operations to the host's
//! geometry service (geodesic, projection-aware). [`PlanarGeometry`] is a small
//! planar implementation good enough for tests and for projected coordinates
//! over a preserve-sized area.

use kurbo::{BezPath, Point, Rect, Shape, Vec2};

/// A simple polygon given by its exterior ring.
///
/// The ring is stored open: the closing edge from the last vertex back to the
/// first is implied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its exterior ring.
    ///
    /// A repeated closing vertex is dropped.
    #[must_use]
    pub fn new(ring: impl IntoIterator<Item = Point>) -> Self {
        let mut ring: Vec<Point> = ring.into_iter().collect();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        Self { ring }
    }

    /// The polygon covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            ring: vec![
                Point::new(rect.x0, rect.y0),
                Point::new(rect.x1, rect.y0),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x0, rect.y1),
            ],
        }
    }

    /// Exterior ring vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.ring
    }

    /// Returns `true` if the ring cannot enclose any area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.len() < 3
    }

    /// Iterates the ring's edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.ring.len();
        (0..n).map(move |i| (self.ring[i], self.ring[(i + 1) % n]))
    }

    /// Axis-aligned bounds, or `None` for an empty ring.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = *self.ring.first()?;
        Some(
            self.ring
                .iter()
                .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p)),
        )
    }

    /// Closed path of the ring.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        append_ring(&mut path, &self.ring);
        path
    }

    /// Returns `true` if `pt` lies inside the polygon (non-zero winding).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        !self.is_empty() && self.to_bez_path().winding(pt) != 0
    }

    /// Signed area; positive for counter-clockwise rings in a y-up frame.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            * 0.5
    }
}

/// The difference between an outer rectangle and a hole polygon.
///
/// The hole is already clipped to the rectangle, so filling
/// [`Mask::to_bez_path`] with the even-odd rule draws exactly the masked
/// region.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    /// Outer rectangle.
    pub outer: Rect,
    /// Region cut out of the rectangle, if it overlaps it.
    pub hole: Option<Polygon>,
}

impl Mask {
    /// Returns `true` if `pt` is covered by the mask.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let in_outer = pt.x >= self.outer.x0
            && pt.x <= self.outer.x1
            && pt.y >= self.outer.y0
            && pt.y <= self.outer.y1;
        in_outer && !self.hole.as_ref().is_some_and(|h| h.contains(pt))
    }

    /// Path with the rectangle and the hole as separate subpaths, meant to be
    /// filled with the even-odd rule.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = Polygon::from_rect(self.outer).to_bez_path();
        if let Some(hole) = &self.hole {
            append_ring(&mut path, hole.vertices());
        }
        path
    }
}

/// Polygon operations needed by the extent filter.
pub trait GeometryEngine {
    /// Expands `polygon` outwards by `distance` map units.
    fn buffer(&self, polygon: &Polygon, distance: f64) -> Polygon;

    /// Subtracts `hole` from `outer`.
    fn difference(&self, outer: Rect, hole: &Polygon) -> Mask;

    /// Returns `true` if `extent` and `polygon` share any point, boundaries
    /// included.
    fn intersects(&self, extent: Rect, polygon: &Polygon) -> bool;
}

/// Planar reference implementation of [`GeometryEngine`].
///
/// Buffers are the convex hull of circles sampled around every vertex, which is
/// exact for convex input and covers concavities otherwise.
#[derive(Clone, Copy, Debug)]
pub struct PlanarGeometry {
    /// Samples per full circle used when buffering.
    pub circle_segments: u32,
}

impl Default for PlanarGeometry {
    fn default() -> Self {
        Self {
            circle_segments: 32,
        }
    }
}

impl GeometryEngine for PlanarGeometry {
    fn buffer(&self, polygon: &Polygon, distance: f64) -> Polygon {
        if polygon.vertices().is_empty() || distance <= 0.0 {
            return polygon.clone();
        }
        let segments = self.circle_segments.max(4);
        let step = core::f64::consts::TAU / f64::from(segments);
        let mut samples = Vec::with_capacity(polygon.vertices().len() * segments as usize);
        for &v in polygon.vertices() {
            for i in 0..segments {
                samples.push(v + Vec2::from_angle(step * f64::from(i)) * distance);
            }
        }
        convex_hull(samples)
    }

    fn difference(&self, outer: Rect, hole: &Polygon) -> Mask {
        let clipped = clip_to_rect(hole, outer);
        Mask {
            outer,
            hole: (!clipped.is_empty()).then_some(clipped),
        }
    }

    fn intersects(&self, extent: Rect, polygon: &Polygon) -> bool {
        rect_intersects_polygon(extent, polygon)
    }
}

/// Scales `rect` about its center by `factor`.
#[must_use]
pub fn expand_rect(rect: Rect, factor: f64) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * factor)
}

fn append_ring(path: &mut BezPath, ring: &[Point]) {
    let Some((&first, rest)) = ring.split_first() else {
        return;
    };
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    path.close_path();
}

fn rect_contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

fn rect_intersects_polygon(rect: Rect, polygon: &Polygon) -> bool {
    let rect = rect.abs();
    let Some(bbox) = polygon.bounding_box() else {
        return false;
    };
    if bbox.x1 < rect.x0 || bbox.x0 > rect.x1 || bbox.y1 < rect.y0 || bbox.y0 > rect.y1 {
        return false;
    }
    if polygon
        .vertices()
        .iter()
        .any(|&p| rect_contains_inclusive(rect, p))
    {
        return true;
    }
    let corners = Polygon::from_rect(rect);
    if corners.vertices().iter().any(|&c| polygon.contains(c)) {
        return true;
    }
    polygon
        .edges()
        .any(|(a, b)| corners.edges().any(|(c, d)| segments_intersect(a, b, c, d)))
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}

/// Andrew's monotone chain; returns a counter-clockwise ring.
fn convex_hull(mut points: Vec<Point>) -> Polygon {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();
    if points.len() < 3 {
        return Polygon::new(points);
    }
    let mut hull: Vec<Point> = Vec::with_capacity(points.len() * 2);
    for &p in &points {
        while hull.len() >= 2 && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in points.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    Polygon { ring: hull }
}

/// Sutherland–Hodgman clip of `polygon` against `rect`.
fn clip_to_rect(polygon: &Polygon, rect: Rect) -> Polygon {
    let rect = rect.abs();
    let mut ring = polygon.vertices().to_vec();
    // Each clip edge: inside test plus intersection with the boundary line.
    let edges: [(fn(Point, Rect) -> bool, fn(Point, Point, Rect) -> Point); 4] = [
        (|p, r| p.x >= r.x0, |a, b, r| at_x(a, b, r.x0)),
        (|p, r| p.x <= r.x1, |a, b, r| at_x(a, b, r.x1)),
        (|p, r| p.y >= r.y0, |a, b, r| at_y(a, b, r.y0)),
        (|p, r| p.y <= r.y1, |a, b, r| at_y(a, b, r.y1)),
    ];
    for (inside, cross) in edges {
        if ring.is_empty() {
            break;
        }
        let input = core::mem::take(&mut ring);
        let n = input.len();
        for i in 0..n {
            let cur = input[i];
            let prev = input[(i + n - 1) % n];
            match (inside(prev, rect), inside(cur, rect)) {
                (true, true) => ring.push(cur),
                (true, false) => ring.push(cross(prev, cur, rect)),
                (false, true) => {
                    ring.push(cross(prev, cur, rect));
                    ring.push(cur);
                }
                (false, false) => {}
            }
        }
    }
    Polygon::new(ring)
}

fn at_x(a: Point, b: Point, x: f64) -> Point {
    let t = (x - a.x) / (b.x - a.x);
    Point::new(x, a.y + t * (b.y - a.y))
}

fn at_y(a: Point, b: Point, y: f64) -> Point {
    let t = (y - a.y) / (b.y - a.y);
    Point::new(a.x + t * (b.x - a.x), y)
}
