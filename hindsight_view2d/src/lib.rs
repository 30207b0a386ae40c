// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight View 2D: the map view contract and a headless camera.
//!
//! The rest of the workspace never talks to a concrete mapping library. It
//! talks to [`MapView`]: something with a pixel size, a visible extent in map
//! units, a zoom level, a failable pixel→map conversion and a `go_to` camera
//! operation. Hosts implement it over their real views.
//!
//! [`MapViewport`] is a small headless implementation: an axis-aligned camera
//! with web-map style zoom levels (each level doubles the scale), map `y`
//! pointing up and optional world bounds outside which coordinates do not
//! resolve. It backs tests and non-graphical tools.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hindsight_view2d::{GoTo, MapId, MapView, MapViewport};
//!
//! let mut view = MapViewport::new(MapId(1), Size::new(800.0, 600.0));
//! view.go_to(GoTo::new(Point::new(1_000.0, 2_000.0)).zoom(2.0));
//!
//! // The view center resolves to the camera center.
//! let center = view.to_map(Point::new(400.0, 300.0)).unwrap();
//! assert!((center.x - 1_000.0).abs() < 1e-9);
//! assert!((center.y - 2_000.0).abs() < 1e-9);
//!
//! // Zoom level 2 means four pixels per map unit.
//! assert!((view.extent().width() - 200.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Cameras are axis-aligned with a uniform scale; there is no rotation.
//! - `go_to` with `animate: false` is an instantaneous jump; the headless
//!   camera never animates but records the request so callers can be checked.

mod view;
mod viewport;

pub use view::{GoTo, MapId, MapView};
pub use viewport::MapViewport;
