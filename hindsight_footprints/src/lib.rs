// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Footprints: imagery footprints, extent filtering and overlay
//! shapes.
//!
//! Each imagery year has a footprint polygon describing the ground it covers.
//! This crate keeps those footprints and answers the questions the comparison
//! UI asks as the primary map moves:
//!
//! - [`ExtentFilter`] tests every footprint against the visible extent and
//!   reports which dataset entries are in view (`"3 of 7"`).
//! - [`FootprintOverlay`] holds the shapes drawn on the overview map (the
//!   extent rectangle, the hovered and the selected footprint) and the mask
//!   that shades the primary map outside the buffered preserve boundary.
//! - [`DatasetList`] is the list model: one entry per year with its labels,
//!   enabled state and the exclusive selection.
//!
//! Polygon operations go through [`GeometryEngine`]; [`PlanarGeometry`] is the
//! built-in planar implementation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use hindsight_footprints::{
//!     ExtentFilter, FootprintFeature, FootprintIndex, FootprintOverlay, GeometryEngine,
//!     PlanarGeometry, Polygon,
//! };
//!
//! let engine = PlanarGeometry::default();
//! let index = FootprintIndex::new([
//!     FootprintFeature::new(2012, Polygon::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))),
//!     FootprintFeature::new(1994, Polygon::from_rect(Rect::new(50.0, 50.0, 60.0, 60.0))),
//! ]);
//! let boundary = Polygon::from_rect(Rect::new(0.0, 0.0, 60.0, 60.0));
//! let filter = ExtentFilter::new(index, engine.buffer(&boundary, 5.0));
//!
//! let mut overlay = FootprintOverlay::new();
//! let report = filter.apply(Rect::new(0.0, 0.0, 20.0, 20.0), &engine, &mut overlay);
//! assert_eq!(report.enabled, vec![2012]);
//! assert_eq!(report.count_label(), "1 of 2");
//! assert!(overlay.mask().is_some());
//! ```

mod dataset;
mod feature;
mod filter;
mod geometry;
mod overlay;

pub use dataset::{DatasetEntry, DatasetList};
pub use feature::{FootprintAttributes, FootprintFeature, FootprintIndex};
pub use filter::{DEFAULT_MASK_EXPAND, ExtentFilter, ExtentReport};
pub use geometry::{GeometryEngine, Mask, PlanarGeometry, Polygon, expand_rect};
pub use overlay::FootprintOverlay;
