// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight: compare historical aerial imagery of a preserve, year by year.
//!
//! The host application owns the map: a primary view, a small magnifier view
//! drawing the same map, and one imagery layer per capture year. Hindsight
//! owns the interaction state on top of it:
//!
//! - **Year selection**: a dataset list built from the imagery footprints, one
//!   entry per year, with exactly one visible imagery layer.
//! - **Zoom window**: a magnifier panel that follows the pointer, a few zoom
//!   levels closer than the primary view.
//! - **Layer fade**: press and hold to fade the current year out, release to
//!   fade it back in.
//! - **Extent filtering**: entries whose footprint is out of view are disabled
//!   (`"3 of 7"`), the overview map outlines the view and the hovered and
//!   selected footprints, and a mask shades everything outside the buffered
//!   preserve boundary.
//!
//! [`HistoricalImagery`] is the entry point. It is built by a [`Setup`] phase
//! that loads layers, footprints and the boundary from a [`MapSource`], and it
//! never reads a clock: the host passes [`HostTime`] values in and drives
//! fades through [`HistoricalImagery::advance`].
//!
//! ## Minimal example
//!
//! ```rust
//! use hindsight::footprints::{FootprintFeature, PlanarGeometry, Polygon};
//! use hindsight::layers::LayerInfo;
//! use hindsight::view2d::{MapId, MapViewport};
//! use hindsight::{HindsightConfig, HistoricalImagery, StaticMapSource};
//! use kurbo::{Rect, Size};
//!
//! let source = StaticMapSource::new()
//!     .with_layer(LayerInfo::new("Preserve - 2016"))
//!     .with_layer(LayerInfo::new("Preserve - 1994"))
//!     .with_footprint_layer(
//!         "Imagery Footprints",
//!         [
//!             FootprintFeature::new(1994, Polygon::from_rect(Rect::new(-50.0, -50.0, 50.0, 50.0))),
//!             FootprintFeature::new(2016, Polygon::from_rect(Rect::new(5e3, 5e3, 6e3, 6e3))),
//!         ],
//!     )
//!     .with_boundary_layer(
//!         "Preserve Boundary",
//!         [Polygon::from_rect(Rect::new(-100.0, -100.0, 100.0, 100.0))],
//!     );
//!
//! let primary = MapViewport::new(MapId(1), Size::new(800.0, 600.0));
//! let magnifier = MapViewport::new(MapId(1), Size::new(150.0, 150.0));
//! let app = HistoricalImagery::new(
//!     &HindsightConfig::default(),
//!     &source,
//!     primary,
//!     magnifier,
//!     PlanarGeometry::default(),
//! )
//! .unwrap();
//!
//! // The first year is shown; only its footprint is in view.
//! assert_eq!(app.visible_year(), Some(1994));
//! assert_eq!(app.last_report().unwrap().count_label(), "1 of 2");
//! ```

mod app;
pub mod config;
mod error;
mod setup;
mod source;

pub use app::HistoricalImagery;
pub use config::HindsightConfig;
pub use error::{ConfigError, SetupError, SourceError};
pub use setup::{Catalog, Setup};
pub use source::{MapSource, StaticMapSource};

pub use hindsight_fade as fade;
pub use hindsight_footprints as footprints;
pub use hindsight_layers as layers;
pub use hindsight_magnifier as magnifier;
pub use hindsight_timing::HostTime;
pub use hindsight_timing as timing;
pub use hindsight_tools as tools;
pub use hindsight_view2d as view2d;
