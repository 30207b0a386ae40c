// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Layers: the year-keyed set of historical imagery layers.
//!
//! A map carries one imagery layer per capture year, named by a convention
//! such as `"Preserve - 2012"`. [`TemporalLayerSet`] is derived once from the
//! map's layer descriptors and then owns the visibility and opacity state the
//! host mirrors onto the real layers:
//!
//! - At most one layer is visible at a time (the "current year").
//! - Opacity can be applied to the whole group, so hidden layers carry the same
//!   opacity when they later become visible.
//! - A revision counter bumps on every effective change, giving observers a
//!   cheap "did anything change?" marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use hindsight_layers::{LayerInfo, TemporalLayerSet, YearConvention};
//!
//! let convention = YearConvention::default();
//! let mut layers = TemporalLayerSet::from_layers(
//!     &convention,
//!     [
//!         LayerInfo::new("Preserve - 2016"),
//!         LayerInfo::new("Imagery Footprints"),
//!         LayerInfo::new("Preserve - 2012"),
//!     ],
//! );
//!
//! // Only year-coded layers are kept, sorted by year.
//! assert_eq!(layers.years().collect::<Vec<_>>(), vec![2012, 2016]);
//!
//! assert!(layers.set_visible_year(2016));
//! assert_eq!(layers.visible_year(), Some(2016));
//!
//! // Setting the same year again changes nothing.
//! assert!(!layers.set_visible_year(2016));
//!
//! layers.set_group_opacity(0.5);
//! assert!(layers.iter().all(|layer| layer.opacity() == 0.5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod convention;
mod set;

pub use convention::YearConvention;
pub use set::{LayerInfo, LayerMetadata, NO_YEAR, TemporalLayer, TemporalLayerSet};
