// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::feature::FootprintIndex;
use crate::geometry::{GeometryEngine, Polygon, expand_rect};
use crate::overlay::FootprintOverlay;

/// Default factor the extent is grown by before the boundary buffer is cut
/// out of it.
pub const DEFAULT_MASK_EXPAND: f64 = 1.1;

/// Outcome of filtering the footprints against one extent.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtentReport {
    /// Extent the footprints were tested against.
    pub extent: Rect,
    /// Years whose footprint intersects the extent, ascending.
    pub enabled: Vec<i32>,
    /// Years whose footprint lies outside the extent, ascending.
    pub disabled: Vec<i32>,
    /// Number of footprints tested.
    pub total: usize,
}

impl ExtentReport {
    /// Returns `true` if `year`'s footprint intersects the extent.
    #[must_use]
    pub fn is_enabled(&self, year: i32) -> bool {
        self.enabled.binary_search(&year).is_ok()
    }

    /// Summary such as `"3 of 7"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} of {}", self.enabled.len(), self.total)
    }
}

/// Decides which footprints intersect the primary view's extent.
///
/// Filtering is presentational: it never removes footprints, it only reports
/// which ones are in view and refreshes the overlay shapes that follow the
/// extent.
#[derive(Clone, Debug)]
pub struct ExtentFilter {
    index: FootprintIndex,
    boundary_buffer: Polygon,
    mask_expand: f64,
}

impl ExtentFilter {
    /// Creates a filter over `index`, masking outside `boundary_buffer`.
    #[must_use]
    pub fn new(index: FootprintIndex, boundary_buffer: Polygon) -> Self {
        Self {
            index,
            boundary_buffer,
            mask_expand: DEFAULT_MASK_EXPAND,
        }
    }

    /// Sets the factor the extent is grown by for the mask's outer rectangle.
    #[must_use]
    pub fn with_mask_expand(mut self, factor: f64) -> Self {
        self.mask_expand = factor;
        self
    }

    /// The filtered footprints.
    #[must_use]
    pub fn index(&self) -> &FootprintIndex {
        &self.index
    }

    /// The buffered preserve boundary.
    #[must_use]
    pub fn boundary_buffer(&self) -> &Polygon {
        &self.boundary_buffer
    }

    /// Tests every footprint against `extent` and updates `overlay`'s extent
    /// rectangle and mask.
    pub fn apply<G: GeometryEngine>(
        &self,
        extent: Rect,
        engine: &G,
        overlay: &mut FootprintOverlay,
    ) -> ExtentReport {
        let mut enabled = Vec::new();
        let mut disabled = Vec::new();
        for feature in &self.index {
            if engine.intersects(extent, &feature.geometry) {
                enabled.push(feature.year);
            } else {
                disabled.push(feature.year);
            }
        }

        overlay.set_extent(extent);
        overlay.set_mask(engine.difference(
            expand_rect(extent, self.mask_expand),
            &self.boundary_buffer,
        ));

        let report = ExtentReport {
            extent,
            enabled,
            disabled,
            total: self.index.len(),
        };
        log::debug!("extent filter: {} footprints in view", report.count_label());
        report
    }
}
