// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::feature::FootprintIndex;
use crate::geometry::{Mask, Polygon};

/// Shapes drawn over the overview map, plus the primary view's mask.
///
/// The hover and current footprints are stored by year and resolved against a
/// [`FootprintIndex`], so the overlay never owns footprint geometry.
#[derive(Clone, Debug, Default)]
pub struct FootprintOverlay {
    extent: Option<Rect>,
    hover: Option<i32>,
    current: Option<i32>,
    mask: Option<Mask>,
    revision: u64,
}

impl FootprintOverlay {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangle outlining the primary view's extent.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        self.extent
    }

    /// Year of the hovered dataset entry.
    #[must_use]
    pub fn hover_year(&self) -> Option<i32> {
        self.hover
    }

    /// Year of the selected dataset entry.
    #[must_use]
    pub fn current_year(&self) -> Option<i32> {
        self.current
    }

    /// Geometry of the hovered footprint.
    #[must_use]
    pub fn hover_footprint<'a>(&self, index: &'a FootprintIndex) -> Option<&'a Polygon> {
        index.get(self.hover?).map(|f| &f.geometry)
    }

    /// Geometry of the selected footprint.
    #[must_use]
    pub fn current_footprint<'a>(&self, index: &'a FootprintIndex) -> Option<&'a Polygon> {
        index.get(self.current?).map(|f| &f.geometry)
    }

    /// Mask shading everything outside the buffered preserve boundary.
    #[must_use]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Returns the revision counter; it bumps on every effective change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the extent rectangle.
    pub fn set_extent(&mut self, extent: Rect) -> bool {
        if self.extent == Some(extent) {
            return false;
        }
        self.extent = Some(extent);
        self.bump_revision();
        true
    }

    /// Sets or clears the hover footprint.
    pub fn set_hover(&mut self, year: Option<i32>) -> bool {
        if self.hover == year {
            return false;
        }
        self.hover = year;
        self.bump_revision();
        true
    }

    /// Sets or clears the current footprint.
    pub fn set_current(&mut self, year: Option<i32>) -> bool {
        if self.current == year {
            return false;
        }
        self.current = year;
        self.bump_revision();
        true
    }

    /// Replaces the mask shape.
    pub fn set_mask(&mut self, mask: Mask) -> bool {
        if self.mask.as_ref() == Some(&mask) {
            return false;
        }
        self.mask = Some(mask);
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
