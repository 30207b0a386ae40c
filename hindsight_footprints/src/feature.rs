// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geometry::Polygon;

/// Attributes carried by a footprint record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FootprintAttributes {
    /// Imagery color type, e.g. `"Color"` or `"B&W"`.
    pub color_type: Option<String>,
    /// Share of the preserve covered by the capture, in percent.
    pub percent_coverage: Option<f64>,
}

/// The area covered by one year's imagery.
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintFeature {
    /// Capture year, matching one temporal layer.
    pub year: i32,
    /// Covered area in map units.
    pub geometry: Polygon,
    /// Descriptive attributes.
    pub attributes: FootprintAttributes,
}

impl FootprintFeature {
    /// Creates a feature without attributes.
    #[must_use]
    pub fn new(year: i32, geometry: Polygon) -> Self {
        Self {
            year,
            geometry,
            attributes: FootprintAttributes::default(),
        }
    }

    /// Sets the color type attribute.
    #[must_use]
    pub fn with_color_type(mut self, color_type: impl Into<String>) -> Self {
        self.attributes.color_type = Some(color_type.into());
        self
    }

    /// Sets the coverage attribute.
    #[must_use]
    pub fn with_percent_coverage(mut self, percent: f64) -> Self {
        self.attributes.percent_coverage = Some(percent);
        self
    }
}

/// Footprints ordered by year, at most one per year.
#[derive(Clone, Debug, Default)]
pub struct FootprintIndex {
    features: Vec<FootprintFeature>,
}

impl FootprintIndex {
    /// Builds the index, sorting by year.
    ///
    /// A second footprint for an already indexed year is dropped.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = FootprintFeature>) -> Self {
        let mut kept: Vec<FootprintFeature> = Vec::new();
        for feature in features {
            if kept.iter().any(|f| f.year == feature.year) {
                log::warn!("ignoring duplicate footprint for year {}", feature.year);
                continue;
            }
            kept.push(feature);
        }
        kept.sort_by_key(|f| f.year);
        Self { features: kept }
    }

    /// Number of footprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if there are no footprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates footprints in year order.
    pub fn iter(&self) -> core::slice::Iter<'_, FootprintFeature> {
        self.features.iter()
    }

    /// Iterates the indexed years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.features.iter().map(|f| f.year)
    }

    /// The footprint for `year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&FootprintFeature> {
        self.features
            .binary_search_by_key(&year, |f| f.year)
            .ok()
            .map(|idx| &self.features[idx])
    }
}

impl<'a> IntoIterator for &'a FootprintIndex {
    type Item = &'a FootprintFeature;
    type IntoIter = core::slice::Iter<'a, FootprintFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
