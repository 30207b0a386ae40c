// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::feature::{FootprintFeature, FootprintIndex};
use crate::filter::ExtentReport;

/// One row of the dataset list: a capture year and its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetEntry {
    /// Capture year.
    pub year: i32,
    /// Imagery color type.
    pub color_type: Option<String>,
    /// Coverage of the preserve, in percent.
    pub percent_coverage: Option<f64>,
    /// Whether the footprint intersects the current extent.
    pub enabled: bool,
    /// Whether this is the selected entry.
    pub selected: bool,
}

impl DatasetEntry {
    fn from_feature(feature: &FootprintFeature) -> Self {
        Self {
            year: feature.year,
            color_type: feature.attributes.color_type.clone(),
            percent_coverage: feature.attributes.percent_coverage,
            enabled: true,
            selected: false,
        }
    }

    /// Color type for display, `"n/a"` when missing or blank.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.color_type
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("n/a")
    }

    /// Coverage for display, e.g. `"45.5%"`, or `"n/a%"` when missing or zero.
    #[must_use]
    pub fn coverage_label(&self) -> String {
        match self.percent_coverage.filter(|p| p.is_finite() && *p != 0.0) {
            Some(p) => format!("{p}%"),
            None => "n/a%".into(),
        }
    }

    /// Coverage as a progress-bar fraction in `[0, 1]`; `0` when missing.
    #[must_use]
    pub fn coverage_fraction(&self) -> f64 {
        self.percent_coverage
            .filter(|p| p.is_finite())
            .map_or(0.0, |p| (p / 100.0).clamp(0.0, 1.0))
    }
}

/// The dataset list: one entry per footprint, in year order.
///
/// Exactly zero or one entry is selected; hover is tracked separately.
#[derive(Clone, Debug, Default)]
pub struct DatasetList {
    entries: Vec<DatasetEntry>,
    hovered: Option<i32>,
}

impl DatasetList {
    /// Builds one enabled, unselected entry per footprint.
    #[must_use]
    pub fn from_index(index: &FootprintIndex) -> Self {
        Self {
            entries: index.iter().map(DatasetEntry::from_feature).collect(),
            hovered: None,
        }
    }

    /// Entries in year order.
    #[must_use]
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&DatasetEntry> {
        self.entries.iter().find(|e| e.year == year)
    }

    /// The first entry, which is selected at startup.
    #[must_use]
    pub fn first(&self) -> Option<&DatasetEntry> {
        self.entries.first()
    }

    /// Year of the selected entry.
    #[must_use]
    pub fn selected_year(&self) -> Option<i32> {
        self.entries.iter().find(|e| e.selected).map(|e| e.year)
    }

    /// Year of the hovered entry.
    #[must_use]
    pub fn hovered_year(&self) -> Option<i32> {
        self.hovered
    }

    /// Selects `year` and deselects every other entry.
    ///
    /// Returns `false` if `year` has no entry; the selection is then left as
    /// it was.
    pub fn select(&mut self, year: i32) -> bool {
        if self.get(year).is_none() {
            return false;
        }
        for entry in &mut self.entries {
            entry.selected = entry.year == year;
        }
        true
    }

    /// Sets or clears the hovered entry. Unknown years clear it.
    pub fn hover(&mut self, year: Option<i32>) -> Option<i32> {
        self.hovered = year.filter(|&y| self.get(y).is_some());
        self.hovered
    }

    /// Marks entries enabled or disabled from an extent report.
    pub fn apply(&mut self, report: &ExtentReport) {
        for entry in &mut self.entries {
            entry.enabled = report.is_enabled(entry.year);
        }
    }
}
