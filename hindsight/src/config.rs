// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! [layers]
//! prefix = "Preserve - "
//! separator = " - "
//! footprint_layer = "Imagery Footprints"
//! boundary_layer = "Preserve Boundary"
//!
//! [extent]
//! boundary_buffer = 750.0
//! mask_expand = 1.1
//! overview_expand = 1.2
//!
//! [fade]
//! frames_per_second = 30
//! step = 0.01
//!
//! [magnifier]
//! zoom_offset = 3.0
//! panel_size = 150.0
//! margin = 12.0
//! edge_threshold = 200.0
//! ```

use hindsight_fade::FadeConfig;
use hindsight_layers::YearConvention;
use hindsight_magnifier::MagnifierConfig;
use hindsight_timing::FrameRate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Layer naming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayersConfig {
    /// Title prefix of year-coded imagery layers.
    pub prefix: String,
    /// Text following the year in imagery layer titles.
    pub separator: String,
    /// Title of the footprint feature layer.
    pub footprint_layer: String,
    /// Title of the preserve boundary feature layer.
    pub boundary_layer: String,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            prefix: "Preserve - ".into(),
            separator: " - ".into(),
            footprint_layer: "Imagery Footprints".into(),
            boundary_layer: "Preserve Boundary".into(),
        }
    }
}

/// Extent-driven shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtentConfig {
    /// Buffer distance around the preserve boundary, in map units.
    pub boundary_buffer: f64,
    /// Factor the extent grows by for the mask's outer rectangle.
    pub mask_expand: f64,
    /// Factor the primary extent grows by for the overview map.
    pub overview_expand: f64,
}

impl Default for ExtentConfig {
    fn default() -> Self {
        Self {
            boundary_buffer: 750.0,
            mask_expand: 1.1,
            overview_expand: 1.2,
        }
    }
}

/// Fade speed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeSection {
    /// Fade ticks per second.
    pub frames_per_second: u32,
    /// Opacity change per tick.
    pub step: f64,
}

impl Default for FadeSection {
    fn default() -> Self {
        Self {
            frames_per_second: 30,
            step: 0.01,
        }
    }
}

/// Magnifier geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagnifierSection {
    /// Zoom levels added to the primary view's zoom.
    pub zoom_offset: f64,
    /// Panel side length in pixels.
    pub panel_size: f64,
    /// Gap between pointer and panel in pixels.
    pub margin: f64,
    /// Distance from the far edge at which the panel flips sides.
    pub edge_threshold: f64,
}

impl Default for MagnifierSection {
    fn default() -> Self {
        let config = MagnifierConfig::default();
        Self {
            zoom_offset: config.zoom_offset,
            panel_size: config.panel_size,
            margin: config.margin,
            edge_threshold: config.edge_threshold,
        }
    }
}

/// Complete configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HindsightConfig {
    /// Layer naming.
    pub layers: LayersConfig,
    /// Extent-driven shapes.
    pub extent: ExtentConfig,
    /// Fade speed.
    pub fade: FadeSection,
    /// Magnifier geometry.
    pub magnifier: MagnifierSection,
}

impl HindsightConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (
                self.layers.prefix.is_empty(),
                "layers.prefix",
                "must not be empty",
            ),
            (
                !self.extent.boundary_buffer.is_finite() || self.extent.boundary_buffer < 0.0,
                "extent.boundary_buffer",
                "must be a non-negative number",
            ),
            (
                !self.extent.mask_expand.is_finite() || self.extent.mask_expand <= 0.0,
                "extent.mask_expand",
                "must be positive",
            ),
            (
                !self.extent.overview_expand.is_finite() || self.extent.overview_expand <= 0.0,
                "extent.overview_expand",
                "must be positive",
            ),
            (
                self.fade.frames_per_second == 0,
                "fade.frames_per_second",
                "must be at least 1",
            ),
            (
                !self.fade.step.is_finite() || self.fade.step <= 0.0 || self.fade.step > 1.0,
                "fade.step",
                "must be in (0, 1]",
            ),
            (
                !self.magnifier.panel_size.is_finite() || self.magnifier.panel_size <= 0.0,
                "magnifier.panel_size",
                "must be positive",
            ),
            (
                !self.magnifier.zoom_offset.is_finite(),
                "magnifier.zoom_offset",
                "must be finite",
            ),
        ];
        match checks.into_iter().find(|(failed, _, _)| *failed) {
            Some((_, field, reason)) => Err(ConfigError::Invalid { field, reason }),
            None => Ok(()),
        }
    }

    /// Imagery layer naming convention.
    #[must_use]
    pub fn year_convention(&self) -> YearConvention {
        YearConvention::new(self.layers.prefix.clone(), self.layers.separator.clone())
    }

    /// Fade animator settings.
    #[must_use]
    pub fn fade_config(&self) -> FadeConfig {
        FadeConfig {
            rate: FrameRate::new(self.fade.frames_per_second),
            step: self.fade.step,
        }
    }

    /// Magnifier settings.
    #[must_use]
    pub fn magnifier_config(&self) -> MagnifierConfig {
        MagnifierConfig {
            zoom_offset: self.magnifier.zoom_offset,
            panel_size: self.magnifier.panel_size,
            margin: self.magnifier.margin,
            edge_threshold: self.magnifier.edge_threshold,
        }
    }
}
