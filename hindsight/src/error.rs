// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_view2d::MapId;

/// Failure reported by a [`MapSource`](crate::MapSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The map has no layer with this title.
    #[error("layer {0:?} is not available")]
    LayerUnavailable(String),
    /// The layer exists but its features could not be loaded.
    #[error("failed to load layer {layer:?}: {reason}")]
    Load {
        /// Layer title.
        layer: String,
        /// Host-provided description of the failure.
        reason: String,
    },
}

/// Invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Failure to bring the comparison tools up. No tool is active afterwards.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A required layer is missing from the map.
    #[error("the map has no layer titled {0:?}")]
    MissingLayer(String),
    /// No layer title follows the year convention.
    #[error("no imagery layer title starts with {0:?}")]
    NoImageryLayers(String),
    /// The boundary layer has no usable polygon.
    #[error("boundary layer {0:?} has no polygon")]
    EmptyBoundary(String),
    /// The magnifier view draws a different map than the primary view.
    #[error("magnifier view draws {magnifier:?} but the primary view draws {primary:?}")]
    MagnifierMapMismatch {
        /// Map of the primary view.
        primary: MapId,
        /// Map of the magnifier view.
        magnifier: MapId,
    },
    /// The map source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
