// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_footprints::{FootprintIndex, GeometryEngine, Polygon};
use hindsight_layers::TemporalLayerSet;

use crate::config::HindsightConfig;
use crate::error::SetupError;
use crate::source::MapSource;

/// Everything loaded from the map during setup.
#[derive(Clone, Debug)]
pub struct Catalog {
    layers: TemporalLayerSet,
    footprints: FootprintIndex,
    boundary_buffer: Polygon,
}

impl Catalog {
    /// The year-coded imagery layers, all hidden.
    #[must_use]
    pub fn layers(&self) -> &TemporalLayerSet {
        &self.layers
    }

    /// Footprints in year order.
    #[must_use]
    pub fn footprints(&self) -> &FootprintIndex {
        &self.footprints
    }

    /// The preserve boundary grown by the configured buffer.
    #[must_use]
    pub fn boundary_buffer(&self) -> &Polygon {
        &self.boundary_buffer
    }

    pub(crate) fn into_parts(self) -> (TemporalLayerSet, FootprintIndex, Polygon) {
        (self.layers, self.footprints, self.boundary_buffer)
    }
}

/// The setup phase: loads layers, footprints and the buffered boundary.
///
/// Setup completes before any tool exists, so extent handling never sees a
/// missing buffer.
#[derive(Clone, Copy, Debug)]
pub struct Setup<'a> {
    config: &'a HindsightConfig,
}

impl<'a> Setup<'a> {
    /// Prepares a setup run with `config`.
    #[must_use]
    pub fn new(config: &'a HindsightConfig) -> Self {
        Self { config }
    }

    /// Queries `source` and buffers the boundary with `engine`.
    pub fn run<S, G>(&self, source: &S, engine: &G) -> Result<Catalog, SetupError>
    where
        S: MapSource + ?Sized,
        G: GeometryEngine + ?Sized,
    {
        self.config.validate()?;
        let names = &self.config.layers;

        let infos = source.layers()?;
        for required in [&names.footprint_layer, &names.boundary_layer] {
            if !infos.iter().any(|info| &info.title == required) {
                return Err(SetupError::MissingLayer(required.clone()));
            }
        }

        let layers = TemporalLayerSet::from_layers(&self.config.year_convention(), infos);
        if layers.is_empty() {
            return Err(SetupError::NoImageryLayers(names.prefix.clone()));
        }

        let footprints = FootprintIndex::new(source.query_footprints(&names.footprint_layer)?);
        for year in footprints.years().filter(|&y| !layers.contains(y)) {
            log::warn!("footprint for {year} has no matching imagery layer");
        }

        let boundary = source
            .query_boundary(&names.boundary_layer)?
            .into_iter()
            .find(|polygon| !polygon.is_empty())
            .ok_or_else(|| SetupError::EmptyBoundary(names.boundary_layer.clone()))?;
        let boundary_buffer = engine.buffer(&boundary, self.config.extent.boundary_buffer);

        log::info!(
            "loaded {} imagery layers and {} footprints",
            layers.len(),
            footprints.len()
        );
        Ok(Catalog {
            layers,
            footprints,
            boundary_buffer,
        })
    }
}
