// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hindsight_footprints::{FootprintFeature, Polygon};
use hindsight_layers::LayerInfo;

use crate::error::SourceError;

/// Read access to the host map's layers and feature layers.
///
/// Queries run once, during setup.
pub trait MapSource {
    /// Descriptors of every layer in the map, in layer-list order.
    fn layers(&self) -> Result<Vec<LayerInfo>, SourceError>;

    /// All footprint features of the layer titled `title`.
    fn query_footprints(&self, title: &str) -> Result<Vec<FootprintFeature>, SourceError>;

    /// All polygons of the boundary layer titled `title`.
    fn query_boundary(&self, title: &str) -> Result<Vec<Polygon>, SourceError>;
}

/// A [`MapSource`] holding everything in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticMapSource {
    layers: Vec<LayerInfo>,
    footprints: Vec<(String, Vec<FootprintFeature>)>,
    boundaries: Vec<(String, Vec<Polygon>)>,
}

impl StaticMapSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain layer, such as an imagery layer.
    #[must_use]
    pub fn with_layer(mut self, info: LayerInfo) -> Self {
        self.layers.push(info);
        self
    }

    /// Adds a footprint feature layer.
    #[must_use]
    pub fn with_footprint_layer(
        mut self,
        title: impl Into<String>,
        features: impl IntoIterator<Item = FootprintFeature>,
    ) -> Self {
        let title = title.into();
        self.layers.push(LayerInfo::new(title.clone()));
        self.footprints.push((title, features.into_iter().collect()));
        self
    }

    /// Adds a boundary feature layer.
    #[must_use]
    pub fn with_boundary_layer(
        mut self,
        title: impl Into<String>,
        polygons: impl IntoIterator<Item = Polygon>,
    ) -> Self {
        let title = title.into();
        self.layers.push(LayerInfo::new(title.clone()));
        self.boundaries.push((title, polygons.into_iter().collect()));
        self
    }
}

fn find<'a, T>(entries: &'a [(String, T)], title: &str) -> Result<&'a T, SourceError> {
    entries
        .iter()
        .find(|(t, _)| t == title)
        .map(|(_, v)| v)
        .ok_or_else(|| SourceError::LayerUnavailable(title.to_owned()))
}

impl MapSource for StaticMapSource {
    fn layers(&self) -> Result<Vec<LayerInfo>, SourceError> {
        Ok(self.layers.clone())
    }

    fn query_footprints(&self, title: &str) -> Result<Vec<FootprintFeature>, SourceError> {
        find(&self.footprints, title).cloned()
    }

    fn query_boundary(&self, title: &str) -> Result<Vec<Polygon>, SourceError> {
        find(&self.boundaries, title).cloned()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;

    #[test]
    fn feature_layers_are_listed_and_queryable() {
        let source = StaticMapSource::new()
            .with_layer(LayerInfo::new("Preserve - 2012"))
            .with_boundary_layer(
                "Preserve Boundary",
                [Polygon::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0))],
            );
        let titles: Vec<_> = source
            .layers()
            .expect("layers")
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["Preserve - 2012", "Preserve Boundary"]);
        assert_eq!(
            source.query_boundary("Preserve Boundary").expect("found").len(),
            1
        );
        assert!(matches!(
            source.query_footprints("Imagery Footprints"),
            Err(SourceError::LayerUnavailable(_))
        ));
    }
}
