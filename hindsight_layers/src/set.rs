// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::convention::YearConvention;

/// Year value meaning "no layer"; passing it to
/// [`TemporalLayerSet::set_visible_year`] hides every layer.
pub const NO_YEAR: i32 = -1;

/// Descriptor of one layer in the host map's layer collection.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerInfo {
    /// Layer title as shown in the map's layer list.
    pub title: String,
    /// Optional long-form description of the layer's source item.
    pub description: Option<String>,
    /// Opacity the layer was loaded with.
    pub opacity: f64,
}

impl LayerInfo {
    /// Creates a fully opaque layer descriptor without a description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            opacity: 1.0,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Title and description of the item behind a temporal layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerMetadata {
    /// Item title.
    pub title: String,
    /// Item description, when the item carries one.
    pub description: Option<String>,
}

/// One year's imagery layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TemporalLayer {
    year: i32,
    visible: bool,
    opacity: f64,
    source_index: usize,
    metadata: LayerMetadata,
}

impl TemporalLayer {
    /// Capture year; the set's lookup key.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether this is the currently displayed layer.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Position of the layer in the host's original layer collection.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Title and description of the layer's source item.
    #[must_use]
    pub fn metadata(&self) -> &LayerMetadata {
        &self.metadata
    }
}

/// The ordered, fixed collection of temporal layers.
///
/// Membership is decided once by [`TemporalLayerSet::from_layers`]; afterwards
/// only visibility and opacity change. Layers are sorted by year.
#[derive(Clone, Debug, Default)]
pub struct TemporalLayerSet {
    layers: Vec<TemporalLayer>,
    by_year: HashMap<i32, usize>,
    revision: u64,
}

impl TemporalLayerSet {
    /// Scans `infos` for titles matching `convention` and builds the set.
    ///
    /// Every kept layer starts hidden. When two layers parse to the same year
    /// the first one wins.
    #[must_use]
    pub fn from_layers<I>(convention: &YearConvention, infos: I) -> Self
    where
        I: IntoIterator<Item = LayerInfo>,
    {
        let mut layers: Vec<TemporalLayer> = Vec::new();
        for (source_index, info) in infos.into_iter().enumerate() {
            let Some(year) = convention.parse_year(&info.title) else {
                continue;
            };
            if layers.iter().any(|l| l.year == year) {
                log::warn!(
                    "ignoring layer {:?}: year {year} is already provided by another layer",
                    info.title
                );
                continue;
            }
            layers.push(TemporalLayer {
                year,
                visible: false,
                opacity: clamp_unit(info.opacity),
                source_index,
                metadata: LayerMetadata {
                    title: info.title,
                    description: info.description,
                },
            });
        }
        layers.sort_by_key(|l| l.year);
        let by_year = layers
            .iter()
            .enumerate()
            .map(|(idx, l)| (l.year, idx))
            .collect();
        Self {
            layers,
            by_year,
            revision: 0,
        }
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no layer matched the naming convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterates layers in year order.
    pub fn iter(&self) -> core::slice::Iter<'_, TemporalLayer> {
        self.layers.iter()
    }

    /// Iterates the years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.layers.iter().map(|l| l.year)
    }

    /// Returns `true` if a layer exists for `year`.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.by_year.contains_key(&year)
    }

    /// The layer for `year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&TemporalLayer> {
        self.by_year.get(&year).map(|&idx| &self.layers[idx])
    }

    /// Title and description for `year`, if the year exists.
    #[must_use]
    pub fn details(&self, year: i32) -> Option<&LayerMetadata> {
        self.get(year).map(TemporalLayer::metadata)
    }

    /// The single visible layer, if any.
    #[must_use]
    pub fn find_visible(&self) -> Option<&TemporalLayer> {
        self.layers.iter().find(|l| l.visible)
    }

    /// Year of the visible layer, if any.
    #[must_use]
    pub fn visible_year(&self) -> Option<i32> {
        self.find_visible().map(TemporalLayer::year)
    }

    /// Opacity of `year`'s layer.
    #[must_use]
    pub fn opacity(&self, year: i32) -> Option<f64> {
        self.get(year).map(TemporalLayer::opacity)
    }

    /// Opacity a group opacity control should display: the visible layer's,
    /// else the first layer's, else `1.0`.
    #[must_use]
    pub fn group_opacity(&self) -> f64 {
        self.find_visible()
            .or_else(|| self.layers.first())
            .map_or(1.0, TemporalLayer::opacity)
    }

    /// Returns the revision counter.
    ///
    /// It bumps only when visibility or opacity actually changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Makes `year` the only visible layer.
    ///
    /// A year without a layer (including [`NO_YEAR`]) hides everything.
    /// Returns `true` if any layer changed; re-selecting the visible year is a
    /// no-op.
    pub fn set_visible_year(&mut self, year: i32) -> bool {
        let mut changed = false;
        for layer in &mut self.layers {
            let visible = layer.year == year;
            if layer.visible != visible {
                layer.visible = visible;
                changed = true;
            }
        }
        if changed {
            log::debug!("visible imagery year is now {:?}", self.visible_year());
            self.bump_revision();
        }
        changed
    }

    /// Hides every layer.
    pub fn hide_all(&mut self) -> bool {
        self.set_visible_year(NO_YEAR)
    }

    /// Applies `opacity` (clamped to `[0, 1]`) to every layer, visible or not.
    pub fn set_group_opacity(&mut self, opacity: f64) -> bool {
        let opacity = clamp_unit(opacity);
        let mut changed = false;
        for layer in &mut self.layers {
            if layer.opacity != opacity {
                layer.opacity = opacity;
                changed = true;
            }
        }
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Sets a single layer's opacity (clamped to `[0, 1]`).
    ///
    /// Returns `false` if the year is unknown or the value is unchanged.
    pub fn set_layer_opacity(&mut self, year: i32, opacity: f64) -> bool {
        let opacity = clamp_unit(opacity);
        let Some(&idx) = self.by_year.get(&year) else {
            return false;
        };
        let layer = &mut self.layers[idx];
        if layer.opacity == opacity {
            return false;
        }
        layer.opacity = opacity;
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a TemporalLayerSet {
    type Item = &'a TemporalLayer;
    type IntoIter = core::slice::Iter<'a, TemporalLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn sample() -> TemporalLayerSet {
        TemporalLayerSet::from_layers(
            &YearConvention::default(),
            [
                LayerInfo::new("Preserve Boundary"),
                LayerInfo::new("Preserve - 2016").with_description("Color, 30cm"),
                LayerInfo::new("Preserve - 1994").with_opacity(0.8),
                LayerInfo::new("Imagery Footprints"),
                LayerInfo::new("Preserve - 2005"),
            ],
        )
    }

    #[test]
    fn derives_sorted_year_layers() {
        let set = sample();
        assert_eq!(set.len(), 3);
        assert_eq!(set.years().collect::<Vec<_>>(), vec![1994, 2005, 2016]);
        assert_eq!(set.get(2016).map(TemporalLayer::source_index), Some(1));
        assert!(set.iter().all(|l| !l.is_visible()));
        assert_eq!(set.revision(), 0);
    }

    #[test]
    fn duplicate_years_keep_first() {
        let set = TemporalLayerSet::from_layers(
            &YearConvention::default(),
            [
                LayerInfo::new("Preserve - 2000").with_opacity(0.3),
                LayerInfo::new("Preserve - 2000").with_opacity(0.9),
            ],
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.opacity(2000), Some(0.3));
    }

    #[test]
    fn visibility_is_exclusive() {
        let mut set = sample();
        for year in [2005, 1994, 2016, 2016, 2005] {
            set.set_visible_year(year);
            let visible: Vec<_> = set.iter().filter(|l| l.is_visible()).collect();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].year(), year);
        }
    }

    #[test]
    fn sentinel_and_unknown_years_hide_everything() {
        let mut set = sample();
        set.set_visible_year(2005);
        assert!(set.set_visible_year(NO_YEAR));
        assert_eq!(set.find_visible(), None);

        set.set_visible_year(2016);
        assert!(set.set_visible_year(1800));
        assert_eq!(set.visible_year(), None);
        assert!(!set.hide_all());
    }

    #[test]
    fn reselecting_visible_year_is_a_no_op() {
        let mut set = sample();
        assert!(set.set_visible_year(1994));
        let rev = set.revision();
        assert!(!set.set_visible_year(1994));
        assert_eq!(set.revision(), rev);
    }

    #[test]
    fn group_opacity_reaches_hidden_layers_and_is_clamped() {
        let mut set = sample();
        set.set_visible_year(2005);
        assert!(set.set_group_opacity(0.4));
        assert!(set.iter().all(|l| l.opacity() == 0.4));

        set.set_group_opacity(3.0);
        assert!(set.iter().all(|l| l.opacity() == 1.0));
        set.set_group_opacity(-1.0);
        assert!(set.iter().all(|l| l.opacity() == 0.0));
        set.set_group_opacity(f64::NAN);
        assert!(set.iter().all(|l| l.opacity() == 0.0));
    }

    #[test]
    fn layer_opacity_and_group_readout() {
        let mut set = sample();
        // Nothing visible: the first layer drives the readout.
        assert_eq!(set.group_opacity(), 0.8);

        set.set_visible_year(2016);
        assert!(set.set_layer_opacity(2016, 0.25));
        assert!(!set.set_layer_opacity(2016, 0.25));
        assert!(!set.set_layer_opacity(1700, 0.25));
        assert_eq!(set.group_opacity(), 0.25);
        assert_eq!(set.opacity(2005), Some(1.0));
    }

    #[test]
    fn details_expose_item_metadata() {
        let set = sample();
        let details = set.details(2016).unwrap();
        assert_eq!(details.title, "Preserve - 2016");
        assert_eq!(details.description.as_deref(), Some("Color, 30cm"));
        assert_eq!(set.details(2005).unwrap().description, None);
        assert!(set.details(1999).is_none());
    }
}
