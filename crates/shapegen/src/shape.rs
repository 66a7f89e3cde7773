use crate::edit::Editable;
use crate::filter::NoiseFilter;
use crate::min_max::MinMax;
use crate::settings::{FilterType, NoiseSettings};
use crate::shape_settings::{NoiseLayer, ShapeSettings};
use crate::tools::layer_seed;
use glam::Vec3;
use log::debug;

/// Maps points on the unit sphere to points on the planet surface.
///
/// `noise_filters[i]` always belongs to `settings.noise_layers[i]`: both are
/// only ever appended together by [`ShapeGenerator::add_layer`].
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    settings: Editable<ShapeSettings>,
    noise_filters: Vec<NoiseFilter>,
    elevation_min_max: MinMax,
    seed: u32,
}

impl ShapeGenerator {
    /// Takes ownership of `settings` and builds one filter per existing layer.
    ///
    /// The pending copy starts blank, so the first [`has_changed`] call
    /// commits its radius.
    ///
    /// [`has_changed`]: ShapeGenerator::has_changed
    pub fn new(settings: ShapeSettings) -> Self {
        Self::with_seed(settings, 0)
    }

    pub fn with_seed(settings: ShapeSettings, seed: u32) -> Self {
        let noise_filters = settings
            .noise_layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                NoiseFilter::create_seeded(layer.filter_type(), index, layer_seed(seed, index))
            })
            .collect();
        Self {
            settings: Editable::with_pending(settings, ShapeSettings::default()),
            noise_filters,
            elevation_min_max: MinMax::default(),
            seed,
        }
    }

    /// Committed shape settings.
    pub fn settings(&self) -> &ShapeSettings {
        self.settings.authoritative()
    }

    pub fn noise_filters(&self) -> &[NoiseFilter] {
        &self.noise_filters
    }

    pub fn layer_count(&self) -> usize {
        self.noise_filters.len()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pending_radius(&self) -> f32 {
        self.settings.pending().radius
    }

    pub fn pending_radius_mut(&mut self) -> &mut f32 {
        &mut self.settings.pending_mut().radius
    }

    pub fn pending_layer(&self, index: usize) -> Option<&NoiseSettings> {
        self.settings().noise_layers.get(index).map(NoiseLayer::pending)
    }

    /// The copy of a layer's settings the presentation layer may edit.
    pub fn pending_layer_mut(&mut self, index: usize) -> Option<&mut NoiseSettings> {
        self.settings
            .authoritative_mut()
            .noise_layers
            .get_mut(index)
            .map(NoiseLayer::pending_mut)
    }

    /// Appends a layer and its filter. Returns the new layer's index.
    pub fn add_layer(&mut self, filter_type: FilterType) -> usize {
        self.push_layer(NoiseLayer::new(filter_type))
    }

    pub(crate) fn push_layer(&mut self, layer: NoiseLayer) -> usize {
        let index = self.noise_filters.len();
        let filter =
            NoiseFilter::create_seeded(layer.filter_type(), index, layer_seed(self.seed, index));
        debug!("Adding {} noise layer at index {}", filter.filter_type(), index);
        self.settings.authoritative_mut().noise_layers.push(layer);
        self.noise_filters.push(filter);
        index
    }

    /// Rebuilds every filter's noise for a new planet seed.
    /// Layer settings and indices are left untouched.
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.noise_filters = self
            .settings()
            .noise_layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                NoiseFilter::create_seeded(layer.filter_type(), index, layer_seed(seed, index))
            })
            .collect();
        debug!("Reseeded {} noise layers with seed {}", self.noise_filters.len(), seed);
    }

    /// Commits pending edits. Returns true if anything changed and the
    /// surface has to be regenerated.
    ///
    /// Every layer is polled even after the first change so that all pending
    /// edits land in the same call.
    pub fn has_changed(&mut self) -> bool {
        let mut changed = false;
        let layers = &mut self.settings.authoritative_mut().noise_layers;
        for (filter, layer) in self.noise_filters.iter().zip(layers.iter_mut()) {
            changed |= filter.has_changed(layer);
        }
        if self.settings.commit() {
            debug!("Planet radius committed: {}", self.settings().radius);
            changed = true;
        }
        changed
    }

    /// Radius-scaled elevation at `point`, without touching the extrema.
    pub fn elevation(&self, point: Vec3) -> f32 {
        let settings = self.settings();
        let layers = &settings.noise_layers;

        let mut first_layer_value = 0.0;
        let mut elevation = 0.0;

        if let (Some(filter), Some(layer)) = (self.noise_filters.first(), layers.first()) {
            let noise_settings = layer.noise_settings();
            first_layer_value = filter.evaluate(noise_settings, point);
            if noise_settings.enabled {
                elevation = first_layer_value;
            }
        }

        for (filter, layer) in self.noise_filters.iter().zip(layers).skip(1) {
            let noise_settings = layer.noise_settings();
            if !noise_settings.enabled {
                continue;
            }
            // Masks always refer to layer 0, not to the previous layer.
            let mask = if noise_settings.use_first_layer_as_mask {
                first_layer_value
            } else {
                1.0
            };
            elevation += filter.evaluate(noise_settings, point) * mask;
        }

        settings.radius * (1.0 + elevation)
    }

    /// Displaces `point_on_unit_sphere` along itself by the elevation there.
    ///
    /// The input is not renormalised; only unit-length inputs land on the
    /// planet surface.
    pub fn calculate_point_on_planet(&mut self, point_on_unit_sphere: Vec3) -> Vec3 {
        let elevation = self.elevation(point_on_unit_sphere);
        self.elevation_min_max.add_value(elevation);
        point_on_unit_sphere * elevation
    }

    pub fn elevation_min_max(&self) -> &MinMax {
        &self.elevation_min_max
    }

    pub fn reset_elevation_min_max(&mut self) {
        self.elevation_min_max.reset();
    }
}
