//! Noise filters: turn a point into an elevation contribution.

mod ridged;
mod simple;

pub use ridged::RidgedNoiseFilter;
pub use simple::SimpleNoiseFilter;

use crate::noise::Noise;
use crate::settings::{FilterType, LayerParams, NoiseSettings};
use crate::shape_settings::NoiseLayer;
use glam::Vec3;
use log::debug;

#[derive(Debug, Clone)]
pub enum NoiseFilter {
    Simple(SimpleNoiseFilter),
    Ridged(RidgedNoiseFilter),
}

impl NoiseFilter {
    /// Builds the filter for `filter_type` with the default (unscrambled) noise.
    pub fn create(filter_type: FilterType, layer_index: usize) -> Self {
        Self::create_seeded(filter_type, layer_index, 0)
    }

    pub fn create_seeded(filter_type: FilterType, layer_index: usize, seed: u32) -> Self {
        match filter_type {
            FilterType::Simple => NoiseFilter::Simple(SimpleNoiseFilter::new(layer_index, seed)),
            FilterType::Ridged => NoiseFilter::Ridged(RidgedNoiseFilter::new(layer_index, seed)),
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            NoiseFilter::Simple(_) => FilterType::Simple,
            NoiseFilter::Ridged(_) => FilterType::Ridged,
        }
    }

    pub fn layer_index(&self) -> usize {
        match self {
            NoiseFilter::Simple(filter) => filter.layer_index(),
            NoiseFilter::Ridged(filter) => filter.layer_index(),
        }
    }

    pub fn noise(&self) -> &Noise {
        match self {
            NoiseFilter::Simple(filter) => filter.noise(),
            NoiseFilter::Ridged(filter) => filter.noise(),
        }
    }

    /// Elevation contribution of this layer at `point`.
    ///
    /// Settings of the other filter type contribute nothing.
    pub fn evaluate(&self, settings: &NoiseSettings, point: Vec3) -> f32 {
        match (self, settings.params()) {
            (NoiseFilter::Simple(filter), LayerParams::Simple(params)) => {
                filter.evaluate(params, point)
            }
            (NoiseFilter::Ridged(filter), LayerParams::Ridged(params)) => {
                filter.evaluate(params, point)
            }
            _ => 0.0,
        }
    }

    /// Commits pending edits of `layer` if there are any.
    pub fn has_changed(&self, layer: &mut NoiseLayer) -> bool {
        let changed = layer.editable_mut().commit();
        if changed {
            debug!(
                "Noise layer {} ({}) settings committed",
                self.layer_index(),
                self.filter_type()
            );
        }
        changed
    }
}
