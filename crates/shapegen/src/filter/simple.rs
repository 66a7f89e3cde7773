use crate::noise::Noise;
use crate::settings::SimpleNoiseSettings;
use glam::Vec3;

/// Plain fractal noise: summed octaves remapped to [0, 1], floored at `min_value`.
#[derive(Debug, Clone)]
pub struct SimpleNoiseFilter {
    noise: Noise,
    layer_index: usize,
}

impl SimpleNoiseFilter {
    pub fn new(layer_index: usize, seed: u32) -> Self {
        Self {
            noise: Noise::new(seed),
            layer_index,
        }
    }

    pub fn layer_index(&self) -> usize {
        self.layer_index
    }

    pub fn noise(&self) -> &Noise {
        &self.noise
    }

    pub fn evaluate(&self, settings: &SimpleNoiseSettings, point: Vec3) -> f32 {
        let mut noise_value = 0.0;
        let mut frequency = settings.base_roughness;
        let mut amplitude = 1.0;

        for _ in 0..settings.num_layers {
            let v = self.noise.evaluate(point * frequency + settings.center);
            noise_value += (v + 1.0) * 0.5 * amplitude;
            frequency *= settings.roughness;
            amplitude *= settings.persistence;
        }

        (noise_value - settings.min_value).max(0.0) * settings.strength
    }
}
