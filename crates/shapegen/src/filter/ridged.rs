use crate::noise::Noise;
use crate::settings::RidgedNoiseSettings;
use glam::Vec3;

/// Ridged multifractal: each octave is folded to `(1 - |n|)²` so zero
/// crossings become sharp crests, and is weighted by the previous octave so
/// detail concentrates on the ridges.
#[derive(Debug, Clone)]
pub struct RidgedNoiseFilter {
    noise: Noise,
    layer_index: usize,
}

impl RidgedNoiseFilter {
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

    pub fn evaluate(&self, settings: &RidgedNoiseSettings, point: Vec3) -> f32 {
        let octaves = &settings.simple;
        let mut noise_value = 0.0;
        let mut frequency = octaves.base_roughness;
        let mut amplitude = 1.0;
        let mut weight = 1.0;

        for _ in 0..octaves.num_layers {
            let mut v = 1.0 - self.noise.evaluate(point * frequency + octaves.center).abs();
            v *= v;
            v *= weight;
            weight = (v * settings.weight_multiplier).clamp(0.0, 1.0);

            noise_value += v * amplitude;
            frequency *= octaves.roughness;
            amplitude *= octaves.persistence;
        }

        (noise_value - octaves.min_value).max(0.0) * octaves.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimpleNoiseSettings;

    fn unfloored(num_layers: u32, weight_multiplier: f32) -> RidgedNoiseSettings {
        RidgedNoiseSettings {
            simple: SimpleNoiseSettings {
                min_value: 0.0,
                num_layers,
                ..Default::default()
            },
            weight_multiplier,
        }
    }

    const POINTS: [Vec3; 3] = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.6, 0.8),
        Vec3::new(-0.48, 0.6, -0.64),
    ];

    #[test]
    fn test_single_octave_is_folded_and_squared() {
        let filter = RidgedNoiseFilter::new(0, 0);
        let settings = unfloored(1, 0.8);
        for point in POINTS {
            let raw = filter.noise().evaluate(point);
            let expected = (1.0 - raw.abs()).powi(2);
            let actual = filter.evaluate(&settings, point);
            assert!((actual - expected).abs() < 1e-6, "expected {}, got {}", expected, actual);
        }
    }

    #[test]
    fn test_zero_weight_multiplier_silences_later_octaves() {
        let filter = RidgedNoiseFilter::new(0, 0);
        for point in POINTS {
            let one = filter.evaluate(&unfloored(1, 0.0), point);
            let many = filter.evaluate(&unfloored(6, 0.0), point);
            assert_eq!(one, many);
        }
    }

    #[test]
    fn test_output_is_bounded_by_amplitude_sum() {
        let filter = RidgedNoiseFilter::new(0, 0);
        let settings = unfloored(8, 1.0);
        // 1 + 0.5 + 0.25 + ... for eight octaves
        let amplitude_sum = (0..8).map(|i| 0.5f32.powi(i)).sum::<f32>();
        for point in POINTS {
            let value = filter.evaluate(&settings, point);
            assert!(value >= 0.0);
            assert!(value <= amplitude_sum + 1e-5, "value {} over {}", value, amplitude_sum);
        }
    }

    #[test]
    fn test_default_min_value_flattens_low_ground() {
        let filter = RidgedNoiseFilter::new(0, 0);
        let settings = RidgedNoiseSettings::default();
        // A single octave never exceeds 1, which is exactly the default floor.
        for point in POINTS {
            assert_eq!(filter.evaluate(&settings, point), 0.0);
        }
    }
}
