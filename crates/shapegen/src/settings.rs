use crate::constants::MAX_NOISE_LAYERS;
use crate::edit::LiveEdit;
use crate::error::ShapeGenError;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    Simple,
    Ridged,
}

impl FilterType {
    pub const ALL: [FilterType; 2] = [FilterType::Simple, FilterType::Ridged];

    pub fn label(self) -> &'static str {
        match self {
            FilterType::Simple => "Simple",
            FilterType::Ridged => "Ridged",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterType {
    type Err = ShapeGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(FilterType::Simple),
            "ridged" => Ok(FilterType::Ridged),
            _ => Err(ShapeGenError::UnsupportedFilterType(s.to_string())),
        }
    }
}

impl TryFrom<u8> for FilterType {
    type Error = ShapeGenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FilterType::Simple),
            1 => Ok(FilterType::Ridged),
            other => Err(ShapeGenError::UnsupportedFilterType(other.to_string())),
        }
    }
}

/// Octave (fBm) parameters shared by every filter type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleNoiseSettings {
    /// Final multiplier applied after the sea-level floor.
    pub strength: f32,
    /// Number of octaves.
    pub num_layers: u32,
    /// Frequency of the first octave.
    pub base_roughness: f32,
    /// Per-octave frequency multiplier (lacunarity).
    pub roughness: f32,
    /// Per-octave amplitude multiplier (gain).
    pub persistence: f32,
    /// Offset added to every sample position.
    pub center: Vec3,
    /// Values below this are flattened to zero.
    pub min_value: f32,
}

impl Default for SimpleNoiseSettings {
    fn default() -> Self {
        Self {
            strength: 1.0,
            num_layers: 1,
            base_roughness: 1.0,
            roughness: 2.0,
            persistence: 0.5,
            center: Vec3::ZERO,
            min_value: 1.0,
        }
    }
}

impl SimpleNoiseSettings {
    /// Clamps the octave count and puts defaults in place of non-finite values.
    pub fn validate(&mut self) {
        let defaults = Self::default();
        self.num_layers = self.num_layers.clamp(1, MAX_NOISE_LAYERS);
        finite_or(&mut self.strength, defaults.strength);
        finite_or(&mut self.base_roughness, defaults.base_roughness);
        finite_or(&mut self.roughness, defaults.roughness);
        finite_or(&mut self.persistence, defaults.persistence);
        finite_or(&mut self.min_value, defaults.min_value);
        if !self.center.is_finite() {
            self.center = defaults.center;
        }
    }
}

pub(crate) fn finite_or(value: &mut f32, fallback: f32) {
    if !value.is_finite() {
        *value = fallback;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgedNoiseSettings {
    pub simple: SimpleNoiseSettings,
    /// How strongly a sharp octave narrows the ridges of the next one.
    pub weight_multiplier: f32,
}

impl RidgedNoiseSettings {
    pub fn validate(&mut self) {
        self.simple.validate();
        finite_or(&mut self.weight_multiplier, Self::default().weight_multiplier);
    }
}

impl Default for RidgedNoiseSettings {
    fn default() -> Self {
        Self {
            simple: SimpleNoiseSettings::default(),
            weight_multiplier: 0.8,
        }
    }
}

/// Filter-specific payload. The variant decides which filter evaluates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayerParams {
    Simple(SimpleNoiseSettings),
    Ridged(RidgedNoiseSettings),
}

impl LayerParams {
    pub fn filter_type(&self) -> FilterType {
        match self {
            LayerParams::Simple(_) => FilterType::Simple,
            LayerParams::Ridged(_) => FilterType::Ridged,
        }
    }
}

/// Settings of one noise layer.
///
/// The filter type is picked at creation and cannot change afterwards, so a
/// committed edit never invalidates the filter built for this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Multiply this layer by the raw value of layer 0.
    #[serde(default = "default_true")]
    pub use_first_layer_as_mask: bool,
    params: LayerParams,
}

fn default_true() -> bool {
    true
}

impl NoiseSettings {
    pub fn new(filter_type: FilterType) -> Self {
        let params = match filter_type {
            FilterType::Simple => LayerParams::Simple(SimpleNoiseSettings::default()),
            FilterType::Ridged => LayerParams::Ridged(RidgedNoiseSettings::default()),
        };
        Self::from_params(params)
    }

    pub fn from_params(params: LayerParams) -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: true,
            params,
        }
    }

    pub fn filter_type(&self) -> FilterType {
        self.params.filter_type()
    }

    pub fn params(&self) -> &LayerParams {
        &self.params
    }

    /// The octave parameters, whatever the filter type.
    pub fn simple(&self) -> &SimpleNoiseSettings {
        match &self.params {
            LayerParams::Simple(simple) => simple,
            LayerParams::Ridged(ridged) => &ridged.simple,
        }
    }

    pub fn simple_mut(&mut self) -> &mut SimpleNoiseSettings {
        match &mut self.params {
            LayerParams::Simple(simple) => simple,
            LayerParams::Ridged(ridged) => &mut ridged.simple,
        }
    }

    pub fn ridged(&self) -> Option<&RidgedNoiseSettings> {
        match &self.params {
            LayerParams::Ridged(ridged) => Some(ridged),
            LayerParams::Simple(_) => None,
        }
    }

    pub fn ridged_mut(&mut self) -> Option<&mut RidgedNoiseSettings> {
        match &mut self.params {
            LayerParams::Ridged(ridged) => Some(ridged),
            LayerParams::Simple(_) => None,
        }
    }
}

impl LiveEdit for NoiseSettings {
    fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    fn validate(&mut self) {
        match &mut self.params {
            LayerParams::Simple(simple) => simple.validate(),
            LayerParams::Ridged(ridged) => ridged.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("simple", FilterType::Simple)]
    #[case("Ridged", FilterType::Ridged)]
    #[case(" RIDGED ", FilterType::Ridged)]
    fn test_filter_type_from_str(#[case] input: &str, #[case] expected: FilterType) {
        assert_eq!(input.parse::<FilterType>().ok(), Some(expected));
    }

    #[test]
    fn test_unknown_filter_type_is_rejected() {
        let err = "billow".parse::<FilterType>().unwrap_err();
        assert!(matches!(err, ShapeGenError::UnsupportedFilterType(ref name) if name == "billow"));
        assert!("rigid".parse::<FilterType>().is_err());
        assert!(FilterType::try_from(2u8).is_err());
        assert_eq!(FilterType::try_from(1u8).ok(), Some(FilterType::Ridged));
    }

    #[test]
    fn test_defaults() {
        let settings = NoiseSettings::new(FilterType::Ridged);
        assert!(settings.enabled);
        assert!(settings.use_first_layer_as_mask);
        assert_eq!(settings.filter_type(), FilterType::Ridged);

        let simple = settings.simple();
        assert_eq!(simple.strength, 1.0);
        assert_eq!(simple.num_layers, 1);
        assert_eq!(simple.base_roughness, 1.0);
        assert_eq!(simple.roughness, 2.0);
        assert_eq!(simple.persistence, 0.5);
        assert_eq!(simple.center, Vec3::ZERO);
        assert_eq!(simple.min_value, 1.0);
        assert_eq!(settings.ridged().map(|r| r.weight_multiplier), Some(0.8));
    }

    #[test]
    fn test_equality_includes_variant_fields() {
        let a = NoiseSettings::new(FilterType::Ridged);
        let mut b = a.clone();
        assert_eq!(a, b);

        if let Some(ridged) = b.ridged_mut() {
            ridged.weight_multiplier = 0.5;
        }
        assert_ne!(a, b);

        let mut c = a.clone();
        c.assign(&b);
        assert_eq!(c, b);
    }

    #[test]
    fn test_simple_and_ridged_never_compare_equal() {
        assert_ne!(
            NoiseSettings::new(FilterType::Simple),
            NoiseSettings::new(FilterType::Ridged)
        );
    }

    #[test]
    fn test_simple_settings_have_no_ridged_part() {
        let mut settings = NoiseSettings::new(FilterType::Simple);
        assert!(settings.ridged().is_none());
        assert!(settings.ridged_mut().is_none());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(8, 8)]
    #[case(40, 8)]
    fn test_validate_clamps_octaves(#[case] requested: u32, #[case] expected: u32) {
        let mut settings = NoiseSettings::new(FilterType::Simple);
        settings.simple_mut().num_layers = requested;
        settings.validate();
        assert_eq!(settings.simple().num_layers, expected);
    }

    #[test]
    fn test_validate_replaces_non_finite_values() {
        let mut settings = NoiseSettings::new(FilterType::Ridged);
        settings.simple_mut().strength = f32::NAN;
        settings.simple_mut().persistence = f32::INFINITY;
        settings.simple_mut().center = Vec3::new(0.5, f32::NAN, 0.0);
        settings.simple_mut().roughness = 3.0;
        if let Some(ridged) = settings.ridged_mut() {
            ridged.weight_multiplier = f32::NEG_INFINITY;
        }

        settings.validate();

        let simple = settings.simple();
        assert_eq!(simple.strength, 1.0);
        assert_eq!(simple.persistence, 0.5);
        assert_eq!(simple.center, Vec3::ZERO);
        assert_eq!(simple.roughness, 3.0);
        assert_eq!(settings.ridged().map(|r| r.weight_multiplier), Some(0.8));
    }
}
