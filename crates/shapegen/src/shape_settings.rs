use crate::constants::DEFAULT_RADIUS;
use crate::edit::{Editable, LiveEdit};
use crate::settings::{FilterType, NoiseSettings};

/// One slot of the layer arena: the committed settings plus the copy the UI edits.
#[derive(Debug, Clone)]
pub struct NoiseLayer {
    settings: Editable<NoiseSettings>,
}

impl NoiseLayer {
    pub fn new(filter_type: FilterType) -> Self {
        Self::from_settings(NoiseSettings::new(filter_type))
    }

    pub fn from_settings(settings: NoiseSettings) -> Self {
        Self {
            settings: Editable::new(settings),
        }
    }

    pub fn filter_type(&self) -> FilterType {
        self.settings.authoritative().filter_type()
    }

    /// Committed settings, the ones the filters evaluate.
    pub fn noise_settings(&self) -> &NoiseSettings {
        self.settings.authoritative()
    }

    pub fn pending(&self) -> &NoiseSettings {
        self.settings.pending()
    }

    pub fn pending_mut(&mut self) -> &mut NoiseSettings {
        self.settings.pending_mut()
    }

    pub(crate) fn editable_mut(&mut self) -> &mut Editable<NoiseSettings> {
        &mut self.settings
    }
}

/// Planet radius plus the ordered noise layers.
///
/// Equality and assignment only look at `radius`. Layer edits are tracked per
/// layer by the filters, so they never show up here.
#[derive(Debug, Clone)]
pub struct ShapeSettings {
    pub radius: f32,
    pub noise_layers: Vec<NoiseLayer>,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            noise_layers: Vec::new(),
        }
    }
}

impl ShapeSettings {
    pub fn with_radius(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }
}

impl PartialEq for ShapeSettings {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl LiveEdit for ShapeSettings {
    fn assign(&mut self, other: &Self) {
        self.radius = other.radius;
    }

    fn validate(&mut self) {
        crate::settings::finite_or(&mut self.radius, DEFAULT_RADIUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_layers() {
        let mut with_layers = ShapeSettings::with_radius(2.0);
        with_layers.noise_layers.push(NoiseLayer::new(FilterType::Simple));
        let bare = ShapeSettings::with_radius(2.0);

        assert_eq!(with_layers, bare);
        assert_ne!(with_layers, ShapeSettings::with_radius(2.5));
    }

    #[test]
    fn test_assign_keeps_layers() {
        let mut target = ShapeSettings::with_radius(1.0);
        target.noise_layers.push(NoiseLayer::new(FilterType::Ridged));

        target.assign(&ShapeSettings::with_radius(2.0));

        assert_eq!(target.radius, 2.0);
        assert_eq!(target.noise_layers.len(), 1);
    }

    #[test]
    fn test_layer_pending_starts_equal() {
        let mut layer = NoiseLayer::new(FilterType::Simple);
        assert_eq!(layer.pending(), layer.noise_settings());

        layer.pending_mut().simple_mut().strength = 3.0;
        assert_eq!(layer.noise_settings().simple().strength, 1.0);
        assert_eq!(layer.filter_type(), FilterType::Simple);
    }
}
