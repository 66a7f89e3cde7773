use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColourStop {
    /// Position along the normalised elevation range, in [0, 1].
    pub position: f32,
    pub colour: [f32; 4],
}

/// Piecewise-linear colour ramp over normalised elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationGradient {
    stops: Vec<ColourStop>,
}

impl ColourStop {
    pub const fn new(position: f32, colour: [f32; 4]) -> Self {
        Self { position, colour }
    }
}

impl Default for ElevationGradient {
    fn default() -> Self {
        Self::new(vec![
            ColourStop::new(0.0, [0.05, 0.12, 0.35, 1.0]), // deep water
            ColourStop::new(0.25, [0.15, 0.35, 0.65, 1.0]), // shallows
            ColourStop::new(0.3, [0.85, 0.78, 0.55, 1.0]), // shore
            ColourStop::new(0.45, [0.25, 0.5, 0.15, 1.0]), // grass
            ColourStop::new(0.75, [0.4, 0.33, 0.27, 1.0]), // rock
            ColourStop::new(1.0, [0.95, 0.95, 1.0, 1.0]), // snow
        ])
    }
}

impl ElevationGradient {
    /// Stops are sorted by position; positions are clamped to [0, 1].
    pub fn new(mut stops: Vec<ColourStop>) -> Self {
        for stop in &mut stops {
            stop.position = stop.position.clamp(0.0, 1.0);
        }
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    pub fn stops(&self) -> &[ColourStop] {
        &self.stops
    }

    pub fn sample(&self, t: f32) -> [f32; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [1.0, 1.0, 1.0, 1.0];
        };
        let t = t.clamp(0.0, 1.0);
        if t <= first.position {
            return first.colour;
        }
        if t >= last.position {
            return last.colour;
        }

        for pair in self.stops.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if t > high.position {
                continue;
            }
            let span = high.position - low.position;
            if span <= f32::EPSILON {
                return high.colour;
            }
            let f = (t - low.position) / span;
            let mut colour = [0.0; 4];
            for (c, (a, b)) in colour.iter_mut().zip(low.colour.iter().zip(high.colour)) {
                *c = a + (b - a) * f;
            }
            return colour;
        }
        last.colour
    }
}
