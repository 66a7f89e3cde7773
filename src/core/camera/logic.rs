use std::f32::consts::FRAC_PI_2;

/// Distance from the planet centre at which a sphere of `radius`, padded by
/// `margin`, just fits inside a vertical field of view of `fov_y` radians.
pub fn framing_distance(radius: f32, fov_y: f32, margin: f32) -> f32 {
    let half_fov = (fov_y * 0.5).clamp(0.01, FRAC_PI_2);
    radius * margin / half_fov.sin()
}

/// Exponential-style step from `current` towards `target`.
pub fn approach(current: f32, target: f32, speed: f32, delta_time: f32) -> f32 {
    let t = (speed * delta_time).clamp(0.0, 1.0);
    current + (target - current) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f32::consts::{FRAC_PI_4, SQRT_2};

    #[rstest]
    #[case(1.0, 1.0, SQRT_2)]
    #[case(2.0, 1.0, 2.0 * SQRT_2)]
    #[case(1.0, 1.5, 1.5 * SQRT_2)]
    fn test_framing_distance_for_right_angle_view(
        #[case] radius: f32,
        #[case] margin: f32,
        #[case] expected: f32,
    ) {
        let distance = framing_distance(radius, FRAC_PI_2, margin);
        assert!((distance - expected).abs() < 1e-5, "got {}", distance);
    }

    #[test]
    fn test_narrower_view_backs_off_further() {
        assert!(framing_distance(1.0, FRAC_PI_4, 1.0) > framing_distance(1.0, FRAC_PI_2, 1.0));
    }

    #[rstest]
    #[case(0.0, 4.0)]
    #[case(1.0, 10.0)]
    #[case(10.0, 10.0)]
    fn test_approach(#[case] delta_time: f32, #[case] expected: f32) {
        assert_eq!(approach(4.0, 10.0, 1.0, delta_time), expected);
    }

    #[test]
    fn test_approach_moves_part_way() {
        let next = approach(4.0, 10.0, 3.0, 0.1);
        assert!(next > 4.0 && next < 10.0);
    }
}
