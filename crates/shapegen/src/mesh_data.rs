use crate::colour::ElevationGradient;
use crate::constants::{MAX_MESH_RESOLUTION, MIN_MESH_RESOLUTION};
use crate::min_max::MinMax;
use crate::shape::ShapeGenerator;
use glam::Vec3;
use std::collections::HashMap;

/// Raw mesh data that can be used by any rendering engine
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    /// Radius-scaled elevation of every vertex, parallel to `positions`.
    pub elevations: Vec<f32>,
}

impl MeshData {
    /// Samples the unit sphere as a cube sphere and displaces every vertex
    /// through `generator`.
    ///
    /// Each face gets `resolution` x `resolution` vertices. Vertices on shared
    /// cube edges are emitted once so the surface has no seams. The
    /// generator's elevation extrema are reset first, so afterwards they
    /// describe exactly this mesh.
    pub fn from_generator(generator: &mut ShapeGenerator, resolution: u32) -> Self {
        let size = resolution.clamp(MIN_MESH_RESOLUTION, MAX_MESH_RESOLUTION) as usize;
        let step = (size - 1) as f32;

        generator.reset_elevation_min_max();

        let mut positions = Vec::new();
        let mut elevations = Vec::new();
        let mut indices = Vec::new();
        // Keyed by integer lattice coordinates on the unit cube
        let mut lattice_map: HashMap<(i32, i32, i32), u32> = HashMap::new();
        let mut vertex_indices = vec![vec![vec![0u32; size]; size]; 6];

        for (face_idx, face) in vertex_indices.iter_mut().enumerate() {
            for (y, row) in face.iter_mut().enumerate() {
                let v = (y as f32 / step) * 2.0 - 1.0;
                for (x, slot) in row.iter_mut().enumerate() {
                    let u = (x as f32 / step) * 2.0 - 1.0;
                    let cube_point = cube_face_point(face_idx, u, v);

                    let key = (
                        ((cube_point.x + 1.0) * 0.5 * step).round() as i32,
                        ((cube_point.y + 1.0) * 0.5 * step).round() as i32,
                        ((cube_point.z + 1.0) * 0.5 * step).round() as i32,
                    );

                    *slot = *lattice_map.entry(key).or_insert_with(|| {
                        let point_on_unit_sphere = cube_point.normalize();
                        let position = generator.calculate_point_on_planet(point_on_unit_sphere);
                        positions.push(position.to_array());
                        elevations.push(position.length());
                        (positions.len() - 1) as u32
                    });
                }
            }
        }

        for face in &vertex_indices {
            for y in 0..(size - 1) {
                for x in 0..(size - 1) {
                    let i0 = face[y][x];
                    let i1 = face[y][x + 1];
                    let i2 = face[y + 1][x];
                    let i3 = face[y + 1][x + 1];
                    indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
                }
            }
        }

        let normals = smooth_normals(&positions, &indices);

        MeshData {
            positions,
            normals,
            indices,
            elevations,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Colours every vertex by where its elevation sits within `min_max`.
    pub fn colours(&self, gradient: &ElevationGradient, min_max: &MinMax) -> Vec<[f32; 4]> {
        self.elevations
            .iter()
            .map(|&elevation| gradient.sample(min_max.normalise(elevation)))
            .collect()
    }
}

/// Converts 2D cube face coordinates to 3D world coordinates
///
/// Maps normalized coordinates (u, v) in range [-1, 1] on a specific cube face
/// to 3D coordinates on the unit cube surface. Faces are ordered
/// +X, -X, +Y, -Y, +Z, -Z, and increasing `u` then `v` winds counter-clockwise
/// when seen from outside.
pub fn cube_face_point(face_idx: usize, u: f32, v: f32) -> Vec3 {
    match face_idx {
        0 => Vec3::new(1.0, v, -u),
        1 => Vec3::new(-1.0, v, u),
        2 => Vec3::new(u, 1.0, -v),
        3 => Vec3::new(u, -1.0, v),
        4 => Vec3::new(u, v, 1.0),
        5 => Vec3::new(-u, v, -1.0),
        _ => Vec3::ZERO,
    }
}

/// Area-weighted vertex normals. Vertices without any triangle area fall
/// back to their direction from the planet centre.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let face_normal = (pb - pa).cross(pc - pa);
        accumulated[a] += face_normal;
        accumulated[b] += face_normal;
        accumulated[c] += face_normal;
    }

    accumulated
        .iter()
        .zip(positions)
        .map(|(normal, position)| {
            normal
                .try_normalize()
                .unwrap_or_else(|| Vec3::from(*position).normalize_or_zero())
                .to_array()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FilterType;
    use crate::shape_settings::ShapeSettings;
    use rstest::rstest;

    fn sphere(radius: f32) -> ShapeGenerator {
        let mut generator = ShapeGenerator::new(ShapeSettings::with_radius(radius));
        *generator.pending_radius_mut() = radius;
        generator.has_changed();
        generator
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(8)]
    fn test_shared_edges_are_welded(#[case] resolution: u32) {
        let mesh = MeshData::from_generator(&mut sphere(1.0), resolution);
        let n = resolution as usize;
        assert_eq!(mesh.vertex_count(), 6 * n * n - 12 * n + 8);
        assert_eq!(mesh.triangle_count(), 6 * (n - 1) * (n - 1) * 2);
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert_eq!(mesh.elevations.len(), mesh.vertex_count());
    }

    #[test]
    fn test_resolution_is_clamped() {
        let mesh = MeshData::from_generator(&mut sphere(1.0), 0);
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn test_plain_sphere_vertices_sit_on_radius() {
        let mesh = MeshData::from_generator(&mut sphere(2.0), 6);
        for position in &mesh.positions {
            let length = Vec3::from(*position).length();
            assert!((length - 2.0).abs() < 1e-5, "vertex at distance {}", length);
        }
    }

    #[test]
    fn test_normals_point_outward() {
        let mesh = MeshData::from_generator(&mut sphere(1.0), 6);
        for (normal, position) in mesh.normals.iter().zip(&mesh.positions) {
            let dot = Vec3::from(*normal).dot(Vec3::from(*position).normalize());
            assert!(dot > 0.9, "normal is not outward facing, dot was {}", dot);
        }
    }

    #[test]
    fn test_extrema_cover_the_mesh() {
        let mut generator = sphere(1.0);
        generator.add_layer(FilterType::Simple);
        generator.pending_layer_mut(0).unwrap().simple_mut().min_value = 0.0;
        generator.has_changed();

        *generator.pending_radius_mut() = 20.0;
        generator.has_changed();
        generator.calculate_point_on_planet(Vec3::X);
        assert!(generator.elevation_min_max().max >= 20.0);

        *generator.pending_radius_mut() = 1.0;
        generator.has_changed();

        let mesh = MeshData::from_generator(&mut generator, 8);
        let min_max = *generator.elevation_min_max();

        // The far-away sample from before must have been forgotten.
        assert!(min_max.max < 10.0);
        for elevation in &mesh.elevations {
            assert!(*elevation >= min_max.min - 1e-5 && *elevation <= min_max.max + 1e-5);
        }
    }

    #[test]
    fn test_colours_follow_gradient() {
        let mut generator = sphere(1.0);
        let mesh = MeshData::from_generator(&mut generator, 3);
        let gradient = ElevationGradient::default();
        let colours = mesh.colours(&gradient, generator.elevation_min_max());

        // A perfect sphere has a flat range, so everything sits at the bottom stop.
        let bottom = gradient.sample(0.0);
        assert_eq!(colours.len(), mesh.vertex_count());
        assert!(colours.iter().all(|c| *c == bottom));
    }

    #[rstest]
    #[case(0, Vec3::X)]
    #[case(1, Vec3::NEG_X)]
    #[case(2, Vec3::Y)]
    #[case(3, Vec3::NEG_Y)]
    #[case(4, Vec3::Z)]
    #[case(5, Vec3::NEG_Z)]
    fn test_face_centres(#[case] face_idx: usize, #[case] expected: Vec3) {
        assert_eq!(cube_face_point(face_idx, 0.0, 0.0), expected);
    }
}
