//! Seedable 3D Simplex noise.
//!
//! Reference Simplex implementation over a 512-entry permutation table. The
//! output is scaled by 32 so it lands roughly in [-1, 1]; the bound is not
//! guaranteed and small overshoots are possible.

use glam::Vec3;
use ::noise::NoiseFn;

/// Skew factor for 3D: (sqrt(4) - 1) / 3
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3D: (1 - 1/sqrt(4)) / 3
const G3: f64 = 1.0 / 6.0;

const TABLE_SIZE: usize = 256;

/// Ken Perlin's reference permutation.
const SOURCE: [u8; TABLE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// The 12 cube-edge gradients.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// A 3D Simplex noise generator.
///
/// The permutation table is fixed once the generator is built, so the same
/// seed always produces the same field.
#[derive(Debug, Clone)]
pub struct Noise {
    seed: u32,
    /// Doubled table so corner hashing never needs a modulo.
    perm: [u8; TABLE_SIZE * 2],
}

impl Default for Noise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Noise {
    /// Builds the permutation table for `seed`.
    ///
    /// Seed 0 keeps the reference table. Any other seed XORs every entry with
    /// each of the seed's four little-endian bytes in turn.
    pub fn new(seed: u32) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        let bytes = seed.to_le_bytes();
        for (i, &value) in SOURCE.iter().enumerate() {
            let scrambled = if seed == 0 {
                value
            } else {
                bytes.iter().fold(value, |acc, b| acc ^ b)
            };
            perm[i] = scrambled;
            perm[i + TABLE_SIZE] = scrambled;
        }
        Self { seed, perm }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples the noise field at `point`.
    pub fn evaluate(&self, point: Vec3) -> f32 {
        self.sample(point.x as f64, point.y as f64, point.z as f64) as f32
    }

    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew the input space to find the containing simplex cell
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let k = (z + s).floor() as i32;

        // Unskew the cell origin back to (x, y, z) space
        let t = (i + j + k) as f64 * G3;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        // Offsets of the second and third corners, picked by the ordering of x0, y0, z0
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = i.rem_euclid(TABLE_SIZE as i32) as usize;
        let jj = j.rem_euclid(TABLE_SIZE as i32) as usize;
        let kk = k.rem_euclid(TABLE_SIZE as i32) as usize;

        let n0 = self.corner(ii, jj, kk, x0, y0, z0);
        let n1 = self.corner(ii + i1, jj + j1, kk + k1, x1, y1, z1);
        let n2 = self.corner(ii + i2, jj + j2, kk + k2, x2, y2, z2);
        let n3 = self.corner(ii + 1, jj + 1, kk + 1, x3, y3, z3);

        (n0 + n1 + n2 + n3) * 32.0
    }

    fn corner(&self, i: usize, j: usize, k: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = 0.6 - x * x - y * y - z * z;
        if t <= 0.0 {
            return 0.0;
        }
        let hash = self.perm[i + self.perm[j + self.perm[k] as usize] as usize] as usize;
        let g = GRAD3[hash % 12];
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
    }
}

impl NoiseFn<f64, 3> for Noise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.sample(point[0], point[1], point[2])
    }
}
