use rand::Rng;

/// A short, human-typeable seed (at most eight digits).
pub fn generate_seed8() -> u32 {
    let mut rng = rand::rng();
    rng.random_range(0..100_000_000)
}

pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Noise seed for the layer at `layer_index`.
///
/// Planet seed 0 keeps every layer on the reference permutation table.
pub fn layer_seed(planet_seed: u32, layer_index: usize) -> u32 {
    if planet_seed == 0 {
        return 0;
    }
    let mixed = splitmix64(((planet_seed as u64) << 32) | layer_index as u64);
    // Zero would silently fall back to the reference table.
    (mixed as u32).max(1)
}
