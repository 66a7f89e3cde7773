//! Procedural planet shapes from layered Simplex noise.
//!
//! A [`ShapeGenerator`] owns an ordered list of noise layers. Each layer pairs
//! its settings with a [`NoiseFilter`]; the generator sums and masks the
//! filter outputs to push points on the unit sphere out to the planet surface.
//! Settings are edited through pending copies and committed by
//! [`ShapeGenerator::has_changed`], which tells the caller when to rebuild
//! the mesh.

pub mod colour;
pub mod config;
pub mod constants;
pub mod edit;
pub mod error;
pub mod filter;
pub mod mesh_data;
pub mod min_max;
pub mod noise;
pub mod preset;
pub mod prelude;
pub mod settings;
pub mod shape;
pub mod shape_settings;
pub mod tools;

pub use config::{get_config, reload_config};
pub use filter::NoiseFilter;
pub use shape::ShapeGenerator;
