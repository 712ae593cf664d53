// #![deny(missing_docs)]

//! Content-aware image resizing ("seam carving").
//!
//! An image shrinks by repeatedly losing its least visually important
//! connected path of pixels: compute a per-pixel energy map from the
//! local color gradients, find the seam that traverses the least total
//! energy, remove it, and repeat until the requested size comes out.

mod ternary;

pub mod energy;
pub mod error;
pub mod filters;
pub mod gridmap;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;

pub use crate::energy::calculate_energy;
pub use crate::error::CarveError;
pub use crate::filters::{energy_to_image, negative};
pub use crate::gridmap::Grid;
pub use crate::seamcarver::{remove_horizontal_seam, remove_vertical_seam, SeamCarver};
pub use crate::seamfinder::{
    energy_to_horizontal_seam, energy_to_vertical_seam, DualGradient, SeamFinder,
};
