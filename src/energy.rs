// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the dual-gradient energy map: per pixel,
//! the square root of the summed squared channel differences of its
//! horizontal and vertical neighbor pairs.  Seams are chosen to
//! minimize the total energy they traverse, so a pixel's energy is its
//! claim to being visually important.

use crate::cq;
use crate::gridmap::Grid;
use crate::pixelpairs::energy_of_pair_rgb;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

// The border columns have no symmetric neighbor pair of their own, so
// they take the gradient of the adjacent interior column (column 1 on
// the left edge, column width-2 on the right) rather than a one-sided
// or zero-padded difference, which would read as artificially calm
// borders and attract every seam.  The original statement of the rule
// is recursive; one step inward is where the recursion bottoms out, so
// a direct lookup does the same job.
fn gradient_x<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let width = image.width();
    if width < 3 {
        // No interior column exists to measure or borrow from.
        return 0.0;
    }
    let x = cq!(x == 0, 1, cq!(x == width - 1, width - 2, x));
    energy_of_pair_rgb(&image.get_pixel(x - 1, y), &image.get_pixel(x + 1, y))
}

// The same rule, turned ninety degrees: border rows borrow from row 1
// and row height-2.
fn gradient_y<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let height = image.height();
    if height < 3 {
        return 0.0;
    }
    let y = cq!(y == 0, 1, cq!(y == height - 1, height - 2, y));
    energy_of_pair_rgb(&image.get_pixel(x, y - 1), &image.get_pixel(x, y + 1))
}

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; every pixel goes through its RGB representation, as
/// the energy formula is defined over the three color channels.  The
/// result has the image's dimensions, and every value is finite and
/// non-negative.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = (gradient_x(image, x, y) + gradient_y(image, x, y)).sqrt();
    }
    emap
}
