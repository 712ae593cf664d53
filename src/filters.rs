// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One-pass pixel filters
//!
//! The two non-carving operations the command line exposes: color
//! inversion, and rendering an energy map as a grayscale image so the
//! seam search's view of the picture can be eyeballed.  Both return a
//! brand-new buffer; callers keep an unmodified original.

use crate::cq;
use crate::gridmap::Grid;
use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use itertools::iproduct;

/// Invert every channel of every pixel.
pub fn negative(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let c = image.get_pixel(x, y).channels();
        out.put_pixel(
            x,
            y,
            *Rgb::from_slice(&[255 - c[0], 255 - c[1], 255 - c[2]]),
        );
    }
    out
}

/// Render an energy map as an 8-bit grayscale image, scaled so the
/// highest-energy pixel lands at full brightness.  A flat map has
/// nothing to scale and comes out black.
pub fn energy_to_image(energy: &Grid<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let peak = iproduct!(0..height, 0..width).fold(0.0_f64, |peak, (y, x)| {
        cq!(energy[(x, y)] > peak, energy[(x, y)], peak)
    });

    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let intensity = cq!(peak > 0.0, (255.0 * energy[(x, y)] / peak) as u8, 0);
        out.put_pixel(x, y, *Luma::from_slice(&[intensity]));
    }
    out
}
