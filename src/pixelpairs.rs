// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the relative distance
//! between the colors that make them up, channel by channel:
//!
//! ```text
//! |Δ|² = (Δr)²+(Δg)²+(Δb)²
//! ```

use image::{Pixel, Primitive};
use num_traits::NumCast;

/// (Pixel, Pixel) -> Energy
///
/// The sum over the red, green, and blue channels of the squared
/// difference between the two pixels.  Grayscale and alpha-bearing
/// pixels go through their RGB representation, which makes this work
/// for every buffer the image crate can decode.
#[inline]
pub fn energy_of_pair_rgb<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.channels()
        .iter()
        .zip(c2.channels())
        .map(|(a, b)| {
            let a: f64 = NumCast::from(*a).unwrap();
            let b: f64 = NumCast::from(*b).unwrap();
            (a - b) * (a - b)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn the_pair_energy_sums_the_squared_channel_deltas() {
        let p1 = *Rgb::from_slice(&[10u8, 20, 30]);
        let p2 = *Rgb::from_slice(&[13u8, 16, 30]);
        assert_eq!(energy_of_pair_rgb(&p1, &p2), 9.0 + 16.0);
    }

    #[test]
    fn the_pair_energy_is_symmetric() {
        let p1 = *Rgb::from_slice(&[0u8, 128, 255]);
        let p2 = *Rgb::from_slice(&[255u8, 128, 0]);
        assert_eq!(energy_of_pair_rgb(&p1, &p2), energy_of_pair_rgb(&p2, &p1));
    }
}
