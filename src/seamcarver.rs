// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The seam removers, and the SeamCarver driver that validates a
//! reduction request and runs the energy → seam → removal cycle until
//! the image is small enough.

use crate::cq;
use crate::error::CarveError;
use crate::seamfinder::{DualGradient, SeamFinder};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// Copy `image` minus one vertical seam: per row, every pixel left of
/// the seam column goes straight across, the seam pixel is dropped, and
/// everything right of it slides one column left.  The result is one
/// column narrower and exactly as tall.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    // A mismatched seam is an engine bug, not a user error.
    assert_eq!(
        seam.len(),
        height as usize,
        "a vertical seam must hold one column per row"
    );

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width {
            if x == cut {
                continue;
            }
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// The transposed analogue: drop one pixel per column, pulling the
/// pixels below it one row up.  One row shorter, exactly as wide.
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert_eq!(
        seam.len(),
        width as usize,
        "a horizontal seam must hold one row per column"
    );

    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let cut = seam[x as usize];
        for y in 0..height {
            if y == cut {
                continue;
            }
            imgbuf.put_pixel(x, cq!(y < cut, y, y - 1), image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        SeamCarver { image }
    }

    // The entire energy map and cost grid are recalculated for every
    // seam.  Removing a seam changes which pixels are adjacent, so a
    // map cached across removals would be measuring the wrong image.

    /// Given counts of columns and rows to remove, repeatedly carve
    /// seams out of the image and return the reduced copy.  Both counts
    /// must leave at least one column and one row standing; an
    /// oversized request fails before any seam work starts.
    pub fn reduce(
        &self,
        width_count: u32,
        height_count: u32,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        if width_count >= width {
            return Err(CarveError::InvalidDimension {
                axis: "column",
                count: width_count,
                extent: width,
            });
        }
        if height_count >= height {
            return Err(CarveError::InvalidDimension {
                axis: "row",
                count: height_count,
                extent: height,
            });
        }

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image.pixels().for_each(|p| scratch[(p.0, p.1)] = p.2);

        // All of the width comes out before any of the height.
        // Interleaving the two directions would pick different seams;
        // this sequential order is the inherited behavior, a
        // simplification rather than a joint optimization.
        for _ in 0..width_count {
            let seam = DualGradient::new(&scratch).find_vertical_seam();
            scratch = remove_vertical_seam(&scratch, &seam);
        }
        for _ in 0..height_count {
            let seam = DualGradient::new(&scratch).find_horizontal_seam();
            scratch = remove_horizontal_seam(&scratch, &seam);
        }
        Ok(scratch)
    }
}
