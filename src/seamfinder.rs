//! Find minimal-energy seams
//!
//! The dynamic-programming search over an energy map: a forward pass
//! accumulating the cheapest cost of reaching every cell, then a
//! backtrack from the cheapest cell of the bottom row.  Horizontal
//! seams ride on the vertical search via a transposition of the energy
//! grid, which keeps the search single-sourced.

use crate::cq;
use crate::energy::calculate_energy;
use crate::gridmap::Grid;
use image::{GenericImageView, Pixel, Primitive};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// engines as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a horizontal seam.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

// The cheapest cumulative cost among the up-to-three parents above
// (x, y).  The same neighbor set feeds the forward pass and the
// backtrack, so it lives in one place.
fn least_above(cost: &Grid<f64>, x: u32, y: u32) -> f64 {
    let maxwidth = cost.width() - 1;
    let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
    range.fold(std::f64::INFINITY, |least, c| {
        cq!(cost[(c, y - 1)] < least, cost[(c, y - 1)], least)
    })
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.  The vector is indexed by row, so
/// retrieval per row is O(1).
pub fn energy_to_vertical_seam(energy: &Grid<f64>) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut cost: Grid<f64> = Grid::new(width, height);

    // The first row costs nothing to reach beyond its own energy.
    for x in 0..width {
        cost[(x, 0)] = energy[(x, 0)];
    }

    // Every later cell costs its own energy plus the cheapest of the
    // up-to-three cells above it.
    for y in 1..height {
        for x in 0..width {
            cost[(x, y)] = energy[(x, y)] + least_above(&cost, x, y);
        }
    }

    // The seam ends at the cheapest cell of the bottom row; on ties,
    // the leftmost.
    let bottom = height - 1;
    let mut seam_col = (0..width).fold(0, |best, x| {
        cq!(cost[(x, bottom)] < cost[(best, bottom)], x, best)
    });

    // Walk back up.  At every step the next column is the left parent
    // if it matches the cheapest cost, else the right parent if it
    // does, else straight up.  Left before right before straight is
    // what keeps seam selection deterministic; don't reorder it.
    let maxwidth = width - 1;
    let mut seam = vec![0u32; height as usize];
    seam[bottom as usize] = seam_col;
    for y in (1..height).rev() {
        let least = least_above(&cost, seam_col, y);
        seam_col = cq!(
            seam_col > 0 && cost[(seam_col - 1, y - 1)] == least,
            seam_col - 1,
            cq!(
                seam_col < maxwidth && cost[(seam_col + 1, y - 1)] == least,
                seam_col + 1,
                seam_col
            )
        );
        seam[(y - 1) as usize] = seam_col;
    }
    seam
}

/// Given an energy map, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates for each
/// pixel in the seam to be removed.  The energy of an image and the
/// energy of its transpose are the same grid with the axes swapped, so
/// the vertical search on the transposed grid is exactly the
/// horizontal search on the original.
pub fn energy_to_horizontal_seam(energy: &Grid<f64>) -> Vec<u32> {
    energy_to_vertical_seam(&energy.transposed())
}

/// The basic seam engine: a reference to the image, plus the pair of
/// functions needed to run the dual-gradient search over it.
pub struct DualGradient<'a, I> {
    image: &'a I,
}

impl<'a, I, P, S> DualGradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        DualGradient { image }
    }
}

impl<'a, I, P, S> SeamFinder for DualGradient<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_horizontal_seam(&self) -> Vec<u32> {
        energy_to_horizontal_seam(&calculate_energy(self.image))
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&calculate_energy(self.image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    #[rustfmt::skip]
    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0,
        9.0, 1.0, 9.0, 8.0, 9.0,
        9.0, 9.0, 9.0, 9.0, 0.0,
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn energy_fixture() -> Grid<f64> {
        Grid::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    fn test_image() -> RgbImage {
        ImageBuffer::from_fn(7, 5, |x, y| {
            *Rgb::from_slice(&[(x * 31) as u8, (y * 53) as u8, ((x * y * 11) % 256) as u8])
        })
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        assert_eq!(energy_to_vertical_seam(&energy_fixture()), [2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        assert_eq!(energy_to_horizontal_seam(&energy_fixture()), [0, 1, 0, 1, 2]);
    }

    #[test]
    fn the_bottom_row_start_is_the_leftmost_minimum() {
        let energy = Grid::from_raw(3, 1, vec![5.0, 2.0, 2.0]).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy), [1]);
    }

    #[test]
    fn backtracking_prefers_the_left_parent_on_ties() {
        let energy = Grid::from_raw(3, 2, vec![3.0, 3.0, 3.0, 9.0, 1.0, 9.0]).unwrap();
        // Row 0 is a three-way tie; the walk from (1, 1) must go left.
        assert_eq!(energy_to_vertical_seam(&energy), [0, 1]);
    }

    #[test]
    fn backtracking_prefers_the_right_parent_over_staying_put() {
        let energy = Grid::from_raw(3, 2, vec![2.0; 6]).unwrap();
        // Everything ties.  The bottom start is leftmost (0); its valid
        // parents (0 and 1) tie, and with no left parent to take, the
        // walk must move right rather than stay.
        assert_eq!(energy_to_vertical_seam(&energy), [1, 0]);
    }

    #[test]
    fn seams_are_connected_and_in_range() {
        let image = test_image();
        let seam = DualGradient::new(&image).find_vertical_seam();
        assert_eq!(seam.len(), 5);
        for x in &seam {
            assert!(*x < 7);
        }
        for step in seam.windows(2) {
            assert!((i64::from(step[0]) - i64::from(step[1])).abs() <= 1);
        }
    }

    #[test]
    fn seam_selection_is_deterministic() {
        let image = test_image();
        let first = DualGradient::new(&image).find_vertical_seam();
        let second = DualGradient::new(&image).find_vertical_seam();
        assert_eq!(first, second);
    }
}
