//! The ways a carve request can fail
//!
//! Codec failures are not wrapped here; the image crate's errors pass
//! through to the caller untouched.  Seam-length mismatches are engine
//! bugs and panic rather than surface as a variant.

use failure::Fail;

/// Everything the carving engine itself can reject.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A reduction request at least as large as the image itself: the
    /// result would have zero or negative extent.  Caught before any
    /// energy work begins, so nothing has been computed or copied when
    /// this comes back.
    #[fail(
        display = "cannot remove {} {}s from an image with only {} of them",
        count, axis, extent
    )]
    InvalidDimension {
        axis: &'static str,
        count: u32,
        extent: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_reads_naturally() {
        let err = CarveError::InvalidDimension {
            axis: "column",
            count: 8,
            extent: 5,
        };
        assert_eq!(
            err.to_string(),
            "cannot remove 8 columns from an image with only 5 of them"
        );
    }
}
