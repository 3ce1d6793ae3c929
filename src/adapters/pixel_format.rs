//! Pixel format conversion for window surfaces.

use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub rgb_len: usize,
    pub rgba_len: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} RGB bytes cannot fill a {} byte RGBA frame",
            self.rgb_len, self.rgba_len
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Expands packed RGB into opaque RGBA. `dst` must hold exactly four bytes
/// for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    if src.len() % 3 != 0 || dst.len() != src.len() / 3 * 4 {
        return Err(FrameSizeMismatch {
            rgb_len: src.len(),
            rgba_len: dst.len(),
        });
    }

    src.par_chunks_exact(3)
        .zip(dst.par_chunks_exact_mut(4))
        .for_each(|(rgb, rgba)| {
            rgba[..3].copy_from_slice(rgb);
            rgba[3] = 255;
        });

    Ok(())
}
