use crate::foundation::{buffer::PixelBuffer, math::ChannelPolicy};

/// Level used when no saturation level is supplied.
pub const DEFAULT_SATURATION: f64 = 2.0;

/// Luminance weights of the saturation matrix (R, G, B).
const SAT_WEIGHTS: [f64; 3] = [0.3086, 0.6084, 0.0820];

/// Saturation color matrix: luma weights blended with identity by `level`.
///
/// `level = 1` is the identity, `0` collapses every pixel to gray, values above 1 push colors
/// away from gray and negative values invert hue around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationMatrix {
    rows: [[f64; 3]; 3],
}

impl SaturationMatrix {
    /// Build the matrix for `level`.
    pub fn new(level: f64) -> Self {
        let inv = 1.0 - level;
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = inv * SAT_WEIGHTS[j];
                if i == j {
                    *cell += level;
                }
            }
        }
        Self { rows }
    }

    /// Matrix rows; row `i` produces output channel `i`.
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let dot = |row: &[f64; 3]| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
        [dot(&self.rows[0]), dot(&self.rows[1]), dot(&self.rows[2])]
    }
}

/// Apply the saturation matrix for `level` to R, G and B. Alpha is copied unchanged and
/// out-of-range results are stored through `policy`.
pub fn saturation(src: &PixelBuffer, level: f64, policy: ChannelPolicy) -> PixelBuffer {
    let matrix = SaturationMatrix::new(level);
    let mut out = src.clone();

    for px in out.data_mut().chunks_exact_mut(4) {
        let [r, g, b] = matrix.apply([f64::from(px[0]), f64::from(px[1]), f64::from(px[2])]);
        px[0] = policy.store(r);
        px[1] = policy.store(g);
        px[2] = policy.store(b);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/filters/saturation.rs"]
mod tests;
