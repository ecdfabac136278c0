use crate::foundation::{buffer::PixelBuffer, math::luma_709};

/// Cutoff used when no threshold value is supplied.
pub const DEFAULT_THRESHOLD: f64 = 128.0;

/// Which quantity is compared against the threshold cutoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Each of R, G and B is binarized on its own value.
    #[default]
    PerChannel,
    /// R, G and B all follow the Rec. 709 luma of the pixel.
    Luma,
}

/// Binarize R, G and B to 0 or 255. A channel (or the luma) must be strictly greater than
/// `value` to become 255. Alpha is copied unchanged.
pub fn threshold(src: &PixelBuffer, value: f64, mode: ThresholdMode) -> PixelBuffer {
    let mut out = src.clone();
    let bin = |v: f64| if v > value { 255u8 } else { 0u8 };

    for px in out.data_mut().chunks_exact_mut(4) {
        match mode {
            ThresholdMode::PerChannel => {
                px[0] = bin(f64::from(px[0]));
                px[1] = bin(f64::from(px[1]));
                px[2] = bin(f64::from(px[2]));
            }
            ThresholdMode::Luma => {
                let v = bin(luma_709(px[0], px[1], px[2]));
                px[0] = v;
                px[1] = v;
                px[2] = v;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/filters/threshold.rs"]
mod tests;
