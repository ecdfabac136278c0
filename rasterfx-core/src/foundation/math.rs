/// How a computed channel value is stored into an 8-bit channel.
///
/// Filters compute in `f64` and never treat out-of-range results as errors; this policy decides
/// what lands in the output byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Clamp to `[0, 255]` and round half to even. NaN stores 0.
    #[default]
    Clamp,
    /// Truncate toward zero and reduce modulo 256. NaN and infinities store 0.
    Wrap,
}

impl ChannelPolicy {
    /// Convert a computed channel value to its stored byte.
    pub fn store(self, v: f64) -> u8 {
        match self {
            Self::Clamp => {
                if v.is_nan() {
                    return 0;
                }
                v.clamp(0.0, 255.0).round_ties_even() as u8
            }
            Self::Wrap => {
                if !v.is_finite() {
                    return 0;
                }
                v.trunc().rem_euclid(256.0) as u8
            }
        }
    }
}

/// Rec. 709 luma weights used by the luma threshold.
pub(crate) const LUMA_709: [f64; 3] = [0.2126, 0.7152, 0.0722];

pub(crate) fn luma_709(r: u8, g: u8, b: u8) -> f64 {
    LUMA_709[0] * f64::from(r) + LUMA_709[1] * f64::from(g) + LUMA_709[2] * f64::from(b)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
