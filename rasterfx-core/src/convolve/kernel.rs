use crate::foundation::error::{RasterFxError, RasterFxResult};

/// A square correlation kernel stored row-major.
///
/// `side` is the rounded square root of the weight count and `half_side = side / 2` (floor) is the
/// offset from the top-left cell to the cell laid over the output pixel. Even sides are allowed
/// and keep that floor-division centering, so they sample one more cell up/left than down/right.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Vec<f64>,
    side: usize,
}

impl Kernel {
    /// Build a kernel from `side * side` row-major weights.
    pub fn new(weights: Vec<f64>) -> RasterFxResult<Self> {
        if weights.is_empty() {
            return Err(RasterFxError::invalid_kernel("kernel must have at least one weight"));
        }
        let side = (weights.len() as f64).sqrt().round() as usize;
        if side.checked_mul(side) != Some(weights.len()) {
            return Err(RasterFxError::invalid_kernel(format!(
                "kernel weight count {} is not a perfect square",
                weights.len()
            )));
        }
        if let Some(i) = weights.iter().position(|w| !w.is_finite()) {
            return Err(RasterFxError::invalid_kernel(format!(
                "kernel weight {i} is not finite"
            )));
        }
        Ok(Self { weights, side })
    }

    /// Averaging kernel of `side * side` cells, each weighted `1 / (side * side)`.
    pub fn uniform(side: u32) -> RasterFxResult<Self> {
        if side == 0 {
            return Err(RasterFxError::invalid_kernel("kernel side must be >= 1"));
        }
        let side = side as usize;
        let total = side
            .checked_mul(side)
            .ok_or_else(|| RasterFxError::invalid_kernel("kernel size overflow"))?;
        let value = 1.0 / total as f64;
        Ok(Self {
            weights: vec![value; total],
            side,
        })
    }

    /// Kernel side length in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// `side / 2`, rounded down.
    pub fn half_side(&self) -> usize {
        self.side / 2
    }

    /// Row-major weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at kernel cell `(kx, ky)`.
    pub fn weight(&self, kx: usize, ky: usize) -> Option<f64> {
        if kx >= self.side || ky >= self.side {
            return None;
        }
        Some(self.weights[ky * self.side + kx])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/kernel.rs"]
mod tests;
