use rayon::prelude::*;

use crate::{
    convolve::kernel::Kernel,
    foundation::{buffer::PixelBuffer, math::ChannelPolicy},
};

/// Correlate `src` with `kernel`, producing a new buffer of the same dimensions.
///
/// Samples falling outside the image contribute nothing (zero padding). R, G and B are
/// accumulated in `f64` in row-major kernel order and stored through `policy`; output alpha is
/// always 255.
#[tracing::instrument(
    skip(src, kernel),
    fields(width = src.width(), height = src.height(), side = kernel.side())
)]
pub fn convolve(src: &PixelBuffer, kernel: &Kernel, policy: ChannelPolicy) -> PixelBuffer {
    let mut out = src.zeroed_like();
    if src.is_empty() {
        return out;
    }
    let stride = src.stride();
    for (y, row) in out.data_mut().chunks_exact_mut(stride).enumerate() {
        convolve_row(src, kernel, policy, y, row);
    }
    out
}

/// Row-partitioned [`convolve`] executed on `pool`.
///
/// Every output row reads only the immutable source and writes its own slice, so the result is
/// byte-identical to the sequential path.
#[tracing::instrument(
    skip(src, kernel, pool),
    fields(width = src.width(), height = src.height(), side = kernel.side())
)]
pub fn convolve_in_pool(
    src: &PixelBuffer,
    kernel: &Kernel,
    policy: ChannelPolicy,
    pool: &rayon::ThreadPool,
) -> PixelBuffer {
    let mut out = src.zeroed_like();
    if src.is_empty() {
        return out;
    }
    let stride = src.stride();
    pool.install(|| {
        out.data_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| convolve_row(src, kernel, policy, y, row));
    });
    out
}

fn convolve_row(
    src: &PixelBuffer,
    kernel: &Kernel,
    policy: ChannelPolicy,
    y: usize,
    dst: &mut [u8],
) {
    let side = kernel.side() as isize;
    let half = kernel.half_side() as isize;
    let w = src.width() as isize;
    let h = src.height() as isize;
    let data = src.data();
    let weights = kernel.weights();

    for (x, out) in dst.chunks_exact_mut(4).enumerate() {
        let mut acc = [0f64; 3];
        for ky in 0..side {
            let sy = y as isize + ky - half;
            if sy < 0 || sy >= h {
                continue;
            }
            for kx in 0..side {
                let sx = x as isize + kx - half;
                if sx < 0 || sx >= w {
                    continue;
                }
                let idx = ((sy * w + sx) as usize) * 4;
                let weight = weights[(ky * side + kx) as usize];
                for c in 0..3 {
                    acc[c] += weight * f64::from(data[idx + c]);
                }
            }
        }
        out[0] = policy.store(acc[0]);
        out[1] = policy.store(acc[1]);
        out[2] = policy.store(acc[2]);
        out[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/engine.rs"]
mod tests;
