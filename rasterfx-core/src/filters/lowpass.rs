use crate::{
    convolve::{engine, kernel::Kernel},
    foundation::{
        buffer::PixelBuffer,
        error::{RasterFxError, RasterFxResult},
        math::ChannelPolicy,
    },
};

/// Kernel side used when no lowpass size is supplied.
pub const DEFAULT_LOWPASS_SIZE: u32 = 5;
/// Largest accepted lowpass kernel side.
pub const MAX_LOWPASS_SIZE: u32 = 255;

/// Box-average kernel for the lowpass filter.
pub fn lowpass_kernel(size: u32) -> RasterFxResult<Kernel> {
    if size == 0 || size > MAX_LOWPASS_SIZE {
        return Err(RasterFxError::invalid_parameter(format!(
            "lowpass size must be in 1..={MAX_LOWPASS_SIZE}, got {size}"
        )));
    }
    Kernel::uniform(size)
}

/// Box blur with a `size * size` averaging kernel (zero-padded edges, opaque output).
pub fn lowpass(
    src: &PixelBuffer,
    size: u32,
    policy: ChannelPolicy,
) -> RasterFxResult<PixelBuffer> {
    lowpass_in(src, size, policy, None)
}

pub(crate) fn lowpass_in(
    src: &PixelBuffer,
    size: u32,
    policy: ChannelPolicy,
    pool: Option<&rayon::ThreadPool>,
) -> RasterFxResult<PixelBuffer> {
    let kernel = lowpass_kernel(size)?;
    Ok(match pool {
        Some(pool) => engine::convolve_in_pool(src, &kernel, policy, pool),
        None => engine::convolve(src, &kernel, policy),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/filters/lowpass.rs"]
mod tests;
