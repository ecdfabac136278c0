use crate::{
    convolve::engine,
    dispatch::{filter::Filter, settings::FilterSettings},
    filters::{lowpass::lowpass_in, saturation::saturation, threshold::threshold},
    foundation::{
        buffer::PixelBuffer,
        error::{RasterFxError, RasterFxResult},
    },
};

/// Applies filters under one set of [`FilterSettings`].
///
/// When `settings.parallel` is set the context owns a dedicated rayon pool, built once and reused
/// for every convolution. Point filters always run on the calling thread.
pub struct FilterContext {
    settings: FilterSettings,
    pool: Option<rayon::ThreadPool>,
}

impl FilterContext {
    /// Validate `settings` and build the worker pool if requested.
    pub fn new(settings: FilterSettings) -> RasterFxResult<Self> {
        settings.validate()?;
        let pool = if settings.parallel {
            Some(build_thread_pool(settings.threads)?)
        } else {
            None
        };
        Ok(Self { settings, pool })
    }

    /// Settings this context was built with.
    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Apply one filter, returning a new buffer with the dimensions of `src`.
    #[tracing::instrument(
        skip(self, filter, src),
        fields(kind = %filter.kind(), width = src.width(), height = src.height())
    )]
    pub fn apply(&self, filter: &Filter, src: &PixelBuffer) -> RasterFxResult<PixelBuffer> {
        let policy = self.settings.channel_policy;
        let out = match filter {
            Filter::None => src.clone(),
            Filter::Threshold { value, mode } => threshold(src, *value, *mode),
            Filter::Saturation { level } => saturation(src, *level, policy),
            Filter::Lowpass { size } => lowpass_in(src, *size, policy, self.pool.as_ref())?,
            Filter::Convolve { kernel } => match &self.pool {
                Some(pool) => engine::convolve_in_pool(src, kernel, policy, pool),
                None => engine::convolve(src, kernel, policy),
            },
        };
        debug_assert!(out.same_dimensions(src));
        Ok(out)
    }

    /// Apply `filters` in order, each one consuming the previous output.
    ///
    /// An empty chain returns a copy of `src`.
    pub fn apply_chain(
        &self,
        filters: &[Filter],
        src: &PixelBuffer,
    ) -> RasterFxResult<PixelBuffer> {
        let Some((first, rest)) = filters.split_first() else {
            return Ok(src.clone());
        };
        let mut cur = self.apply(first, src)?;
        for (step, filter) in rest.iter().enumerate() {
            tracing::debug!(step = step + 1, kind = %filter.kind(), "chain step");
            cur = self.apply(filter, &cur)?;
        }
        Ok(cur)
    }
}

/// Apply one filter with default settings (sequential, clamped channels).
pub fn apply_filter(filter: &Filter, src: &PixelBuffer) -> RasterFxResult<PixelBuffer> {
    sequential().apply(filter, src)
}

/// Apply a filter chain with default settings.
pub fn apply_chain(filters: &[Filter], src: &PixelBuffer) -> RasterFxResult<PixelBuffer> {
    sequential().apply_chain(filters, src)
}

/// Resolve `name` and `param` with [`Filter::from_name`] and apply the result with default
/// settings.
pub fn dispatch(
    name: &str,
    param: Option<f64>,
    src: &PixelBuffer,
) -> RasterFxResult<PixelBuffer> {
    let filter = Filter::from_name(name, param)?;
    apply_filter(&filter, src)
}

fn sequential() -> FilterContext {
    FilterContext {
        settings: FilterSettings::default(),
        pool: None,
    }
}

fn build_thread_pool(threads: Option<usize>) -> RasterFxResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RasterFxError::settings(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/apply.rs"]
mod tests;
