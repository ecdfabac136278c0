use rasterfx::{Filter, FilterContext, FilterKind, PixelBuffer, RasterFxResult, ThresholdMode};

use crate::slider::scale_slider;

/// UI-side state: the loaded image plus the current filter selection.
///
/// Nothing is drawn until an image has been loaded.
pub struct Session {
    original: Option<PixelBuffer>,
    kind: FilterKind,
    param: Param,
    threshold_mode: ThresholdMode,
}

/// Where the filter parameter comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Param {
    /// Filter default.
    Default,
    /// A 0–255 slider position, discretized per filter.
    Slider(u8),
    /// An explicit value, used as-is.
    Value(f64),
}

impl Session {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            original: None,
            kind,
            param: Param::Default,
            threshold_mode: ThresholdMode::default(),
        }
    }

    pub fn load(&mut self, image: PixelBuffer) {
        tracing::info!(
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.original = Some(image);
    }

    pub fn set_param(&mut self, param: Param) {
        self.param = param;
    }

    pub fn set_threshold_mode(&mut self, mode: ThresholdMode) {
        self.threshold_mode = mode;
    }

    /// Filter for the current selection.
    pub fn filter(&self) -> RasterFxResult<Filter> {
        let scalar = match self.param {
            Param::Default => None,
            Param::Slider(pos) => scale_slider(self.kind, pos),
            Param::Value(v) => Some(v),
        };
        let mut filter = Filter::from_kind(self.kind, scalar)?;
        if let Filter::Threshold { mode, .. } = &mut filter {
            *mode = self.threshold_mode;
        }
        Ok(filter)
    }

    /// Filter the loaded image, or `None` if no image has been loaded yet.
    pub fn render(&self, ctx: &FilterContext) -> RasterFxResult<Option<PixelBuffer>> {
        let Some(original) = &self.original else {
            tracing::debug!("render skipped: no image loaded");
            return Ok(None);
        };
        let filter = self.filter()?;
        ctx.apply(&filter, original).map(Some)
    }
}
