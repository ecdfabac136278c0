use std::str::FromStr;

use crate::{
    convolve::kernel::Kernel,
    filters::{
        lowpass::{DEFAULT_LOWPASS_SIZE, MAX_LOWPASS_SIZE},
        saturation::DEFAULT_SATURATION,
        threshold::{DEFAULT_THRESHOLD, ThresholdMode},
    },
    foundation::error::{RasterFxError, RasterFxResult},
};

/// Filter identifiers accepted at the string boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Identity copy.
    None,
    /// Binarize channels against a cutoff.
    Threshold,
    /// Saturation color matrix.
    Saturation,
    /// Box-average blur.
    Lowpass,
    /// Correlation with caller-supplied weights.
    Convolve,
}

impl FilterKind {
    /// Every kind, in display order.
    pub const ALL: [FilterKind; 5] = [
        Self::None,
        Self::Threshold,
        Self::Saturation,
        Self::Lowpass,
        Self::Convolve,
    ];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Threshold => "threshold",
            Self::Saturation => "saturation",
            Self::Lowpass => "lowpass",
            Self::Convolve => "convolve",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = RasterFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        match kind.as_str() {
            "none" | "identity" => Ok(Self::None),
            "threshold" => Ok(Self::Threshold),
            "saturation" | "saturate" => Ok(Self::Saturation),
            "lowpass" | "low_pass" | "low-pass" => Ok(Self::Lowpass),
            "convolve" | "convolution" => Ok(Self::Convolve),
            "" => Err(RasterFxError::unknown_filter("filter name must be non-empty")),
            _ => Err(RasterFxError::unknown_filter(format!("'{kind}'"))),
        }
    }
}

/// A fully resolved filter with its typed parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Copy the input unchanged.
    None,
    /// See [`crate::threshold`].
    Threshold {
        /// Cutoff a channel (or luma) must exceed to become 255.
        value: f64,
        /// Per-channel or luma comparison.
        mode: ThresholdMode,
    },
    /// See [`crate::saturation`].
    Saturation {
        /// 0 is grayscale, 1 is unchanged.
        level: f64,
    },
    /// See [`crate::lowpass`].
    Lowpass {
        /// Kernel side in pixels.
        size: u32,
    },
    /// See [`crate::convolve()`].
    Convolve {
        /// Correlation kernel.
        kernel: Kernel,
    },
}

impl Filter {
    /// Which kind of filter this is.
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::None => FilterKind::None,
            Self::Threshold { .. } => FilterKind::Threshold,
            Self::Saturation { .. } => FilterKind::Saturation,
            Self::Lowpass { .. } => FilterKind::Lowpass,
            Self::Convolve { .. } => FilterKind::Convolve,
        }
    }

    /// Resolve a filter identifier and an optional scalar parameter.
    ///
    /// A missing parameter takes the filter default (threshold 128, saturation 2, lowpass 5).
    /// The threshold cutoff must lie in `0..=255`.
    /// Threshold resolves to the per-channel mode. `convolve` needs a weight list and cannot be
    /// built from a scalar; use [`parse_filter`] for it.
    pub fn from_name(name: &str, param: Option<f64>) -> RasterFxResult<Self> {
        Self::from_kind(name.parse()?, param)
    }

    /// Same as [`Filter::from_name`] for an already parsed kind.
    pub fn from_kind(kind: FilterKind, param: Option<f64>) -> RasterFxResult<Self> {
        if let Some(p) = param
            && !p.is_finite()
        {
            return Err(RasterFxError::invalid_parameter(format!(
                "{kind} parameter must be finite"
            )));
        }

        match kind {
            FilterKind::None => Ok(Self::None),
            FilterKind::Threshold => Ok(Self::Threshold {
                value: threshold_value(param.unwrap_or(DEFAULT_THRESHOLD))?,
                mode: ThresholdMode::default(),
            }),
            FilterKind::Saturation => Ok(Self::Saturation {
                level: param.unwrap_or(DEFAULT_SATURATION),
            }),
            FilterKind::Lowpass => {
                let size = match param {
                    Some(p) => lowpass_size_from_f64(p)?,
                    None => DEFAULT_LOWPASS_SIZE,
                };
                Ok(Self::Lowpass { size })
            }
            FilterKind::Convolve => Err(RasterFxError::invalid_parameter(
                "convolve requires kernel weights, not a scalar parameter",
            )),
        }
    }
}

/// Serialized filter description: a kind plus named parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    /// Filter identifier, parsed with [`FilterKind::from_str`].
    pub kind: String,
    /// Named parameters; missing ones take filter defaults.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Resolve a [`FilterSpec`] into a [`Filter`].
///
/// Recognized params: threshold `value` / `mode`, saturation `level`, lowpass `size`, convolve
/// `weights` (required, row-major, perfect-square length). Any other key is an error.
pub fn parse_filter(spec: &FilterSpec) -> RasterFxResult<Filter> {
    let kind: FilterKind = spec.kind.parse()?;
    let params = &spec.params;
    if !(params.is_null() || params.is_object()) {
        return Err(RasterFxError::invalid_parameter(format!(
            "{kind} params must be an object"
        )));
    }
    check_param_keys(kind, params)?;

    match kind {
        FilterKind::None => Ok(Filter::None),
        FilterKind::Threshold => {
            let value =
                threshold_value(get_opt_f64(params, "value")?.unwrap_or(DEFAULT_THRESHOLD))?;
            let mode = match params.get("mode") {
                Some(v) => serde_json::from_value::<ThresholdMode>(v.clone()).map_err(|e| {
                    RasterFxError::invalid_parameter(format!("threshold mode: {e}"))
                })?,
                None => ThresholdMode::default(),
            };
            Ok(Filter::Threshold { value, mode })
        }
        FilterKind::Saturation => Ok(Filter::Saturation {
            level: get_opt_f64(params, "level")?.unwrap_or(DEFAULT_SATURATION),
        }),
        FilterKind::Lowpass => {
            let size = match get_opt_f64(params, "size")? {
                Some(v) => lowpass_size_from_f64(v)?,
                None => DEFAULT_LOWPASS_SIZE,
            };
            Ok(Filter::Lowpass { size })
        }
        FilterKind::Convolve => {
            let Some(v) = params.get("weights") else {
                return Err(RasterFxError::invalid_parameter(
                    "missing filter param 'weights'",
                ));
            };
            let Some(arr) = v.as_array() else {
                return Err(RasterFxError::invalid_parameter(
                    "filter param 'weights' must be an array of numbers",
                ));
            };
            let weights = arr
                .iter()
                .map(|w| {
                    w.as_f64().ok_or_else(|| {
                        RasterFxError::invalid_parameter(
                            "filter param 'weights' must be an array of numbers",
                        )
                    })
                })
                .collect::<RasterFxResult<Vec<f64>>>()?;
            Ok(Filter::Convolve {
                kernel: Kernel::new(weights)?,
            })
        }
    }
}

fn allowed_params(kind: FilterKind) -> &'static [&'static str] {
    match kind {
        FilterKind::None => &[],
        FilterKind::Threshold => &["value", "mode"],
        FilterKind::Saturation => &["level"],
        FilterKind::Lowpass => &["size"],
        FilterKind::Convolve => &["weights"],
    }
}

fn check_param_keys(kind: FilterKind, params: &serde_json::Value) -> RasterFxResult<()> {
    let Some(obj) = params.as_object() else {
        return Ok(());
    };
    let allowed = allowed_params(kind);
    if let Some(key) = obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(RasterFxError::invalid_parameter(format!(
            "unknown {kind} param '{key}'"
        )));
    }
    Ok(())
}

fn threshold_value(v: f64) -> RasterFxResult<f64> {
    if !(0.0..=255.0).contains(&v) {
        return Err(RasterFxError::invalid_parameter(format!(
            "threshold value must be in 0..=255, got {v}"
        )));
    }
    Ok(v)
}

fn lowpass_size_from_f64(v: f64) -> RasterFxResult<u32> {
    if v.fract() != 0.0 || !(1.0..=f64::from(MAX_LOWPASS_SIZE)).contains(&v) {
        return Err(RasterFxError::invalid_parameter(format!(
            "lowpass size must be an integer in 1..={MAX_LOWPASS_SIZE}, got {v}"
        )));
    }
    Ok(v as u32)
}

fn get_opt_f64(obj: &serde_json::Value, key: &str) -> RasterFxResult<Option<f64>> {
    let Some(v) = obj.get(key) else {
        return Ok(None);
    };
    let Some(n) = v.as_f64() else {
        return Err(RasterFxError::invalid_parameter(format!(
            "filter param '{key}' must be a number"
        )));
    };
    if !n.is_finite() {
        return Err(RasterFxError::invalid_parameter(format!(
            "filter param '{key}' must be finite"
        )));
    }
    Ok(Some(n))
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/filter.rs"]
mod tests;
