use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    error::{RasterFxError, RasterFxResult},
    math::ChannelPolicy,
};

/// Engine configuration shared by every filter application.
///
/// Every field has a default, so a settings file only needs the keys it changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettings {
    /// How out-of-range channel values are stored.
    pub channel_policy: ChannelPolicy,
    /// Partition convolution output rows across a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl FilterSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(s: &str) -> RasterFxResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| RasterFxError::settings(format!("parse settings json: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: &Path) -> RasterFxResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json(&s)
    }

    /// Check field ranges.
    pub fn validate(&self) -> RasterFxResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(RasterFxError::settings("'threads' must be >= 1 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/settings.rs"]
mod tests;
