use std::path::Path;

use common::SerdeFormat;
use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::ops::BandThreshold;

/// Settings read from a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    pub thresholds: BandThreshold,
    /// Logger filter, e.g. `info` or `bandmask=debug`.
    pub log_level: String,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            thresholds: BandThreshold::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SegmentationConfig {
    /// Loads a config file, choosing the format from its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = SerdeFormat::from_file_name(&path.to_string_lossy())?;
        let text = std::fs::read_to_string(path)?;

        let config = Self::parse(&text, format)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);

        Ok(config)
    }

    /// Applies optional overrides to the configured thresholds and checks them.
    ///
    /// With `strict`, invalid bounds are an error. Otherwise they are logged
    /// and returned unchanged, since [`BandThreshold::segment`] accepts any pair.
    pub fn resolve_thresholds(
        &self,
        low: Option<f64>,
        high: Option<f64>,
        strict: bool,
    ) -> Result<BandThreshold> {
        let mut thresholds = self.thresholds;
        if let Some(low) = low {
            thresholds = thresholds.low(low);
        }
        if let Some(high) = high {
            thresholds = thresholds.high(high);
        }

        match thresholds.validate() {
            Ok(()) => {}
            Err(err) if strict => return Err(err),
            Err(err @ Error::ReversedThresholds { .. }) => {
                log::warn!("{}; pixels in [high, low) will be marked -1", err)
            }
            Err(err) => log::warn!("{}", err),
        }

        Ok(thresholds)
    }

    pub fn parse(text: &str, format: SerdeFormat) -> Result<Self> {
        match format {
            SerdeFormat::Yaml => {
                serde_yml::from_str(text).map_err(|e| Error::Config(e.to_string()))
            }
            SerdeFormat::Json => {
                serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
            }
        }
    }

    pub fn serialize(&self, format: SerdeFormat) -> Result<String> {
        match format {
            SerdeFormat::Yaml => {
                serde_yml::to_string(self).map_err(|e| Error::Config(e.to_string()))
            }
            SerdeFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
            }
        }
    }
}
