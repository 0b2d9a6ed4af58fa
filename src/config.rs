use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::palette::*;

pub const DEFAULT_SAMPLES: usize = 65535;

/// Settings for one generation run. The defaults reproduce the classic
/// batch: every catalog palette, 65535 intervals, written to the working
/// directory, one palette at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    pub samples: usize,
    pub output_dir: PathBuf,
    pub palettes: Vec<PaletteName>,
    pub threads: usize,
}

impl Default for GenConfig {
    fn default() -> GenConfig {
        GenConfig {
            samples: DEFAULT_SAMPLES,
            output_dir: PathBuf::from("."),
            palettes: PaletteName::ALL.to_vec(),
            threads: 1,
        }
    }
}

impl GenConfig {
    pub fn from_json(src: &str) -> serde_json::Result<GenConfig> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<GenConfig> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<GenConfig, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<GenConfig, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = match path.as_ref().extension().ok_or(ConfigError::ExtensionError)?.to_str() {
            Some("json") => GenConfig::from_json(&contents)?,
            Some("ron") => GenConfig::from_ron(&contents)?,
            Some("yaml") | Some("yml") => GenConfig::from_yaml(&contents)?,
            _ => return Err(ConfigError::ExtensionError),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }

    /// Selected palettes in catalog order, each at most once.
    pub fn selected(&self) -> Vec<Palette> {
        catalog().filter(|p| self.palettes.contains(&p.name)).collect()
    }

    pub fn table_path(&self, name: PaletteName) -> PathBuf {
        self.output_dir.join(format!("{}.txt", name))
    }
}
