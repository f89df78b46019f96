//! Settings file loading.

use super::{ResourceIgnoreDifferences, ResourceOverride};
use crate::error::{Error, Result};
use crate::normalizers::IgnoreNormalizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings is the on-disk ignore configuration.
///
/// ```yaml
/// ignoreDifferences:
/// - group: apps
///   kind: Deployment
///   jsonPointers: [/spec/replicas]
/// resourceOverrides:
///   ConfigMap:
///     ignoreDifferences: |
///       jsonPointers:
///       - /data/generated
/// ```
///
/// JSON is accepted as well, being a subset of YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub ignore_differences: Vec<ResourceIgnoreDifferences>,
    /// Keyed by `<group>/<kind>` or `<kind>`. Sorted, so compilation order is stable.
    #[serde(default)]
    pub resource_overrides: BTreeMap<String, ResourceOverride>,
}

impl Settings {
    /// Parses settings from a YAML or JSON string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::ParseSettings)
    }

    /// Reads and parses a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_yaml(&content)
    }

    /// Compiles the settings into a normalizer.
    pub fn normalizer(&self) -> Result<IgnoreNormalizer> {
        IgnoreNormalizer::new(self.ignore_differences.clone(), &self.resource_overrides)
    }
}
