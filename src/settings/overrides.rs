//! Per-resource-type overrides.

use super::ResourceIgnoreDifferences;
use crate::resource::GroupKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// InvalidOverrideKey is reported when an override key is not `<group>/<kind>`
/// or `<kind>`. It is a warning: the override is still processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("override key must be <group>/<kind> or <kind>, got: '{key}'")]
pub struct InvalidOverrideKey {
    pub key: String,
}

/// ResourceOverride customizes behaviour for one resource type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOverride {
    /// YAML document of the form `jsonPointers: [...]`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ignore_differences: String,
}

impl ResourceOverride {
    /// Creates an override with the given embedded ignoreDifferences YAML.
    pub fn with_ignore_differences(yaml: impl Into<String>) -> Self {
        ResourceOverride {
            ignore_differences: yaml.into(),
        }
    }

    /// Parses the embedded ignoreDifferences snippet.
    ///
    /// Returns None when the override carries no snippet.
    pub fn ignore_settings(&self) -> Result<Option<OverrideIgnoreDiff>, serde_yaml::Error> {
        if self.ignore_differences.is_empty() {
            return Ok(None);
        }
        serde_yaml::from_str(&self.ignore_differences).map(Some)
    }
}

/// OverrideIgnoreDiff is the parsed form of `ResourceOverride::ignore_differences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideIgnoreDiff {
    #[serde(default)]
    pub json_pointers: Vec<String>,
}

impl OverrideIgnoreDiff {
    /// Turns the parsed snippet into a type-wide ignore declaration.
    pub fn into_declaration(self, group_kind: GroupKind) -> ResourceIgnoreDifferences {
        ResourceIgnoreDifferences::for_group_kind(group_kind.group, group_kind.kind)
            .with_pointers(self.json_pointers)
    }
}

/// Splits an override key into its group and kind.
///
/// `apps/Deployment` has group `apps`; a bare `ConfigMap` is in the core group.
pub fn group_kind_for_override_key(key: &str) -> Result<GroupKind, InvalidOverrideKey> {
    let parts: Vec<&str> = key.split('/').collect();
    match parts.as_slice() {
        [kind] => Ok(GroupKind::new("", *kind)),
        [group, kind] => Ok(GroupKind::new(*group, *kind)),
        _ => Err(InvalidOverrideKey {
            key: key.to_string(),
        }),
    }
}
