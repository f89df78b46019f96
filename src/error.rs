//! Crate-level error type.

use crate::resource::GroupKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error is returned when compiling ignore rules or normalizing a resource fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse ignoreDifferences of resource override '{key}': {source}")]
    OverrideIgnoreDifferences {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid json pointer '{path}' in ignore rule for {group_kind}: {source}")]
    InvalidPointer {
        group_kind: GroupKind,
        path: String,
        #[source]
        source: jsonptr::ParseError,
    },

    #[error("failed to compile ignore rule '{path}' for {group_kind}: {source}")]
    CompileRule {
        group_kind: GroupKind,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {group_kind} '{name}': {source}")]
    Serialize {
        group_kind: GroupKind,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to deserialize normalized {group_kind} '{name}': {source}")]
    Deserialize {
        group_kind: GroupKind,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read settings file {}: {source}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    ParseSettings(#[source] serde_yaml::Error),
}

/// Result type alias using the crate's Error.
pub type Result<T> = std::result::Result<T, Error>;
