//! Resource module - the view of a Kubernetes object the normalizer needs.
//!
//! Normalization only reads a resource's identity (group, kind, namespace,
//! name) and round-trips its whole document; everything else is opaque.

mod group_kind;
mod unstructured;

pub use group_kind::*;
pub use unstructured::*;

use serde_json::Value;

/// Resource is implemented by anything the normalizer can strip fields from.
pub trait Resource {
    /// Returns the group, version and kind of the resource.
    fn group_version_kind(&self) -> GroupVersionKind;

    /// Returns the namespace, or "" for cluster-scoped resources.
    fn namespace(&self) -> &str;

    /// Returns the object name.
    fn name(&self) -> &str;

    /// Serializes the whole resource into its document form.
    fn to_document(&self) -> Result<Value, serde_json::Error>;

    /// Replaces the resource's contents with the given document.
    fn load_document(&mut self, doc: Value) -> Result<(), serde_json::Error>;

    /// Returns the group and kind of the resource.
    fn group_kind(&self) -> GroupKind {
        self.group_version_kind().group_kind()
    }
}
