//! Direct ignore declarations.

use crate::resource::GroupKind;
use serde::{Deserialize, Serialize};

/// ResourceIgnoreDifferences declares fields to exclude from diffing for
/// resources matching group, kind, namespace and name.
///
/// Empty `group`, `namespace` and `name` match any value. `kind` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIgnoreDifferences {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default)]
    pub json_pointers: Vec<String>,
}

impl ResourceIgnoreDifferences {
    /// Creates a declaration matching every resource of the given group and kind.
    pub fn for_group_kind(group: impl Into<String>, kind: impl Into<String>) -> Self {
        ResourceIgnoreDifferences {
            group: group.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Restricts the declaration to one namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Restricts the declaration to one object name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends field paths to ignore.
    pub fn with_pointers<I, S>(mut self, pointers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.json_pointers.extend(pointers.into_iter().map(Into::into));
        self
    }

    /// Returns the group and kind this declaration applies to.
    pub fn group_kind(&self) -> GroupKind {
        GroupKind::new(self.group.clone(), self.kind.clone())
    }
}
