//! A schemaless Kubernetes object.

use super::{GroupVersionKind, Resource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unstructured holds an arbitrary Kubernetes object as a JSON map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unstructured {
    object: Map<String, Value>,
}

impl Unstructured {
    /// Wraps a JSON object.
    pub fn new(object: Map<String, Value>) -> Self {
        Unstructured { object }
    }

    /// Builds an Unstructured from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Parses a single JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a single YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parses a stream of YAML documents separated by `---`.
    ///
    /// Empty documents are skipped.
    pub fn from_yaml_documents(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut objects = Vec::new();
        for document in serde_yaml::Deserializer::from_str(yaml) {
            let value = Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }
            let object = serde_json::from_value(value)
                .map_err(<serde_yaml::Error as serde::de::Error>::custom)?;
            objects.push(object);
        }
        Ok(objects)
    }

    /// Returns the underlying object.
    pub fn object(&self) -> &Map<String, Value> {
        &self.object
    }

    /// Returns the underlying object mutably.
    pub fn object_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.object
    }

    /// Consumes the wrapper and returns the object as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }

    /// Returns the `apiVersion` field.
    pub fn api_version(&self) -> &str {
        self.object.get("apiVersion").and_then(Value::as_str).unwrap_or_default()
    }

    /// Returns the `kind` field.
    pub fn kind(&self) -> &str {
        self.object.get("kind").and_then(Value::as_str).unwrap_or_default()
    }

    fn metadata_str(&self, field: &str) -> &str {
        self.object
            .get("metadata")
            .and_then(|m| m.get(field))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl Resource for Unstructured {
    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::from_api_version(self.api_version(), self.kind())
    }

    fn namespace(&self) -> &str {
        self.metadata_str("namespace")
    }

    fn name(&self) -> &str {
        self.metadata_str("name")
    }

    fn to_document(&self) -> Result<Value, serde_json::Error> {
        Ok(Value::Object(self.object.clone()))
    }

    fn load_document(&mut self, doc: Value) -> Result<(), serde_json::Error> {
        *self = serde_json::from_value(doc)?;
        Ok(())
    }
}

impl From<Map<String, Value>> for Unstructured {
    fn from(object: Map<String, Value>) -> Self {
        Unstructured::new(object)
    }
}
