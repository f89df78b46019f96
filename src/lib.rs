//! # Diff Normalizer
//!
//! Selective field suppression for Kubernetes resource diffing.
//!
//! Operators declare fields that are owned by in-cluster actors (admission
//! controllers, autoscalers) and must never count as drift. This crate
//! compiles those declarations into removal rules and strips the matching
//! fields from a resource before it reaches the diff.
//!
//! ## Modules
//!
//! - [`settings`] - Ignore declarations, resource overrides and settings files
//! - [`normalizers`] - Rule compilation and in-place normalization
//! - [`resource`] - The resource boundary: identity plus document round-trip
//!
//! ## Example
//!
//! ```
//! use diff_normalizer::{IgnoreNormalizer, Normalizer, ResourceIgnoreDifferences, Unstructured};
//! use std::collections::BTreeMap;
//!
//! let normalizer = IgnoreNormalizer::new(
//!     vec![ResourceIgnoreDifferences::for_group_kind("apps", "Deployment")
//!         .with_pointers(["/spec/replicas"])],
//!     &BTreeMap::new(),
//! )
//! .unwrap();
//!
//! let mut deployment = Unstructured::from_yaml(
//!     "apiVersion: apps/v1\nkind: Deployment\nmetadata: {name: web}\nspec: {replicas: 3}\n",
//! )
//! .unwrap();
//! normalizer.normalize(&mut deployment).unwrap();
//! assert!(deployment.object()["spec"].get("replicas").is_none());
//! ```

pub mod error;
pub mod normalizers;
pub mod resource;
pub mod settings;

pub use error::{Error, Result};
pub use normalizers::{CompiledRule, IgnoreNormalizer, NormalizeReport, Normalizer};
pub use resource::{GroupKind, GroupVersionKind, Resource, Unstructured};
pub use settings::{ResourceIgnoreDifferences, ResourceOverride, Settings};
