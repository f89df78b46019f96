//! Ignore normalizer: drops the fields named by ignore declarations.

use super::{NormalizeReport, Normalizer};
use crate::error::{Error, Result};
use crate::resource::{GroupKind, Resource};
use crate::settings::{group_kind_for_override_key, ResourceIgnoreDifferences, ResourceOverride};
use jsonptr::PointerBuf;
use json_patch::Patch;
use serde_json::json;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace, warn};

/// CompiledRule is one field removal bound to the resources it applies to.
///
/// Empty `namespace` and `name` match any value.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    group_kind: GroupKind,
    namespace: String,
    name: String,
    patch: Patch,
}

impl CompiledRule {
    /// Returns the group and kind the rule is keyed by.
    pub fn group_kind(&self) -> &GroupKind {
        &self.group_kind
    }

    /// Returns the namespace, or "" for any namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the object name, or "" for any name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the single-operation removal patch.
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    /// Returns true if the rule applies to a resource with the given identity.
    pub fn matches(&self, group_kind: &GroupKind, namespace: &str, name: &str) -> bool {
        self.group_kind == *group_kind
            && (self.name.is_empty() || self.name == name)
            && (self.namespace.is_empty() || self.namespace == namespace)
    }
}

/// IgnoreNormalizer removes ignored fields from resources.
///
/// It is immutable once built and may be shared between threads normalizing
/// different resources.
#[derive(Debug, Clone, Default)]
pub struct IgnoreNormalizer {
    rules: Vec<CompiledRule>,
}

impl IgnoreNormalizer {
    /// Compiles direct ignore declarations and resource overrides into a normalizer.
    ///
    /// Override-derived declarations follow the direct ones, in key order.
    pub fn new(
        ignore: Vec<ResourceIgnoreDifferences>,
        overrides: &BTreeMap<String, ResourceOverride>,
    ) -> Result<Self> {
        let declarations = merge_overrides(ignore, overrides)?;
        Ok(IgnoreNormalizer {
            rules: compile_rules(&declarations)?,
        })
    }

    /// Returns the compiled rules in match order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Normalizes a resource and reports how many rules applied.
    pub fn normalize_with_report(&self, resource: &mut dyn Resource) -> Result<NormalizeReport> {
        let group_kind = resource.group_kind();
        let matched: Vec<&CompiledRule> = {
            let (namespace, name) = (resource.namespace(), resource.name());
            self.rules
                .iter()
                .filter(|rule| rule.matches(&group_kind, namespace, name))
                .collect()
        };
        if matched.is_empty() {
            return Ok(NormalizeReport::default());
        }
        trace!(%group_kind, name = resource.name(), rules = matched.len(), "normalizing resource");

        let mut doc = resource.to_document().map_err(|source| Error::Serialize {
            group_kind: group_kind.clone(),
            name: resource.name().to_string(),
            source,
        })?;

        let mut report = NormalizeReport {
            matched: matched.len(),
            ..Default::default()
        };
        for rule in matched {
            match json_patch::patch(&mut doc, &rule.patch) {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    debug!(%group_kind, name = resource.name(), error = %err, "Failed to apply normalization");
                    report.skipped += 1;
                }
            }
        }

        let name = resource.name().to_string();
        resource.load_document(doc).map_err(|source| Error::Deserialize {
            group_kind,
            name,
            source,
        })?;
        Ok(report)
    }
}

impl Normalizer for IgnoreNormalizer {
    fn normalize(&self, resource: &mut dyn Resource) -> Result<()> {
        self.normalize_with_report(resource).map(|_| ())
    }
}

/// Appends one type-wide declaration per override that carries ignoreDifferences.
///
/// A malformed key is logged and the override is kept with an empty group and
/// kind. A malformed ignoreDifferences snippet is an error.
pub fn merge_overrides(
    mut ignore: Vec<ResourceIgnoreDifferences>,
    overrides: &BTreeMap<String, ResourceOverride>,
) -> Result<Vec<ResourceIgnoreDifferences>> {
    for (key, resource_override) in overrides {
        let group_kind = group_kind_for_override_key(key).unwrap_or_else(|err| {
            warn!("{}", err);
            GroupKind::default()
        });
        let settings = resource_override
            .ignore_settings()
            .map_err(|source| Error::OverrideIgnoreDifferences {
                key: key.clone(),
                source,
            })?;
        if let Some(settings) = settings {
            ignore.push(settings.into_declaration(group_kind));
        }
    }
    Ok(ignore)
}

/// Compiles each (declaration, path) pair into a rule, preserving declaration
/// order and then path order.
///
/// A repeated rule keeps its first position only, unless its path addresses an
/// array element: removing `/spec/containers/0` twice drops two elements, so
/// those repeats are kept.
///
/// Declarations without a kind are validated and then dropped. Kept as-is they
/// would only match resources that carry neither `apiVersion` nor `kind`.
pub fn compile_rules(declarations: &[ResourceIgnoreDifferences]) -> Result<Vec<CompiledRule>> {
    let mut rules = Vec::new();
    let mut seen: HashSet<(&str, &str, &str, &str, &str)> = HashSet::new();
    for decl in declarations {
        let group_kind = decl.group_kind();
        let mut patches = Vec::with_capacity(decl.json_pointers.len());
        for path in &decl.json_pointers {
            patches.push((path.as_str(), removal_patch(&group_kind, path)?));
        }

        if decl.kind.is_empty() {
            if !patches.is_empty() {
                warn!(group = %decl.group, "ignoring declaration without kind");
            }
            continue;
        }

        for (path, patch) in patches {
            let key = (
                decl.group.as_str(),
                decl.kind.as_str(),
                decl.namespace.as_str(),
                decl.name.as_str(),
                path,
            );
            if !seen.insert(key) && !addresses_array_element(path) {
                trace!(%group_kind, path, "dropping duplicate ignore rule");
                continue;
            }
            rules.push(CompiledRule {
                group_kind: group_kind.clone(),
                namespace: decl.namespace.clone(),
                name: decl.name.clone(),
                patch,
            });
        }
    }
    Ok(rules)
}

/// Builds the `[{"op": "remove", "path": ...}]` patch for one field path.
fn removal_patch(group_kind: &GroupKind, path: &str) -> Result<Patch> {
    PointerBuf::parse(path).map_err(|source| Error::InvalidPointer {
        group_kind: group_kind.clone(),
        path: path.to_string(),
        source,
    })?;
    let compile_err = |source: serde_json::Error| Error::CompileRule {
        group_kind: group_kind.clone(),
        path: path.to_string(),
        source,
    };
    let data = serde_json::to_vec(&json!([{"op": "remove", "path": path}])).map_err(compile_err)?;
    serde_json::from_slice(&data).map_err(compile_err)
}

fn addresses_array_element(path: &str) -> bool {
    path.split('/')
        .skip(1)
        .any(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
}
