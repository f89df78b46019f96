//! Settings module - user-facing ignore configuration.
//!
//! Two sources declare ignored fields: direct ignore declarations and
//! per-resource-type overrides whose `ignoreDifferences` is an embedded YAML
//! snippet. Both are turned into [`ResourceIgnoreDifferences`] before the
//! normalizer compiles them.

mod ignore;
mod overrides;
mod settings;

pub use ignore::*;
pub use overrides::*;
pub use settings::*;
