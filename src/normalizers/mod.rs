//! Normalizers module - rewrite resources before they are diffed.
//!
//! A normalizer removes or rewrites parts of a resource that should not count
//! as drift between the desired and the live state.

mod ignore;


pub use ignore::*;

use crate::error::Result;
use crate::resource::Resource;

/// Normalizer mutates a resource in place so that expected differences vanish.
pub trait Normalizer {
    /// Normalizes the resource.
    fn normalize(&self, resource: &mut dyn Resource) -> Result<()>;
}

/// NormalizeReport summarizes a single normalization call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rules whose key matched the resource.
    pub matched: usize,
    /// Matched rules whose removal succeeded.
    pub applied: usize,
    /// Matched rules skipped because their path did not apply to this resource.
    pub skipped: usize,
}

impl NormalizeReport {
    /// Returns true if no rule matched the resource.
    pub fn is_noop(&self) -> bool {
        self.matched == 0
    }
}
