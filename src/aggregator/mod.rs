//! Association aggregation
//!
//! Merges the extensions declared by every scanned application into one
//! ordered universe, resolves each one, and narrows the result by an optional
//! identity filter.
//!
//! Nothing in here aborts a run: an extension without a canonical type is
//! dropped, a registry fault on one extension is logged and dropped.


use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::{ApplicationRecord, Association, Extension};
use crate::resolver::{HandlerLookup, TypeResolver, lookup_association};

/// Case-insensitive substring match against handler path or id.
///
/// An empty needle matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFilter {
    needle: String,
}

impl IdentityFilter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }

    pub fn matches(&self, assoc: &Association) -> bool {
        if self.needle.is_empty() {
            return false;
        }
        let in_path = assoc
            .handler_path()
            .is_some_and(|p| p.to_string_lossy().to_lowercase().contains(&self.needle));
        let in_id = assoc
            .handler_id()
            .is_some_and(|id| id.as_str().to_lowercase().contains(&self.needle));
        in_path || in_id
    }
}

/// Exact-string union of every declared extension, in code-point order
pub fn extension_universe(records: &[ApplicationRecord]) -> BTreeSet<Extension> {
    records
        .iter()
        .flat_map(|record| record.extensions.iter().cloned())
        .collect()
}

/// Resolve the extension universe of `records` into ordered associations
pub fn aggregate<R>(
    registry: &R,
    records: &[ApplicationRecord],
    filter: Option<&IdentityFilter>,
) -> Vec<Association>
where
    R: TypeResolver + HandlerLookup + ?Sized,
{
    let universe = extension_universe(records);
    debug!(extensions = universe.len(), "aggregating declared extensions");

    let mut associations = Vec::new();
    for extension in &universe {
        let assoc = match lookup_association(registry, extension) {
            Ok(Some(assoc)) => assoc,
            Ok(None) => continue,
            Err(e) => {
                warn!(%extension, error = %e, "lookup failed, skipping");
                continue;
            }
        };

        if filter.is_none_or(|f| f.matches(&assoc)) {
            associations.push(assoc);
        }
    }

    associations
}
