//! Combines loaded, scanned and curated aliases into one map.
//!
//! Merging only ever adds. A canonical name loaded from disk stays in the
//! output even when its folder no longer exists, so stale entries are never
//! pruned here.

use std::collections::BTreeMap;

use crate::{alias_normalizer::normalize_alias, alias_store::AliasMap};

/// Unions every source per canonical name. Curated overrides additionally pull
/// in their own canonical name and its normalized form.
pub fn merge_aliases(
    existing: AliasMap,
    generated: AliasMap,
    overrides: &BTreeMap<String, Vec<String>>,
    marker: char,
) -> AliasMap {
    let mut merged = existing;

    for (canonical, aliases) in generated {
        merged.entry(canonical).or_default().extend(aliases);
    }

    for (canonical, aliases) in overrides {
        let entry = merged.entry(canonical.clone()).or_default();
        entry.extend(aliases.iter().cloned());
        entry.insert(canonical.clone());
        entry.insert(normalize_alias(canonical, marker));
    }

    merged
}
