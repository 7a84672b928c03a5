//! System identity: lookup keys, display names and stable ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Where a star system record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SystemOrigin {
    /// Hand-authored entry from the static catalog
    Known,
    /// Synthesized on demand from the system name
    Generated,
}

/// Normalize a system name into its lookup key
///
/// Trims surrounding whitespace, collapses inner runs of whitespace to a
/// single space and lowercases. Returns `None` for blank names.
///
/// # Example
/// ```
/// use star_system::normalize_key;
///
/// assert_eq!(normalize_key("  Alpha   Centauri "), Some("alpha centauri".to_string()));
/// assert_eq!(normalize_key("   "), None);
/// ```
pub fn normalize_key(name: &str) -> Option<String> {
    let key = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if key.is_empty() { None } else { Some(key) }
}

/// Title-case a lookup key for display ("alpha centauri z" -> "Alpha Centauri Z")
pub fn display_name(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stable id for a system key
///
/// The same key always maps to the same UUID, so ids survive save/load
/// and regeneration.
pub fn system_id(key: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}
