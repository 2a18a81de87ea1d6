//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on expansion and the reverse conversion.

use super::expand::expand_variables;
use super::normalize::{normalize_entry, to_unix, to_windows};
use crate::scope::ScopeMap;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn unix_path_strategy() -> impl Strategy<Value = String> {
    ("[a-z]", prop::collection::vec(component_strategy(), 1..6))
        .prop_map(|(drive, parts)| format!("/{drive}/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Converting to Windows and back yields the original normalized path
    #[test]
    fn windows_roundtrip_restores_unix(path in unix_path_strategy()) {
        prop_assert_eq!(to_unix(&to_windows(&path)), path);
    }

    // Windows form never contains forward slashes
    #[test]
    fn windows_form_has_no_slashes(path in unix_path_strategy()) {
        prop_assert!(!to_windows(&path).contains('/'));
    }

    // Expanding a defined variable is the same as writing its value inline
    #[test]
    fn expansion_matches_inline_value(
        name in "[A-Za-z_]{1,10}",
        value in unix_path_strategy(),
        tail in component_strategy(),
    ) {
        let vars: ScopeMap = [(name.as_str(), value.as_str())].into_iter().collect();
        let referenced = normalize_entry(&format!("%{name}%\\{tail}"), &vars).unwrap();
        let inline = normalize_entry(&format!("{value}\\{tail}"), &vars).unwrap();
        prop_assert_eq!(referenced, inline);
    }

    // Entries referencing an unknown variable are always rejected
    #[test]
    fn unknown_variable_rejected(name in "[A-Za-z_]{1,10}", tail in component_strategy()) {
        let entry = format!("%{name}%\\{tail}");
        prop_assert!(expand_variables(&entry, &ScopeMap::default()).is_err());
        prop_assert!(normalize_entry(&entry, &ScopeMap::default()).is_err());
    }
}
