//! `%NAME%` variable expansion.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::scope::ScopeMap;

static VARIABLE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([^%]+)%").expect("variable pattern is valid"));

/// Expand every `%NAME%` reference in `entry` from `vars`.
///
/// Names are looked up case-insensitively; each reference is replaced
/// wherever it occurs with its exact original spelling. Values are inserted
/// verbatim and are not expanded again.
///
/// # Errors
///
/// Returns [`Error::UnresolvedVariable`] for the first reference `vars` does
/// not define. The whole entry is unusable in that case.
///
/// # Examples
///
/// ```
/// use regpath::path::expand::expand_variables;
/// use regpath::ScopeMap;
///
/// let vars: ScopeMap = [("USERPROFILE", "C:\\Users\\bob")].into_iter().collect();
/// let expanded = expand_variables("%UserProfile%\\bin", &vars).unwrap();
/// assert_eq!(expanded, "C:\\Users\\bob\\bin");
///
/// assert!(expand_variables("%FOO%\\bar", &vars).is_err());
/// ```
pub fn expand_variables(entry: &str, vars: &ScopeMap) -> Result<String> {
    let mut expanded = entry.to_string();

    for caps in VARIABLE_REFERENCE.captures_iter(entry) {
        let name = &caps[1];
        let Some(value) = vars.get(name) else {
            return Err(Error::UnresolvedVariable {
                name: name.to_string(),
                entry: entry.to_string(),
            });
        };
        expanded = expanded.replace(&caps[0], value);
    }

    Ok(expanded)
}
