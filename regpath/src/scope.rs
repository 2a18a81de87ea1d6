//! Registry scopes and their variable maps.
//!
//! A [`Scope`] names one of the three registry keys holding environment
//! variables. A [`ScopeMap`] is the parsed content of one key: uppercased
//! variable names mapped to their trimmed values.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("field separator pattern is valid"));

/// One of the registry keys consulted for environment variables.
///
/// Scopes are listed in [`Scope::ALL`] in precedence order: entries from an
/// earlier scope win over equal entries from a later one.
///
/// # Examples
///
/// ```
/// use regpath::Scope;
///
/// assert_eq!(Scope::ALL[0], Scope::Volatile);
/// assert_eq!(Scope::User.registry_key(), r"HKCU\Environment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Per-session variables (`HKCU\Volatile Environment`).
    Volatile,
    /// Per-user variables (`HKCU\Environment`).
    User,
    /// Machine-wide variables.
    Global,
}

impl Scope {
    /// All scopes in precedence order.
    pub const ALL: [Self; 3] = [Self::Volatile, Self::User, Self::Global];

    /// The registry key queried for this scope.
    #[must_use]
    pub const fn registry_key(self) -> &'static str {
        match self {
            Self::Volatile => r"HKCU\Volatile Environment",
            Self::User => r"HKCU\Environment",
            Self::Global => r"HKLM\System\CurrentControlSet\Control\Session Manager\Environment",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volatile => write!(f, "volatile"),
            Self::User => write!(f, "user"),
            Self::Global => write!(f, "global"),
        }
    }
}

/// Variables of a single scope, keyed by uppercased name.
///
/// # Examples
///
/// ```
/// use regpath::ScopeMap;
///
/// let map = ScopeMap::parse("    Path    REG_EXPAND_SZ    C:\\bin;%USERPROFILE%\\bin\r\n");
/// assert_eq!(map.path(), Some("C:\\bin;%USERPROFILE%\\bin"));
/// assert_eq!(map.get("path"), map.get("PATH"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeMap {
    vars: HashMap<String, String>,
}

impl ScopeMap {
    /// Parses the tabular output of `reg query`.
    ///
    /// Each line is split on runs of whitespace into at most four fields:
    /// leading padding, name, type token and value. The value keeps its
    /// inner whitespace and is trimmed at both ends. Lines with fewer than
    /// four fields (headers, blank lines, the key path itself) are skipped.
    /// A repeated name overwrites the earlier value.
    #[must_use]
    pub fn parse(output: &str) -> Self {
        let mut vars = HashMap::new();

        for line in output.split('\n') {
            let fields: Vec<&str> = FIELD_SEPARATOR.splitn(line, 4).collect();
            if fields.len() < 4 {
                continue;
            }
            vars.insert(fields[1].to_uppercase(), fields[3].trim().to_string());
        }

        Self { vars }
    }

    /// Looks up a variable by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&name.to_uppercase()).map(String::as_str)
    }

    /// The `PATH` value, if the scope defines one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.get("PATH")
    }

    /// Number of variables in the scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the scope defines no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ScopeMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_uppercase(), v.into()))
                .collect(),
        }
    }
}

/// The three scope maps of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scopes {
    /// Session variables; also the expansion source for `%NAME%` references.
    pub volatile: ScopeMap,
    /// Per-user variables.
    pub user: ScopeMap,
    /// Machine-wide variables.
    pub global: ScopeMap,
}

impl Scopes {
    /// Returns the map for a given scope.
    #[must_use]
    pub fn get(&self, scope: Scope) -> &ScopeMap {
        match scope {
            Scope::Volatile => &self.volatile,
            Scope::User => &self.user,
            Scope::Global => &self.global,
        }
    }

    /// Iterates the maps in precedence order.
    pub fn in_order(&self) -> impl Iterator<Item = (Scope, &ScopeMap)> {
        Scope::ALL.into_iter().map(move |scope| (scope, self.get(scope)))
    }
}
