//! Reading environment scopes from the registry.
//!
//! The [`EnvironmentSource`] trait abstracts the registry query so the merge
//! pipeline can be driven by canned output in tests. [`RegQuery`] is the
//! production implementation, shelling out to `reg query` once per scope.

use std::process::Command;

use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use crate::scope::{Scope, ScopeMap, Scopes};

/// Something that can dump the variables of a registry scope.
///
/// Implementations return the raw tabular text in the format printed by
/// `reg query`; parsing is left to [`ScopeMap::parse`].
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentSource {
    /// Dump the variables of `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query cannot run or fails.
    fn query(&self, scope: Scope) -> Result<String>;
}

/// Production source running `reg query <key>`.
///
/// # Examples
///
/// ```no_run
/// use regpath::reader::{EnvironmentSource, RegQuery};
/// use regpath::Scope;
///
/// let text = RegQuery.query(Scope::User).unwrap();
/// println!("{text}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegQuery;

impl EnvironmentSource for RegQuery {
    fn query(&self, scope: Scope) -> Result<String> {
        let key = scope.registry_key();
        let command = format!("reg query \"{key}\"");

        let output = Command::new("reg")
            .args(["query", key])
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Execution {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Query and parse a single scope.
///
/// # Errors
///
/// Propagates the source's error.
pub fn read_scope<S: EnvironmentSource + ?Sized>(source: &S, scope: Scope) -> Result<ScopeMap> {
    let text = source.query(scope)?;
    let map = ScopeMap::parse(&text);
    log::debug!("Read {} variables from {scope} scope", map.len());
    Ok(map)
}

/// Read all three scopes, one query after another.
///
/// With `options.lenient` a scope that cannot be read is logged as a
/// warning and treated as empty.
///
/// # Errors
///
/// Returns the first query error unless `options.lenient` is set.
pub fn read_scopes<S: EnvironmentSource + ?Sized>(
    source: &S,
    options: &ExtractOptions,
) -> Result<Scopes> {
    let read = |scope: Scope| match read_scope(source, scope) {
        Ok(map) => Ok(map),
        Err(e) if options.lenient => {
            log::warn!("Skipping {scope} scope: {e}");
            Ok(ScopeMap::default())
        }
        Err(e) => Err(e),
    };

    Ok(Scopes {
        volatile: read(Scope::Volatile)?,
        user: read(Scope::User)?,
        global: read(Scope::Global)?,
    })
}
