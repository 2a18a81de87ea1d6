//! Common test utilities for integration tests.
//!
//! This module provides a canned [`EnvironmentSource`] that renders scope
//! variables in the same tabular layout as `reg query`.

use std::collections::HashMap;

use regpath::{EnvironmentSource, Error, Result, Scope};

/// Builder for a fake registry with sensible defaults.
///
/// Every scope starts empty. Variables are rendered as `REG_EXPAND_SZ`
/// lines under a header naming the scope's key, with CRLF line endings.
#[derive(Debug, Default)]
pub struct RegistryFixture {
    scopes: HashMap<Scope, Vec<(String, String)>>,
    failing: Vec<Scope>,
}

#[allow(dead_code)]
impl RegistryFixture {
    /// Creates a registry with every scope empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable to `scope`.
    pub fn with_var(mut self, scope: Scope, name: &str, value: &str) -> Self {
        self.scopes
            .entry(scope)
            .or_default()
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the `Path` variable of `scope`.
    pub fn with_path(self, scope: Scope, value: &str) -> Self {
        self.with_var(scope, "Path", value)
    }

    /// Makes queries for `scope` fail.
    pub fn failing(mut self, scope: Scope) -> Self {
        self.failing.push(scope);
        self
    }

    /// Renders `scope` the way `reg query` prints it.
    pub fn render(&self, scope: Scope) -> String {
        let header = scope.registry_key().replace("HKCU", "HKEY_CURRENT_USER");
        let mut out = format!("\r\n{header}\r\n");
        for (name, value) in self.scopes.get(&scope).into_iter().flatten() {
            out.push_str(&format!("    {name}    REG_EXPAND_SZ    {value}\r\n"));
        }
        out.push_str("\r\n");
        out
    }
}

impl EnvironmentSource for RegistryFixture {
    fn query(&self, scope: Scope) -> Result<String> {
        if self.failing.contains(&scope) {
            return Err(Error::Io(std::io::Error::other(format!(
                "ERROR: The system was unable to find the specified registry key ({scope})"
            ))));
        }
        Ok(self.render(scope))
    }
}
