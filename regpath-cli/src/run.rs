//! The extraction run behind the binary.

use std::io::Write;

use regpath::{extract_from, EnvironmentSource, ExtractOptions};

use crate::error::CliError;

/// Read the registry through `source`, merge and write the result to `out`.
///
/// The path list is written without a trailing newline.
pub fn execute<S, W>(source: &S, options: &ExtractOptions, out: &mut W) -> Result<(), CliError>
where
    S: EnvironmentSource + ?Sized,
    W: Write,
{
    let paths = extract_from(source, options)?;
    write!(out, "{paths}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regpath::{Error, Result, Scope};

    struct CannedRegistry {
        user: &'static str,
        global: Option<&'static str>,
    }

    impl EnvironmentSource for CannedRegistry {
        fn query(&self, scope: Scope) -> Result<String> {
            let path = match scope {
                Scope::Volatile => return Ok(String::new()),
                Scope::User => self.user,
                Scope::Global => self.global.ok_or_else(|| {
                    Error::Io(std::io::Error::other("registry key not found"))
                })?,
            };
            Ok(format!("\r\n    Path    REG_EXPAND_SZ    {path}\r\n"))
        }
    }

    #[test]
    fn test_writes_merged_paths_without_newline() {
        let registry = CannedRegistry {
            user: "C:\\A;C:\\B",
            global: Some("C:\\B;C:\\C"),
        };
        let mut out = Vec::new();
        execute(&registry, &ExtractOptions::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/c/A:/c/B:/c/C");
    }

    #[test]
    fn test_query_failure_maps_to_library_error() {
        let registry = CannedRegistry {
            user: "C:\\A",
            global: None,
        };
        let mut out = Vec::new();
        let err = execute(&registry, &ExtractOptions::new(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Library(Error::Io(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_lenient_run_still_prints() {
        let registry = CannedRegistry {
            user: "C:\\A",
            global: None,
        };
        let mut out = Vec::new();
        let options = ExtractOptions::new().with_lenient(true);
        execute(&registry, &options, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/c/A");
    }
}
