//! Host platform check.

use crate::error::{Error, Result};

/// Fail unless running on Windows.
///
/// The registry only exists there, so the binary checks this before doing
/// anything else.
///
/// # Errors
///
/// Returns [`Error::WrongPlatform`] naming the host OS everywhere else.
pub fn ensure_supported() -> Result<()> {
    if cfg!(windows) {
        Ok(())
    } else {
        Err(Error::WrongPlatform {
            os: std::env::consts::OS.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(windows)]
    fn test_windows_is_supported() {
        assert!(ensure_supported().is_ok());
    }

    #[test]
    #[cfg(not(windows))]
    fn test_other_platforms_rejected() {
        match ensure_supported() {
            Err(Error::WrongPlatform { os }) => assert_eq!(os, std::env::consts::OS),
            other => panic!("expected WrongPlatform, got {other:?}"),
        }
    }
}
