//! Options controlling a single extraction run.
//!
//! There are no configuration files and no environment overrides: the
//! binary builds an [`ExtractOptions`] from its flags and hands it to the
//! reader and the merge engine.

/// Options threaded through reading, filtering and merging.
///
/// # Examples
///
/// ```
/// use regpath::ExtractOptions;
///
/// let options = ExtractOptions::new().with_check_exists(true);
/// assert!(options.check_exists);
/// assert!(!options.lenient);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Drop entries that are not existing directories.
    pub check_exists: bool,
    /// Treat an unreadable scope as empty instead of failing the run.
    pub lenient: bool,
}

impl ExtractOptions {
    /// Creates options with every check disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_exists: false,
            lenient: false,
        }
    }

    /// Enables or disables the directory existence filter.
    #[must_use]
    pub const fn with_check_exists(mut self, check_exists: bool) -> Self {
        self.check_exists = check_exists;
        self
    }

    /// Enables or disables lenient scope reading.
    ///
    /// # Examples
    ///
    /// ```
    /// use regpath::ExtractOptions;
    ///
    /// let options = ExtractOptions::new().with_lenient(true);
    /// assert!(options.lenient);
    /// ```
    #[must_use]
    pub const fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}
