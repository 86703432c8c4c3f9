//! Search and report options.
//!
//! [`SearchOptions`] carries the toggles that change how each tap is
//! searched; [`ReportOptions`] configures the `--info` tool report.

use std::time::Duration;

/// Toggles applied to every search invocation.
///
/// # Example
///
/// ```rust
/// use brew_grep::SearchOptions;
///
/// let opts = SearchOptions::default();
/// assert!(!opts.exclude_casks);
///
/// let opts = SearchOptions { exclude_casks: true };
/// assert!(opts.exclude_casks);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Skip each tap's `Casks` directory as well as `spec`.
    ///
    /// Default: `false`
    pub exclude_casks: bool,
}

/// Configuration for probing tool versions.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Maximum time to wait for a tool's `--version` output.
    ///
    /// Default: 2 seconds
    pub timeout: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
        }
    }
}
