//! Error types for selecting and running search tools.
//!
//! Each variant carries enough context for a useful message and has an
//! actionable fix suggestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting a search tool or searching taps.
///
/// # Example
///
/// ```rust
/// use brew_grep::SearchError;
///
/// fn report(error: &SearchError) {
///     eprintln!("Error: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The requested command is not one of the supported tools.
    #[error("Unsupported search command: {name}. Supported commands: {}", .supported.join(", "))]
    UnknownCommand {
        /// Name that was requested.
        name: String,
        /// Names of all supported commands, in order of preference.
        supported: Vec<&'static str>,
    },

    /// The requested command is supported but could not be found.
    #[error("Search command not installed: {name}. Supported commands: {}", .supported.join(", "))]
    CommandNotInstalled {
        /// Name that was requested.
        name: String,
        /// Names of all supported commands, in order of preference.
        supported: Vec<&'static str>,
    },

    /// None of the supported commands could be found.
    #[error("Couldn't find a supported search tool. Supported commands: {}", .supported.join(", "))]
    NoCommandInstalled {
        /// Names of all supported commands, in order of preference.
        supported: Vec<&'static str>,
    },

    /// The search command could not be started.
    #[error("Failed to run {command} in {}: {source}", .path.display())]
    Spawn {
        /// Command that was being run.
        command: &'static str,
        /// Tap directory being searched.
        path: PathBuf,
        /// Underlying launch error.
        #[source]
        source: std::io::Error,
    },

    /// No Homebrew repository could be located.
    #[error("Couldn't find the Homebrew repository")]
    TapsNotFound,

    /// The tap directory tree could not be read.
    #[error("Failed to list taps in {}: {source}", .path.display())]
    TapListing {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Search results could not be written out.
    #[error("Failed to write search output: {0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Whether this error means no usable search command was found.
    ///
    /// ```rust
    /// use brew_grep::SearchError;
    ///
    /// let error = SearchError::NoCommandInstalled { supported: vec!["rg", "ack", "grep"] };
    /// assert!(error.is_not_found());
    /// assert!(!SearchError::TapsNotFound.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. }
                | Self::CommandNotInstalled { .. }
                | Self::NoCommandInstalled { .. }
        )
    }

    /// Whether this error is the output being closed early, e.g. by `| head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => {
                "Pass one of the supported commands to --command or BREW_GREP_COMMAND"
            }
            Self::CommandNotInstalled { .. } => {
                "Install the command (e.g. `brew install ripgrep`) or choose another one"
            }
            Self::NoCommandInstalled { .. } => {
                "Install ripgrep with `brew install ripgrep`, or make sure grep is on PATH"
            }
            Self::Spawn { .. } => "Check that the search command runs from your shell",
            Self::TapsNotFound => "Set HOMEBREW_REPOSITORY or pass --tap-dir",
            Self::TapListing { .. } => "Check the permissions of the Homebrew Taps directory",
            Self::Output(_) => "Check that standard output is writable",
        }
    }
}
