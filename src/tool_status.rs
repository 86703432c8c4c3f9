//! Tool status types representing probe results.

use crate::SearchTool;
use semver::Version;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An installed search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledTool {
    /// Path the executable was found at.
    pub path: PathBuf,

    /// Version reported by `--version`.
    ///
    /// `None` when the tool could not be run or printed nothing that looks
    /// like a version.
    pub version: Option<Version>,
}

/// Why a tool's version could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VersionError {
    /// `--version` did not finish in time.
    #[error("Version check timed out")]
    Timeout,

    /// The executable could not be run.
    #[error("Permission denied")]
    PermissionDenied,

    /// The executable failed to start or exited unsuccessfully.
    #[error("I/O error during version check")]
    IoError,

    /// The output contained no version.
    #[error("Failed to parse version")]
    ParseFailed,
}

/// Result of probing one search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ToolStatus {
    /// The tool was found on the search path.
    Installed(InstalledTool),

    /// The tool is not on the search path.
    NotInstalled,
}

impl ToolStatus {
    /// Check if the tool was found.
    ///
    /// ```rust
    /// use brew_grep::ToolStatus;
    ///
    /// assert!(!ToolStatus::NotInstalled.is_installed());
    /// ```
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }

    /// Path of the executable, if installed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Installed(tool) => Some(&tool.path),
            Self::NotInstalled => None,
        }
    }

    /// Reported version, if installed and known.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Installed(tool) => tool.version.as_ref(),
            Self::NotInstalled => None,
        }
    }
}

/// One line of the `--info` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    /// The tool probed.
    pub command: SearchTool,

    /// Whether this tool would be used for searching.
    pub selected: bool,

    /// What the probe found.
    #[serde(flatten)]
    pub status: ToolStatus,
}

impl fmt::Display for ToolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5}", self.command.command_name())?;
        match &self.status {
            ToolStatus::Installed(tool) => {
                write!(f, " {}", tool.path.display())?;
                match &tool.version {
                    Some(version) => write!(f, " ({version})")?,
                    None => write!(f, " (unknown version)")?,
                }
            }
            ToolStatus::NotInstalled => write!(f, " not installed")?,
        }
        if self.selected {
            write!(f, " [selected]")?;
        }
        Ok(())
    }
}
