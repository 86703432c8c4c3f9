//! Listing the tap directories to search.

use crate::detection::ProbeEnv;
use crate::SearchError;
use std::path::{Path, PathBuf};

/// Variable Homebrew sets to its repository root for external commands.
pub const REPOSITORY_VAR: &str = "HOMEBREW_REPOSITORY";

/// Default repository locations, checked when the variable is not set.
const FALLBACK_REPOSITORIES: &[&str] = &[
    "/opt/homebrew",
    "/usr/local/Homebrew",
    "/home/linuxbrew/.linuxbrew/Homebrew",
];

/// Supplies the ordered list of directories a search runs over.
pub trait TapSource {
    /// The directories to search, in search order.
    fn tap_dirs(&self) -> Result<Vec<PathBuf>, SearchError>;
}

impl TapSource for [PathBuf] {
    fn tap_dirs(&self) -> Result<Vec<PathBuf>, SearchError> {
        Ok(self.to_vec())
    }
}

impl TapSource for Vec<PathBuf> {
    fn tap_dirs(&self) -> Result<Vec<PathBuf>, SearchError> {
        self.as_slice().tap_dirs()
    }
}

/// The taps installed in a Homebrew repository.
///
/// Taps live at `<repository>/Library/Taps/<user>/<repo>`.
#[derive(Debug, Clone)]
pub struct HomebrewTaps {
    repository: PathBuf,
}

impl HomebrewTaps {
    /// Taps of the repository at `repository`.
    pub fn new(repository: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
        }
    }

    /// Locate the Homebrew repository.
    ///
    /// Uses `HOMEBREW_REPOSITORY` when set, otherwise the first default
    /// install location that has a `Library/Taps` directory.
    ///
    /// # Errors
    ///
    /// `SearchError::TapsNotFound` if no repository could be found.
    pub fn discover(env: &impl ProbeEnv) -> Result<Self, SearchError> {
        if let Some(repository) = env.var_os(REPOSITORY_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::new(repository));
        }

        FALLBACK_REPOSITORIES
            .iter()
            .map(Self::new)
            .find(|taps| taps.taps_root().is_dir())
            .ok_or(SearchError::TapsNotFound)
    }

    /// The repository root.
    pub fn repository(&self) -> &Path {
        &self.repository
    }

    /// Directory holding one subdirectory per tap user.
    pub fn taps_root(&self) -> PathBuf {
        self.repository.join("Library").join("Taps")
    }
}

impl TapSource for HomebrewTaps {
    /// Tap directories sorted by path. A repository without a `Taps`
    /// directory has no taps.
    fn tap_dirs(&self) -> Result<Vec<PathBuf>, SearchError> {
        let root = self.taps_root();
        let users = match subdirectories(&root) {
            Ok(users) => users,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(SearchError::TapListing { path: root, source }),
        };

        let mut taps = Vec::new();
        for user in users {
            let repos = subdirectories(&user)
                .map_err(|source| SearchError::TapListing { path: user.clone(), source })?;
            taps.extend(repos);
        }
        taps.sort();
        Ok(taps)
    }
}

fn subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}
