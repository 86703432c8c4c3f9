//! Search-path based executable lookup.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Variable holding the list of directories to search for executables.
pub const PATH_VAR: &str = "PATH";

/// Variable holding the `;`-separated executable suffixes (e.g. `.EXE;.BAT`).
pub const PATHEXT_VAR: &str = "PATHEXT";

/// The environment an executable lookup runs against.
///
/// [`SystemEnv`] reads the real process environment and filesystem;
/// [`FixedEnv`] answers from fixed in-memory values.
pub trait ProbeEnv {
    /// Value of an environment variable, if set.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Whether `path` is a file the current user may execute.
    fn is_executable_file(&self, path: &Path) -> bool;
}

/// The current process environment and the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ProbeEnv for SystemEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn is_executable_file(&self, path: &Path) -> bool {
        // A path with a separator is checked as-is: a regular file passing
        // access(X_OK) for this process.
        which::which(path).is_ok()
    }
}

/// An environment with explicit variables and an explicit set of executables.
///
/// Nothing touches the real filesystem: a path is executable exactly when it
/// was registered with [`with_executable`](Self::with_executable).
///
/// ```rust
/// use brew_grep::{find_executable, FixedEnv};
/// use std::path::PathBuf;
///
/// let env = FixedEnv::new()
///     .with_var("PATH", "/opt/bin")
///     .with_executable("/opt/bin/rg");
/// assert_eq!(find_executable("rg", &env), Some(PathBuf::from("/opt/bin/rg")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    vars: HashMap<String, OsString>,
    executables: HashSet<PathBuf>,
}

impl FixedEnv {
    /// An environment with no variables and no executables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable.
    pub fn with_var(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Register a path as an executable file.
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }
}

impl ProbeEnv for FixedEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn is_executable_file(&self, path: &Path) -> bool {
        self.executables.contains(path)
    }
}

/// Find an executable by name.
///
/// A `name` containing a path separator is checked as-is. Any other name is
/// looked up in each directory of `PATH`, in order. In both cases every
/// suffix from `PATHEXT` is tried (just the bare name when `PATHEXT` is
/// unset). A missing `PATH` means there is nowhere to look.
///
/// # Returns
///
/// The first matching executable file, or `None`.
pub fn find_executable(name: &str, env: &impl ProbeEnv) -> Option<PathBuf> {
    let suffixes = executable_suffixes(env);

    if name.chars().any(std::path::is_separator) {
        return suffixes
            .iter()
            .map(|ext| with_suffix(Path::new(name), ext))
            .find(|candidate| env.is_executable_file(candidate));
    }

    let search_path = env.var_os(PATH_VAR)?;
    let suffixes = &suffixes;
    std::env::split_paths(&search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(move |dir| suffixes.iter().map(move |ext| with_suffix(&dir.join(name), ext)))
        .find(|candidate| env.is_executable_file(candidate))
}

fn executable_suffixes(env: &impl ProbeEnv) -> Vec<String> {
    match env.var_os(PATHEXT_VAR) {
        Some(exts) => exts.to_string_lossy().split(';').map(str::to_string).collect(),
        None => vec![String::new()],
    }
}

fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(ext);
    PathBuf::from(name)
}
