//! Search tool enum identifying the supported external search programs.

use crate::detection::{find_executable, ProbeEnv};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// An external program that can search tap directories.
///
/// Each variant carries a fixed invocation contract: the command to run, the
/// arguments that make it search Ruby sources recursively (following
/// symlinks, with colored and grouped output, skipping `spec` directories),
/// and the extra arguments that also skip `Casks` directories.
///
/// Variants are declared in order of preference. Autodetection picks the
/// first one that is installed.
///
/// # Example
///
/// ```rust
/// use brew_grep::SearchTool;
///
/// let names: Vec<_> = SearchTool::all().map(|t| t.command_name()).collect();
/// assert_eq!(names, ["rg", "ack", "grep"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum SearchTool {
    /// ripgrep (`rg`)
    #[serde(rename = "rg")]
    Ripgrep,
    /// ack (`ack`)
    Ack,
    /// GNU or BSD grep (`grep`)
    Grep,
}

impl SearchTool {
    /// The command name looked up on `PATH` and used to run the tool.
    ///
    /// ```rust
    /// use brew_grep::SearchTool;
    ///
    /// assert_eq!(SearchTool::Ripgrep.command_name(), "rg");
    /// assert_eq!(SearchTool::Grep.command_name(), "grep");
    /// ```
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Ripgrep => "rg",
            Self::Ack => "ack",
            Self::Grep => "grep",
        }
    }

    /// Human-readable name of the tool.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ripgrep => "ripgrep",
            Self::Ack => "ack",
            Self::Grep => "grep",
        }
    }

    /// Arguments every search starts with.
    ///
    /// The pattern, any passthrough options and the tap path are appended
    /// after these (and after [`casks_exclude_args`](Self::casks_exclude_args)
    /// when Casks are excluded).
    pub fn base_args(&self) -> &'static [&'static str] {
        match self {
            Self::Ripgrep => &[
                "--color=always",
                "--type=ruby",
                "--follow",
                "--heading",
                "--glob=!spec/",
            ],
            Self::Ack => &[
                "--color",
                "--ruby",
                "--follow",
                "--heading",
                "--break",
                "--ignore-dir=spec",
            ],
            // Only options understood by both GNU and BSD grep.
            Self::Grep => &[
                "-E",
                "--color=always",
                "-R",
                "--include=*.rb",
                "--exclude-dir=.git",
                "--exclude-dir=spec",
            ],
        }
    }

    /// Arguments that additionally skip each tap's `Casks` directory.
    pub fn casks_exclude_args(&self) -> &'static [&'static str] {
        match self {
            Self::Ripgrep => &["--glob=!Casks/"],
            Self::Ack => &["--ignore-dir=Casks"],
            Self::Grep => &["--exclude-dir=Casks"],
        }
    }

    /// Whether the tool's executable can be found in `env`.
    ///
    /// This probes the search path on every call.
    pub fn is_installed(&self, env: &impl ProbeEnv) -> bool {
        find_executable(self.command_name(), env).is_some()
    }

    /// Look a tool up by its command name.
    ///
    /// ```rust
    /// use brew_grep::SearchTool;
    ///
    /// assert_eq!(SearchTool::from_command_name("ack"), Some(SearchTool::Ack));
    /// assert_eq!(SearchTool::from_command_name("ag"), None);
    /// ```
    pub fn from_command_name(name: &str) -> Option<Self> {
        Self::all().find(|tool| tool.command_name() == name)
    }

    /// Iterator over all supported tools, in order of preference.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for SearchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::FixedEnv;

    #[test]
    fn test_preference_order() {
        let all: Vec<_> = SearchTool::all().collect();
        assert_eq!(all, [SearchTool::Ripgrep, SearchTool::Ack, SearchTool::Grep]);
    }

    #[test]
    fn test_every_tool_skips_spec_dirs() {
        for tool in SearchTool::all() {
            assert!(
                tool.base_args().iter().any(|a| a.contains("spec")),
                "{tool} should exclude spec directories"
            );
        }
    }

    #[test]
    fn test_casks_args_target_casks() {
        for tool in SearchTool::all() {
            let args = tool.casks_exclude_args();
            assert!(!args.is_empty());
            assert!(args.iter().all(|a| a.contains("Casks")));
        }
    }

    #[test]
    fn test_grep_args_are_portable() {
        // -S is BSD-only, -r does not follow symlinks on GNU grep
        let args = SearchTool::Grep.base_args();
        assert!(args.contains(&"-R"));
        assert!(!args.contains(&"-S"));
        assert!(args.contains(&"--exclude-dir=.git"));
    }

    #[test]
    fn test_is_installed() {
        let env = FixedEnv::new()
            .with_var("PATH", "/fake/bin")
            .with_executable("/fake/bin/ack");
        assert!(SearchTool::Ack.is_installed(&env));
        assert!(!SearchTool::Ripgrep.is_installed(&env));
    }

    #[test]
    fn test_display_and_serde_use_command_name() {
        assert_eq!(SearchTool::Ripgrep.to_string(), "rg");
        let json = serde_json::to_string(&SearchTool::Ripgrep).unwrap();
        assert_eq!(json, "\"rg\"");
        let tool: SearchTool = serde_json::from_str("\"grep\"").unwrap();
        assert_eq!(tool, SearchTool::Grep);
    }
}
