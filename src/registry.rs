//! Search command registry and selection.

use crate::detection::{check_version, find_executable, parse_version, ProbeEnv, SystemEnv};
use crate::{InstalledTool, ReportOptions, SearchError, SearchTool, ToolReport, ToolStatus};
use futures::future::join_all;
use std::path::PathBuf;
use tracing::debug;

/// The supported search tools, in order of preference, together with the
/// environment used to probe for them.
///
/// # Example
///
/// ```rust
/// use brew_grep::{CommandRegistry, FixedEnv, SearchTool};
///
/// let env = FixedEnv::new()
///     .with_var("PATH", "/usr/bin")
///     .with_executable("/usr/bin/grep");
/// let registry = CommandRegistry::new(env);
///
/// assert_eq!(registry.autodetect().unwrap(), SearchTool::Grep);
/// assert!(registry.find("rg").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CommandRegistry<E = SystemEnv> {
    tools: Vec<SearchTool>,
    env: E,
}

impl CommandRegistry<SystemEnv> {
    /// Registry of all supported tools, probed against the real environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ProbeEnv> CommandRegistry<E> {
    /// Registry of all supported tools, probed against `env`.
    pub fn new(env: E) -> Self {
        Self::with_tools(SearchTool::all().collect(), env)
    }

    /// Registry of the given tools, preferred in the given order.
    pub fn with_tools(tools: Vec<SearchTool>, env: E) -> Self {
        Self { tools, env }
    }

    /// The tools in order of preference.
    pub fn tools(&self) -> &[SearchTool] {
        &self.tools
    }

    /// The environment tools are probed against.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Command names of all tools, in order of preference.
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(SearchTool::command_name).collect()
    }

    /// Path to `tool`'s executable, if installed.
    pub fn locate(&self, tool: SearchTool) -> Option<PathBuf> {
        find_executable(tool.command_name(), &self.env)
    }

    /// Installed tools, in order of preference.
    ///
    /// The search path is probed again on every call.
    pub fn installed(&self) -> Vec<SearchTool> {
        self.tools
            .iter()
            .copied()
            .filter(|tool| tool.is_installed(&self.env))
            .collect()
    }

    /// The most preferred installed tool.
    ///
    /// # Errors
    ///
    /// `SearchError::NoCommandInstalled` if none of the tools is installed.
    pub fn autodetect(&self) -> Result<SearchTool, SearchError> {
        self.tools
            .iter()
            .copied()
            .find(|tool| tool.is_installed(&self.env))
            .ok_or_else(|| SearchError::NoCommandInstalled {
                supported: self.names(),
            })
    }

    /// The tool with command name `name`.
    ///
    /// # Errors
    ///
    /// - `SearchError::UnknownCommand` if no tool has that name
    /// - `SearchError::CommandNotInstalled` if the tool is not installed
    pub fn find(&self, name: &str) -> Result<SearchTool, SearchError> {
        let tool = SearchTool::from_command_name(name)
            .filter(|tool| self.tools.contains(tool))
            .ok_or_else(|| SearchError::UnknownCommand {
                name: name.to_string(),
                supported: self.names(),
            })?;

        if !tool.is_installed(&self.env) {
            return Err(SearchError::CommandNotInstalled {
                name: name.to_string(),
                supported: self.names(),
            });
        }

        Ok(tool)
    }

    /// Resolve the tool to search with.
    ///
    /// An explicitly requested, non-empty name goes through [`find`](Self::find);
    /// otherwise the tool is [autodetected](Self::autodetect).
    pub fn select(&self, requested: Option<&str>) -> Result<SearchTool, SearchError> {
        let tool = match requested.filter(|name| !name.is_empty()) {
            Some(name) => self.find(name)?,
            None => self.autodetect()?,
        };
        debug!(command = tool.command_name(), requested, "selected search command");
        Ok(tool)
    }

    /// Probe a single tool: its location and, if found, its version.
    ///
    /// A version that cannot be determined is left as `None`; the tool
    /// still counts as installed.
    pub async fn detect(&self, tool: SearchTool, options: &ReportOptions) -> ToolStatus {
        let Some(path) = self.locate(tool) else {
            return ToolStatus::NotInstalled;
        };

        let version = check_version(&path, options.timeout)
            .await
            .and_then(|output| parse_version(&output));

        let version = match version {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(
                    command = tool.command_name(),
                    path = %path.display(),
                    error = %e,
                    "version check failed"
                );
                None
            }
        };

        ToolStatus::Installed(InstalledTool { path, version })
    }

    /// Probe every tool concurrently.
    ///
    /// Reports are returned in order of preference; `selected` marks the one
    /// that a search would use.
    pub async fn report(
        &self,
        selected: Option<SearchTool>,
        options: &ReportOptions,
    ) -> Vec<ToolReport> {
        let futures: Vec<_> = self
            .tools
            .iter()
            .map(|&tool| async move {
                ToolReport {
                    command: tool,
                    selected: selected == Some(tool),
                    status: self.detect(tool, options).await,
                }
            })
            .collect();

        join_all(futures).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::FixedEnv;

    fn env_with(executables: &[&str]) -> FixedEnv {
        executables.iter().fold(
            FixedEnv::new().with_var("PATH", "/nonexistent/bin"),
            |env, name| env.with_executable(format!("/nonexistent/bin/{name}")),
        )
    }

    #[test]
    fn test_names_in_preference_order() {
        let registry = CommandRegistry::new(FixedEnv::new());
        assert_eq!(registry.names(), ["rg", "ack", "grep"]);
    }

    #[test]
    fn test_installed_preserves_order() {
        let registry = CommandRegistry::new(env_with(&["grep", "rg"]));
        assert_eq!(registry.installed(), [SearchTool::Ripgrep, SearchTool::Grep]);
    }

    #[test]
    fn test_autodetect_prefers_first_installed() {
        let cases: &[(&[&str], SearchTool)] = &[
            (&["rg", "ack", "grep"], SearchTool::Ripgrep),
            (&["ack", "grep"], SearchTool::Ack),
            (&["grep", "ack"], SearchTool::Ack),
            (&["grep"], SearchTool::Grep),
        ];
        for (installed, expected) in cases {
            let registry = CommandRegistry::new(env_with(installed));
            assert_eq!(registry.autodetect().unwrap(), *expected, "{installed:?}");
            // Same answer on every call
            assert_eq!(registry.autodetect().unwrap(), *expected);
        }
    }

    #[test]
    fn test_autodetect_nothing_installed() {
        let registry = CommandRegistry::new(env_with(&[]));
        match registry.autodetect() {
            Err(SearchError::NoCommandInstalled { supported }) => {
                assert_eq!(supported, ["rg", "ack", "grep"]);
            }
            other => panic!("expected NoCommandInstalled, got {other:?}"),
        }
    }

    #[test]
    fn test_autodetect_without_path_var() {
        let registry = CommandRegistry::new(FixedEnv::new().with_executable("/nonexistent/bin/rg"));
        assert!(matches!(
            registry.autodetect(),
            Err(SearchError::NoCommandInstalled { .. })
        ));
    }

    #[test]
    fn test_find_unknown_name() {
        let registry = CommandRegistry::new(env_with(&["rg", "ack", "grep", "ag"]));
        let error = registry.find("ag").unwrap_err();
        assert!(matches!(error, SearchError::UnknownCommand { .. }));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_find_not_installed() {
        let registry = CommandRegistry::new(env_with(&["rg"]));
        let error = registry.find("ack").unwrap_err();
        assert!(matches!(error, SearchError::CommandNotInstalled { .. }));
        assert!(error.to_string().contains("ack"));
    }

    #[test]
    fn test_find_installed() {
        let registry = CommandRegistry::new(env_with(&["rg", "grep"]));
        assert_eq!(registry.find("grep").unwrap(), SearchTool::Grep);
    }

    #[test]
    fn test_select_override_and_fallback() {
        let registry = CommandRegistry::new(env_with(&["rg", "grep"]));
        assert_eq!(registry.select(Some("grep")).unwrap(), SearchTool::Grep);
        assert_eq!(registry.select(None).unwrap(), SearchTool::Ripgrep);
        assert_eq!(registry.select(Some("")).unwrap(), SearchTool::Ripgrep);
        assert!(registry.select(Some("ack")).is_err());
    }

    #[test]
    fn test_custom_tool_order() {
        let registry = CommandRegistry::with_tools(
            vec![SearchTool::Grep, SearchTool::Ripgrep],
            env_with(&["rg", "ack", "grep"]),
        );
        assert_eq!(registry.autodetect().unwrap(), SearchTool::Grep);
        assert_eq!(registry.names(), ["grep", "rg"]);
        assert!(matches!(
            registry.find("ack"),
            Err(SearchError::UnknownCommand { .. })
        ));
    }

    #[tokio::test]
    async fn test_report_not_installed() {
        let registry = CommandRegistry::new(env_with(&[]));
        let reports = registry.report(None, &ReportOptions::default()).await;

        assert_eq!(reports.len(), 3);
        let commands: Vec<_> = reports.iter().map(|r| r.command).collect();
        assert_eq!(commands, [SearchTool::Ripgrep, SearchTool::Ack, SearchTool::Grep]);
        assert!(reports.iter().all(|r| !r.status.is_installed() && !r.selected));
    }

    #[tokio::test]
    async fn test_detect_unrunnable_tool_has_no_version() {
        // Found by the probe, but the path does not exist on disk
        let registry = CommandRegistry::new(env_with(&["rg"]));
        let status = registry
            .detect(SearchTool::Ripgrep, &ReportOptions::default())
            .await;

        assert!(status.is_installed());
        assert_eq!(status.path(), Some(std::path::Path::new("/nonexistent/bin/rg")));
        assert!(status.version().is_none());
    }

    #[tokio::test]
    async fn test_report_marks_selected() {
        let registry = CommandRegistry::new(env_with(&[]));
        let reports = registry
            .report(Some(SearchTool::Ack), &ReportOptions::default())
            .await;
        let selected: Vec<_> = reports.iter().filter(|r| r.selected).map(|r| r.command).collect();
        assert_eq!(selected, [SearchTool::Ack]);
    }
}
