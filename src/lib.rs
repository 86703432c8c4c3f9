//! # brew-grep
//!
//! Search every Homebrew tap for a pattern with whichever search tool is
//! installed: `rg`, `ack` or `grep`.
//!
//! The crate hides the differences between the tools: each [`SearchTool`]
//! knows the arguments that make it search Ruby sources recursively with
//! grouped, colored output, so callers only supply the pattern and any
//! tool-specific flags they want passed through.
//!
//! ## Features
//!
//! - `SearchTool` enum describing each supported tool
//! - `find_executable()` `PATH`/`PATHEXT` lookup over an injectable [`ProbeEnv`]
//! - `CommandRegistry` for autodetecting or explicitly selecting a tool
//! - `Searcher` running the selected tool over every tap, one at a time
//! - `CommandRegistry::report()` for installed paths and versions
//!
//! ## Example
//!
//! ```rust,no_run
//! use brew_grep::{CommandRegistry, HomebrewTaps, SearchOptions, Searcher, SystemEnv};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), brew_grep::SearchError> {
//!     let registry = CommandRegistry::system();
//!     let tool = registry.select(None)?;
//!     println!("Searching with {}", tool.display_name());
//!
//!     let taps = HomebrewTaps::discover(&SystemEnv)?;
//!     let searcher = Searcher::new(tool, SearchOptions { exclude_casks: true });
//!     let args = vec!["-i".to_string(), "livecheck".to_string()];
//!     searcher.search(&taps, &args, &mut std::io::stdout()).await
//! }
//! ```

pub mod cli;
mod detection;
mod errors;
mod invoke;
mod options;
mod registry;
mod search;
mod search_tool;
mod taps;
mod tool_status;

pub use detection::{find_executable, FixedEnv, ProbeEnv, SystemEnv, PATHEXT_VAR, PATH_VAR};
pub use errors::SearchError;
pub use invoke::{search_directory, CommandRunner, Invocation, ProcessRunner, LIST_FILES_FLAG};
pub use options::{ReportOptions, SearchOptions};
pub use registry::CommandRegistry;
pub use search::Searcher;
pub use search_tool::SearchTool;
pub use taps::{HomebrewTaps, TapSource, REPOSITORY_VAR};
pub use tool_status::{InstalledTool, ToolReport, ToolStatus, VersionError};
