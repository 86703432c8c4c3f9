//! Searching every tap with the selected tool.

use crate::invoke::{search_directory, CommandRunner, ProcessRunner};
use crate::{SearchError, SearchOptions, SearchTool, TapSource};
use std::io::Write;
use tracing::{debug, info};

/// Runs one search tool over a list of tap directories.
///
/// The tool is resolved once, up front (see
/// [`CommandRegistry::select`](crate::CommandRegistry::select)), and reused
/// for every directory.
///
/// # Example
///
/// ```rust,no_run
/// use brew_grep::{CommandRegistry, HomebrewTaps, SearchOptions, Searcher, SystemEnv};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), brew_grep::SearchError> {
///     let registry = CommandRegistry::system();
///     let tool = registry.select(None)?;
///     let taps = HomebrewTaps::discover(&SystemEnv)?;
///
///     let searcher = Searcher::new(tool, SearchOptions::default());
///     searcher
///         .search(&taps, &["depends_on".to_string()], &mut std::io::stdout())
///         .await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Searcher<R = ProcessRunner> {
    tool: SearchTool,
    options: SearchOptions,
    runner: R,
}

impl Searcher<ProcessRunner> {
    /// Searcher that runs `tool` as a child process.
    pub fn new(tool: SearchTool, options: SearchOptions) -> Self {
        Self::with_runner(tool, options, ProcessRunner)
    }
}

impl<R: CommandRunner> Searcher<R> {
    /// Searcher that runs `tool` through `runner`.
    pub fn with_runner(tool: SearchTool, options: SearchOptions, runner: R) -> Self {
        Self {
            tool,
            options,
            runner,
        }
    }

    /// The tool used for every directory.
    pub fn tool(&self) -> SearchTool {
        self.tool
    }

    /// The runner executing the searches.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Search every directory from `taps`, in order, writing each
    /// directory's result block to `out`.
    ///
    /// Directories are searched one at a time; each command finishes before
    /// the next one starts.
    ///
    /// # Errors
    ///
    /// Stops at the first directory whose command cannot be run, or at the
    /// first failed write. Errors listing the taps are returned before any
    /// search starts.
    pub async fn search<T, W>(
        &self,
        taps: &T,
        extra_args: &[String],
        out: &mut W,
    ) -> Result<(), SearchError>
    where
        T: TapSource + ?Sized,
        W: Write + ?Sized,
    {
        let dirs = taps.tap_dirs()?;
        info!(command = self.tool.command_name(), taps = dirs.len(), "searching taps");

        for dir in &dirs {
            search_directory(
                &self.runner,
                self.tool,
                dir,
                extra_args,
                self.options,
                &mut *out,
            )
            .await?;
        }

        debug!("search finished");
        Ok(())
    }
}
