//! Running a search tool against one directory.
//!
//! [`Invocation`] turns a tool, a directory and the caller's arguments into a
//! concrete command line. A [`CommandRunner`] executes it and hands back the
//! captured output, which [`search_directory`] writes as one result block.

use crate::{SearchError, SearchOptions, SearchTool};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Token that makes every supported tool print only matching file paths.
pub const LIST_FILES_FLAG: &str = "-l";

/// A fully built search command for one directory.
///
/// # Example
///
/// ```rust
/// use brew_grep::{Invocation, SearchOptions, SearchTool};
/// use std::path::Path;
///
/// let inv = Invocation::new(
///     SearchTool::Ack,
///     Path::new("/taps/homebrew/homebrew-core"),
///     &["depends_on".to_string()],
///     SearchOptions { exclude_casks: true },
/// );
/// assert_eq!(inv.program, "ack");
/// assert_eq!(inv.args.last().unwrap(), "/taps/homebrew/homebrew-core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command to run.
    pub program: &'static str,

    /// Arguments, ending with the directory to search.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Build the command line
    /// `base args ++ [Casks exclusion] ++ extra_args ++ [path]`.
    pub fn new(
        tool: SearchTool,
        path: &Path,
        extra_args: &[String],
        options: SearchOptions,
    ) -> Self {
        let casks: &[&str] = if options.exclude_casks {
            tool.casks_exclude_args()
        } else {
            &[]
        };

        let args = tool
            .base_args()
            .iter()
            .chain(casks)
            .map(OsString::from)
            .chain(extra_args.iter().map(OsString::from))
            .chain(std::iter::once(path.as_os_str().to_owned()))
            .collect();

        Self {
            program: tool.command_name(),
            args,
        }
    }
}

/// Executes invocations and returns their standard output.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `invocation` to completion and return everything it printed on
    /// standard output.
    async fn run(&self, invocation: &Invocation) -> io::Result<Vec<u8>>;
}

/// Runs invocations as child processes.
///
/// Standard error is inherited so the tool's own diagnostics (bad options,
/// missing directories) reach the user directly. The exit status is not
/// inspected: "no matches" and "error" both surface as whatever was printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<Vec<u8>> {
        let output = Command::new(invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .output()
            .await?;

        debug!(
            command = invocation.program,
            status = %output.status,
            bytes = output.stdout.len(),
            "search command finished"
        );
        Ok(output.stdout)
    }
}

/// Search one directory and write its result block to `out`.
///
/// Non-empty output is written as-is (terminated with a newline if the tool
/// left it unterminated) followed by one blank line, except when
/// `extra_args` contains `-l`: path listings are not separated. A directory
/// without matches writes nothing.
///
/// # Errors
///
/// - `SearchError::Spawn` if the command could not be run
/// - `SearchError::Output` if writing to `out` failed
pub async fn search_directory<R, W>(
    runner: &R,
    tool: SearchTool,
    path: &Path,
    extra_args: &[String],
    options: SearchOptions,
    out: &mut W,
) -> Result<(), SearchError>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    let invocation = Invocation::new(tool, path, extra_args, options);
    debug!(command = invocation.program, args = ?invocation.args, "searching directory");

    let output = runner
        .run(&invocation)
        .await
        .map_err(|source| SearchError::Spawn {
            command: tool.command_name(),
            path: path.to_path_buf(),
            source,
        })?;

    let paths_only = extra_args.iter().any(|arg| arg == LIST_FILES_FLAG);
    write_block(&output, paths_only, out)?;
    Ok(())
}

fn write_block<W>(output: &[u8], paths_only: bool, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    if output.is_empty() {
        return Ok(());
    }

    out.write_all(output)?;
    if !output.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    if !paths_only {
        out.write_all(b"\n")?;
    }
    out.flush()
}
