//! CLI definitions for `brew grep`.
//!
//! Everything on the command line that is not one of brew-grep's own flags
//! belongs to the search tool (the pattern, `-i`, `-l`, `-w`, ...), so the
//! arguments are split before clap sees them: [`split_args`] keeps the
//! recognized flags for clap and passes every other token through untouched.

use clap::Parser;
use std::path::PathBuf;

/// Variable naming the search command to use instead of autodetecting one.
pub const COMMAND_ENV: &str = "BREW_GREP_COMMAND";

/// Variable holding the log filter (e.g. `debug`, `brew_grep=trace`).
pub const LOG_ENV: &str = "BREW_GREP_LOG";

/// Short usage line printed when no pattern was given.
pub const USAGE: &str = "Usage:\n\tbrew grep [--exclude-casks] [--command <NAME>] [-i] <regex>";

/// Flags that take no value.
const OWN_FLAGS: &[&str] = &[
    "--exclude-casks",
    "--which",
    "--list-commands",
    "--info",
    "--json",
    "-h",
    "--help",
];

/// Options that take a value, as `--opt value` or `--opt=value`.
const OWN_OPTIONS: &[&str] = &["--command", "--tap-dir"];

/// CLI arguments for brew-grep
#[derive(Parser, Debug)]
#[command(name = "brew-grep", bin_name = "brew grep")]
#[command(about = "Search every Homebrew tap for a pattern")]
#[command(long_about = r#"
Search every Homebrew tap for a pattern using rg, ack or grep, whichever is
installed first in that order.

Options not listed below are passed through to the search command, so
tool-specific flags such as -i, -w or -l work as usual. Use -- to pass an
argument that looks like one of brew grep's own flags.

Example:
  brew grep 'depends_on "openssl'
  brew grep -i --exclude-casks livecheck
  brew grep --command grep -l 'uses_from_macos'
"#)]
pub struct Cli {
    /// Also skip each tap's Casks directory
    #[arg(long)]
    pub exclude_casks: bool,

    /// Search command to use (rg, ack or grep) instead of autodetecting one
    #[arg(long, value_name = "NAME", env = "BREW_GREP_COMMAND")]
    pub command: Option<String>,

    /// Print the search command that would be used and exit
    #[arg(long)]
    pub which: bool,

    /// Print all supported search commands and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Show which search commands are installed, with their versions, and exit
    #[arg(long)]
    pub info: bool,

    /// Print the --info report as JSON
    #[arg(long, requires = "info")]
    pub json: bool,

    /// Search DIR instead of the installed taps (can be repeated)
    #[arg(long, value_name = "DIR")]
    pub tap_dir: Vec<PathBuf>,

    /// Pattern and options for the search command
    #[arg(skip)]
    pub search_args: Vec<String>,
}

impl Cli {
    /// Parse the arguments following the program name.
    ///
    /// # Errors
    ///
    /// Returns clap's error for malformed brew-grep flags, and for `--help`
    /// (which clap reports as an error that prints help and exits 0).
    pub fn parse_args<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let (own, search_args) = split_args(args);
        let argv = std::iter::once("brew grep".to_string()).chain(own);
        let mut cli = Self::try_parse_from(argv)?;
        cli.search_args = search_args;
        Ok(cli)
    }

    /// Whether one of the informational modes was requested.
    pub fn is_query(&self) -> bool {
        self.which || self.list_commands || self.info
    }
}

/// Split arguments into brew-grep's own flags and the search command's.
///
/// A `--` ends flag recognition: it is dropped and everything after it goes
/// to the search command.
///
/// ```rust
/// use brew_grep::cli::split_args;
///
/// let args = ["-i", "--exclude-casks", "--command=ack", "url", "--", "--which"];
/// let (own, search) = split_args(args.iter().map(|s| s.to_string()));
/// assert_eq!(own, ["--exclude-casks", "--command=ack"]);
/// assert_eq!(search, ["-i", "url", "--which"]);
/// ```
pub fn split_args<I>(args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let mut own = Vec::new();
    let mut search = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            search.extend(args.by_ref());
            break;
        }

        if OWN_FLAGS.contains(&arg.as_str()) {
            own.push(arg);
        } else if OWN_OPTIONS.contains(&arg.as_str()) {
            own.push(arg);
            own.extend(args.next());
        } else if is_inline_option(&arg) {
            own.push(arg);
        } else {
            search.push(arg);
        }
    }

    (own, search)
}

fn is_inline_option(arg: &str) -> bool {
    OWN_OPTIONS
        .iter()
        .any(|opt| arg.strip_prefix(opt).is_some_and(|rest| rest.starts_with('=')))
}
