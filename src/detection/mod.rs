//! Detection implementation submodule.
//!
//! - `find_executable`: `PATH`/`PATHEXT` lookup over a [`ProbeEnv`]
//! - `check_version`: `--version` run with a timeout
//! - `parse_version`: regex-based version extraction from tool output

mod parser;
mod path_finder;
mod version;

pub(crate) use parser::parse_version;
pub use path_finder::{find_executable, FixedEnv, ProbeEnv, SystemEnv, PATHEXT_VAR, PATH_VAR};
pub(crate) use version::check_version;
