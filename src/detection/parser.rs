//! Version output parsing with regex extraction.

use crate::VersionError;
use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("Invalid regex pattern"))
}

/// Parse a version from `--version` output.
///
/// Takes the first `major.minor[.patch]` in the text; a missing patch
/// component is read as `0`. Handles the formats of the supported tools:
///
/// - `ripgrep 14.1.0 (rev e50df40a19)` -> 14.1.0
/// - `ack v3.7.0` -> 3.7.0
/// - `grep (GNU grep) 3.11` -> 3.11.0
/// - `grep (BSD grep, GNU compatible) 2.6.0-FreeBSD` -> 2.6.0
pub(crate) fn parse_version(output: &str) -> Result<Version, VersionError> {
    let caps = version_regex()
        .captures(output)
        .ok_or(VersionError::ParseFailed)?;

    let component = |i: usize| -> Result<u64, VersionError> {
        caps.get(i)
            .map_or(Ok(0), |m| m.as_str().parse::<u64>())
            .map_err(|_| VersionError::ParseFailed)
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ripgrep_version() {
        let output = "ripgrep 14.1.0 (rev e50df40a19)\n\nfeatures:+pcre2";
        assert_eq!(parse_version(output).unwrap(), Version::new(14, 1, 0));
    }

    #[test]
    fn test_parse_ack_version() {
        let output = "ack v3.7.0\nRunning under Perl 5.36.0 at /usr/bin/perl";
        assert_eq!(parse_version(output).unwrap(), Version::new(3, 7, 0));
    }

    #[test]
    fn test_parse_gnu_grep_version() {
        let output = "grep (GNU grep) 3.11\nCopyright (C) 2023 Free Software Foundation, Inc.";
        assert_eq!(parse_version(output).unwrap(), Version::new(3, 11, 0));
    }

    #[test]
    fn test_parse_bsd_grep_version() {
        let output = "grep (BSD grep, GNU compatible) 2.6.0-FreeBSD";
        assert_eq!(parse_version(output).unwrap(), Version::new(2, 6, 0));
    }

    #[test]
    fn test_parse_version_no_match() {
        let result = parse_version("no version here");
        assert!(matches!(result, Err(VersionError::ParseFailed)));
    }

    #[test]
    fn test_parse_version_overflow() {
        let result = parse_version("tool 99999999999999999999999.1");
        assert!(matches!(result, Err(VersionError::ParseFailed)));
    }
}
