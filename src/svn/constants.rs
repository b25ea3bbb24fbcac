//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and output markers.

/// Default svn binary name
pub const SVN_COMMAND: &str = "svn";

/// svn subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const DIFF: &str = "diff";
}

/// svn command flags
pub mod flags {
    /// Structured output for `svn log`
    pub const XML: &str = "--xml";
    pub const USERNAME: &str = "--username";
    pub const PASSWORD: &str = "--password";
    /// Never prompt for credentials or certificate acceptance
    pub const NON_INTERACTIVE: &str = "--non-interactive";
    /// Maximum number of log entries
    pub const LIMIT: &str = "-l";
    /// Revision or revision range
    pub const REVISION: &str = "-r";
    /// Single change (`-c N` is `-r N-1:N`)
    pub const CHANGE: &str = "-c";
    /// OR-combined log filter
    pub const SEARCH: &str = "--search";
    /// AND-combined log filter, joined to the preceding `--search` group
    pub const SEARCH_AND: &str = "--search-and";
}

/// Error detection patterns in svn output
pub mod errors {
    /// Prefix svn puts in front of every numbered error line
    pub const MARKER: &str = "svn: E";
}

/// Placeholder printed in place of secrets when a command line is logged
pub const REDACTED: &str = "<redacted>";
