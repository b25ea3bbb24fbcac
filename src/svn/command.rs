//! svn command-line construction
//!
//! Every invocation is assembled in a fixed order:
//! 1. subcommand (`log --xml` / `diff`)
//! 2. `--non-interactive`, when enabled
//! 3. `--username U --password P`, when both are set
//! 4. scalar flags (`-l`, `-r`, `-c`)
//! 5. repeated filters (`--search`, then `--search-and`)
//! 6. target (local working copy, else remote URL)
//!
//! Unset parameters are omitted; no flag is ever emitted with an empty value.

use std::fmt;

use super::constants::{REDACTED, commands, flags};
use super::credentials::Credentials;

/// Positional argument naming what svn operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target<'a> {
    /// Local working copy path
    Local(&'a str),
    /// Remote repository URL
    Remote(&'a str),
    /// No argument; svn falls back to the current directory
    #[default]
    Default,
}

impl<'a> Target<'a> {
    /// Pick the target, preferring a non-empty local path over a remote URL
    pub fn select(local: Option<&'a str>, remote: Option<&'a str>) -> Self {
        match (local, remote) {
            (Some(local), _) if !local.is_empty() => Target::Local(local),
            (_, Some(remote)) if !remote.is_empty() => Target::Remote(remote),
            _ => Target::Default,
        }
    }

    fn as_arg(&self) -> Option<&'a str> {
        match *self {
            Target::Local(path) => Some(path),
            Target::Remote(url) => Some(url),
            Target::Default => None,
        }
    }
}

/// Per-client settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Invocation<'a> {
    pub target: Target<'a>,
    pub credentials: Option<&'a Credentials>,
    pub non_interactive: bool,
}

/// A built svn argument vector (without the binary name)
#[derive(Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<String>,
    /// Index of the password value, hidden from `redacted()` and `Debug`
    secret: Option<usize>,
}

impl CommandLine {
    pub fn new(base: &[&str]) -> Self {
        Self {
            args: base.iter().map(|s| s.to_string()).collect(),
            secret: None,
        }
    }

    pub fn non_interactive(mut self, enabled: bool) -> Self {
        if enabled {
            self.args.push(flags::NON_INTERACTIVE.to_string());
        }
        self
    }

    /// Append `--username U --password P` if the pair is complete
    pub fn credentials(mut self, credentials: Option<&Credentials>) -> Self {
        if let Some(creds) = credentials.filter(|c| c.is_complete()) {
            self.args.push(flags::USERNAME.to_string());
            self.args.push(creds.username().to_string());
            self.args.push(flags::PASSWORD.to_string());
            self.secret = Some(self.args.len());
            self.args.push(creds.password().to_string());
        }
        self
    }

    /// Append `flag value` unless `value` is empty
    pub fn flag(mut self, flag: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.args.push(flag.to_string());
            self.args.push(value.to_string());
        }
        self
    }

    /// Append `-l N` for positive limits only
    pub fn limit(self, limit: i64) -> Self {
        if limit > 0 {
            self.flag(flags::LIMIT, &limit.to_string())
        } else {
            self
        }
    }

    /// Append one `flag value` pair per element, in input order
    pub fn repeated<S: AsRef<str>>(self, flag: &str, values: &[S]) -> Self {
        values
            .iter()
            .fold(self, |cmd, value| cmd.flag(flag, value.as_ref()))
    }

    pub fn target(mut self, target: Target<'_>) -> Self {
        if let Some(arg) = target.as_arg() {
            self.args.push(arg.to_string());
        }
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Space-joined form safe to log
    pub fn redacted(&self) -> String {
        self.args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                if Some(i) == self.secret {
                    REDACTED
                } else {
                    arg.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandLine").field(&self.redacted()).finish()
    }
}

/// Parameters for `svn log`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Maximum number of entries; zero or negative means no limit
    pub limit: i64,
    /// Revision or range, passed through verbatim
    pub revision: String,
    /// OR-combined search terms
    pub search: Vec<String>,
    /// AND-combined search terms
    pub search_and: Vec<String>,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search.push(term.into());
        self
    }

    pub fn search_and(mut self, term: impl Into<String>) -> Self {
        self.search_and.push(term.into());
        self
    }

    /// Build `svn log --xml ...`
    ///
    /// All `--search` flags come before all `--search-and` flags. svn joins
    /// each `--search-and` to the group opened by the last `--search`, so
    /// this order ANDs the extra terms onto the final OR alternative.
    pub fn command_line(&self, invocation: &Invocation<'_>) -> CommandLine {
        CommandLine::new(&[commands::LOG, flags::XML])
            .non_interactive(invocation.non_interactive)
            .credentials(invocation.credentials)
            .limit(self.limit)
            .flag(flags::REVISION, &self.revision)
            .repeated(flags::SEARCH, &self.search)
            .repeated(flags::SEARCH_AND, &self.search_and)
            .target(invocation.target)
    }
}

/// Parameters for `svn diff`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffQuery {
    /// Single change (`-c`)
    pub change: String,
    /// Revision or range (`-r`)
    pub revision: String,
}

impl DiffQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change(mut self, change: impl Into<String>) -> Self {
        self.change = change.into();
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    /// Build `svn diff ...`
    pub fn command_line(&self, invocation: &Invocation<'_>) -> CommandLine {
        CommandLine::new(&[commands::DIFF])
            .non_interactive(invocation.non_interactive)
            .credentials(invocation.credentials)
            .flag(flags::REVISION, &self.revision)
            .flag(flags::CHANGE, &self.change)
            .target(invocation.target)
    }
}
