//! svn client
//!
//! A `Client` is fixed at construction and can be shared between threads.
//! Each call spawns one svn process and waits for it.

use super::SvnError;
use super::classifier;
use super::command::{CommandLine, DiffQuery, Invocation, LogQuery, Target};
use super::credentials::Credentials;
use super::executor::{CommandRunner, SvnRunner};
use super::parser::Parser;
use crate::model::Log;

/// Client for one svn repository location
#[derive(Debug, Clone)]
pub struct Client<R = SvnRunner> {
    /// Remote repository URL
    remote: Option<String>,
    /// Local working copy path, takes precedence over `remote`
    local: Option<String>,
    credentials: Option<Credentials>,
    non_interactive: bool,
    runner: R,
}

impl Default for Client {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<R> Client<R> {
    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_non_interactive(&self) -> bool {
        self.non_interactive
    }

    /// Positional argument every command will use
    pub fn target(&self) -> Target<'_> {
        Target::select(self.local(), self.remote())
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn invocation(&self) -> Invocation<'_> {
        Invocation {
            target: self.target(),
            credentials: self.credentials(),
            non_interactive: self.non_interactive,
        }
    }
}

impl<R: CommandRunner> Client<R> {
    /// Run `svn log --xml` and parse the entries
    pub fn log(&self, query: &LogQuery) -> Result<Log, SvnError> {
        let cmd = query.command_line(&self.invocation());
        let output = self.execute(&cmd)?;
        let log = Parser::parse_log_bytes(&output)?;
        tracing::debug!(entries = log.len(), "parsed svn log");
        Ok(log)
    }

    /// Positional form of [`Client::log`]
    pub fn log_with(
        &self,
        limit: i64,
        revision: &str,
        search: &[&str],
        search_and: &[&str],
    ) -> Result<Log, SvnError> {
        let query = LogQuery {
            limit,
            revision: revision.to_string(),
            search: search.iter().map(|s| s.to_string()).collect(),
            search_and: search_and.iter().map(|s| s.to_string()).collect(),
        };
        self.log(&query)
    }

    /// Run `svn diff` and return its output untouched
    pub fn diff(&self, query: &DiffQuery) -> Result<Vec<u8>, SvnError> {
        let cmd = query.command_line(&self.invocation());
        self.execute(&cmd)
    }

    /// Positional form of [`Client::diff`]
    pub fn diff_with(&self, change: &str, revision: &str) -> Result<Vec<u8>, SvnError> {
        self.diff(&DiffQuery {
            change: change.to_string(),
            revision: revision.to_string(),
        })
    }

    /// Run a built command; non-zero exits become `SvnError::Execution`
    fn execute(&self, cmd: &CommandLine) -> Result<Vec<u8>, SvnError> {
        tracing::debug!(command = %cmd.redacted(), "running svn");

        let result = self.runner.run(cmd.args()).map_err(|e| {
            tracing::warn!(error = %e, "failed to run svn");
            SvnError::Execution {
                message: e.to_string(),
                code: None,
            }
        })?;

        tracing::debug!(
            success = result.success,
            exit_code = ?result.exit_code,
            bytes = result.output.len(),
            "svn finished"
        );

        if !result.success {
            let err = classifier::classify_failure(&result.output);
            tracing::warn!(code = ?err.code(), error = %err, "svn command failed");
            return Err(err);
        }

        Ok(result.output)
    }
}

/// Builder for [`Client`]
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder<R = SvnRunner> {
    remote: Option<String>,
    local: Option<String>,
    credentials: Option<Credentials>,
    non_interactive: bool,
    runner: R,
}

impl<R> ClientBuilder<R> {
    pub fn remote(mut self, url: impl Into<String>) -> Self {
        self.remote = Some(url.into());
        self
    }

    pub fn local(mut self, path: impl Into<String>) -> Self {
        self.local = Some(path.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    pub fn non_interactive(mut self, enabled: bool) -> Self {
        self.non_interactive = enabled;
        self
    }

    /// Replace the process runner (used to script svn in tests)
    pub fn runner<R2>(self, runner: R2) -> ClientBuilder<R2> {
        ClientBuilder {
            remote: self.remote,
            local: self.local,
            credentials: self.credentials,
            non_interactive: self.non_interactive,
            runner,
        }
    }

    pub fn build(self) -> Client<R> {
        Client {
            remote: self.remote,
            local: self.local,
            credentials: self.credentials,
            non_interactive: self.non_interactive,
            runner: self.runner,
        }
    }
}

impl ClientBuilder<SvnRunner> {
    /// Use a specific svn binary instead of `svn` on PATH
    pub fn svn_binary(mut self, program: impl Into<String>) -> Self {
        self.runner = SvnRunner::with_program(program);
        self
    }
}
