//! svn command execution layer
//!
//! This module builds `svn` command lines, runs them and turns their
//! output into structured data.

pub mod classifier;
mod client;
/// Command builder (public for property testing)
pub mod command;
pub mod constants;
mod credentials;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use client::{Client, ClientBuilder};
pub use command::{CommandLine, DiffQuery, LogQuery, Target};
pub use credentials::Credentials;
pub use executor::{CommandRunner, RunOutput, SvnRunner};

use thiserror::Error;

/// Errors that can occur when querying svn
///
/// `Execution` covers every failed invocation, including an `svn` binary
/// that could not be started. Callers that need to tell those apart must
/// look at the message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvnError {
    #[error("{message}")]
    Execution {
        message: String,
        /// svn error code such as `E170000`, when the output carried one
        code: Option<String>,
    },

    #[error("unmarshal: {0}")]
    Decode(String),
}

impl SvnError {
    /// svn error code reported by the tool, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            SvnError::Execution { code, .. } => code.as_deref(),
            SvnError::Decode(_) => None,
        }
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, SvnError::Execution { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, SvnError::Decode(_))
    }
}
