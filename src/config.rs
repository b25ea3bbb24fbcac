//! Client configuration
//!
//! Collects the settings that describe one repository location. Values come
//! from command-line flags or from `SVN_*` environment variables; empty
//! values count as unset.

use std::fmt;

use crate::svn::constants::REDACTED;
use crate::svn::{Client, Credentials};

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env {
    pub const REMOTE: &str = "SVN_REMOTE";
    pub const LOCAL: &str = "SVN_LOCAL";
    pub const USERNAME: &str = "SVN_USERNAME";
    pub const PASSWORD: &str = "SVN_PASSWORD";
    pub const NON_INTERACTIVE: &str = "SVN_NON_INTERACTIVE";
    pub const BINARY: &str = "SVN_BINARY";
}

/// Settings for building a [`Client`]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Remote repository URL
    pub remote: Option<String>,

    /// Local working copy path; wins over `remote`
    pub local: Option<String>,

    pub username: Option<String>,

    pub password: Option<String>,

    /// Pass `--non-interactive` to every svn invocation
    pub non_interactive: bool,

    /// svn binary to run instead of `svn` on PATH
    pub svn_binary: Option<String>,
}

impl ClientConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            remote: get(env::REMOTE),
            local: get(env::LOCAL),
            username: get(env::USERNAME),
            password: get(env::PASSWORD),
            non_interactive: get(env::NON_INTERACTIVE).is_some_and(|v| is_truthy(&v)),
            svn_binary: get(env::BINARY),
        }
    }

    /// Credentials, when both username and password are set
    pub fn credentials(&self) -> Option<Credentials> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => {
                Some(Credentials::new(user, pass)).filter(|c| c.is_complete())
            }
            _ => None,
        }
    }

    /// Build a client that runs the configured svn binary
    pub fn into_client(self) -> Client {
        let credentials = self.credentials();
        let mut builder = Client::builder().non_interactive(self.non_interactive);

        if let Some(remote) = self.remote.filter(|v| !v.is_empty()) {
            builder = builder.remote(remote);
        }
        if let Some(local) = self.local.filter(|v| !v.is_empty()) {
            builder = builder.local(local);
        }
        if let Some(creds) = credentials {
            builder = builder.credentials(creds.username(), creds.password());
        }
        if let Some(program) = self.svn_binary.filter(|v| !v.is_empty()) {
            builder = builder.svn_binary(program);
        }

        builder.build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("remote", &self.remote)
            .field("local", &self.local)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("non_interactive", &self.non_interactive)
            .field("svn_binary", &self.svn_binary)
            .finish()
    }
}

/// Same truthy set as clap's `BoolishValueParser`, used by the binary
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "t" | "true" | "on" | "1"
    )
}
