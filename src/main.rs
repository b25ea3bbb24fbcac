//! svnclient - Subversion history and diffs through the svn command line
//!
//! Binary entry point.

use std::io::{self, Write};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svnclient::config::{ClientConfig, env};
use svnclient::model::Log;
use svnclient::svn::{DiffQuery, LogQuery};

#[derive(Parser)]
#[command(name = "svnclient")]
#[command(about = "Query Subversion logs and diffs through the svn client")]
#[command(version)]
struct Cli {
    /// Remote repository URL
    #[arg(long, env = env::REMOTE, global = true)]
    remote: Option<String>,

    /// Local working copy path (used instead of --remote when both are set)
    #[arg(long, env = env::LOCAL, global = true)]
    local: Option<String>,

    #[arg(long, env = env::USERNAME, global = true)]
    username: Option<String>,

    #[arg(long, env = env::PASSWORD, hide_env_values = true, global = true)]
    password: Option<String>,

    /// Never let svn prompt for input
    #[arg(
        long,
        env = env::NON_INTERACTIVE,
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    non_interactive: bool,

    /// svn binary to run
    #[arg(long, env = env::BINARY, global = true)]
    svn_binary: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show commit history
    Log {
        /// Maximum number of entries (0 = no limit)
        #[arg(short = 'l', long, default_value_t = 0, allow_negative_numbers = true)]
        limit: i64,

        /// Revision or range, e.g. 1000:HEAD
        #[arg(short = 'r', long)]
        revision: Option<String>,

        /// Keep entries matching this pattern (repeatable, OR-combined)
        #[arg(long)]
        search: Vec<String>,

        /// Also require this pattern (repeatable, AND-combined)
        #[arg(long)]
        search_and: Vec<String>,
    },
    /// Print a unified diff
    Diff {
        /// Show the change made by this revision
        #[arg(short = 'c', long)]
        change: Option<String>,

        /// Revision or range to compare
        #[arg(short = 'r', long)]
        revision: Option<String>,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            remote: self.remote.clone(),
            local: self.local.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            non_interactive: self.non_interactive,
            svn_binary: self.svn_binary.clone(),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let client = cli.client_config().into_client();

    match cli.command {
        Command::Log {
            limit,
            revision,
            search,
            search_and,
        } => {
            let query = LogQuery {
                limit,
                revision: revision.unwrap_or_default(),
                search,
                search_and,
            };
            let log = client.log(&query)?;
            print_log(&log)?;
        }
        Command::Diff { change, revision } => {
            let query = DiffQuery {
                change: change.unwrap_or_default(),
                revision: revision.unwrap_or_default(),
            };
            let patch = client.diff(&query)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&patch)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "svnclient=warn",
        1 => "svnclient=debug",
        _ => "svnclient=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_log(log: &Log) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for entry in log {
        writeln!(out, "r{} | {} | {}", entry.revision, entry.author, entry.date)?;
        writeln!(out)?;
        writeln!(out, "{}", entry.display_message())?;
        writeln!(out)?;
    }
    out.flush()
}
