//! svnclient - Subversion history and diffs through the svn command line
//!
//! Runs the `svn` client as a subprocess and turns its output into
//! structured data.
//!
//! This library provides:
//! - [`svn`]: Command building, execution and output parsing
//! - [`model`]: Domain models
//! - [`config`]: Client configuration from flags or environment
//!
//! ```no_run
//! use svnclient::svn::{Client, LogQuery};
//!
//! let client = Client::builder()
//!     .remote("https://svn.example.com/repo/trunk")
//!     .build();
//! let log = client.log(&LogQuery::new().limit(10))?;
//! for entry in &log {
//!     println!("r{} {}", entry.revision, entry.first_line());
//! }
//! # Ok::<(), svnclient::svn::SvnError>(())
//! ```

pub mod config;
pub mod model;
pub mod svn;
