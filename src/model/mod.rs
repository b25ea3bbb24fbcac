//! Data models for svnclient
//!
//! Plain data structures for svn history records, independent of how
//! they were obtained.

mod log_entry;

pub use log_entry::{Log, LogEntry};
