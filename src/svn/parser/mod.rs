//! svn output parser
//!
//! Parses the output from svn commands into structured data.

mod log;


use super::SvnError;

/// Parser for svn command output
pub struct Parser;

/// Wrap any XML or encoding failure as a decode error
fn decode_error(err: impl std::fmt::Display) -> SvnError {
    SvnError::Decode(err.to_string())
}
