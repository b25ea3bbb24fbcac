//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! svn repositories and working copies in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::process::Command;

pub mod test_repo;

pub use test_repo::TestRepo;

/// True when both `svn` and `svnadmin` can be executed
pub fn svn_available() -> bool {
    ["svn", "svnadmin"].iter().all(|bin| {
        Command::new(bin)
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    })
}

/// Return early from a test when svn is not installed
macro_rules! skip_if_no_svn {
    () => {
        if !$crate::common::svn_available() {
            eprintln!("skipping: svn/svnadmin not found in PATH");
            return;
        }
    };
}
