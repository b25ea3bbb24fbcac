//! Integration tests against a real svn installation.
//!
//! Each test builds a `file://` repository with svnadmin, so no server
//! is needed. Tests are skipped when svn is not installed.

#[path = "common/mod.rs"]
#[macro_use]
mod common;

use common::TestRepo;
use svnclient::svn::{Client, DiffQuery, LogQuery};

fn revisions(log: &svnclient::model::Log) -> Vec<&str> {
    log.iter().map(|e| e.revision.as_str()).collect()
}

#[test]
fn test_log_remote_newest_first() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let log = client.log(&LogQuery::new()).expect("log should succeed");

    assert_eq!(revisions(&log), vec!["3", "2", "1"]);
    assert_eq!(log.entries[0].message, "Fix feature flag typo");
    assert_eq!(log.entries[2].message, "Initial import");
    assert!(log.iter().all(|e| !e.date.is_empty()));
}

#[test]
fn test_log_limit() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let log = client.log_with(2, "", &[], &[]).expect("log should succeed");
    assert_eq!(revisions(&log), vec!["3", "2"]);
}

#[test]
fn test_log_revision_range_keeps_tool_order() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let log = client.log_with(0, "1:2", &[], &[]).expect("log should succeed");
    assert_eq!(revisions(&log), vec!["1", "2"]);
}

#[test]
fn test_log_search() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let log = client
        .log_with(0, "", &["feature"], &[])
        .expect("log should succeed");
    assert_eq!(revisions(&log), vec!["3", "2"]);

    let log = client
        .log_with(0, "", &["feature"], &["typo"])
        .expect("log should succeed");
    assert_eq!(revisions(&log), vec!["3"]);
}

#[test]
fn test_log_local_wins_over_remote() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let wc = repo.wc_path().display().to_string();
    let client = Client::builder()
        .remote("file:///nonexistent/svnclient-test-repo")
        .local(wc)
        .build();

    let log = client.log(&LogQuery::new()).expect("log should use the working copy");
    assert_eq!(log.len(), 3);
}

#[test]
fn test_log_no_such_revision() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let err = client
        .log(&LogQuery::new().revision("99"))
        .expect_err("revision 99 does not exist");

    assert!(err.is_execution());
    assert!(err.to_string().starts_with("svn: E"), "got: {err}");
    assert!(err.code().is_some());
}

#[test]
fn test_log_not_a_working_copy() {
    skip_if_no_svn!();
    let repo = TestRepo::new();
    let scratch = repo.scratch_path().display().to_string();
    let client = Client::builder().local(scratch).build();

    let err = client
        .log(&LogQuery::new())
        .expect_err("scratch dir is not a working copy");
    assert!(err.to_string().starts_with("svn: E"), "got: {err}");
}

#[test]
fn test_diff_change() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let patch = client.diff_with("3", "").expect("diff should succeed");
    let text = String::from_utf8(patch).expect("diff is utf-8");

    assert!(text.contains("flags.txt"), "got: {text}");
    assert!(text.contains("-feature=on"));
    assert!(text.contains("+feature=off"));
}

#[test]
fn test_diff_revision_range() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder().remote(repo.url()).build();

    let patch = client
        .diff(&DiffQuery::new().revision("1:3"))
        .expect("diff should succeed");
    let text = String::from_utf8_lossy(&patch);

    assert!(text.contains("+feature=off"));
    assert!(!text.contains("README.txt"));
}

#[test]
fn test_diff_clean_working_copy_is_empty() {
    skip_if_no_svn!();
    let repo = TestRepo::with_history();
    let client = Client::builder()
        .local(repo.wc_path().display().to_string())
        .build();

    let patch = client.diff(&DiffQuery::new()).expect("diff should succeed");
    assert!(patch.is_empty());
}

#[test]
fn test_missing_svn_binary() {
    let client = Client::builder()
        .svn_binary("svnclient-test-no-such-binary")
        .build();

    let err = client.log(&LogQuery::new()).expect_err("binary does not exist");
    assert!(err.is_execution());
    assert_eq!(err.code(), None);
}
