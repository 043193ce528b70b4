//! Integration tests for build-time version wiring.

use scamwise_app::app_version;

#[test]
fn version_display_tests_matches_workspace_version_file() {
    let expected = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../VERSION")).trim();
    assert_eq!(app_version(), expected);
}
