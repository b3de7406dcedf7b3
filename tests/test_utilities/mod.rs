/// Shared helpers for integration tests
#[allow(dead_code)]
pub mod mocks;

use std::path::PathBuf;

/// Absolute path to a file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
