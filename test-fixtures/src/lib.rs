//! Golden JSON fixtures for murmur's integration tests.
//!
//! Fixtures live under `test-fixtures/golden/<suite>/*.json` and are addressed
//! by paths relative to `test-fixtures/`, e.g. `golden/upgma/five_taxa.json`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// The `test-fixtures` directory, found by walking up from the calling
/// crate's manifest directory.
fn fixtures_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    start
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures/golden above {}", start.display()))
}

/// Deserialize the fixture at `relative_path`.
///
/// # Panics
/// When the file is missing or does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

/// Relative paths of every `.json` fixture in `golden/<suite>`, sorted.
/// Empty when the suite does not exist.
pub fn golden_suite(suite: &str) -> Vec<String> {
    let root = fixtures_root();
    let dir = root.join("golden").join(suite);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut paths: Vec<String> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| relative_to(&root, &path))
        .collect();
    paths.sort();
    paths
}

fn relative_to(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
    )
}
