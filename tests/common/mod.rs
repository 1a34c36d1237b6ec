#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const RUN_ID: &str = "20230101";

/// Create a temporary root directory for a test
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a file under `root`, creating parent directories
pub async fn write_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .expect("Failed to create parent dir");
    }
    tokio::fs::write(&path, content)
        .await
        .expect("Failed to write file");
    path
}

/// Write both required inputs for `RUN_ID` with the default layout
pub async fn write_inputs(root: &Path, speed: &str, memory: &str) {
    write_file(root, &format!("genesis-init-speed/{RUN_ID}.json"), speed.as_bytes()).await;
    write_file(root, &format!("genesis-init-memory/{RUN_ID}.json"), memory.as_bytes()).await;
}

/// Write the three auxiliary files for `RUN_ID` with the default layout
pub async fn write_artifacts(root: &Path) {
    write_file(root, &format!("genesis-init-speed/{RUN_ID}.html"), b"<html>speed</html>").await;
    write_file(root, &format!("genesis-init-memory/{RUN_ID}.html"), b"<html>memory</html>").await;
    write_file(
        root,
        &format!("genesis-init-speed/{RUN_ID}.metadata.json"),
        br#"{"commit": "abc123"}"#,
    )
    .await;
}

/// Read and parse a JSON file
pub async fn read_json(path: &Path) -> serde_json::Value {
    let content = tokio::fs::read(path).await.expect("Failed to read file");
    serde_json::from_slice(&content).expect("Failed to parse JSON")
}

/// List the entries of a directory, empty if it does not exist
pub fn list_dir(path: &Path) -> Vec<String> {
    match std::fs::read_dir(path) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect();
            names.sort();
            names
        }
        Err(_) => Vec::new(),
    }
}
