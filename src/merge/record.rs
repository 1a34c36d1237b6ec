use super::{FsOperation, MergeError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// The speed and memory results of one run, nested under fixed keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub speed: Value,
    pub memory: Value,
}

impl MergedRecord {
    pub fn new(speed: Value, memory: Value) -> Self {
        Self { speed, memory }
    }

    /// Pretty-printed with four-space indentation
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Read and parse a JSON result file
pub async fn read_record(path: &Path) -> Result<Value, MergeError> {
    let content = fs::read(path)
        .await
        .map_err(MergeError::filesystem(FsOperation::Read, path))?;

    serde_json::from_slice(&content).map_err(|source| MergeError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the merged record, replacing any existing file
pub async fn write_record(path: &Path, record: &MergedRecord) -> Result<(), MergeError> {
    let content = record.to_pretty_json()?;
    fs::write(path, content)
        .await
        .map_err(MergeError::filesystem(FsOperation::Write, path))
}
