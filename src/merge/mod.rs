mod execute;
mod plan;
mod record;

pub use execute::execute_merge_plan;
pub use plan::{build_merge_plan, ArtifactStatus, MergePlan};
pub use record::{read_record, write_record, MergedRecord};

use crate::config::MergeConfig;
use crate::layout::{ArtifactKind, RelocationMode, Side};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Malformed JSON in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to {operation} {}: {source}", .path.display())]
    Filesystem {
        operation: FsOperation,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MergeError {
    pub(crate) fn filesystem(
        operation: FsOperation,
        path: &Path,
    ) -> impl FnOnce(std::io::Error) -> MergeError {
        let path = path.to_path_buf();
        move |source| MergeError::Filesystem {
            operation,
            path,
            source,
        }
    }
}

/// Filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    Read,
    CreateDir,
    Write,
    Move,
    Copy,
    Hash,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            FsOperation::Read => "read",
            FsOperation::CreateDir => "create directory",
            FsOperation::Write => "write",
            FsOperation::Move => "move",
            FsOperation::Copy => "copy",
            FsOperation::Hash => "hash",
        };
        f.write_str(verb)
    }
}

impl From<RelocationMode> for FsOperation {
    fn from(mode: RelocationMode) -> Self {
        match mode {
            RelocationMode::Move => FsOperation::Move,
            RelocationMode::Copy => FsOperation::Copy,
        }
    }
}

/// A required JSON input that does not exist; the run is skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInput {
    pub side: Side,
    pub path: PathBuf,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} JSON file not found: {}",
            self.side.label(),
            self.path.display()
        )
    }
}

/// An auxiliary file that does not exist; the run continues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl fmt::Display for MissingArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found: {}", self.kind, self.path.display())
    }
}

/// An auxiliary file placed in the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatedArtifact {
    pub kind: ArtifactKind,
    pub mode: RelocationMode,
    pub destination: PathBuf,
    /// SHA-256 of the destination bytes
    pub hash: String,
}

/// Result of a completed run
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub identifier: String,
    pub merged_path: PathBuf,
    pub relocated: Vec<RelocatedArtifact>,
    pub missing: Vec<MissingArtifact>,
}

#[derive(Debug, Clone)]
pub enum MergeOutcome {
    Completed(MergeReport),
    Skipped(MissingInput),
}

impl MergeOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, MergeOutcome::Completed(_))
    }
}

/// Merge the speed and memory results of `identifier` and relocate its
/// auxiliary files, with all paths relative to `root`
pub async fn merge_and_process(
    root: &Path,
    identifier: &str,
    config: &MergeConfig,
) -> Result<MergeOutcome, MergeError> {
    let plan = build_merge_plan(root, identifier, config);
    execute_merge_plan(&plan).await
}
