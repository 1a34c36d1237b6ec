use std::fmt;
use std::path::PathBuf;

/// Which benchmark produced a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Speed,
    Memory,
}

impl Side {
    /// Key in the merged record and infix of relocated report names
    pub fn key(&self) -> &'static str {
        match self {
            Side::Speed => "speed",
            Side::Memory => "memory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Speed => "Speed",
            Side::Memory => "Memory",
        }
    }
}

/// Auxiliary files relocated next to the merged record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    SpeedHtml,
    MemoryHtml,
    Metadata,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::SpeedHtml => "Speed HTML file",
            ArtifactKind::MemoryHtml => "Memory HTML file",
            ArtifactKind::Metadata => "Metadata JSON file",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationMode {
    /// Source is removed
    Move,
    /// Source is retained
    Copy,
}

/// An auxiliary file and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: RelocationMode,
}

/// Every path involved in merging one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    pub identifier: String,
    pub speed_json: PathBuf,
    pub memory_json: PathBuf,
    pub output_dir: PathBuf,
    pub merged_json: PathBuf,
    /// In relocation order
    pub artifacts: Vec<Artifact>,
}
