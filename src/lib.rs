pub mod config;
pub mod layout;
pub mod merge;
pub mod utils;

// Re-export commonly used types
pub use config::{read_config, write_config, ConfigError, MergeConfig};
pub use layout::{Artifact, ArtifactKind, RelocationMode, RunLayout, Side};
pub use merge::{
    build_merge_plan, execute_merge_plan, merge_and_process, read_record, write_record,
    ArtifactStatus, FsOperation, MergeError, MergeOutcome, MergePlan, MergeReport, MergedRecord,
    MissingArtifact, MissingInput, RelocatedArtifact,
};
