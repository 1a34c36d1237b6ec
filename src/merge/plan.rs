use super::MissingInput;
use crate::config::MergeConfig;
use crate::layout::{Artifact, RunLayout, Side};
use std::path::Path;

/// An auxiliary file and whether it was found when planning
#[derive(Debug, Clone)]
pub struct ArtifactStatus {
    pub artifact: Artifact,
    pub present: bool,
}

/// What a run would do, computed without touching the output directory
#[derive(Debug, Clone)]
pub struct MergePlan {
    pub layout: RunLayout,

    /// First required input found missing, speed before memory
    pub missing_required: Option<MissingInput>,

    /// In relocation order
    pub artifacts: Vec<ArtifactStatus>,
}

impl MergePlan {
    /// Check if both required inputs exist
    pub fn is_runnable(&self) -> bool {
        self.missing_required.is_none()
    }
}

/// Build a merge plan for `identifier` under `root`
pub fn build_merge_plan(root: &Path, identifier: &str, config: &MergeConfig) -> MergePlan {
    let layout = RunLayout::new(root, identifier, config);

    let missing_required = [Side::Speed, Side::Memory]
        .into_iter()
        .find(|side| !layout.input_json(*side).exists())
        .map(|side| MissingInput {
            side,
            path: layout.input_json(side).clone(),
        });

    let artifacts = layout
        .artifacts
        .iter()
        .map(|artifact| ArtifactStatus {
            artifact: artifact.clone(),
            present: artifact.source.exists(),
        })
        .collect();

    MergePlan {
        layout,
        missing_required,
        artifacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Should create parent");
        }
        fs::write(path, content).expect("Should write");
    }

    #[test]
    fn test_speed_is_checked_first() {
        let dir = tempfile::tempdir().expect("Should create temp dir");

        let plan = build_merge_plan(dir.path(), "20230101", &MergeConfig::default());

        assert!(!plan.is_runnable());
        let missing = plan.missing_required.expect("Should report missing input");
        assert_eq!(missing.side, Side::Speed);
        assert_eq!(
            missing.path,
            dir.path().join("genesis-init-speed/20230101.json")
        );
    }

    #[test]
    fn test_missing_memory_input() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        write(dir.path(), "genesis-init-speed/20230101.json", "{}");

        let plan = build_merge_plan(dir.path(), "20230101", &MergeConfig::default());

        let missing = plan.missing_required.expect("Should report missing input");
        assert_eq!(missing.side, Side::Memory);
    }

    #[test]
    fn test_artifact_presence() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        write(dir.path(), "genesis-init-speed/20230101.json", "{}");
        write(dir.path(), "genesis-init-memory/20230101.json", "{}");
        write(dir.path(), "genesis-init-memory/20230101.html", "<html></html>");

        let plan = build_merge_plan(dir.path(), "20230101", &MergeConfig::default());

        assert!(plan.is_runnable());
        let presence: Vec<bool> = plan.artifacts.iter().map(|a| a.present).collect();
        assert_eq!(presence, vec![false, true, false]);
    }

    #[test]
    fn test_planning_has_no_side_effects() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        write(dir.path(), "genesis-init-speed/20230101.json", "{}");
        write(dir.path(), "genesis-init-memory/20230101.json", "{}");

        build_merge_plan(dir.path(), "20230101", &MergeConfig::default());

        assert!(!dir.path().join("genesis-data").exists());
    }
}
