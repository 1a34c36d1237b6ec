mod types;

pub use types::{Artifact, ArtifactKind, RelocationMode, RunLayout, Side};

use crate::config::MergeConfig;
use crate::utils::{html_file_name, json_file_name, metadata_file_name, side_file_name};
use std::path::{Path, PathBuf};

impl RunLayout {
    /// Compute the layout of a run under `root`
    pub fn new(root: &Path, identifier: &str, config: &MergeConfig) -> Self {
        let speed_dir = root.join(&config.speed_dir);
        let memory_dir = root.join(&config.memory_dir);
        let output_dir = root.join(&config.output_dir);

        let artifacts = vec![
            Artifact {
                kind: ArtifactKind::SpeedHtml,
                source: speed_dir.join(html_file_name(identifier)),
                destination: output_dir.join(side_file_name(identifier, Side::Speed.key())),
                mode: RelocationMode::Move,
            },
            Artifact {
                kind: ArtifactKind::MemoryHtml,
                source: memory_dir.join(html_file_name(identifier)),
                destination: output_dir.join(side_file_name(identifier, Side::Memory.key())),
                mode: RelocationMode::Move,
            },
            Artifact {
                kind: ArtifactKind::Metadata,
                source: speed_dir.join(metadata_file_name(identifier)),
                destination: output_dir.join(metadata_file_name(identifier)),
                mode: RelocationMode::Copy,
            },
        ];

        Self {
            identifier: identifier.to_string(),
            speed_json: speed_dir.join(json_file_name(identifier)),
            memory_json: memory_dir.join(json_file_name(identifier)),
            merged_json: output_dir.join(json_file_name(identifier)),
            output_dir,
            artifacts,
        }
    }

    /// Path of the required JSON input for a side
    pub fn input_json(&self, side: Side) -> &PathBuf {
        match side {
            Side::Speed => &self.speed_json,
            Side::Memory => &self.memory_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = RunLayout::new(Path::new("."), "20230101", &MergeConfig::default());

        assert_eq!(layout.speed_json, Path::new("./genesis-init-speed/20230101.json"));
        assert_eq!(layout.memory_json, Path::new("./genesis-init-memory/20230101.json"));
        assert_eq!(layout.output_dir, Path::new("./genesis-data"));
        assert_eq!(layout.merged_json, Path::new("./genesis-data/20230101.json"));

        let speed_html = &layout.artifacts[0];
        assert_eq!(speed_html.kind, ArtifactKind::SpeedHtml);
        assert_eq!(speed_html.source, Path::new("./genesis-init-speed/20230101.html"));
        assert_eq!(speed_html.destination, Path::new("./genesis-data/20230101.speed.json"));
        assert_eq!(speed_html.mode, RelocationMode::Move);

        let memory_html = &layout.artifacts[1];
        assert_eq!(memory_html.kind, ArtifactKind::MemoryHtml);
        assert_eq!(memory_html.source, Path::new("./genesis-init-memory/20230101.html"));
        assert_eq!(memory_html.destination, Path::new("./genesis-data/20230101.memory.json"));
        assert_eq!(memory_html.mode, RelocationMode::Move);

        let metadata = &layout.artifacts[2];
        assert_eq!(metadata.kind, ArtifactKind::Metadata);
        assert_eq!(metadata.source, Path::new("./genesis-init-speed/20230101.metadata.json"));
        assert_eq!(metadata.destination, Path::new("./genesis-data/20230101.metadata.json"));
        assert_eq!(metadata.mode, RelocationMode::Copy);
    }

    #[test]
    fn test_layout_follows_config() {
        let config = MergeConfig::default().with_overrides(
            Some("s".to_string()),
            Some("m".to_string()),
            Some("out".to_string()),
        );
        let layout = RunLayout::new(Path::new("/data"), "x", &config);

        assert_eq!(layout.input_json(Side::Speed), Path::new("/data/s/x.json"));
        assert_eq!(layout.input_json(Side::Memory), Path::new("/data/m/x.json"));
        assert_eq!(layout.merged_json, Path::new("/data/out/x.json"));
    }

    #[test]
    fn test_artifact_labels() {
        assert_eq!(ArtifactKind::SpeedHtml.to_string(), "Speed HTML file");
        assert_eq!(ArtifactKind::MemoryHtml.to_string(), "Memory HTML file");
        assert_eq!(ArtifactKind::Metadata.to_string(), "Metadata JSON file");
    }
}
