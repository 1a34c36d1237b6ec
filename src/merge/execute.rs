use super::plan::MergePlan;
use super::record::{read_record, write_record, MergedRecord};
use super::{
    FsOperation, MergeError, MergeOutcome, MergeReport, MissingArtifact, RelocatedArtifact,
};
use crate::layout::{Artifact, RelocationMode};
use crate::utils::compute_file_hash;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Execute the merge plan
pub async fn execute_merge_plan(plan: &MergePlan) -> Result<MergeOutcome, MergeError> {
    if let Some(missing) = &plan.missing_required {
        warn!(path = %missing.path.display(), "{}", missing);
        return Ok(MergeOutcome::Skipped(missing.clone()));
    }

    let layout = &plan.layout;

    // Parse both inputs before creating anything
    let speed = read_record(&layout.speed_json).await?;
    let memory = read_record(&layout.memory_json).await?;
    let record = MergedRecord::new(speed, memory);

    fs::create_dir_all(&layout.output_dir)
        .await
        .map_err(MergeError::filesystem(FsOperation::CreateDir, &layout.output_dir))?;

    write_record(&layout.merged_json, &record).await?;
    debug!(path = %layout.merged_json.display(), "Wrote merged record");

    let mut report = MergeReport {
        identifier: layout.identifier.clone(),
        merged_path: layout.merged_json.clone(),
        ..Default::default()
    };

    for artifact in &layout.artifacts {
        // Re-checked: the plan may be stale
        if !artifact.source.exists() {
            let missing = MissingArtifact {
                kind: artifact.kind,
                path: artifact.source.clone(),
            };
            warn!(path = %missing.path.display(), "{}", missing);
            report.missing.push(missing);
            continue;
        }

        report.relocated.push(relocate(artifact).await?);
    }

    info!(identifier = %layout.identifier, "Processed files for date {}.", layout.identifier);

    Ok(MergeOutcome::Completed(report))
}

async fn relocate(artifact: &Artifact) -> Result<RelocatedArtifact, MergeError> {
    match artifact.mode {
        RelocationMode::Move => move_file(&artifact.source, &artifact.destination).await?,
        RelocationMode::Copy => {
            fs::copy(&artifact.source, &artifact.destination)
                .await
                .map_err(MergeError::filesystem(artifact.mode.into(), &artifact.source))?;
        }
    }

    let hash = compute_file_hash(&artifact.destination)
        .await
        .map_err(MergeError::filesystem(FsOperation::Hash, &artifact.destination))?;

    debug!(
        kind = %artifact.kind,
        mode = ?artifact.mode,
        destination = %artifact.destination.display(),
        sha256 = %hash,
        "Relocated artifact"
    );

    Ok(RelocatedArtifact {
        kind: artifact.kind,
        mode: artifact.mode,
        destination: artifact.destination.clone(),
        hash,
    })
}

/// Rename, falling back to copy + remove when the rename is refused
/// (e.g. source and destination on different filesystems)
async fn move_file(source: &Path, destination: &Path) -> Result<(), MergeError> {
    match fs::rename(source, destination).await {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!(
                source = %source.display(),
                error = %err,
                "Rename failed, copying instead"
            );
            fs::copy(source, destination)
                .await
                .map_err(MergeError::filesystem(FsOperation::Move, source))?;
            fs::remove_file(source)
                .await
                .map_err(MergeError::filesystem(FsOperation::Move, source))
        }
    }
}
