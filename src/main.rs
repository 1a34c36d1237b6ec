use anyhow::Context;
use clap::Parser;
use genesis_merge::{
    build_merge_plan, execute_merge_plan, read_config, MergeOutcome, MergePlan, MissingArtifact,
    RelocationMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status of a run skipped because a required input is missing
const EXIT_SKIPPED: u8 = 3;

/// Genesis merge - combine speed and memory benchmark results of one run
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Example: genesis-merge 20230101\n\n\
Reads GENESIS_MERGE_ROOT, GENESIS_SPEED_DIR, GENESIS_MEMORY_DIR and GENESIS_OUTPUT_DIR \
from the environment when the matching option is not given."
)]
struct Args {
    /// Run identifier, conventionally a date
    #[arg(allow_hyphen_values = true)]
    identifier: String,

    /// Directory all input and output directories are relative to
    #[arg(short, long, env = "GENESIS_MERGE_ROOT", default_value = ".")]
    root: PathBuf,

    /// Directory holding the speed results
    #[arg(long, env = "GENESIS_SPEED_DIR")]
    speed_dir: Option<String>,

    /// Directory holding the memory results
    #[arg(long, env = "GENESIS_MEMORY_DIR")]
    memory_dir: Option<String>,

    /// Directory receiving the merged results
    #[arg(long, env = "GENESIS_OUTPUT_DIR")]
    output_dir: Option<String>,

    /// Show what would be done without touching any file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse CLI arguments
    let args = Args::parse();

    let config = read_config(&args.root)
        .await
        .with_context(|| format!("Reading config under {}", args.root.display()))?
        .unwrap_or_default()
        .with_overrides(args.speed_dir, args.memory_dir, args.output_dir);

    let plan = build_merge_plan(&args.root, &args.identifier, &config);

    if args.dry_run {
        log_plan(&plan);
        return Ok(if plan.is_runnable() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(EXIT_SKIPPED)
        });
    }

    let outcome = execute_merge_plan(&plan)
        .await
        .with_context(|| format!("Merging run {}", args.identifier))?;

    Ok(match outcome {
        MergeOutcome::Completed(_) => ExitCode::SUCCESS,
        MergeOutcome::Skipped(_) => ExitCode::from(EXIT_SKIPPED),
    })
}

fn log_plan(plan: &MergePlan) {
    let layout = &plan.layout;

    if let Some(missing) = &plan.missing_required {
        warn!("{}", missing);
        info!("Nothing would be written for {}", layout.identifier);
        return;
    }

    info!(
        "Would merge {} and {} into {}",
        layout.speed_json.display(),
        layout.memory_json.display(),
        layout.merged_json.display()
    );

    for status in &plan.artifacts {
        let artifact = &status.artifact;
        if !status.present {
            let missing = MissingArtifact {
                kind: artifact.kind,
                path: artifact.source.clone(),
            };
            warn!("{}", missing);
            continue;
        }
        let verb = match artifact.mode {
            RelocationMode::Move => "move",
            RelocationMode::Copy => "copy",
        };
        info!(
            "Would {} {} to {}",
            verb,
            artifact.source.display(),
            artifact.destination.display()
        );
    }
}
