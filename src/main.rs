//! nevf CLI
//!
//! Command-line interface for exporting scene snapshots to `.nevf`
//! documents, bootstrapping project directories, and inspecting files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use nevf_export::export_scene;
use nevf_project::{Project, ProjectConfig, PIPELINE_CONFIG, PROJECT_CONFIG};
use nevf_scene::Scene;

/// nevf - scene-interchange document export and inspection
#[derive(Parser)]
#[command(name = "nevf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene snapshot to per-object .nevf files
    Export(ExportArgs),

    /// Bootstrap the project folder structure from the .ngin config
    Init(InitArgs),

    /// Print a .nevf file as JSON
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Path to a scene snapshot (JSON); defaults to the `file` entry of the
    /// .nevsc config in the working directory
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output directory; defaults to the snapshot's directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InitArgs {
    /// Working directory holding the .ngin config
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Args)]
struct InspectArgs {
    /// Path to the .nevf file
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => cmd_export(args),
        Commands::Init(args) => cmd_init(args),
        Commands::Inspect(args) => cmd_inspect(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let scene_path = match args.scene {
        Some(path) => path,
        None => {
            let config = ProjectConfig::load(Path::new(PIPELINE_CONFIG))
                .with_context(|| format!("reading {PIPELINE_CONFIG} config"))?;
            match config.file() {
                Some(file) => PathBuf::from(file),
                None => bail!("no --scene given and the {PIPELINE_CONFIG} config has no 'file' entry"),
            }
        }
    };

    let scene = Scene::load_json(&scene_path)
        .with_context(|| format!("loading scene snapshot {}", scene_path.display()))?;

    let output_dir = match args.output {
        Some(dir) => dir,
        None => scene_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };

    let report = export_scene(&scene, &output_dir).context("running export batch")?;

    for failure in &report.failures {
        error!(object = %failure.object, error = %failure.error, "object export failed");
    }
    println!(
        "exported {} object(s) to {}",
        report.exported.len(),
        output_dir.join(nevf_doc::SCENE_DIR).display()
    );

    if !report.is_clean() {
        bail!("{} object(s) failed to export", report.failures.len());
    }
    Ok(())
}

fn cmd_init(args: InitArgs) -> Result<()> {
    let config_path = args.dir.join(PROJECT_CONFIG);
    let config = ProjectConfig::load(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    if !config.document().has("name") {
        bail!("{} config has no 'name' entry", config_path.display());
    }

    let project = Project::bootstrap(&config, &args.dir).context("bootstrapping project")?;
    println!(
        "project '{}' ready at {}",
        project.name,
        project.base_dir.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let doc = nevf_doc::Document::load(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let json = serde_json::to_string_pretty(&doc.to_json())?;
    println!("{json}");
    Ok(())
}
