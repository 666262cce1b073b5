use std::path::PathBuf;
use std::process;

use clap::Parser;

use face_dataset_core::dataset::domain::file_copier::FileCopier;
use face_dataset_core::dataset::infrastructure::csv_manifest_writer::CsvManifestWriter;
use face_dataset_core::dataset::infrastructure::dry_run_copier::DryRunCopier;
use face_dataset_core::dataset::infrastructure::metadata_preserving_copier::MetadataPreservingCopier;
use face_dataset_core::identity::infrastructure::loader_factory::create_mapping_loader;
use face_dataset_core::pipeline::organize_config::OrganizeConfig;
use face_dataset_core::pipeline::organize_dataset_use_case::{
    OrganizeDatasetUseCase, OrganizeReport, ProgressFn,
};
use face_dataset_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use face_dataset_core::shared::constants::DEFAULT_MIN_PER_ID;

/// Group a flat directory of face images into one folder per identity.
#[derive(Parser, Debug)]
#[command(name = "organize-identities", version)]
struct Cli {
    /// Source directory containing the images.
    #[arg(long)]
    img_dir: PathBuf,

    /// Mapping file with `<filename> <identity>` per line. When absent,
    /// identities are inferred from the filename prefix before the first `_`.
    #[arg(long)]
    id_file: Option<PathBuf>,

    /// Destination root (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    /// Minimum number of images an identity needs to be kept (inclusive).
    #[arg(long, default_value_t = DEFAULT_MIN_PER_ID)]
    min_per_id: usize,

    /// Create identity folders and the manifest without copying images.
    #[arg(long)]
    dry_run: bool,
}

impl From<Cli> for OrganizeConfig {
    fn from(cli: Cli) -> Self {
        let config = OrganizeConfig::new(cli.img_dir, cli.out_dir)
            .with_min_per_id(cli.min_per_id)
            .with_dry_run(cli.dry_run);
        match cli.id_file {
            Some(path) => config.with_id_file(path),
            None => config,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config: OrganizeConfig = Cli::parse().into();
    config.validate()?;

    let report = organize(&config)?;
    log_report(&report, config.dry_run);
    println!("Done. Organized dataset at: {}", config.out_dir.display());
    Ok(())
}

fn organize(config: &OrganizeConfig) -> Result<OrganizeReport, Box<dyn std::error::Error>> {
    let loader = create_mapping_loader(&config.img_dir, config.id_file())?;
    let copier: Box<dyn FileCopier> = if config.dry_run {
        log::info!("Dry run: identity folders will be created but no images copied");
        Box::new(DryRunCopier::new())
    } else {
        Box::new(MetadataPreservingCopier::new())
    };

    let progress: ProgressFn = Box::new(|current, total| {
        eprint!("\rOrganizing identity {current}/{total}");
        if current == total {
            eprintln!();
        }
    });

    let mut use_case = OrganizeDatasetUseCase::new(
        loader,
        copier,
        Box::new(CsvManifestWriter::new()),
        Box::new(StdoutPipelineLogger::default()),
        Some(progress),
    );
    Ok(use_case.execute(config)?)
}

fn log_report(report: &OrganizeReport, dry_run: bool) {
    if dry_run {
        log::info!(
            "Would copy {} images ({} already present)",
            report.files_simulated,
            report.files_skipped
        );
    } else {
        log::info!(
            "Copied {} images, skipped {} already present",
            report.files_copied,
            report.files_skipped
        );
    }
    log::info!("Manifest written to {}", report.manifest_path.display());
}
