use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::dataset::domain::file_copier::{CopyOutcome, FileCopier};
use crate::dataset::domain::manifest_writer::ManifestWriter;
use crate::identity::domain::identity_groups::IdentityGroups;
use crate::identity::domain::mapping_loader::MappingLoader;
use crate::pipeline::organize_config::OrganizeConfig;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::organize_error::OrganizeError;

/// Progress callback: `(identities_done, identities_total)`.
pub type ProgressFn = Box<dyn Fn(usize, usize)>;

/// Counts describing what a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    pub identities_found: usize,
    pub identities_selected: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
    pub files_simulated: usize,
    pub manifest_path: PathBuf,
}

/// Organize pipeline: load mapping → group/filter → copy → manifest.
///
/// Each stage runs once, in order. The first error aborts the run, so a
/// failed copy leaves no manifest behind.
pub struct OrganizeDatasetUseCase {
    loader: Box<dyn MappingLoader>,
    copier: Box<dyn FileCopier>,
    manifest_writer: Box<dyn ManifestWriter>,
    logger: Box<dyn PipelineLogger>,
    on_progress: Option<ProgressFn>,
}

impl OrganizeDatasetUseCase {
    pub fn new(
        loader: Box<dyn MappingLoader>,
        copier: Box<dyn FileCopier>,
        manifest_writer: Box<dyn ManifestWriter>,
        logger: Box<dyn PipelineLogger>,
        on_progress: Option<ProgressFn>,
    ) -> Self {
        Self {
            loader,
            copier,
            manifest_writer,
            logger,
            on_progress,
        }
    }

    pub fn execute(&mut self, config: &OrganizeConfig) -> Result<OrganizeReport, OrganizeError> {
        fs::create_dir_all(&config.out_dir)
            .map_err(OrganizeError::filesystem("create output directory", &config.out_dir))?;

        let started = Instant::now();
        let mapping = self.loader.load()?;
        self.logger.info(&format!(
            "Loaded {} mapping entries from {}",
            mapping.len(),
            self.loader.describe()
        ));
        self.record_stage("load", started);

        let started = Instant::now();
        let groups = IdentityGroups::from_mapping(&mapping, &config.img_dir)?;
        let selected = groups.select(config.min_per_id);
        self.logger.info(&format!(
            "Found {} identities; {} with >={} images",
            groups.len(),
            selected.len(),
            config.min_per_id
        ));
        self.logger.metric("identities_found", groups.len() as f64);
        self.logger.metric("identities_selected", selected.len() as f64);
        self.record_stage("group", started);

        let mut report = OrganizeReport {
            identities_found: groups.len(),
            identities_selected: selected.len(),
            ..OrganizeReport::default()
        };

        let started = Instant::now();
        self.copy_selected(config, &selected, &mut report)?;
        self.logger.metric("files_copied", report.files_copied as f64);
        self.logger.metric("files_skipped", report.files_skipped as f64);
        self.record_stage("copy", started);

        let started = Instant::now();
        report.manifest_path = self.manifest_writer.write(&config.out_dir, &selected)?;
        self.record_stage("manifest", started);

        self.logger.summary();
        Ok(report)
    }

    fn copy_selected(
        &mut self,
        config: &OrganizeConfig,
        selected: &IdentityGroups,
        report: &mut OrganizeReport,
    ) -> Result<(), OrganizeError> {
        let total = selected.len();
        for (done, group) in selected.iter().enumerate() {
            let identity_dir = config.out_dir.join(&group.identity);
            fs::create_dir_all(&identity_dir)
                .map_err(OrganizeError::filesystem("create directory", &identity_dir))?;

            for filename in &group.files {
                let src = config.img_dir.join(filename);
                let dst = identity_dir.join(filename);
                let outcome = if dst.exists() {
                    CopyOutcome::SkippedExisting
                } else {
                    self.copier.copy(&src, &dst)?
                };
                match outcome {
                    CopyOutcome::Copied => report.files_copied += 1,
                    CopyOutcome::SkippedExisting => report.files_skipped += 1,
                    CopyOutcome::Simulated => report.files_simulated += 1,
                }
            }

            self.logger.progress(done + 1, total);
            if let Some(ref callback) = self.on_progress {
                callback(done + 1, total);
            }
        }
        Ok(())
    }

    fn record_stage(&mut self, stage: &str, started: Instant) {
        self.logger
            .timing(stage, started.elapsed().as_secs_f64() * 1000.0);
    }
}
