//
// manager.rs
// Dicom-Catalog-rs
//
// Process-wide catalog handle: loads files, merges them into the hierarchy and hands out read snapshots.
//
// Thales Matheus Mendonça Santos - November 2025

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tracing::{info, warn};

use crate::batch::{self, Loaded};
use crate::dataset::{DatasetParser, DicomFileParser};
use crate::hierarchy::Catalog;
use crate::image::{FileImageOpener, ImageOpener};
use crate::models::{LoadConfig, LoadMode, LoadReport};

/// Owns the loaded catalog. Readers work on `Arc` snapshots; every change
/// is applied copy-on-write under the lock, so a snapshot never changes
/// after it was taken.
pub struct Manager {
    state: RwLock<Arc<Catalog>>,
    parser: Box<dyn DatasetParser>,
    opener: Box<dyn ImageOpener>,
    config: LoadConfig,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(DicomFileParser), Box::new(FileImageOpener))
    }

    pub fn with_collaborators(parser: Box<dyn DatasetParser>, opener: Box<dyn ImageOpener>) -> Self {
        Manager {
            state: RwLock::new(Arc::new(Catalog::new())),
            parser,
            opener,
            config: LoadConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Current catalog. Later loads do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<Catalog>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads files and directories. A file that is neither DICOM nor an
    /// image is recorded in the report and never aborts the batch.
    pub fn load(&self, paths: &[PathBuf], mode: LoadMode) -> LoadReport {
        let (files, failures) = batch::collect_files(paths, &self.config);
        let loaded = batch::load_files(
            &files,
            self.parser.as_ref(),
            self.opener.as_ref(),
            self.config.parallel,
        );

        let mut report = LoadReport {
            failures,
            ..LoadReport::default()
        };
        let mut items = Vec::with_capacity(loaded.len());
        for result in loaded {
            match result {
                Ok(item) => items.push(item),
                Err(failure) => {
                    warn!(path = %failure.path.display(), reason = %failure.reason, "file skipped");
                    report.failures.push(failure);
                }
            }
        }

        match mode {
            LoadMode::Replace => {
                let mut catalog = Catalog::new();
                merge(&mut catalog, items, &mut report);
                *self.write() = Arc::new(catalog);
            }
            // Failures alone leave the current catalog untouched.
            LoadMode::Add if items.is_empty() => {}
            LoadMode::Add => {
                let mut state = self.write();
                merge(Arc::make_mut(&mut state), items, &mut report);
            }
        }

        info!(
            mode = ?mode,
            instances = report.instances_loaded,
            images = report.images_loaded,
            duplicates = report.duplicates_skipped,
            failures = report.failures.len(),
            "load finished"
        );
        report
    }

    /// Applies a mutation (slice or frame cursors, for instance) to the catalog.
    pub fn update<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut state = self.write();
        f(Arc::make_mut(&mut state))
    }

    /// Drops every patient and image.
    pub fn reset(&self) {
        *self.write() = Arc::new(Catalog::new());
    }
}

/// Merges a batch; every series it grew ends up on its first slice.
fn merge(catalog: &mut Catalog, items: Vec<Loaded>, report: &mut LoadReport) {
    let mut grown = BTreeSet::new();
    for item in items {
        let added = match item {
            Loaded::Dicom(instance) => {
                let ids = instance.identifiers();
                let key = (ids.patient_id.clone(), ids.study_uid.clone(), ids.series_uid.clone());
                let added = catalog.add_instance(instance);
                if added {
                    grown.insert(key);
                }
                report.instances_loaded += usize::from(added);
                added
            }
            Loaded::Image(image) => {
                let added = catalog.add_image(image);
                report.images_loaded += usize::from(added);
                added
            }
        };
        if !added {
            report.duplicates_skipped += 1;
        }
    }

    for (patient_id, study_uid, series_uid) in &grown {
        if let Some(series) = catalog.series_mut(patient_id, study_uid, series_uid) {
            series.rewind();
        }
    }
}
