//
// models.rs
// Dicom-Catalog-rs
//
// Serializable load reports and catalog summaries used by the CLI.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use serde::Serialize;

/// How a load interacts with what the manager already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Discard the current catalog and keep only what this load produces.
    #[default]
    Replace,
    /// Merge into the current catalog.
    Add,
}

/// Filesystem walk settings for a load.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub parallel: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            parallel: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

/// A file that could not be used, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one `Manager::load` call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub instances_loaded: usize,
    pub images_loaded: usize,
    pub duplicates_skipped: usize,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub uid: String,
    pub number: Option<i32>,
    pub acquisition_number: Option<i32>,
    pub description: String,
    pub modality: Option<String>,
    pub instances: usize,
    pub frames: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub uid: String,
    pub date: Option<String>,
    pub description: String,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub studies: Vec<StudySummary>,
}

/// Whole-catalog view, patients ordered by id.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub patients: Vec<PatientSummary>,
    pub instances: usize,
    pub images: Vec<String>,
}

/// One registry entry as listed by `dicom-catalog tags`.
#[derive(Debug, Clone, Serialize)]
pub struct TagSummary {
    pub tag: String,
    pub keyword: String,
    pub name: String,
    pub vr: String,
    pub macros: Vec<String>,
    pub per_frame: bool,
}
