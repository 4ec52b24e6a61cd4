//
// batch.rs
// Dicom-Catalog-rs
//
// Expands load paths into files and parses them, in parallel when configured.
//
// Thales Matheus Mendonça Santos - November 2025

use std::error::Error;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::dataset::DatasetParser;
use crate::image::{GeneralImage, ImageOpener};
use crate::instance::Instance;
use crate::models::{LoadConfig, LoadFailure};

/// A file that was read successfully.
#[derive(Debug)]
pub enum Loaded {
    Dicom(Instance),
    Image(GeneralImage),
}

/// Files named by `paths`, directories expanded recursively in name order.
/// Paths that do not exist or cannot be walked are returned as failures.
pub fn collect_files(paths: &[PathBuf], config: &LoadConfig) -> (Vec<PathBuf>, Vec<LoadFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        if !path.exists() {
            warn!(path = %path.display(), "load path does not exist");
            failures.push(LoadFailure {
                path: path.clone(),
                reason: "path does not exist".to_string(),
            });
            continue;
        }

        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut walker = WalkDir::new(path)
            .follow_links(config.follow_links)
            .sort_by_file_name();
        if let Some(depth) = config.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => {
                    let failed = err.path().map(Path::to_path_buf).unwrap_or_else(|| path.clone());
                    warn!(path = %failed.display(), error = %err, "cannot walk directory entry");
                    failures.push(LoadFailure {
                        path: failed,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    debug!(files = files.len(), failures = failures.len(), "expanded load paths");
    (files, failures)
}

/// Reads one file as DICOM, falling back to a general image.
pub fn load_file(
    path: &Path,
    parser: &dyn DatasetParser,
    opener: &dyn ImageOpener,
) -> Result<Loaded, LoadFailure> {
    let dicom_err = match parser.parse(path) {
        Ok(dataset) => return Ok(Loaded::Dicom(Instance::new(path, dataset))),
        Err(err) => err,
    };

    match opener.open(path) {
        Ok(image) => Ok(Loaded::Image(GeneralImage::new(path, image))),
        Err(image_err) => {
            debug!(path = %path.display(), error = %image_err, "not an image either");
            Err(LoadFailure {
                path: path.to_path_buf(),
                reason: error_chain(&dicom_err),
            })
        }
    }
}

fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Reads every file, preserving input order in the output.
pub fn load_files(
    files: &[PathBuf],
    parser: &dyn DatasetParser,
    opener: &dyn ImageOpener,
    parallel: bool,
) -> Vec<Result<Loaded, LoadFailure>> {
    if parallel {
        files
            .par_iter()
            .map(|path| load_file(path, parser, opener))
            .collect()
    } else {
        files
            .iter()
            .map(|path| load_file(path, parser, opener))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn directories_expand_in_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("nested")).unwrap();
        for name in ["b.dcm", "a.dcm", "nested/c.dcm"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let (files, failures) = collect_files(&[dir.path().to_path_buf()], &LoadConfig::default());
        assert!(failures.is_empty());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            [PathBuf::from("a.dcm"), PathBuf::from("b.dcm"), PathBuf::from("nested/c.dcm")]
        );
    }

    #[test]
    fn max_depth_limits_recursion() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("top.dcm"), b"x").unwrap();
        fs::write(dir.path().join("nested/deep.dcm"), b"x").unwrap();

        let config = LoadConfig {
            max_depth: Some(1),
            ..LoadConfig::default()
        };
        let (files, _) = collect_files(&[dir.path().to_path_buf()], &config);
        assert_eq!(files, [dir.path().join("top.dcm")]);
    }

    #[test]
    fn missing_paths_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let (files, failures) = collect_files(&[missing.clone()], &LoadConfig::default());
        assert!(files.is_empty());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, missing);
    }
}
