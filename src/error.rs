//
// error.rs
// Dicom-Catalog-rs
//
// Typed errors for frame/slice cursors and for the parsing, decoding and image collaborators.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use thiserror::Error;

/// A frame index outside `[0, count)` was requested on an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame index {index} out of range for {count} frame(s)")]
pub struct FrameIndexError {
    pub index: usize,
    pub count: usize,
}

/// A slice index outside the series was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slice index {index} out of range for series with {count} instance(s)")]
pub struct SliceIndexError {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read DICOM file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: dicom::object::ReadError,
    },
    #[error("{path:?} is not a DICOM file: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
#[error("failed to open image {path:?}")]
pub struct OpenError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Frame(#[from] FrameIndexError),
    #[error("failed to open {path:?} for pixel decoding")]
    Open {
        path: PathBuf,
        #[source]
        source: dicom::object::ReadError,
    },
    #[error("failed to decode pixel data of {path:?}")]
    Pixels {
        path: PathBuf,
        #[source]
        source: dicom_pixeldata::Error,
    },
}
