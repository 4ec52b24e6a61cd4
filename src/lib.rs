//
// lib.rs
// Dicom-Catalog-rs
//
// Exposes the catalog hierarchy, the tag registry and resolver, and the CLI entry point.
//
// Thales Matheus Mendonça Santos - November 2025

pub mod batch;
pub mod cli;
pub mod dataset;
pub mod dicom_access;
pub mod error;
pub mod hierarchy;
pub mod image;
pub mod instance;
pub mod manager;
pub mod metadata;
pub mod models;
pub mod resolver;
pub mod series;
pub mod tags;

mod tag_table;

pub use cli::{run as run_cli, Cli, Commands};
pub use dataset::{Dataset, DatasetParser, DicomFileParser, EncodingKind};
pub use error::{DecodeError, FrameIndexError, OpenError, ParseError, SliceIndexError};
pub use hierarchy::{Catalog, Patient, Study};
pub use instance::Instance;
pub use manager::Manager;
pub use models::{LoadConfig, LoadFailure, LoadMode, LoadReport};
pub use resolver::{Precedence, Resolver};
pub use series::Series;
pub use tags::{Modality, TagDef};
