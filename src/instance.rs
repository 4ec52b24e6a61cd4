//
// instance.rs
// Dicom-Catalog-rs
//
// One parsed file: identifiers, frame cursor, tag resolution and pixel access.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dicom::core::Tag;
use dicom::object::mem::InMemElement;
use dicom_pixeldata::WindowLevel;
use image::DynamicImage;

use crate::dataset::{Dataset, EncodingKind};
use crate::dicom_access::{element_float, element_floats, element_text};
use crate::error::{DecodeError, FrameIndexError};
use crate::image::FrameDecoder;
use crate::metadata::{extract_identifiers, Identifiers};
use crate::resolver::Resolver;
use crate::tags::{self, TagDef};

/// Keys of the series, study and patient that own an instance.
/// Lookup only: the catalog owns instances through its own maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRef<'a> {
    pub patient_id: &'a str,
    pub study_uid: &'a str,
    pub series_uid: &'a str,
}

#[derive(Debug, Clone)]
pub struct Instance {
    path: PathBuf,
    dataset: Arc<Dataset>,
    ids: Identifiers,
    uid: String,
    current_frame: usize,
}

impl Instance {
    pub fn new(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        let path = path.into();
        let ids = extract_identifiers(dataset.top_level());
        // Files without a SOP Instance UID are told apart by their location.
        let uid = ids
            .sop_instance_uid
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        Instance {
            path,
            dataset: Arc::new(dataset),
            ids,
            uid,
            current_frame: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn encoding(&self) -> EncodingKind {
        self.dataset.kind()
    }

    pub fn identifiers(&self) -> &Identifiers {
        &self.ids
    }

    /// Uniqueness key within a series.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn instance_number(&self) -> Option<i32> {
        self.ids.instance_number
    }

    pub fn parent(&self) -> ParentRef<'_> {
        ParentRef {
            patient_id: &self.ids.patient_id,
            study_uid: &self.ids.study_uid,
            series_uid: &self.ids.series_uid,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.dataset.frame_count()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Moves the frame cursor of an enhanced instance. Classic instances
    /// have a single implicit frame and ignore the call.
    pub fn set_current_frame(&mut self, frame: usize) -> Result<(), FrameIndexError> {
        if self.encoding() == EncodingKind::Classic {
            return Ok(());
        }
        self.check_frame(frame)?;
        self.current_frame = frame;
        Ok(())
    }

    fn check_frame(&self, frame: usize) -> Result<usize, FrameIndexError> {
        let count = self.frame_count();
        if frame < count {
            Ok(frame)
        } else {
            Err(FrameIndexError {
                index: frame,
                count,
            })
        }
    }

    pub fn get_tag(
        &self,
        tag: &TagDef,
        frame: Option<usize>,
    ) -> Result<Option<&InMemElement>, FrameIndexError> {
        Resolver::default().resolve(self, tag, frame)
    }

    pub fn get_tag_with(
        &self,
        resolver: &Resolver,
        tag: &TagDef,
        frame: Option<usize>,
    ) -> Result<Option<&InMemElement>, FrameIndexError> {
        resolver.resolve(self, tag, frame)
    }

    /// Resolves a raw code, using the registry's nesting hints when the code is known.
    pub fn get(&self, tag: Tag, frame: Option<usize>) -> Result<Option<&InMemElement>, FrameIndexError> {
        self.get_tag(&tags::describe(tag), frame)
    }

    pub fn get_text(
        &self,
        tag: &TagDef,
        frame: Option<usize>,
    ) -> Result<Option<String>, FrameIndexError> {
        Ok(self.get_tag(tag, frame)?.and_then(element_text))
    }

    /// Value of `tag` at every frame, in frame order.
    pub fn get_tags_per_frame(&self, tag: &TagDef) -> Vec<Option<&InMemElement>> {
        (0..self.frame_count())
            .map(|frame| self.get_tag(tag, Some(frame)).ok().flatten())
            .collect()
    }

    pub fn pixel_data(
        &self,
        decoder: &dyn FrameDecoder,
        frame: Option<usize>,
    ) -> Result<DynamicImage, DecodeError> {
        let frame = self.check_frame(frame.unwrap_or(self.current_frame))?;
        decoder.decode_frame(self, frame)
    }

    fn current_float(&self, keyword: &str) -> Option<f64> {
        let tag = tags::lookup_by_keyword(keyword)?;
        self.get_tag(tag, None).ok().flatten().and_then(element_float)
    }

    /// VOI window at the current frame, when both center and width are present.
    pub fn window(&self) -> Option<WindowLevel> {
        let center = self.current_float("WindowCenter")?;
        let width = self.current_float("WindowWidth")?;
        Some(WindowLevel { center, width })
    }

    /// (slope, intercept), defaulting to the identity transform.
    pub fn rescale(&self) -> (f64, f64) {
        (
            self.current_float("RescaleSlope").unwrap_or(1.0),
            self.current_float("RescaleIntercept").unwrap_or(0.0),
        )
    }

    /// (slice thickness, row spacing, column spacing) in mm, each defaulting to 1.
    pub fn pixel_size(&self) -> (f64, f64, f64) {
        let thickness = self.current_float("SliceThickness").unwrap_or(1.0);
        let spacing = tags::lookup_by_keyword("PixelSpacing")
            .and_then(|tag| self.get_tag(tag, None).ok().flatten())
            .and_then(element_floats);
        match spacing.as_deref() {
            Some([row, column, ..]) => (thickness, *row, *column),
            _ => (thickness, 1.0, 1.0),
        }
    }
}
