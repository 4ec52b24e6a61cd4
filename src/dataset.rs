//
// dataset.rs
// Dicom-Catalog-rs
//
// Parsed attribute sets split into classic (flat) and enhanced (shared + per-frame) encodings.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::Path;

use dicom::object::{open_file, InMemDicomObject};

use crate::dicom_access::sequence_items;
use crate::error::ParseError;
use crate::tags::{PER_FRAME_FUNCTIONAL_GROUPS, SHARED_FUNCTIONAL_GROUPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingKind {
    Classic,
    Enhanced,
}

/// Multi-frame attributes: everything top-level stays in `shared`, the
/// items of the per-frame functional groups sequence become `frames`.
#[derive(Debug, Clone)]
pub struct EnhancedDataset {
    shared: InMemDicomObject,
    frames: Vec<InMemDicomObject>,
}

impl EnhancedDataset {
    pub fn shared(&self) -> &InMemDicomObject {
        &self.shared
    }

    /// First item of the shared functional groups sequence, if any.
    pub fn shared_groups(&self) -> Option<&InMemDicomObject> {
        self.shared
            .element(SHARED_FUNCTIONAL_GROUPS)
            .ok()
            .and_then(sequence_items)
            .and_then(|items| items.first())
    }

    pub fn frames(&self) -> &[InMemDicomObject] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&InMemDicomObject> {
        self.frames.get(index)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[derive(Debug, Clone)]
pub enum Dataset {
    Classic(InMemDicomObject),
    Enhanced(EnhancedDataset),
}

impl Dataset {
    /// Classifies a parsed object. A per-frame functional groups sequence
    /// with at least one item makes it enhanced; anything else is classic.
    pub fn from_object(mut object: InMemDicomObject) -> Self {
        let frames = object
            .element(PER_FRAME_FUNCTIONAL_GROUPS)
            .ok()
            .and_then(sequence_items)
            .map(|items| items.to_vec())
            .unwrap_or_default();

        if frames.is_empty() {
            return Dataset::Classic(object);
        }

        object.remove_element(PER_FRAME_FUNCTIONAL_GROUPS);
        Dataset::Enhanced(EnhancedDataset {
            shared: object,
            frames,
        })
    }

    pub fn enhanced(shared: InMemDicomObject, frames: Vec<InMemDicomObject>) -> Self {
        Dataset::Enhanced(EnhancedDataset { shared, frames })
    }

    pub fn kind(&self) -> EncodingKind {
        match self {
            Dataset::Classic(_) => EncodingKind::Classic,
            Dataset::Enhanced(_) => EncodingKind::Enhanced,
        }
    }

    /// The flat top-level attributes (the shared ones for enhanced files).
    pub fn top_level(&self) -> &InMemDicomObject {
        match self {
            Dataset::Classic(attributes) => attributes,
            Dataset::Enhanced(enhanced) => &enhanced.shared,
        }
    }

    /// Classic files hold exactly one implicit frame.
    pub fn frame_count(&self) -> usize {
        match self {
            Dataset::Classic(_) => 1,
            Dataset::Enhanced(enhanced) => enhanced.frame_count(),
        }
    }
}

/// Parsing collaborator: turns a file into a classified dataset.
pub trait DatasetParser: Send + Sync {
    fn parse(&self, path: &Path) -> Result<Dataset, ParseError>;
}

/// Reads Part 10 files with dicom-rs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomFileParser;

impl DatasetParser for DicomFileParser {
    fn parse(&self, path: &Path) -> Result<Dataset, ParseError> {
        let obj = open_file(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Dataset::from_object(obj.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::value::DataSetSequence;
    use dicom::core::{DataElement, PrimitiveValue, Tag, VR};

    fn frame_item(position: &str) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([DataElement::new(
            Tag(0x0020, 0x0032),
            VR::DS,
            PrimitiveValue::from(position),
        )])
    }

    #[test]
    fn object_without_per_frame_groups_is_classic() {
        let obj = InMemDicomObject::from_element_iter([DataElement::new(
            Tag(0x0010, 0x0020),
            VR::LO,
            PrimitiveValue::from("P1"),
        )]);
        let dataset = Dataset::from_object(obj);
        assert_eq!(dataset.kind(), EncodingKind::Classic);
        assert_eq!(dataset.frame_count(), 1);
    }

    #[test]
    fn per_frame_items_are_split_from_shared_attributes() {
        let obj = InMemDicomObject::from_element_iter([
            DataElement::new(Tag(0x0010, 0x0020), VR::LO, PrimitiveValue::from("P1")),
            DataElement::new(
                PER_FRAME_FUNCTIONAL_GROUPS,
                VR::SQ,
                DataSetSequence::from(vec![frame_item("0\\0\\0"), frame_item("0\\0\\5")]),
            ),
        ]);
        let dataset = Dataset::from_object(obj);
        assert_eq!(dataset.kind(), EncodingKind::Enhanced);
        assert_eq!(dataset.frame_count(), 2);
        assert!(dataset.top_level().element(PER_FRAME_FUNCTIONAL_GROUPS).is_err());
        assert!(dataset.top_level().element(Tag(0x0010, 0x0020)).is_ok());
    }

    #[test]
    fn empty_per_frame_sequence_stays_classic() {
        let obj = InMemDicomObject::from_element_iter([DataElement::new(
            PER_FRAME_FUNCTIONAL_GROUPS,
            VR::SQ,
            DataSetSequence::from(Vec::<InMemDicomObject>::new()),
        )]);
        assert_eq!(Dataset::from_object(obj).kind(), EncodingKind::Classic);
    }
}
