//
// resolver.rs
// Dicom-Catalog-rs
//
// Resolves a registry tag against a classic or enhanced dataset, descending functional group macros when needed.
//
// Thales Matheus Mendonça Santos - November 2025

use dicom::core::Tag;
use dicom::object::mem::InMemElement;
use dicom::object::InMemDicomObject;

use crate::dataset::{Dataset, EnhancedDataset};
use crate::dicom_access::sequence_items;
use crate::error::FrameIndexError;
use crate::instance::Instance;
use crate::tags::TagDef;

/// Which location wins when an attribute is found both in the shared
/// attributes and nested in the selected frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    #[default]
    SharedFirst,
    PerFrameFirst,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    precedence: Precedence,
}

impl Resolver {
    pub fn new(precedence: Precedence) -> Self {
        Resolver { precedence }
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Resolves `tag` on `instance`, using its current frame when `frame` is `None`.
    pub fn resolve<'a>(
        &self,
        instance: &'a Instance,
        tag: &TagDef,
        frame: Option<usize>,
    ) -> Result<Option<&'a InMemElement>, FrameIndexError> {
        let frame = frame.unwrap_or_else(|| instance.current_frame());
        self.resolve_in(instance.dataset(), tag, frame)
    }

    pub fn resolve_in<'a>(
        &self,
        dataset: &'a Dataset,
        tag: &TagDef,
        frame: usize,
    ) -> Result<Option<&'a InMemElement>, FrameIndexError> {
        match dataset {
            Dataset::Classic(attributes) => Ok(attributes.element(tag.tag()).ok()),
            Dataset::Enhanced(enhanced) => self.resolve_enhanced(enhanced, tag, frame),
        }
    }

    fn resolve_enhanced<'a>(
        &self,
        enhanced: &'a EnhancedDataset,
        tag: &TagDef,
        frame: usize,
    ) -> Result<Option<&'a InMemElement>, FrameIndexError> {
        if tag.is_top_level() {
            return Ok(enhanced.shared().element(tag.tag()).ok());
        }

        let shared = shared_value(enhanced, tag);
        // Shared placements need no frame unless the value has to come from one.
        if !tag.is_per_frame() && shared.is_some() && self.precedence == Precedence::SharedFirst {
            return Ok(shared);
        }

        let item = enhanced.frame(frame).ok_or(FrameIndexError {
            index: frame,
            count: enhanced.frame_count(),
        })?;
        let per_frame = tag
            .macros()
            .iter()
            .find_map(|link| macro_value(item, link.sequence, tag.tag()));

        Ok(match self.precedence {
            Precedence::SharedFirst => shared.or(per_frame),
            Precedence::PerFrameFirst => per_frame.or(shared),
        })
    }
}

/// Top-level value, else the value nested in the shared functional groups.
fn shared_value<'a>(enhanced: &'a EnhancedDataset, tag: &TagDef) -> Option<&'a InMemElement> {
    enhanced.shared().element(tag.tag()).ok().or_else(|| {
        let groups = enhanced.shared_groups()?;
        tag.macros()
            .iter()
            .find_map(|link| macro_value(groups, link.sequence, tag.tag()))
    })
}

/// `item[sequence][0][tag]`.
fn macro_value(item: &InMemDicomObject, sequence: Tag, tag: Tag) -> Option<&InMemElement> {
    item.element(sequence)
        .ok()
        .and_then(sequence_items)
        .and_then(|items| items.first())
        .and_then(|group| group.element(tag).ok())
}
