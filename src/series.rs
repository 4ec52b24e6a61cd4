//
// series.rs
// Dicom-Catalog-rs
//
// Ordered, de-duplicated instances of one acquisition with a current-slice cursor.
//
// Thales Matheus Mendonça Santos - November 2025

use std::cmp::Ordering;
use std::fmt;

use dicom::object::mem::InMemElement;
use image::DynamicImage;
use tracing::debug;

use crate::error::{DecodeError, FrameIndexError, SliceIndexError};
use crate::image::FrameDecoder;
use crate::instance::Instance;
use crate::tags::{self, Modality, TagDef};

#[derive(Debug, Clone)]
pub struct Series {
    uid: String,
    number: Option<i32>,
    acquisition_number: Option<i32>,
    description: String,
    modality: Option<String>,
    instances: Vec<Instance>,
    current_slice: Option<usize>,
}

/// Numbered instances first, by number; unnumbered ones keep insertion order after them.
fn instance_order(a: &Instance, b: &Instance) -> Ordering {
    match (a.instance_number(), b.instance_number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Series {
    pub fn new(uid: impl Into<String>) -> Self {
        Series {
            uid: uid.into(),
            number: None,
            acquisition_number: None,
            description: String::new(),
            modality: None,
            instances: Vec::new(),
            current_slice: None,
        }
    }

    /// Creates an empty series described by the first instance seen for it.
    pub fn for_instance(instance: &Instance) -> Self {
        let ids = instance.identifiers();
        Series {
            number: ids.series_number,
            acquisition_number: ids.acquisition_number,
            description: ids.series_description.clone(),
            modality: ids.modality.clone(),
            ..Series::new(ids.series_uid.clone())
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn number(&self) -> Option<i32> {
        self.number
    }

    pub fn acquisition_number(&self) -> Option<i32> {
        self.acquisition_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn modality(&self) -> Option<&str> {
        self.modality.as_deref()
    }

    /// Registry tags of the modality family this series belongs to.
    pub fn modality_tags(&self) -> Option<Vec<&'static TagDef>> {
        self.modality
            .as_deref()
            .and_then(Modality::from_name)
            .map(tags::modality_tags)
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.instances.iter().any(|i| i.uid() == uid)
    }

    /// Inserts `instance` unless one with the same uid is already present.
    /// Returns whether it was inserted. The current slice keeps pointing at
    /// the same instance across the re-sort.
    pub fn add_instance(&mut self, instance: Instance) -> bool {
        if self.contains(instance.uid()) {
            debug!(uid = instance.uid(), series = %self.uid, "duplicate instance skipped");
            return false;
        }

        let current_uid = self.current_instance().map(|i| i.uid().to_string());
        self.instances.push(instance);
        // stable: equal keys stay in insertion order
        self.instances.sort_by(instance_order);

        self.current_slice = match current_uid {
            Some(uid) => self.instances.iter().position(|i| i.uid() == uid),
            None => Some(0),
        };
        true
    }

    /// Moves the cursor back to the first slice.
    pub fn rewind(&mut self) {
        self.current_slice = if self.instances.is_empty() { None } else { Some(0) };
    }

    pub fn current_slice(&self) -> Option<usize> {
        self.current_slice
    }

    pub fn set_current_slice(&mut self, index: usize) -> Result<(), SliceIndexError> {
        if index >= self.instances.len() {
            return Err(SliceIndexError {
                index,
                count: self.instances.len(),
            });
        }
        self.current_slice = Some(index);
        Ok(())
    }

    pub fn current_instance(&self) -> Option<&Instance> {
        self.current_slice.and_then(|i| self.instances.get(i))
    }

    pub fn current_instance_mut(&mut self) -> Option<&mut Instance> {
        match self.current_slice {
            Some(i) => self.instances.get_mut(i),
            None => None,
        }
    }

    pub fn instance(&self, index: usize) -> Result<&Instance, SliceIndexError> {
        self.instances.get(index).ok_or(SliceIndexError {
            index,
            count: self.instances.len(),
        })
    }

    /// Tag value of the current instance; absent for an empty series.
    pub fn get_tag(&self, tag: &TagDef) -> Result<Option<&InMemElement>, FrameIndexError> {
        match self.current_instance() {
            Some(instance) => instance.get_tag(tag, None),
            None => Ok(None),
        }
    }

    /// Tag value of the instance at `index`.
    pub fn get_tag_at(&self, tag: &TagDef, index: usize) -> Result<Option<&InMemElement>, SliceIndexError> {
        let instance = self.instance(index)?;
        Ok(instance.get_tag(tag, None).ok().flatten())
    }

    /// Tag value of every instance, in slice order.
    pub fn get_tags(&self, tag: &TagDef) -> Vec<Option<&InMemElement>> {
        self.instances
            .iter()
            .map(|instance| instance.get_tag(tag, None).ok().flatten())
            .collect()
    }

    pub fn pixel_data(&self, decoder: &dyn FrameDecoder) -> Result<Option<DynamicImage>, DecodeError> {
        self.current_instance()
            .map(|instance| instance.pixel_data(decoder, None))
            .transpose()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.number.map(|n| n.to_string()).unwrap_or_default();
        let acquisition = self
            .acquisition_number
            .map(|n| n.to_string())
            .unwrap_or_default();
        write!(f, "{}-{}:{}", number, acquisition, self.description)
    }
}
