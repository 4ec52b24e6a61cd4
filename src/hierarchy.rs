//
// hierarchy.rs
// Dicom-Catalog-rs
//
// Patient -> Study -> Series containers and the catalog holding all loaded patients and general images.
//
// Thales Matheus Mendonça Santos - November 2025

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::NaiveDate;

use crate::image::GeneralImage;
use crate::instance::Instance;
use crate::models::{CatalogSummary, PatientSummary, SeriesSummary, StudySummary};
use crate::series::Series;

#[derive(Debug, Clone)]
pub struct Study {
    uid: String,
    date: Option<NaiveDate>,
    description: String,
    series: BTreeMap<String, Series>,
}

impl Study {
    pub fn for_instance(instance: &Instance) -> Self {
        let ids = instance.identifiers();
        Study {
            uid: ids.study_uid.clone(),
            date: ids.study_date,
            description: ids.study_description.clone(),
            series: BTreeMap::new(),
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Series ordered by (series number, acquisition number, uid); unnumbered last.
    pub fn series(&self) -> Vec<&Series> {
        let mut series: Vec<&Series> = self.series.values().collect();
        series.sort_by(|a, b| {
            none_last(a.number(), b.number())
                .then_with(|| none_last(a.acquisition_number(), b.acquisition_number()))
                .then_with(|| a.uid().cmp(b.uid()))
        });
        series
    }

    pub fn series_by_uid(&self, uid: &str) -> Option<&Series> {
        self.series.get(uid)
    }

    pub fn series_by_uid_mut(&mut self, uid: &str) -> Option<&mut Series> {
        self.series.get_mut(uid)
    }

    pub fn instance_count(&self) -> usize {
        self.series.values().map(Series::len).sum()
    }

    fn add_instance(&mut self, instance: Instance) -> bool {
        let uid = instance.identifiers().series_uid.clone();
        self.series
            .entry(uid)
            .or_insert_with(|| Series::for_instance(&instance))
            .add_instance(instance)
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}: {}", date.format("%d/%m/%Y"), self.description),
            None => write!(f, ": {}", self.description),
        }
    }
}

fn none_last(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone)]
pub struct Patient {
    id: String,
    name: String,
    studies: BTreeMap<String, Study>,
}

impl Patient {
    pub fn for_instance(instance: &Instance) -> Self {
        let ids = instance.identifiers();
        Patient {
            id: ids.patient_id.clone(),
            name: ids.patient_name.clone(),
            studies: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Studies newest first; undated studies last, by uid.
    pub fn studies(&self) -> Vec<&Study> {
        let mut studies: Vec<&Study> = self.studies.values().collect();
        studies.sort_by(|a, b| match (a.date, b.date) {
            (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.uid.cmp(&b.uid)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.uid.cmp(&b.uid),
        });
        studies
    }

    pub fn study(&self, uid: &str) -> Option<&Study> {
        self.studies.get(uid)
    }

    pub fn study_mut(&mut self, uid: &str) -> Option<&mut Study> {
        self.studies.get_mut(uid)
    }

    pub fn instance_count(&self) -> usize {
        self.studies.values().map(Study::instance_count).sum()
    }

    /// Files the instance under its study and series, creating them as needed.
    /// Returns false when the series already holds an instance with the same uid.
    pub fn add_instance(&mut self, instance: Instance) -> bool {
        let uid = instance.identifiers().study_uid.clone();
        self.studies
            .entry(uid)
            .or_insert_with(|| Study::for_instance(&instance))
            .add_instance(instance)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// Everything the manager has loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    patients: BTreeMap<String, Patient>,
    images: Vec<GeneralImage>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patients ordered by id.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn images(&self) -> &[GeneralImage] {
        &self.images
    }

    pub fn instance_count(&self) -> usize {
        self.patients.values().map(Patient::instance_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.images.is_empty()
    }

    pub fn add_instance(&mut self, instance: Instance) -> bool {
        let id = instance.identifiers().patient_id.clone();
        self.patients
            .entry(id)
            .or_insert_with(|| Patient::for_instance(&instance))
            .add_instance(instance)
    }

    /// Adds a general image unless one with the same path is already held.
    pub fn add_image(&mut self, image: GeneralImage) -> bool {
        if self.has_image(image.path()) {
            return false;
        }
        self.images.push(image);
        true
    }

    pub fn has_image(&self, path: &Path) -> bool {
        self.images.iter().any(|image| image.path() == path)
    }

    /// The series an instance was filed under.
    pub fn series_of(&self, instance: &Instance) -> Option<&Series> {
        let parent = instance.parent();
        self.patients
            .get(parent.patient_id)?
            .study(parent.study_uid)?
            .series_by_uid(parent.series_uid)
    }

    pub fn series_mut(&mut self, patient_id: &str, study_uid: &str, series_uid: &str) -> Option<&mut Series> {
        self.patients
            .get_mut(patient_id)?
            .study_mut(study_uid)?
            .series_by_uid_mut(series_uid)
    }

    pub fn clear(&mut self) {
        self.patients.clear();
        self.images.clear();
    }

    pub fn summary(&self) -> CatalogSummary {
        let patients = self
            .patients()
            .map(|patient| PatientSummary {
                id: patient.id().to_string(),
                name: patient.name().to_string(),
                studies: patient
                    .studies()
                    .into_iter()
                    .map(|study| StudySummary {
                        uid: study.uid().to_string(),
                        date: study.date().map(|d| d.format("%Y-%m-%d").to_string()),
                        description: study.description().to_string(),
                        series: study
                            .series()
                            .into_iter()
                            .map(|series| SeriesSummary {
                                uid: series.uid().to_string(),
                                number: series.number(),
                                acquisition_number: series.acquisition_number(),
                                description: series.description().to_string(),
                                modality: series.modality().map(str::to_string),
                                instances: series.len(),
                                frames: series.instances().iter().map(Instance::frame_count).sum(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        CatalogSummary {
            patients,
            instances: self.instance_count(),
            images: self
                .images
                .iter()
                .map(|image| image.path().display().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
    use dicom::object::InMemDicomObject;
    use image::DynamicImage;

    fn instance(patient: &str, study: &str, date: Option<&str>, series: &str, number: &str, sop: &str) -> Instance {
        let mut obj = InMemDicomObject::from_element_iter([
            DataElement::new(Tag(0x0010, 0x0020), VR::LO, PrimitiveValue::from(patient)),
            DataElement::new(Tag(0x0010, 0x0010), VR::PN, PrimitiveValue::from("DOE^JANE")),
            DataElement::new(Tag(0x0020, 0x000D), VR::UI, PrimitiveValue::from(study)),
            DataElement::new(Tag(0x0020, 0x000E), VR::UI, PrimitiveValue::from(series)),
            DataElement::new(Tag(0x0020, 0x0011), VR::IS, PrimitiveValue::from(number)),
            DataElement::new(Tag(0x0008, 0x0018), VR::UI, PrimitiveValue::from(sop)),
            DataElement::new(Tag(0x0008, 0x1030), VR::LO, PrimitiveValue::from("HEAD")),
        ]);
        if let Some(date) = date {
            obj.put(DataElement::new(Tag(0x0008, 0x0020), VR::DA, PrimitiveValue::from(date)));
        }
        Instance::new(format!("/data/{sop}.dcm"), Dataset::from_object(obj))
    }

    #[test]
    fn instances_are_filed_by_their_identifiers() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_instance(instance("P1", "ST1", None, "SE1", "1", "I1")));
        assert!(catalog.add_instance(instance("P1", "ST1", None, "SE1", "1", "I2")));
        assert!(catalog.add_instance(instance("P1", "ST1", None, "SE2", "2", "I3")));
        assert!(catalog.add_instance(instance("P2", "ST9", None, "SE9", "1", "I4")));
        assert!(!catalog.add_instance(instance("P1", "ST1", None, "SE1", "1", "I1")));

        assert_eq!(catalog.patient_count(), 2);
        assert_eq!(catalog.instance_count(), 4);
        let patient = catalog.patient("P1").expect("patient");
        assert_eq!(patient.to_string(), "P1: DOE^JANE");
        let study = patient.study("ST1").expect("study");
        assert_eq!(study.series().len(), 2);
        assert_eq!(study.series_by_uid("SE1").map(Series::len), Some(2));
    }

    #[test]
    fn missing_identifiers_share_the_empty_key() {
        let mut catalog = Catalog::new();
        catalog.add_instance(instance("", "", None, "", "", "I1"));
        catalog.add_instance(instance("", "", None, "", "", "I2"));
        assert_eq!(catalog.patient_count(), 1);
        assert_eq!(catalog.patient("").and_then(|p| p.study("")).map(Study::instance_count), Some(2));
    }

    #[test]
    fn studies_are_listed_newest_first() {
        let mut catalog = Catalog::new();
        catalog.add_instance(instance("P1", "OLD", Some("20200101"), "A", "1", "I1"));
        catalog.add_instance(instance("P1", "NONE", None, "B", "1", "I2"));
        catalog.add_instance(instance("P1", "NEW", Some("20231224"), "C", "1", "I3"));
        let patient = catalog.patient("P1").unwrap();
        let order: Vec<&str> = patient.studies().iter().map(|s| s.uid()).collect();
        assert_eq!(order, ["NEW", "OLD", "NONE"]);
        assert_eq!(patient.studies()[0].to_string(), "24/12/2023: HEAD");
    }

    #[test]
    fn series_are_listed_by_number() {
        let mut catalog = Catalog::new();
        catalog.add_instance(instance("P1", "ST1", None, "Z", "10", "I1"));
        catalog.add_instance(instance("P1", "ST1", None, "Y", "", "I2"));
        catalog.add_instance(instance("P1", "ST1", None, "X", "2", "I3"));
        let study = catalog.patient("P1").and_then(|p| p.study("ST1")).unwrap();
        let order: Vec<&str> = study.series().iter().map(|s| s.uid()).collect();
        assert_eq!(order, ["X", "Z", "Y"]);
    }

    #[test]
    fn series_lookup_uses_the_parent_keys() {
        let mut catalog = Catalog::new();
        let probe = instance("P1", "ST1", None, "SE1", "1", "I1");
        catalog.add_instance(probe.clone());
        assert_eq!(catalog.series_of(&probe).map(Series::uid), Some("SE1"));
        let series = catalog.series_mut("P1", "ST1", "SE1").expect("series");
        series.set_current_slice(0).unwrap();
    }

    #[test]
    fn images_are_deduplicated_by_path() {
        let mut catalog = Catalog::new();
        let image = || GeneralImage::new("/data/photo.png", DynamicImage::new_rgb8(2, 2));
        assert!(catalog.add_image(image()));
        assert!(!catalog.add_image(image()));
        assert_eq!(catalog.images().len(), 1);
        catalog.clear();
        assert!(catalog.is_empty());
    }

    #[test]
    fn summary_mirrors_the_tree() {
        let mut catalog = Catalog::new();
        catalog.add_instance(instance("P1", "ST1", Some("20240131"), "SE1", "1", "I1"));
        let summary = catalog.summary();
        assert_eq!(summary.instances, 1);
        let study = &summary.patients[0].studies[0];
        assert_eq!(study.date.as_deref(), Some("2024-01-31"));
        assert_eq!(study.series[0].instances, 1);
        assert_eq!(study.series[0].frames, 1);
    }
}
