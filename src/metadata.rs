use chrono::NaiveDate;
use dicom::object::InMemDicomObject;
use dicom_dictionary_std::tags;

use crate::dicom_access::ElementAccess;

/// Identifiers and descriptive fields that place an instance in the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    pub patient_id: String,
    pub patient_name: String,
    pub study_uid: String,
    pub study_date: Option<NaiveDate>,
    pub study_description: String,
    pub series_uid: String,
    pub series_number: Option<i32>,
    pub acquisition_number: Option<i32>,
    pub series_description: String,
    pub modality: Option<String>,
    pub sop_instance_uid: Option<String>,
    pub instance_number: Option<i32>,
}

fn text_or_empty<T: ElementAccess>(obj: &T, tag: dicom::core::Tag) -> String {
    obj.element_str(tag).unwrap_or_default()
}

pub fn extract_identifiers(obj: &InMemDicomObject) -> Identifiers {
    Identifiers {
        patient_id: text_or_empty(obj, tags::PATIENT_ID),
        patient_name: text_or_empty(obj, tags::PATIENT_NAME),
        study_uid: text_or_empty(obj, tags::STUDY_INSTANCE_UID),
        study_date: obj
            .element_str(tags::STUDY_DATE)
            .and_then(|date| parse_dicom_date(&date)),
        study_description: text_or_empty(obj, tags::STUDY_DESCRIPTION),
        series_uid: text_or_empty(obj, tags::SERIES_INSTANCE_UID),
        series_number: obj.element_int(tags::SERIES_NUMBER),
        acquisition_number: obj.element_int(tags::ACQUISITION_NUMBER),
        series_description: text_or_empty(obj, tags::SERIES_DESCRIPTION),
        modality: obj.element_str(tags::MODALITY),
        sop_instance_uid: obj.element_str(tags::SOP_INSTANCE_UID),
        instance_number: obj.element_int(tags::INSTANCE_NUMBER),
    }
}

/// DA values are `YYYYMMDD`; the pre-3.0 `YYYY.MM.DD` form is accepted too.
pub fn parse_dicom_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y.%m.%d"))
        .ok()
}
