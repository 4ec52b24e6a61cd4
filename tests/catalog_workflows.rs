//
// catalog_workflows.rs
// Dicom-Catalog-rs
//
// Integration-style tests that write classic and enhanced files to disk and drive the manager, resolver and decoder end to end.
//
// Thales Matheus Mendonça Santos - November 2025

use std::fs;
use std::path::{Path, PathBuf};

use dicom::core::value::DataSetSequence;
use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{FileDicomObject, FileMetaTableBuilder, InMemDicomObject};
use dicom::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use dicom_catalog::dicom_access::element_text;
use dicom_catalog::image::{DecodeOptions, DicomFrameDecoder};
use dicom_catalog::{
    tags, DecodeError, EncodingKind, FrameIndexError, LoadMode, Manager, Precedence, Resolver,
};
use tempfile::{tempdir, TempDir};

const SECONDARY_CAPTURE: &str = "1.2.840.10008.5.1.4.1.1.7";
const ENHANCED_CT: &str = "1.2.840.10008.5.1.4.1.1.2.1";
const CLASSIC_UID: &str = "1.2.826.0.1.3680043.2.1125.1";
const ENHANCED_UID: &str = "1.2.826.0.1.3680043.2.1125.2";

fn text(tag: Tag, vr: VR, value: &str) -> DataElement<InMemDicomObject> {
    DataElement::new(tag, vr, PrimitiveValue::from(value))
}

fn sequence(tag: Tag, items: Vec<InMemDicomObject>) -> DataElement<InMemDicomObject> {
    DataElement::new(tag, VR::SQ, DataSetSequence::from(items))
}

fn macro_group(macro_tag: Tag, inner: Vec<DataElement<InMemDicomObject>>) -> DataElement<InMemDicomObject> {
    sequence(macro_tag, vec![InMemDicomObject::from_element_iter(inner)])
}

fn identifiers(sop_class: &str, sop_uid: &str, number: &str) -> InMemDicomObject {
    InMemDicomObject::from_element_iter([
        text(Tag(0x0010, 0x0010), VR::PN, "Test^Patient"),
        text(Tag(0x0010, 0x0020), VR::LO, "P1"),
        text(Tag(0x0020, 0x000D), VR::UI, "1.2.3.4"),
        text(Tag(0x0008, 0x0020), VR::DA, "20240101"),
        text(Tag(0x0020, 0x000E), VR::UI, "1.2.3.4.5"),
        text(Tag(0x0020, 0x0011), VR::IS, "7"),
        text(Tag(0x0008, 0x0060), VR::CS, "CT"),
        text(Tag(0x0008, 0x0016), VR::UI, sop_class),
        text(Tag(0x0008, 0x0018), VR::UI, sop_uid),
        text(Tag(0x0020, 0x0013), VR::IS, number),
    ])
}

fn write_dicom(dir: &Path, name: &str, obj: InMemDicomObject, sop_class: &str, sop_uid: &str) -> PathBuf {
    let path = dir.join(name);
    let meta = FileMetaTableBuilder::new()
        .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN.uid())
        .media_storage_sop_class_uid(sop_class)
        .media_storage_sop_instance_uid(sop_uid)
        .build()
        .expect("meta");

    let mut file_obj = FileDicomObject::new_empty_with_dict_and_meta(StandardDataDictionary, meta);
    for elem in obj {
        file_obj.put(elem);
    }
    file_obj.write_to_file(&path).expect("write test dicom");
    path
}

/// 2x2 8-bit monochrome pixels, one 4-byte run per frame.
fn put_pixels(obj: &mut InMemDicomObject, pixels: Vec<u8>) {
    obj.put(DataElement::new(Tag(0x0028, 0x0010), VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0011), VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0002), VR::US, PrimitiveValue::from(1_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0100), VR::US, PrimitiveValue::from(8_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0101), VR::US, PrimitiveValue::from(8_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0102), VR::US, PrimitiveValue::from(7_u16)));
    obj.put(DataElement::new(Tag(0x0028, 0x0103), VR::US, PrimitiveValue::from(0_u16)));
    obj.put(text(Tag(0x0028, 0x0004), VR::CS, "MONOCHROME2"));
    obj.put(DataElement::new(Tag(0x7fe0, 0x0010), VR::OB, PrimitiveValue::from(pixels)));
}

/// Single-frame image.
fn write_classic(dir: &Path) -> PathBuf {
    let mut obj = identifiers(SECONDARY_CAPTURE, CLASSIC_UID, "2");
    put_pixels(&mut obj, vec![0, 64, 128, 255]);
    obj.put(text(Tag(0x0028, 0x0030), VR::DS, "0.7\\0.7"));
    write_dicom(dir, "classic.dcm", obj, SECONDARY_CAPTURE, CLASSIC_UID)
}

/// Two frames with per-frame positions, a shared pixel spacing and pixel data.
fn write_enhanced(dir: &Path) -> PathBuf {
    let frame = |position: &str, stack: u32| {
        InMemDicomObject::from_element_iter([
            macro_group(
                Tag(0x0020, 0x9113),
                vec![text(Tag(0x0020, 0x0032), VR::DS, position)],
            ),
            macro_group(
                Tag(0x0020, 0x9111),
                vec![DataElement::new(Tag(0x0020, 0x9057), VR::UL, PrimitiveValue::from(stack))],
            ),
        ])
    };

    let mut obj = identifiers(ENHANCED_CT, ENHANCED_UID, "1");
    obj.put(text(Tag(0x0028, 0x0008), VR::IS, "2"));
    put_pixels(&mut obj, vec![0, 10, 20, 30, 200, 210, 220, 230]);
    obj.put(sequence(
        Tag(0x5200, 0x9229),
        vec![InMemDicomObject::from_element_iter([macro_group(
            Tag(0x0028, 0x9110),
            vec![
                text(Tag(0x0028, 0x0030), VR::DS, "0.5\\0.5"),
                text(Tag(0x0018, 0x0050), VR::DS, "1.25"),
            ],
        )])],
    ));
    obj.put(sequence(
        Tag(0x5200, 0x9230),
        vec![frame("0\\0\\0", 1), frame("0\\0\\2.5", 2)],
    ));
    write_dicom(dir, "enhanced.dcm", obj, ENHANCED_CT, ENHANCED_UID)
}

fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let classic = write_classic(dir.path());
    let enhanced = write_enhanced(dir.path());
    (dir, classic, enhanced)
}

#[test]
fn classic_and_enhanced_files_share_one_series() {
    let (dir, _classic, _enhanced) = fixture();

    let manager = Manager::new();
    let report = manager.load(&[dir.path().to_path_buf()], LoadMode::Replace);
    assert_eq!(report.instances_loaded, 2);
    assert!(report.failures.is_empty());

    let catalog = manager.snapshot();
    assert_eq!(catalog.patient_count(), 1);
    let patient = catalog.patient("P1").expect("patient");
    assert_eq!(patient.studies().len(), 1);
    let study = patient.study("1.2.3.4").expect("study");
    assert_eq!(study.to_string(), "01/01/2024: ");
    let series = study.series();
    assert_eq!(series.len(), 1);

    // instance numbers put the enhanced file first
    let kinds: Vec<EncodingKind> = series[0].instances().iter().map(|i| i.encoding()).collect();
    assert_eq!(kinds, [EncodingKind::Enhanced, EncodingKind::Classic]);
}

#[test]
fn enhanced_tags_resolve_through_functional_groups() {
    let (dir, _classic, _enhanced) = fixture();
    let manager = Manager::new();
    manager.load(&[dir.path().to_path_buf()], LoadMode::Replace);
    let catalog = manager.snapshot();
    let series = catalog
        .patient("P1")
        .and_then(|p| p.study("1.2.3.4"))
        .and_then(|s| s.series_by_uid("1.2.3.4.5"))
        .expect("series");
    let enhanced = series.instance(0).expect("first slice");
    assert_eq!(enhanced.frame_count(), 2);

    let position = tags::lookup_by_keyword("ImagePositionPatient").unwrap();
    let values: Vec<Option<String>> = enhanced
        .get_tags_per_frame(position)
        .into_iter()
        .map(|v| v.and_then(element_text))
        .collect();
    assert_eq!(values, [Some("0\\0\\0".to_string()), Some("0\\0\\2.5".to_string())]);

    let spacing = tags::lookup_by_keyword("PixelSpacing").unwrap();
    for frame in [0, 1, 9] {
        let value = enhanced.get_text(spacing, Some(frame)).expect("shared value");
        assert_eq!(value.as_deref(), Some("0.5\\0.5"));
    }
    assert_eq!(enhanced.pixel_size(), (1.25, 0.5, 0.5));

    let err = enhanced.get_tag(position, Some(2)).unwrap_err();
    assert_eq!(err, FrameIndexError { index: 2, count: 2 });

    let resolver = Resolver::new(Precedence::PerFrameFirst);
    let value = enhanced.get_tag_with(&resolver, spacing, Some(1)).unwrap();
    assert_eq!(value.and_then(element_text).as_deref(), Some("0.5\\0.5"));

    let classic = series.instance(1).expect("second slice");
    assert_eq!(classic.get_text(spacing, Some(5)).unwrap().as_deref(), Some("0.7\\0.7"));
}

#[test]
fn unreadable_file_is_reported_and_add_keeps_state() {
    let (dir, classic, _enhanced) = fixture();
    let bad = dir.path().join("bad.dcm");
    fs::write(&bad, b"definitely not DICOM").unwrap();

    let manager = Manager::new();
    manager.load(&[classic], LoadMode::Replace);
    let before = manager.snapshot();

    let report = manager.load(&[bad.clone()], LoadMode::Add);
    assert_eq!(report.instances_loaded, 0);
    assert_eq!(report.images_loaded, 0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, bad);

    let after = manager.snapshot();
    assert_eq!(after.instance_count(), before.instance_count());
    assert_eq!(after.patient_count(), 1);
}

#[test]
fn png_loads_as_general_image() {
    let dir = tempdir().expect("tempdir");
    let png = dir.path().join("photo.png");
    image::DynamicImage::new_rgb8(3, 2).save(&png).expect("write png");

    let manager = Manager::new();
    let report = manager.load(&[png.clone()], LoadMode::Replace);
    assert_eq!(report.images_loaded, 1);
    assert_eq!(report.instances_loaded, 0);

    let catalog = manager.snapshot();
    assert_eq!(catalog.patient_count(), 0);
    assert_eq!(catalog.images()[0].path(), png.as_path());
    assert_eq!(catalog.images()[0].dimensions(), (3, 2));
}

#[test]
fn classic_pixels_decode_and_frames_are_checked() {
    let (_dir, classic, _enhanced) = fixture();
    let manager = Manager::new();
    manager.load(&[classic], LoadMode::Replace);
    let catalog = manager.snapshot();
    let series = catalog
        .patient("P1")
        .and_then(|p| p.study("1.2.3.4"))
        .and_then(|s| s.series_by_uid("1.2.3.4.5"))
        .expect("series");

    let decoder = DicomFrameDecoder::new(DecodeOptions::default());
    let image = series.pixel_data(&decoder).expect("decode").expect("current slice");
    assert_eq!((image.width(), image.height()), (2, 2));

    let instance = series.current_instance().expect("current slice");
    match instance.pixel_data(&decoder, Some(1)) {
        Err(DecodeError::Frame(err)) => assert_eq!(err, FrameIndexError { index: 1, count: 1 }),
        other => panic!("expected frame error, got {:?}", other.map(|i| i.width())),
    }
}

#[test]
fn enhanced_pixels_decode_the_requested_frame() {
    let (_dir, _classic, enhanced) = fixture();
    let manager = Manager::new();
    manager.load(&[enhanced], LoadMode::Replace);
    let catalog = manager.snapshot();
    let series = catalog
        .patient("P1")
        .and_then(|p| p.study("1.2.3.4"))
        .and_then(|s| s.series_by_uid("1.2.3.4.5"))
        .expect("series");
    let instance = series.current_instance().expect("current slice");
    assert_eq!(instance.encoding(), EncodingKind::Enhanced);

    let decoder = DicomFrameDecoder::new(DecodeOptions::default());
    let image = instance.pixel_data(&decoder, Some(1)).expect("second frame");
    assert_eq!((image.width(), image.height()), (2, 2));

    match instance.pixel_data(&decoder, Some(2)) {
        Err(DecodeError::Frame(err)) => assert_eq!(err, FrameIndexError { index: 2, count: 2 }),
        other => panic!("expected frame error, got {:?}", other.map(|i| i.width())),
    }
}

#[test]
fn reloading_in_add_mode_skips_duplicates() {
    let (dir, _classic, _enhanced) = fixture();
    let manager = Manager::new();
    let paths = [dir.path().to_path_buf()];
    manager.load(&paths, LoadMode::Replace);

    let report = manager.load(&paths, LoadMode::Add);
    assert_eq!(report.instances_loaded, 0);
    assert_eq!(report.duplicates_skipped, 2);
    assert_eq!(manager.snapshot().instance_count(), 2);

    manager.reset();
    assert!(manager.snapshot().is_empty());
}
