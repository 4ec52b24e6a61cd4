//
// tag_table.rs
// Dicom-Catalog-rs
//
// Attribute table backing the tag registry: codes, names and VRs from PS3.6,
// functional group nesting and modality membership from PS3.3.
//
// Thales Matheus Mendonça Santos - November 2025

use dicom::core::VR::*;

use crate::tags::{MacroLink, Modalities, TagDef};

const ALL: Modalities = Modalities::ALL;
const XR: Modalities = Modalities::XR;
const CT: Modalities = Modalities::CT;
const NM: Modalities = Modalities::NM;
const USND: Modalities = Modalities::US;
const MR: Modalities = Modalities::MR;
const XR_CT: Modalities = XR.with(CT);
const CT_MR: Modalities = CT.with(MR);
const CT_MR_NM: Modalities = CT_MR.with(NM);
const XR_CT_NM: Modalities = XR_CT.with(NM);
const CROSS_SECTIONAL: Modalities = CT_MR_NM.with(XR);
const MR_NM: Modalities = MR.with(NM);
const XR_NM: Modalities = XR.with(NM);
const XR_US: Modalities = XR.with(USND);
const XR_US_NM: Modalities = XR_US.with(NM);

// Functional group macros, by the sequence that introduces them.
const PIXEL_MEASURES: &[MacroLink] = &[MacroLink::shared(0x0028, 0x9110)];
const PLANE_POSITION: &[MacroLink] = &[MacroLink::per_frame(0x0020, 0x9113)];
const PLANE_ORIENTATION: &[MacroLink] = &[MacroLink::shared(0x0020, 0x9116)];
const FRAME_CONTENT: &[MacroLink] = &[MacroLink::per_frame(0x0020, 0x9111)];
const FRAME_ANATOMY: &[MacroLink] = &[MacroLink::shared(0x0020, 0x9071)];
const FRAME_VOI_LUT: &[MacroLink] = &[MacroLink::per_frame(0x0028, 0x9132)];
const PIXEL_VALUE_TRANSFORMATION: &[MacroLink] = &[MacroLink::shared(0x0028, 0x9145)];
const CARDIAC_SYNCHRONIZATION: &[MacroLink] = &[MacroLink::per_frame(0x0018, 0x9118)];
const IMAGE_FRAME_TYPE: &[MacroLink] = &[
    MacroLink::per_frame(0x0018, 0x9329),
    MacroLink::per_frame(0x0018, 0x9226),
];
const CT_ACQUISITION_TYPE: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9301)];
const CT_ACQUISITION_DETAILS: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9304)];
const CT_TABLE_DYNAMICS: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9308)];
const CT_RECONSTRUCTION: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9314)];
const CT_EXPOSURE: &[MacroLink] = &[MacroLink::per_frame(0x0018, 0x9321)];
const CT_XRAY_DETAILS: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9325)];
const MR_TIMING: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9112)];
const MR_ECHO: &[MacroLink] = &[MacroLink::per_frame(0x0018, 0x9114)];
const MR_MODIFIER: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9115)];
const MR_DIFFUSION: &[MacroLink] = &[MacroLink::per_frame(0x0018, 0x9117)];
const MR_AVERAGES: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9119)];
const MR_FOV_GEOMETRY: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9125)];
const MR_RECEIVE_COIL: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9042)];
const MR_TRANSMIT_COIL: &[MacroLink] = &[MacroLink::shared(0x0018, 0x9049)];
const NONE: &[MacroLink] = &[];

#[rustfmt::skip]
pub(crate) static ENTRIES: &[TagDef] = &[
    // SOP common, general study / series / equipment
    TagDef::new(0x0008, 0x0005, "SpecificCharacterSet", "Specific Character Set", CS, NONE, ALL),
    TagDef::new(0x0008, 0x0008, "ImageType", "Image Type", CS, NONE, ALL),
    TagDef::new(0x0008, 0x0012, "InstanceCreationDate", "Instance Creation Date", DA, NONE, ALL),
    TagDef::new(0x0008, 0x0016, "SOPClassUID", "SOP Class UID", UI, NONE, ALL),
    TagDef::new(0x0008, 0x0018, "SOPInstanceUID", "SOP Instance UID", UI, NONE, ALL),
    TagDef::new(0x0008, 0x0020, "StudyDate", "Study Date", DA, NONE, ALL),
    TagDef::new(0x0008, 0x0021, "SeriesDate", "Series Date", DA, NONE, ALL),
    TagDef::new(0x0008, 0x0022, "AcquisitionDate", "Acquisition Date", DA, NONE, ALL),
    TagDef::new(0x0008, 0x0023, "ContentDate", "Content Date", DA, NONE, ALL),
    TagDef::new(0x0008, 0x0030, "StudyTime", "Study Time", TM, NONE, ALL),
    TagDef::new(0x0008, 0x0031, "SeriesTime", "Series Time", TM, NONE, ALL),
    TagDef::new(0x0008, 0x0032, "AcquisitionTime", "Acquisition Time", TM, NONE, ALL),
    TagDef::new(0x0008, 0x0033, "ContentTime", "Content Time", TM, NONE, ALL),
    TagDef::new(0x0008, 0x0050, "AccessionNumber", "Accession Number", SH, NONE, ALL),
    TagDef::new(0x0008, 0x0060, "Modality", "Modality", CS, NONE, ALL),
    TagDef::new(0x0008, 0x0070, "Manufacturer", "Manufacturer", LO, NONE, ALL),
    TagDef::new(0x0008, 0x0080, "InstitutionName", "Institution Name", LO, NONE, ALL),
    TagDef::new(0x0008, 0x0090, "ReferringPhysicianName", "Referring Physician's Name", PN, NONE, ALL),
    TagDef::new(0x0008, 0x1030, "StudyDescription", "Study Description", LO, NONE, ALL),
    TagDef::new(0x0008, 0x103E, "SeriesDescription", "Series Description", LO, NONE, ALL),
    TagDef::new(0x0008, 0x1090, "ManufacturerModelName", "Manufacturer's Model Name", LO, NONE, ALL),
    TagDef::new(0x0008, 0x9007, "FrameType", "Frame Type", CS, IMAGE_FRAME_TYPE, CT_MR),
    // Patient
    TagDef::new(0x0010, 0x0010, "PatientName", "Patient's Name", PN, NONE, ALL),
    TagDef::new(0x0010, 0x0020, "PatientID", "Patient ID", LO, NONE, ALL),
    TagDef::new(0x0010, 0x0030, "PatientBirthDate", "Patient's Birth Date", DA, NONE, ALL),
    TagDef::new(0x0010, 0x0040, "PatientSex", "Patient's Sex", CS, NONE, ALL),
    TagDef::new(0x0010, 0x1010, "PatientAge", "Patient's Age", AS, NONE, ALL),
    TagDef::new(0x0010, 0x1020, "PatientSize", "Patient's Size", DS, NONE, ALL),
    TagDef::new(0x0010, 0x1030, "PatientWeight", "Patient's Weight", DS, NONE, ALL),
    // Acquisition
    TagDef::new(0x0018, 0x0015, "BodyPartExamined", "Body Part Examined", CS, NONE, ALL),
    TagDef::new(0x0018, 0x0020, "ScanningSequence", "Scanning Sequence", CS, NONE, MR),
    TagDef::new(0x0018, 0x0021, "SequenceVariant", "Sequence Variant", CS, NONE, MR),
    TagDef::new(0x0018, 0x0023, "MRAcquisitionType", "MR Acquisition Type", CS, NONE, MR),
    TagDef::new(0x0018, 0x0024, "SequenceName", "Sequence Name", SH, NONE, MR),
    TagDef::new(0x0018, 0x0050, "SliceThickness", "Slice Thickness", DS, PIXEL_MEASURES, CROSS_SECTIONAL),
    TagDef::new(0x0018, 0x0060, "KVP", "KVP", DS, CT_XRAY_DETAILS, XR_CT),
    TagDef::new(0x0018, 0x0080, "RepetitionTime", "Repetition Time", DS, MR_TIMING, MR),
    TagDef::new(0x0018, 0x0081, "EchoTime", "Echo Time", DS, NONE, MR),
    TagDef::new(0x0018, 0x0082, "InversionTime", "Inversion Time", DS, NONE, MR),
    TagDef::new(0x0018, 0x0083, "NumberOfAverages", "Number of Averages", DS, MR_AVERAGES, MR),
    TagDef::new(0x0018, 0x0084, "ImagingFrequency", "Imaging Frequency", DS, NONE, MR),
    TagDef::new(0x0018, 0x0086, "EchoNumbers", "Echo Number(s)", IS, NONE, MR),
    TagDef::new(0x0018, 0x0087, "MagneticFieldStrength", "Magnetic Field Strength", DS, NONE, MR),
    TagDef::new(0x0018, 0x0088, "SpacingBetweenSlices", "Spacing Between Slices", DS, PIXEL_MEASURES, CT_MR_NM),
    TagDef::new(0x0018, 0x0090, "DataCollectionDiameter", "Data Collection Diameter", DS, NONE, CT_MR),
    TagDef::new(0x0018, 0x0091, "EchoTrainLength", "Echo Train Length", IS, MR_TIMING, MR),
    TagDef::new(0x0018, 0x0093, "PercentSampling", "Percent Sampling", DS, MR_FOV_GEOMETRY, MR),
    TagDef::new(0x0018, 0x0094, "PercentPhaseFieldOfView", "Percent Phase Field of View", DS, MR_FOV_GEOMETRY, MR),
    TagDef::new(0x0018, 0x0095, "PixelBandwidth", "Pixel Bandwidth", DS, NONE, MR),
    TagDef::new(0x0018, 0x1020, "SoftwareVersions", "Software Versions", LO, NONE, ALL),
    TagDef::new(0x0018, 0x1030, "ProtocolName", "Protocol Name", LO, NONE, ALL),
    TagDef::new(0x0018, 0x1060, "TriggerTime", "Trigger Time", DS, NONE, MR_NM),
    TagDef::new(0x0018, 0x1063, "FrameTime", "Frame Time", DS, NONE, XR_US_NM),
    TagDef::new(0x0018, 0x1100, "ReconstructionDiameter", "Reconstruction Diameter", DS, CT_RECONSTRUCTION, CT),
    TagDef::new(0x0018, 0x1110, "DistanceSourceToDetector", "Distance Source to Detector", DS, NONE, XR_CT),
    TagDef::new(0x0018, 0x1111, "DistanceSourceToPatient", "Distance Source to Patient", DS, NONE, XR_CT),
    TagDef::new(0x0018, 0x1120, "GantryDetectorTilt", "Gantry/Detector Tilt", DS, NONE, CT),
    TagDef::new(0x0018, 0x1130, "TableHeight", "Table Height", DS, NONE, CT),
    TagDef::new(0x0018, 0x1150, "ExposureTime", "Exposure Time", IS, NONE, XR_CT),
    TagDef::new(0x0018, 0x1151, "XRayTubeCurrent", "X-Ray Tube Current", IS, NONE, XR_CT),
    TagDef::new(0x0018, 0x1152, "Exposure", "Exposure", IS, NONE, XR_CT),
    TagDef::new(0x0018, 0x1160, "FilterType", "Filter Type", SH, CT_XRAY_DETAILS, XR_CT),
    TagDef::new(0x0018, 0x1164, "ImagerPixelSpacing", "Imager Pixel Spacing", DS, NONE, XR),
    TagDef::new(0x0018, 0x1190, "FocalSpots", "Focal Spot(s)", DS, CT_XRAY_DETAILS, XR_CT),
    TagDef::new(0x0018, 0x1210, "ConvolutionKernel", "Convolution Kernel", SH, CT_RECONSTRUCTION, CT),
    TagDef::new(0x0018, 0x1242, "ActualFrameDuration", "Actual Frame Duration", IS, NONE, NM),
    TagDef::new(0x0018, 0x1250, "ReceiveCoilName", "Receive Coil Name", SH, MR_RECEIVE_COIL, MR),
    TagDef::new(0x0018, 0x1251, "TransmitCoilName", "Transmit Coil Name", SH, MR_TRANSMIT_COIL, MR),
    TagDef::new(0x0018, 0x1310, "AcquisitionMatrix", "Acquisition Matrix", US, NONE, MR),
    TagDef::new(0x0018, 0x1312, "InPlanePhaseEncodingDirection", "In-plane Phase Encoding Direction", CS, MR_FOV_GEOMETRY, MR),
    TagDef::new(0x0018, 0x1314, "FlipAngle", "Flip Angle", DS, MR_TIMING, MR),
    TagDef::new(0x0018, 0x1510, "PositionerPrimaryAngle", "Positioner Primary Angle", DS, NONE, XR_NM),
    TagDef::new(0x0018, 0x1511, "PositionerSecondaryAngle", "Positioner Secondary Angle", DS, NONE, XR_NM),
    TagDef::new(0x0018, 0x5010, "TransducerData", "Transducer Data", LO, NONE, USND),
    TagDef::new(0x0018, 0x5022, "MechanicalIndex", "Mechanical Index", DS, NONE, USND),
    TagDef::new(0x0018, 0x5024, "BoneThermalIndex", "Bone Thermal Index", DS, NONE, USND),
    TagDef::new(0x0018, 0x5026, "CranialThermalIndex", "Cranial Thermal Index", DS, NONE, USND),
    TagDef::new(0x0018, 0x5027, "SoftTissueThermalIndex", "Soft Tissue Thermal Index", DS, NONE, USND),
    TagDef::new(0x0018, 0x5100, "PatientPosition", "Patient Position", CS, NONE, CT_MR_NM),
    TagDef::new(0x0018, 0x5101, "ViewPosition", "View Position", CS, NONE, XR),
    TagDef::new(0x0018, 0x6011, "SequenceOfUltrasoundRegions", "Sequence of Ultrasound Regions", SQ, NONE, USND),
    TagDef::new(0x0018, 0x9004, "ContentQualification", "Content Qualification", CS, NONE, CT_MR),
    TagDef::new(0x0018, 0x9005, "PulseSequenceName", "Pulse Sequence Name", SH, NONE, MR),
    TagDef::new(0x0018, 0x9009, "InversionRecovery", "Inversion Recovery", CS, MR_MODIFIER, MR),
    TagDef::new(0x0018, 0x9042, "MRReceiveCoilSequence", "MR Receive Coil Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9049, "MRTransmitCoilSequence", "MR Transmit Coil Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9058, "MRAcquisitionFrequencyEncodingSteps", "MR Acquisition Frequency Encoding Steps", US, MR_FOV_GEOMETRY, MR),
    TagDef::new(0x0018, 0x9074, "FrameAcquisitionDateTime", "Frame Acquisition DateTime", DT, FRAME_CONTENT, ALL),
    TagDef::new(0x0018, 0x9075, "DiffusionDirectionality", "Diffusion Directionality", CS, MR_DIFFUSION, MR),
    TagDef::new(0x0018, 0x9079, "InversionTimes", "Inversion Times", FD, MR_MODIFIER, MR),
    TagDef::new(0x0018, 0x9082, "EffectiveEchoTime", "Effective Echo Time", FD, MR_ECHO, MR),
    TagDef::new(0x0018, 0x9087, "DiffusionBValue", "Diffusion b-value", FD, MR_DIFFUSION, MR),
    TagDef::new(0x0018, 0x9112, "MRTimingAndRelatedParametersSequence", "MR Timing and Related Parameters Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9114, "MREchoSequence", "MR Echo Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9115, "MRModifierSequence", "MR Modifier Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9117, "MRDiffusionSequence", "MR Diffusion Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9118, "CardiacSynchronizationSequence", "Cardiac Synchronization Sequence", SQ, NONE, CT_MR),
    TagDef::new(0x0018, 0x9119, "MRAveragesSequence", "MR Averages Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9125, "MRFOVGeometrySequence", "MR FOV/Geometry Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9151, "FrameReferenceDateTime", "Frame Reference DateTime", DT, FRAME_CONTENT, ALL),
    TagDef::new(0x0018, 0x9220, "FrameAcquisitionDuration", "Frame Acquisition Duration", FD, FRAME_CONTENT, ALL),
    TagDef::new(0x0018, 0x9226, "MRImageFrameTypeSequence", "MR Image Frame Type Sequence", SQ, NONE, MR),
    TagDef::new(0x0018, 0x9231, "MRAcquisitionPhaseEncodingStepsInPlane", "MR Acquisition Phase Encoding Steps in-plane", US, MR_FOV_GEOMETRY, MR),
    TagDef::new(0x0018, 0x9301, "CTAcquisitionTypeSequence", "CT Acquisition Type Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9302, "AcquisitionType", "Acquisition Type", CS, CT_ACQUISITION_TYPE, CT),
    TagDef::new(0x0018, 0x9304, "CTAcquisitionDetailsSequence", "CT Acquisition Details Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9305, "RevolutionTime", "Revolution Time", FD, CT_ACQUISITION_DETAILS, CT),
    TagDef::new(0x0018, 0x9306, "SingleCollimationWidth", "Single Collimation Width", FD, CT_ACQUISITION_DETAILS, CT),
    TagDef::new(0x0018, 0x9307, "TotalCollimationWidth", "Total Collimation Width", FD, CT_ACQUISITION_DETAILS, CT),
    TagDef::new(0x0018, 0x9308, "CTTableDynamicsSequence", "CT Table Dynamics Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9311, "SpiralPitchFactor", "Spiral Pitch Factor", FD, CT_TABLE_DYNAMICS, CT),
    TagDef::new(0x0018, 0x9314, "CTReconstructionSequence", "CT Reconstruction Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9315, "ReconstructionAlgorithm", "Reconstruction Algorithm", CS, CT_RECONSTRUCTION, CT),
    TagDef::new(0x0018, 0x9321, "CTExposureSequence", "CT Exposure Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9325, "CTXRayDetailsSequence", "CT X-Ray Details Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9328, "ExposureTimeInms", "Exposure Time in ms", FD, CT_EXPOSURE, XR_CT),
    TagDef::new(0x0018, 0x9329, "CTImageFrameTypeSequence", "CT Image Frame Type Sequence", SQ, NONE, CT),
    TagDef::new(0x0018, 0x9330, "XRayTubeCurrentInmA", "X-Ray Tube Current in mA", FD, CT_EXPOSURE, XR_CT),
    TagDef::new(0x0018, 0x9332, "ExposureInmAs", "Exposure in mAs", FD, CT_EXPOSURE, XR_CT),
    TagDef::new(0x0018, 0x9345, "CTDIvol", "CTDIvol", FD, CT_EXPOSURE, CT),
    // Relationship, plane and frame content
    TagDef::new(0x0020, 0x000D, "StudyInstanceUID", "Study Instance UID", UI, NONE, ALL),
    TagDef::new(0x0020, 0x000E, "SeriesInstanceUID", "Series Instance UID", UI, NONE, ALL),
    TagDef::new(0x0020, 0x0010, "StudyID", "Study ID", SH, NONE, ALL),
    TagDef::new(0x0020, 0x0011, "SeriesNumber", "Series Number", IS, NONE, ALL),
    TagDef::new(0x0020, 0x0012, "AcquisitionNumber", "Acquisition Number", IS, NONE, ALL),
    TagDef::new(0x0020, 0x0013, "InstanceNumber", "Instance Number", IS, NONE, ALL),
    TagDef::new(0x0020, 0x0020, "PatientOrientation", "Patient Orientation", CS, NONE, XR_US),
    TagDef::new(0x0020, 0x0032, "ImagePositionPatient", "Image Position (Patient)", DS, PLANE_POSITION, CT_MR_NM),
    TagDef::new(0x0020, 0x0037, "ImageOrientationPatient", "Image Orientation (Patient)", DS, PLANE_ORIENTATION, CT_MR_NM),
    TagDef::new(0x0020, 0x0052, "FrameOfReferenceUID", "Frame of Reference UID", UI, NONE, CT_MR_NM.with(USND)),
    TagDef::new(0x0020, 0x0060, "Laterality", "Laterality", CS, NONE, ALL),
    TagDef::new(0x0020, 0x0100, "TemporalPositionIdentifier", "Temporal Position Identifier", IS, NONE, MR),
    TagDef::new(0x0020, 0x0105, "NumberOfTemporalPositions", "Number of Temporal Positions", IS, NONE, MR),
    TagDef::new(0x0020, 0x1041, "SliceLocation", "Slice Location", DS, NONE, CT_MR),
    TagDef::new(0x0020, 0x9056, "StackID", "Stack ID", SH, FRAME_CONTENT, CT_MR_NM),
    TagDef::new(0x0020, 0x9057, "InStackPositionNumber", "In-Stack Position Number", UL, FRAME_CONTENT, CT_MR_NM),
    TagDef::new(0x0020, 0x9071, "FrameAnatomySequence", "Frame Anatomy Sequence", SQ, NONE, ALL),
    TagDef::new(0x0020, 0x9072, "FrameLaterality", "Frame Laterality", CS, FRAME_ANATOMY, ALL),
    TagDef::new(0x0020, 0x9111, "FrameContentSequence", "Frame Content Sequence", SQ, NONE, ALL),
    TagDef::new(0x0020, 0x9113, "PlanePositionSequence", "Plane Position Sequence", SQ, NONE, CROSS_SECTIONAL),
    TagDef::new(0x0020, 0x9116, "PlaneOrientationSequence", "Plane Orientation Sequence", SQ, NONE, CROSS_SECTIONAL),
    TagDef::new(0x0020, 0x9128, "TemporalPositionIndex", "Temporal Position Index", UL, FRAME_CONTENT, CT_MR_NM),
    TagDef::new(0x0020, 0x9153, "NominalCardiacTriggerDelayTime", "Nominal Cardiac Trigger Delay Time", FD, CARDIAC_SYNCHRONIZATION, CT_MR),
    TagDef::new(0x0020, 0x9156, "FrameAcquisitionNumber", "Frame Acquisition Number", US, FRAME_CONTENT, ALL),
    TagDef::new(0x0020, 0x9157, "DimensionIndexValues", "Dimension Index Values", UL, FRAME_CONTENT, ALL),
    // Image pixel and presentation
    TagDef::new(0x0028, 0x0002, "SamplesPerPixel", "Samples per Pixel", US, NONE, ALL),
    TagDef::new(0x0028, 0x0004, "PhotometricInterpretation", "Photometric Interpretation", CS, NONE, ALL),
    TagDef::new(0x0028, 0x0006, "PlanarConfiguration", "Planar Configuration", US, NONE, ALL),
    TagDef::new(0x0028, 0x0008, "NumberOfFrames", "Number of Frames", IS, NONE, ALL),
    TagDef::new(0x0028, 0x0009, "FrameIncrementPointer", "Frame Increment Pointer", AT, NONE, XR_US_NM),
    TagDef::new(0x0028, 0x0010, "Rows", "Rows", US, NONE, ALL),
    TagDef::new(0x0028, 0x0011, "Columns", "Columns", US, NONE, ALL),
    TagDef::new(0x0028, 0x0030, "PixelSpacing", "Pixel Spacing", DS, PIXEL_MEASURES, ALL),
    TagDef::new(0x0028, 0x0100, "BitsAllocated", "Bits Allocated", US, NONE, ALL),
    TagDef::new(0x0028, 0x0101, "BitsStored", "Bits Stored", US, NONE, ALL),
    TagDef::new(0x0028, 0x0102, "HighBit", "High Bit", US, NONE, ALL),
    TagDef::new(0x0028, 0x0103, "PixelRepresentation", "Pixel Representation", US, NONE, ALL),
    TagDef::new(0x0028, 0x0120, "PixelPaddingValue", "Pixel Padding Value", US, NONE, XR_CT),
    TagDef::new(0x0028, 0x1050, "WindowCenter", "Window Center", DS, FRAME_VOI_LUT, ALL),
    TagDef::new(0x0028, 0x1051, "WindowWidth", "Window Width", DS, FRAME_VOI_LUT, ALL),
    TagDef::new(0x0028, 0x1052, "RescaleIntercept", "Rescale Intercept", DS, PIXEL_VALUE_TRANSFORMATION, XR_CT_NM),
    TagDef::new(0x0028, 0x1053, "RescaleSlope", "Rescale Slope", DS, PIXEL_VALUE_TRANSFORMATION, XR_CT_NM),
    TagDef::new(0x0028, 0x1054, "RescaleType", "Rescale Type", LO, PIXEL_VALUE_TRANSFORMATION, XR_CT_NM),
    TagDef::new(0x0028, 0x1055, "WindowCenterWidthExplanation", "Window Center & Width Explanation", LO, FRAME_VOI_LUT, ALL),
    TagDef::new(0x0028, 0x9110, "PixelMeasuresSequence", "Pixel Measures Sequence", SQ, NONE, ALL),
    TagDef::new(0x0028, 0x9132, "FrameVOILUTSequence", "Frame VOI LUT Sequence", SQ, NONE, ALL),
    TagDef::new(0x0028, 0x9145, "PixelValueTransformationSequence", "Pixel Value Transformation Sequence", SQ, NONE, XR_CT_NM),
    // Nuclear medicine
    TagDef::new(0x0054, 0x0011, "NumberOfEnergyWindows", "Number of Energy Windows", US, NONE, NM),
    TagDef::new(0x0054, 0x0012, "EnergyWindowInformationSequence", "Energy Window Information Sequence", SQ, NONE, NM),
    TagDef::new(0x0054, 0x0016, "RadiopharmaceuticalInformationSequence", "Radiopharmaceutical Information Sequence", SQ, NONE, NM),
    TagDef::new(0x0054, 0x0021, "NumberOfDetectors", "Number of Detectors", US, NONE, NM),
    TagDef::new(0x0054, 0x0053, "NumberOfFramesInRotation", "Number of Frames in Rotation", US, NONE, NM),
    TagDef::new(0x0054, 0x0081, "NumberOfSlices", "Number of Slices", US, NONE, NM),
    TagDef::new(0x0054, 0x1001, "Units", "Units", CS, NONE, NM),
    TagDef::new(0x0054, 0x1002, "CountsSource", "Counts Source", CS, NONE, NM),
    // Multi-frame functional groups and pixel data
    TagDef::new(0x5200, 0x9229, "SharedFunctionalGroupsSequence", "Shared Functional Groups Sequence", SQ, NONE, ALL),
    TagDef::new(0x5200, 0x9230, "PerFrameFunctionalGroupsSequence", "Per-frame Functional Groups Sequence", SQ, NONE, ALL),
    TagDef::new(0x7FE0, 0x0010, "PixelData", "Pixel Data", OW, NONE, ALL),
];
