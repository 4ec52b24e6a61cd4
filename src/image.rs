//
// image.rs
// Dicom-Catalog-rs
//
// Pixel decoding for DICOM frames and opening of general (non-DICOM) images.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dicom::object::open_file;
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder, VoiLutOption, WindowLevel};
use image::DynamicImage;

use crate::error::{DecodeError, FrameIndexError, OpenError};
use crate::instance::Instance;

/// Pixel collaborator: decodes one frame of an instance.
pub trait FrameDecoder: Send + Sync {
    fn decode_frame(&self, instance: &Instance, frame: usize) -> Result<DynamicImage, DecodeError>;
}

/// Options controlling how pixel data is converted into a displayable image.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub window: Option<WindowLevel>,
    pub normalize: bool,
    pub disable_modality_lut: bool,
    pub disable_voi_lut: bool,
    pub force_8bit: bool,
    pub force_16bit: bool,
}

/// Decodes frames with dicom-pixeldata, reopening the instance's file on demand.
#[derive(Debug, Clone, Default)]
pub struct DicomFrameDecoder {
    options: DecodeOptions,
}

impl DicomFrameDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        DicomFrameDecoder { options }
    }
}

impl FrameDecoder for DicomFrameDecoder {
    fn decode_frame(&self, instance: &Instance, frame: usize) -> Result<DynamicImage, DecodeError> {
        let path = instance.path();
        let obj = open_file(path).map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let index = u32::try_from(frame).map_err(|_| FrameIndexError {
            index: frame,
            count: instance.frame_count(),
        })?;
        // Only the requested frame is decoded; it becomes frame 0 of the result.
        let decoded = obj
            .decode_pixel_data_frame(index)
            .map_err(|source| DecodeError::Pixels {
                path: path.to_path_buf(),
                source,
            })?;

        decoded
            .to_dynamic_image_with_options(0, &build_convert_options(&self.options))
            .map_err(|source| DecodeError::Pixels {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn build_convert_options(options: &DecodeOptions) -> ConvertOptions {
    // Start with default options and opt out of LUTs/VOI transforms depending on flags.
    let mut convert = ConvertOptions::new();

    if options.disable_modality_lut {
        convert = convert.with_modality_lut(ModalityLutOption::None);
    }

    if options.disable_voi_lut {
        convert = convert.with_voi_lut(VoiLutOption::Identity);
    } else if let Some(window) = &options.window {
        convert = convert.with_voi_lut(VoiLutOption::Custom(*window));
    } else if options.normalize {
        convert = convert.with_voi_lut(VoiLutOption::Normalize);
    }

    if options.force_16bit {
        convert = convert.force_16bit();
    } else if options.force_8bit {
        convert = convert.force_8bit();
    }

    convert
}

/// A non-DICOM image held by the manager, identified by its path.
#[derive(Debug, Clone)]
pub struct GeneralImage {
    path: PathBuf,
    image: Arc<DynamicImage>,
}

impl GeneralImage {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        GeneralImage {
            path: path.into(),
            image: Arc::new(image),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// General-image collaborator.
pub trait ImageOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<DynamicImage, OpenError>;
}

/// Opens any format the `image` crate recognises.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageOpener;

impl ImageOpener for FileImageOpener {
    fn open(&self, path: &Path) -> Result<DynamicImage, OpenError> {
        image::open(path).map_err(|source| OpenError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_reports_unreadable_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.png");
        let err = FileImageOpener.open(&path).unwrap_err();
        assert_eq!(err.path, path);
    }
}
