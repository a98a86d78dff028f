use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};
use thiserror::Error;

/// Failure to store a finished image
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Consumer of finished images, called once per rendered rule
pub trait ImageSink: Send + Sync {
    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), SinkError>;
}

/// Writes PNG files to disk
#[derive(Clone, Copy, Debug, Default)]
pub struct PngFileSink {
    /// Create missing parent directories before writing
    pub create_dirs: bool,
}

impl PngFileSink {
    pub const fn new(create_dirs: bool) -> Self {
        Self { create_dirs }
    }
}

impl ImageSink for PngFileSink {
    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        };

        if self.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
        PngEncoder::new(&mut out)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| SinkError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        // File handle is released here, one per job
        out.flush().map_err(io_err)
    }
}
