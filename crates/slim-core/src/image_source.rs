use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::error::{Result, SlimError};

/// The decoded image being viewed.
///
/// Immutable after load and owned by the viewer session for its whole
/// lifetime. Pixels are stored as 8-bit RGBA regardless of the file format.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: RgbaImage,
    path: Option<PathBuf>,
}

impl SourceImage {
    /// Wrap an already decoded buffer. Fails on zero-sized images.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(SlimError::InvalidDimensions { width, height });
        }
        Ok(Self { pixels, path: None })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Window title in the form `"<file name> - SLIM"`.
    pub fn title(&self) -> String {
        let name = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        format!("{name} - SLIM")
    }
}

/// Decode an image file of any format the `image` crate recognises.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let decoded = image::open(path).map_err(|source| SlimError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let mut image = SourceImage::from_rgba(decoded.to_rgba8())?;
    image.path = Some(path.to_path_buf());

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}
