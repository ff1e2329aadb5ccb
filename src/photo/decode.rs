//! Image decoding using the `image` crate.

use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;
use tracing::debug;

/// Check whether a path has one of the accepted image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Ensure `path` is an existing file with an accepted image extension.
pub fn check_image(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    if !is_supported_image(path) {
        return Err(Error::UnsupportedImageFormat {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Decode an uploaded image.
///
/// Accepts JPEG, PNG, GIF (first frame) and BMP files.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    check_image(path)?;

    let image = image::open(path).map_err(|e| Error::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (width, height) = image.dimensions();
    debug!("Decoded {} ({width}x{height})", path.display());

    Ok(image)
}
