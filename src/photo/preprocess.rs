//! Resize and scale images into the classifier's input tensor.

use crate::constants::model::{CHANNELS, PIXEL_SCALE};
use image::DynamicImage;
use image::imageops::{self, FilterType};

/// Model input for a single image in NHWC layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    /// `[batch, height, width, channels]`, batch is always 1.
    pub shape: [usize; 4],
    /// Row-major pixel data, every value in `[0, 1]`.
    pub data: Vec<f32>,
}

impl ImageTensor {
    /// Total number of elements implied by the shape.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the tensor has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert an image into a `[1, size, size, 3]` tensor scaled to `[0, 1]`.
///
/// The image is converted to RGB (alpha dropped) and resized exactly to
/// `size x size` with a bicubic filter; aspect ratio is not preserved.
pub fn preprocess(image: &DynamicImage, size: u32) -> ImageTensor {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, size, size, FilterType::CatmullRom);

    let data: Vec<f32> = resized
        .pixels()
        .flat_map(|p| p.0)
        .map(|v| f32::from(v) / PIXEL_SCALE)
        .collect();

    let side = size as usize;
    ImageTensor {
        shape: [1, side, side, CHANNELS],
        data,
    }
}
