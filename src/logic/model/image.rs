//! Leaf image preprocessing
//!
//! Decode -> resize to LEAF_INPUT_SIZE square (bilinear) -> NHWC f32 in [0, 1].
//! Channels are emitted B, G, R: the leaf model was trained on OpenCV reads.

use ::image::{imageops::FilterType, DynamicImage};
use ndarray::{Array4, ArrayD};

use super::inference::InferenceError;
use crate::constants::LEAF_INPUT_SIZE;

/// Decode an uploaded image, sniffing the format from its bytes
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, InferenceError> {
    ::image::load_from_memory(bytes)
        .map_err(|e| InferenceError::Input(format!("Failed to read image: {}", e)))
}

/// Build the `[1, size, size, 3]` model input
pub fn to_tensor(img: &DynamicImage, size: u32) -> ArrayD<f32> {
    let rgb = img.resize_exact(size, size, FilterType::Triangle).to_rgb8();
    let edge = size as usize;

    let mut tensor = Array4::<f32>::zeros((1, edge, edge, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (x, y) = (x as usize, y as usize);
        tensor[[0, y, x, 0]] = b as f32 / 255.0;
        tensor[[0, y, x, 1]] = g as f32 / 255.0;
        tensor[[0, y, x, 2]] = r as f32 / 255.0;
    }

    tensor.into_dyn()
}

/// Decode and build the leaf model input in one step
pub fn preprocess_leaf(bytes: &[u8]) -> Result<ArrayD<f32>, InferenceError> {
    let img = decode(bytes)?;
    Ok(to_tensor(&img, LEAF_INPUT_SIZE))
}
