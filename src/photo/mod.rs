//! Photo decoding and model input preparation.

mod decode;
mod preprocess;

pub use decode::{check_image, decode_image, is_supported_image};
pub use preprocess::{ImageTensor, preprocess};
