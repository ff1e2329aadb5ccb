//! Pretrained model backends.

use crate::config::InferenceDevice;
use crate::error::{Error, Result};
use crate::inference::provider::select_providers;
use crate::photo::ImageTensor;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;
use tracing::{debug, info};

/// A model that scores one preprocessed image.
pub trait SpeciesModel {
    /// Return the raw score vector, one entry per label.
    fn predict(&mut self, input: &ImageTensor) -> Result<Vec<f32>>;
}

/// ONNX Runtime session wrapping the exported fish classifier.
pub struct OnnxModel {
    session: Session,
}

impl OnnxModel {
    /// Load an ONNX model from disk.
    pub fn load(path: &Path, device: InferenceDevice) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ModelFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let selection = select_providers(device);

        let session = Session::builder()
            .and_then(|builder| Ok(builder.with_execution_providers(selection.providers)?))
            .and_then(|mut builder| builder.commit_from_file(path))
            .map_err(|e| Error::ClassifierBuild {
                reason: e.to_string(),
            })?;

        info!(
            "Loaded model: {}, device: {}",
            path.display(),
            selection.label
        );

        Ok(Self { session })
    }
}

impl SpeciesModel for OnnxModel {
    fn predict(&mut self, input: &ImageTensor) -> Result<Vec<f32>> {
        let tensor = Tensor::from_array((input.shape, input.data.clone())).map_err(|e| {
            Error::Inference {
                reason: e.to_string(),
            }
        })?;

        let outputs = self
            .session
            .run(ort::inputs![tensor])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let (shape, scores) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        debug!("Model output shape: {shape:?}");
        Ok(scores.to_vec())
    }
}
