//! Inference module for fish species classification.

mod classifier;
mod model;
mod provider;

pub use classifier::{Classification, FishClassifier, argmax, classify_scores};
pub use model::{OnnxModel, SpeciesModel};
pub use provider::{ProviderSelection, select_providers};
