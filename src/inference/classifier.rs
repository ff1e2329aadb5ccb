//! Map model scores onto the fixed species list.

use crate::error::{Error, Result};
use crate::inference::SpeciesModel;
use crate::photo::ImageTensor;
use crate::sighting::Species;
use tracing::debug;

/// Outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Predicted species.
    pub species: Species,
    /// Index of the winning score.
    pub index: usize,
    /// The winning score as reported by the model.
    pub confidence: f32,
}

/// Index of the largest score, first one on ties.
///
/// NaN scores never win. Returns `None` when no finite score exists.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (i, &s)| match best {
            Some((_, b)) if s <= b => best,
            _ => Some((i, s)),
        })
        .map(|(i, _)| i)
}

/// Classifier that turns a model's score vector into a [`Species`].
pub struct FishClassifier<M> {
    model: M,
}

impl<M: SpeciesModel> FishClassifier<M> {
    /// Wrap a model.
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// Classify a preprocessed image.
    pub fn classify(&mut self, input: &ImageTensor) -> Result<Classification> {
        let scores = self.model.predict(input)?;
        classify_scores(&scores)
    }
}

/// Map a score vector onto the species list by position.
pub fn classify_scores(scores: &[f32]) -> Result<Classification> {
    if scores.len() != Species::COUNT {
        return Err(Error::UnexpectedOutputShape {
            expected: Species::COUNT,
            actual: scores.len(),
        });
    }

    let index = argmax(scores).ok_or_else(|| Error::Inference {
        reason: "model returned no usable scores".to_string(),
    })?;

    let species = Species::from_index(index).ok_or_else(|| Error::Internal {
        message: format!("argmax index {index} outside label list"),
    })?;

    debug!("Scores: {scores:?}, winner: {species} ({index})");

    Ok(Classification {
        species,
        index,
        confidence: scores[index],
    })
}
