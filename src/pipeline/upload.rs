//! Photo upload: classify and record.

use crate::error::Result;
use crate::inference::{Classification, FishClassifier, SpeciesModel};
use crate::output::{clear_progress, create_spinner, finish_progress};
use crate::photo::{decode_image, preprocess};
use crate::sighting::{Coordinates, Sighting};
use crate::store::SightingStore;
use chrono::{Local, SubsecRound};
use std::path::Path;
use tracing::info;

/// Settings for one upload.
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    /// Side length of the model input.
    pub input_size: u32,
    /// Show a spinner while predicting.
    pub progress: bool,
}

/// What an upload produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    /// The stored sighting.
    pub sighting: Sighting,
    /// Classifier output behind it.
    pub classification: Classification,
}

/// Classify the photo at `image_path` and store the sighting at `viewer`.
///
/// Nothing is written if decoding or classification fails.
pub async fn upload_sighting<M: SpeciesModel>(
    image_path: &Path,
    viewer: Coordinates,
    classifier: &mut FishClassifier<M>,
    store: &SightingStore,
    options: UploadOptions,
) -> Result<UploadOutcome> {
    info!("Processing: {}", image_path.display());

    let image = decode_image(image_path)?;
    let input = preprocess(&image, options.input_size);

    let spinner = create_spinner("Predicting...", options.progress);
    let classification = match classifier.classify(&input) {
        Ok(classification) => {
            finish_progress(spinner, &format!("Predicted {}", classification.species));
            classification
        }
        Err(e) => {
            clear_progress(spinner);
            return Err(e);
        }
    };

    info!(
        "Predicted {} (confidence {:.3})",
        classification.species, classification.confidence
    );

    let observed_at = Local::now().naive_local().trunc_subsecs(0);
    let sighting = Sighting::new(classification.species, viewer, observed_at);
    store.insert(&sighting).await?;

    Ok(UploadOutcome {
        sighting,
        classification,
    })
}
