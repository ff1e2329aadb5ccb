//! Upload and find workflows.

mod find;
mod upload;

pub use find::{FindOutcome, find_sightings};
pub use upload::{UploadOptions, UploadOutcome, upload_sighting};
