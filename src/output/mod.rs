//! Output renderers: marker map, gallery page, JSON and CSV.

mod csv;
mod gallery;
mod json;
mod map;
mod progress;
mod report;
mod writer;

pub use csv::render_csv;
pub use gallery::{list_images, render_gallery};
pub use json::render_json;
pub use map::{MapView, Marker};
pub use progress::{clear_progress, create_spinner, finish_progress};
pub use report::{SightingReport, SightingRow};
pub use writer::{escape_html, write_output};
