//! Progress indicator utilities.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a step of unknown length.
pub fn create_spinner(message: &str, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Finish a progress indicator with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Remove a progress indicator without leaving a line behind.
pub fn clear_progress(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_none() {
        assert!(create_spinner("Predicting...", false).is_none());
    }

    #[test]
    fn test_spinner_carries_message() {
        let pb = create_spinner("Predicting...", true).unwrap();
        assert_eq!(pb.message(), "Predicting...");
        finish_progress(Some(pb), "done");
        clear_progress(None);
    }
}
