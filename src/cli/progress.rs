//! CLI-specific progress handling for scenariq
//!
//! Shows a spinner on stderr while a search is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner for CLI display
pub fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Failed to create spinner style"),
    );
    pb
}

/// Spinner shown while the routing service is queried
pub struct SearchSpinner {
    pub pb: ProgressBar,
}

impl SearchSpinner {
    /// Create a spinner with `message` and start ticking
    pub fn start(message: &str) -> Self {
        let pb = create_spinner();
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}
