//! CLI-specific utilities for scenariq
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod progress;
pub mod render;

pub use progress::SearchSpinner;
pub use render::render_results;
