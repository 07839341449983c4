//! Common utilities and helpers

pub mod logging;
pub mod path;
pub mod time;

pub use path::trimmed_output_path;
pub use time::{format_elapsed, PhaseTimer};
