pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod marker;
pub mod ui;
pub mod updater;

pub use error::{Result, TagError};
pub use updater::{CutOutcome, DevReset, TagUpdater};
