//! User interface module - operator-facing diagnostics.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reporting of whole cut outcomes

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_marker_document, display_status, display_success,
    display_version_change, format_outcome_summary,
};

use crate::updater::{CutOutcome, DevReset};

/// Prints the dev marker reset that opens a GA cut.
///
/// Called as soon as the reset is done, so it shows up even when the
/// release step that follows fails.
pub fn report_dev_reset(reset: &DevReset) {
    let verb = if reset.written {
        "reset"
    } else {
        "would be reset"
    };
    display_status(&format!("Dev marker {} to {}", verb, reset.baseline));
    display_marker_document(&reset.document);
}

/// Prints every step of a finished cut.
///
/// Shows the version change, then the dev marker document for release
/// candidates, then a one-line summary of which files were touched. The
/// dev reset of a GA cut is reported earlier by [`report_dev_reset`].
pub fn report_outcome(outcome: &CutOutcome) {
    match outcome {
        CutOutcome::ReleaseCandidate {
            previous,
            next,
            document,
            ..
        } => {
            display_status(&format!("Next dev version: {}", next));
            display_version_change(&previous.to_string(), &next.to_string());
            display_marker_document(document);
        }
        CutOutcome::Release { previous, next, .. } => {
            display_status(&format!("Next release version: {}", next));
            display_version_change(&previous.to_string(), &next.to_string());
        }
    }

    if !outcome.written() {
        display_status("Dry run: no files were modified");
    }
    display_success(&format_outcome_summary(outcome));
}
