//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::updater::CutOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the version change made by a cut.
pub fn display_version_change(from: &str, to: &str) {
    println!("{}", format_version_change(from, to));
}

/// Display the YAML document written to the dev marker.
pub fn display_marker_document(document: &str) {
    println!("{}", style("Dev marker contents:").bold());
    for line in document.lines() {
        println!("  {}", line);
    }
}

/// Builds the "From/To" block shown after a bump.
pub fn format_version_change(from: &str, to: &str) -> String {
    format!(
        "  From: {}\n  To:   {}",
        style(from).red(),
        style(to).green()
    )
}

/// One-line summary of a finished cut, for the final status line.
pub fn format_outcome_summary(outcome: &CutOutcome) -> String {
    let verb = if outcome.written() {
        "wrote"
    } else {
        "would write"
    };

    match outcome {
        CutOutcome::ReleaseCandidate {
            next, dev_marker, ..
        } => format!("{} {} to {}", verb, next, dev_marker.display()),
        CutOutcome::Release {
            next,
            dev_baseline,
            dev_marker,
            release_marker,
            ..
        } => format!(
            "{} {} to {} and {} to {}",
            verb,
            dev_baseline,
            dev_marker.display(),
            next,
            release_marker.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DevTag, ReleaseTag};
    use std::path::PathBuf;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_format_version_change_contains_both_versions() {
        let text = format_version_change("dev.5", "dev.6");
        assert!(text.contains("dev.5"));
        assert!(text.contains("dev.6"));
    }

    #[test]
    fn test_summary_release_candidate() {
        let outcome = CutOutcome::ReleaseCandidate {
            previous: DevTag::new(5),
            next: DevTag::new(6),
            dev_marker: PathBuf::from("hack/DEV_BUILD_VERSION.yaml"),
            document: "version: dev.6\n".to_string(),
            written: true,
        };
        assert_eq!(
            format_outcome_summary(&outcome),
            "wrote dev.6 to hack/DEV_BUILD_VERSION.yaml"
        );
    }

    #[test]
    fn test_summary_release_dry_run() {
        let outcome = CutOutcome::Release {
            previous: ReleaseTag::new("1", 2, "3"),
            next: ReleaseTag::new("1", 3, "0"),
            dev_baseline: DevTag::baseline(),
            dev_marker: PathBuf::from("dev.yaml"),
            release_marker: PathBuf::from("NEW"),
            written: false,
        };
        assert_eq!(
            format_outcome_summary(&outcome),
            "would write dev.1 to dev.yaml and 1.3.0 to NEW"
        );
    }
}
