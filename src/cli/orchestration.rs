//! Main workflow orchestration logic
//!
//! Keeps flag parsing in main.rs separate from running a cut, so the
//! workflow can be called programmatically without depending on clap.

use crate::cli::Args;
use crate::config::Config;
use crate::error::{Result, TagError};
use crate::ui;
use crate::updater::{CutOutcome, TagUpdater};

/// Arguments for the cut workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunArgs {
    /// Cut a GA release instead of a release candidate
    pub release: bool,

    /// Current release tag, required when `release` is set
    pub tag: Option<String>,

    /// Preview mode - read and compute, write nothing
    pub dry_run: bool,
}

impl From<&Args> for RunArgs {
    fn from(args: &Args) -> Self {
        RunArgs {
            release: args.release,
            tag: args.tag.clone(),
            dry_run: args.dry_run,
        }
    }
}

/// Runs one cut against the marker files named in `config`.
///
/// - release mode: reset the dev marker, then record the next GA version
/// - otherwise: bump the dev counter
///
/// Prints a status line for each step as it completes; the caller reports
/// the final outcome.
pub fn run_workflow(args: &RunArgs, config: Config) -> Result<CutOutcome> {
    let updater = TagUpdater::new(config).dry_run(args.dry_run);

    if args.release {
        let tag = match args.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(TagError::MissingTag),
        };

        ui::display_status("Cutting GA release, so resetting");
        let reset = updater.reset_dev()?;
        ui::report_dev_reset(&reset);
        updater.record_release(tag, reset)
    } else {
        ui::display_status("Cutting RC release, so bumping");
        updater.cut_release_candidate()
    }
}
