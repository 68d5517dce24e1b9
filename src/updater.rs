//! The version tag updater.
//!
//! Two linear operations, each read → parse → increment → format → write:
//! - [`TagUpdater::cut_release_candidate`] bumps the dev counter in place
//! - [`TagUpdater::cut_release`] resets the dev counter and records the next GA version

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{DevTag, ReleaseTag};
use crate::error::Result;
use crate::marker;

/// What a cut changed (or would change, in dry-run mode)
#[derive(Debug, Clone, PartialEq)]
pub enum CutOutcome {
    /// Dev counter was bumped
    ReleaseCandidate {
        previous: DevTag,
        next: DevTag,
        dev_marker: PathBuf,
        /// YAML document written to the dev marker
        document: String,
        written: bool,
    },
    /// Dev counter was reset and the next GA version recorded
    Release {
        previous: ReleaseTag,
        next: ReleaseTag,
        dev_baseline: DevTag,
        dev_marker: PathBuf,
        release_marker: PathBuf,
        written: bool,
    },
}

/// Result of resetting the dev marker ahead of a GA release
#[derive(Debug, Clone, PartialEq)]
pub struct DevReset {
    pub baseline: DevTag,
    pub dev_marker: PathBuf,
    /// YAML document written to the dev marker
    pub document: String,
    pub written: bool,
}

impl CutOutcome {
    /// The new version string
    pub fn next_version(&self) -> String {
        match self {
            CutOutcome::ReleaseCandidate { next, .. } => next.to_string(),
            CutOutcome::Release { next, .. } => next.to_string(),
        }
    }

    pub fn written(&self) -> bool {
        match self {
            CutOutcome::ReleaseCandidate { written, .. } | CutOutcome::Release { written, .. } => {
                *written
            }
        }
    }
}

/// Reads, bumps and persists the build version marker files.
#[derive(Debug, Clone)]
pub struct TagUpdater {
    config: Config,
    dry_run: bool,
}

impl TagUpdater {
    pub fn new(config: Config) -> Self {
        TagUpdater {
            config,
            dry_run: false,
        }
    }

    /// Compute and report without touching either marker file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bumps `dev.N` in the dev marker to `dev.N+1`.
    ///
    /// Nothing is written if the marker cannot be read or does not hold a
    /// valid dev tag.
    pub fn cut_release_candidate(&self) -> Result<CutOutcome> {
        let path = &self.config.dev_marker_path;
        let raw = marker::read_dev_marker(path)?;
        let previous = DevTag::parse(&raw)?;
        let next = previous.bump()?;
        tracing::info!(from = %previous, to = %next, "bumped dev counter");

        let document = if self.dry_run {
            marker::render_dev_marker(&next)?
        } else {
            marker::write_dev_marker(path, &next)?
        };

        Ok(CutOutcome::ReleaseCandidate {
            previous,
            next,
            dev_marker: path.clone(),
            document,
            written: !self.dry_run,
        })
    }

    /// Resets the dev marker to the baseline, then writes the next GA version
    /// (`MAJOR.MINOR+1.0`) derived from `current_tag`.
    ///
    /// The reset happens first and is not rolled back: a malformed
    /// `current_tag` or a failed release write leaves the dev marker reset.
    pub fn cut_release(&self, current_tag: &str) -> Result<CutOutcome> {
        let reset = self.reset_dev()?;
        self.record_release(current_tag, reset)
    }

    /// Overwrites the dev marker with the configured baseline.
    ///
    /// The baseline is validated before anything is written.
    pub fn reset_dev(&self) -> Result<DevReset> {
        let path = &self.config.dev_marker_path;
        let baseline = DevTag::parse(&self.config.dev_baseline)?;
        let document = if self.dry_run {
            marker::render_dev_marker(&baseline)?
        } else {
            marker::write_dev_marker(path, &baseline)?
        };
        tracing::info!(baseline = %baseline, "reset dev marker");

        Ok(DevReset {
            baseline,
            dev_marker: path.clone(),
            document,
            written: !self.dry_run,
        })
    }

    /// Second half of a GA cut: bumps `current_tag` and writes it to the
    /// new-version marker. `reset` is the result of [`TagUpdater::reset_dev`].
    pub fn record_release(&self, current_tag: &str, reset: DevReset) -> Result<CutOutcome> {
        let previous = ReleaseTag::parse(current_tag)?;
        let next = previous.bump()?;
        tracing::info!(from = %previous, to = %next, "bumped release minor");

        if !self.dry_run {
            marker::write_release_marker(&self.config.release_marker_path, &next)?;
        }

        Ok(CutOutcome::Release {
            previous,
            next,
            dev_baseline: reset.baseline,
            dev_marker: reset.dev_marker,
            release_marker: self.config.release_marker_path.clone(),
            written: !self.dry_run,
        })
    }
}
