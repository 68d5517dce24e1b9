//! Command-line surface: flag definitions and legacy flag handling.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub mod orchestration;

/// Long flags that pipelines pass with a single dash (`-tag 1.2.3`, `-release`).
const LEGACY_LONG_FLAGS: &[&str] = &[
    "tag",
    "release",
    "config",
    "dev-file",
    "release-file",
    "dry-run",
];

#[derive(Debug, Clone, Parser)]
#[command(
    name = "build-tags",
    version,
    about = "Bump the dev or release build version markers"
)]
pub struct Args {
    #[arg(long, help = "The current release tag (required with --release)")]
    pub tag: Option<String>,

    #[arg(long, help = "Cut a GA release instead of a release candidate")]
    pub release: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, value_name = "PATH", help = "Override the dev marker file path")]
    pub dev_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Override the new-version marker file path"
    )]
    pub release_file: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without writing files")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_with_legacy_flags() -> Self {
        Args::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-tag`, `-tag=1.2.3`) to their
/// double-dash form. Arguments after a bare `--` are left untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut end_of_flags = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if end_of_flags {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                end_of_flags = true;
                return arg;
            }
            let rewritten = match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_legacy_flag(rest) => {
                    Some(format!("-{}", text))
                }
                _ => None,
            };
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn is_legacy_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LEGACY_LONG_FLAGS.contains(&name)
}
