use anyhow::{Context, Result};

use build_tags::cli::orchestration::{run_workflow, RunArgs};
use build_tags::cli::Args;
use build_tags::{config, logging, ui};

fn main() {
    let args = Args::parse_with_legacy_flags();
    logging::init_logging(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Load configuration
    let config = config::load_config(args.config.as_deref())
        .context("Error loading config")?
        .with_overrides(args.dev_file.clone(), args.release_file.clone());
    tracing::debug!(?config, "resolved configuration");

    let run_args = RunArgs::from(args);
    let step = if run_args.release {
        "Release cut failed"
    } else {
        "Release candidate cut failed"
    };
    let outcome = run_workflow(&run_args, config).context(step)?;

    ui::report_outcome(&outcome);
    println!("Succeeded");
    Ok(())
}
