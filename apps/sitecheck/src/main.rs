//! Sitecheck CLI binary entry point.
//! Resolves settings, runs the checker, writes the report, and exits with
//! the derived status.

use clap::Parser;
use sitecheck::check::SiteChecker;
use sitecheck::cli::Cli;
use sitecheck::error::CheckError;
use sitecheck::{config, output, utils};
use tracing::debug;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed CLI arguments");
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<i32, CheckError> {
    let settings = config::resolve_effective(
        None,
        cli.report.as_deref(),
        Some(cli.strict_placeholders),
    )?;
    if !settings.config_found {
        eprintln!(
            "{} No sitecheck.toml found in {}; using defaults.",
            utils::note_prefix(),
            settings.repo_root.to_string_lossy()
        );
    }
    let report_path = settings.report.clone();
    let checker = SiteChecker::new(settings)?;
    let report = checker.run()?;

    output::write_report(&report_path, &report)?;
    output::print_issues(&report);
    output::print_summary(&report, &report_path);
    Ok(report.exit_code())
}
