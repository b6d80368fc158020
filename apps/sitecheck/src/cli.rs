//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sitecheck",
    version,
    about = "Validate a static site before deployment",
    long_about = "Sitecheck — checks public HTML pages for broken internal links and unfinished content, and validates the news and events collections.\n\nConfiguration precedence: CLI > sitecheck.toml > defaults.",
    after_help = "Exit status:\n  0  no ERROR-level findings\n  1  at least one ERROR-level finding\n  2  a required input file is missing\n  3  any other fatal error\n\nExamples:\n  sitecheck\n  sitecheck --report reports/quality.md --strict-placeholders"
)]
/// Command-line options. There are no subcommands.
pub struct Cli {
    #[arg(long, help = "Markdown report path, repo-relative (default: site-quality-report.md)")]
    pub report: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Treat placeholder content markers as errors")]
    pub strict_placeholders: bool,
}
