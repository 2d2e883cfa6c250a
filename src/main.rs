//! mdtoc - Markdown table-of-contents creator

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use regex::Regex;

use mdtoc::{
    Error, HorizontalRuleStyle, SlugStyle, TocOptions, collect_markdown_files, create_toc,
};

#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(version, about = "Create tables of contents for Markdown files", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdtoc README.md                 Refresh the ToC in place
    mdtoc docs/                     Process every *.md file under docs/
    mdtoc --style gitlab README.md  Use GitLab anchor slugs")]
struct Cli {
    /// Markdown files or directories to process
    #[arg(value_name = "PATHS", required = true)]
    paths: Vec<PathBuf>,

    /// Regex pattern of paths (POSIX-style) to exclude
    #[arg(long, default_value = r"\.git|\.tox|\.pytest_cache")]
    exclude: String,

    /// Anchor slug style: github or gitlab
    #[arg(long, default_value = "github")]
    style: String,

    /// Write changes back to the markdown files
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    in_place: bool,

    /// How many lines from the top of each file to skip
    #[arg(long, default_value_t = 1)]
    skip_first_n_lines: usize,

    /// Do not print results to the terminal
    #[arg(short, long)]
    quiet: bool,

    /// Insert a ToC block even when no <!--TOC--> pair exists yet
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    proactive: bool,

    /// Emit a bolded title line above the ToC
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    add_toc_title: bool,

    /// Wrap the ToC block in horizontal rules
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    add_horizontal_rules: bool,

    /// Title text used above the ToC
    #[arg(long, default_value = "Table of Contents")]
    toc_title: String,

    /// Horizontal rule style: mdformat or prettier
    #[arg(long, default_value = "mdformat")]
    horizontal_rule_style: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(failures) if failures.is_empty() => ExitCode::SUCCESS,
        Ok(failures) => {
            for (path, err) in &failures {
                eprintln!("{}: {err}", path.display());
            }
            eprintln!("error: {} file(s) failed", failures.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Validate configuration, collect the file list, and process every file.
///
/// Per-file failures are collected rather than propagated, so one malformed
/// document never blocks the rest of the batch. Configuration errors abort
/// immediately, before any file is read.
fn run(cli: &Cli) -> mdtoc::Result<Vec<(PathBuf, Error)>> {
    let style = SlugStyle::from_str(&cli.style)?;
    let horizontal_rule_style = HorizontalRuleStyle::from_str(&cli.horizontal_rule_style)?;
    let exclude = Regex::new(&cli.exclude)?;

    let opts = TocOptions {
        skip_first_n_lines: cli.skip_first_n_lines,
        quiet: cli.quiet,
        in_place: cli.in_place,
        proactive: cli.proactive,
        add_toc_title: cli.add_toc_title,
        add_horizontal_rules: cli.add_horizontal_rules,
        toc_title: cli.toc_title.clone(),
        style,
        horizontal_rule_style,
    };

    if !cli.quiet {
        eprintln!("Skipping files that match this pattern: {}", cli.exclude);
    }

    let files = collect_markdown_files(&cli.paths, &exclude)?;

    let mut failures = Vec::new();
    for file in files {
        if let Err(e) = create_toc(&file, &opts) {
            failures.push((file, e));
        }
    }

    Ok(failures)
}
