//! Skipped tests finder CLI.
//!
//! Scans a directory for skip markers and prints them or writes a report file.
//! Missing arguments are prompted for on stdin.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use skipped_tests_finder::core::types::OutputFormat;
use skipped_tests_finder::exit_codes;
use skipped_tests_finder::find::{FindRequest, OutputMode, run_find};
use skipped_tests_finder::interactive::Prompter;
use skipped_tests_finder::io::config::resolve_config;
use skipped_tests_finder::io::scanner::ScanOptions;
use skipped_tests_finder::logging;
use skipped_tests_finder::report::console::render_error;

const AFTER_HELP: &str = "\
Examples:
  skipped-tests-finder                          Interactive mode
  skipped-tests-finder -d=./tests               Prompt only for the output option
  skipped-tests-finder -d=./tests --cli         Print results to the console
  skipped-tests-finder -d=./tests -f=json       Save results as JSON
  skipped-tests-finder -d=./tests -f=markdown   Save results as a Markdown report
  skipped-tests-finder -d=./tests -f=text -o=./reports

Supported formats: text, json, markdown";

#[derive(Parser, Debug)]
#[command(
    name = "skipped-tests-finder",
    version,
    about = "Find skipped, ignored and disabled tests across languages",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Directory to scan (prompted for when omitted).
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Write a report file in this format: text, json or markdown.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Directory for the report file (defaults to the scanned directory).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print results to the console without prompting.
    #[arg(long)]
    cli: bool,

    /// Same as `--format text`.
    #[arg(long)]
    txt: bool,

    /// Config file (defaults to `<dir>/.skipped-tests.toml`).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn requested_format(&self) -> Result<Option<OutputFormat>> {
        match (&self.format, self.txt) {
            (Some(format), _) => Ok(Some(format.parse()?)),
            (None, true) => Ok(Some(OutputFormat::Text)),
            (None, false) => Ok(None),
        }
    }
}

/// Rewrite the single-dash `-txt` and `-cli` flags to their long forms.
fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-txt") => OsString::from("--txt"),
            Some("-cli") => OsString::from("--cli"),
            _ => arg,
        })
        .collect()
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse_from(normalize_legacy_args(std::env::args_os())) {
        Ok(cli) => cli,
        // Help and version output.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            print!("{}", render_error(err.to_string().trim_end()));
            std::process::exit(exit_codes::INVALID);
        }
    };
    if cli.no_color {
        colored::control::set_override(false);
    }

    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            print!("{}", render_error(&format!("{err:#}")));
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.requested_format()?;
    let skip_prompt = cli.cli || format.is_some();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let tests_dir = match cli.dir {
        Some(dir) => dir,
        None => match prompter.prompt_for_directory()? {
            Some(dir) => dir,
            None => return Ok(()),
        },
    };

    let config = resolve_config(cli.config.as_deref(), &tests_dir)?;
    let mut output_dir = cli.output.or_else(|| {
        config
            .output_dir
            .as_ref()
            .map(|dir| tests_dir.join(dir))
    });

    let mode = match format {
        Some(format) => OutputMode::File(format),
        None if skip_prompt => OutputMode::Console,
        None => match prompter.prompt_for_output_option()? {
            None => return Ok(()),
            Some(OutputMode::Console) => OutputMode::Console,
            Some(mode @ OutputMode::File(_)) => match prompter.ask_for_output_path(&tests_dir)? {
                None => return Ok(()),
                Some(dir) => {
                    output_dir = Some(dir);
                    mode
                }
            },
        },
    };

    let request = FindRequest {
        tests_dir,
        mode,
        output_dir,
        scan: ScanOptions::from(&config),
    };
    run_find(&request, &mut io::stdout())?;
    Ok(())
}
