//! Line-based prompts used when the CLI is missing a directory or an output choice.
//!
//! Every prompt returns `Ok(None)` once input ends; the goodbye message has
//! already been written at that point and the caller should exit cleanly.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::{Color, Colorize};
use tracing::warn;

use crate::core::types::OutputFormat;
use crate::find::OutputMode;
use crate::io::paths::{is_directory_writable, validate_directory};
use crate::report::console::{format_file_path, separator};

/// Map a typed answer to an output mode (case-insensitive, surrounding space ignored).
pub fn parse_output_choice(answer: &str) -> Option<OutputMode> {
    match answer.trim().to_lowercase().as_str() {
        "c" | "console" => Some(OutputMode::Console),
        "t" | "text" => Some(OutputMode::File(OutputFormat::Text)),
        "j" | "json" => Some(OutputMode::File(OutputFormat::Json)),
        "m" | "markdown" => Some(OutputMode::File(OutputFormat::Markdown)),
        _ => None,
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the directory to scan. A path that cannot be stat'ed is an error.
    pub fn prompt_for_directory(&mut self) -> Result<Option<PathBuf>> {
        let welcome = render_welcome();
        self.say(&welcome)?;
        let Some(answer) = self.ask(&format!("{} ", "📁 Enter directory path:".cyan().bold()))?
        else {
            return Ok(None);
        };

        let dir = PathBuf::from(answer.trim());
        if !validate_directory(&dir) {
            bail!(
                "The directory does not exist or is not accessible. Please check the path and try again."
            );
        }
        self.say(&format!(
            "\n{}\n   {} {}\n",
            "✅ DIRECTORY VALIDATED:".green().bold(),
            "📁".blue(),
            format_file_path(&dir)
        ))?;
        Ok(Some(dir))
    }

    /// Ask how results should be delivered, re-asking until the answer is valid.
    pub fn prompt_for_output_option(&mut self) -> Result<Option<OutputMode>> {
        let menu = render_output_options();
        self.say(&menu)?;
        loop {
            let Some(answer) = self.ask(&format!(
                "\n{} ",
                "🎯 Choose output format (c/t/j/m):".magenta().bold()
            ))?
            else {
                return Ok(None);
            };
            if let Some(mode) = parse_output_choice(&answer) {
                return Ok(Some(mode));
            }
            self.say(&format!(
                "\n{}\n{}\n",
                "❌ INVALID CHOICE".red().bold(),
                "   Please enter one of the valid options (c/t/j/m).".red()
            ))?;
        }
    }

    /// Ask where to write the report file.
    ///
    /// Blank selects `tests_dir`; a directory that is not writable falls back to it.
    pub fn ask_for_output_path(&mut self, tests_dir: &Path) -> Result<Option<PathBuf>> {
        self.say(&format!(
            "\n{}\n{}\n{}\n{} {}\n",
            separator('─', Color::BrightBlack),
            "📂 OUTPUT LOCATION:".blue().bold(),
            "   Where should the report file be saved?".blue(),
            "   Default:".bright_black(),
            format_file_path(tests_dir)
        ))?;
        let Some(answer) = self.ask(&format!(
            "\n{} ",
            "📁 Output directory (press Enter for default):".cyan().bold()
        ))?
        else {
            return Ok(None);
        };

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Some(tests_dir.to_path_buf()));
        }
        let dir = PathBuf::from(answer);
        if is_directory_writable(&dir) {
            return Ok(Some(dir));
        }

        warn!(dir = %dir.display(), "output directory not writable; using tests directory");
        self.say(&format!(
            "\n{}\n   {} {}\n",
            "⚠️  DIRECTORY NOT WRITABLE, USING DEFAULT:".yellow().bold(),
            "📁".blue(),
            format_file_path(tests_dir)
        ))?;
        Ok(Some(tests_dir.to_path_buf()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("write prompt")?;
        self.output.flush().context("flush prompt")
    }

    /// One line of input without its line ending, or `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.say(question)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read answer")?;
        if read == 0 {
            let goodbye = render_goodbye();
            self.say(&goodbye)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn render_welcome() -> String {
    let mut out = String::from("\n");
    out.push_str(&format!(
        "{}\n{}\n{}\n",
        separator('═', Color::Cyan),
        "  🔍 SKIPPED TESTS FINDER".white().bold(),
        separator('═', Color::Cyan)
    ));
    out.push_str(&format!(
        "\n{}\n{}\n",
        "👋 Welcome! This tool scans your codebase for skipped, ignored and disabled tests."
            .cyan(),
        "   Press Ctrl+D at any prompt to exit.".bright_black()
    ));
    out.push_str(&format!(
        "\n{}\n{}\n{}\n",
        "📂 DIRECTORY SELECTION:".blue().bold(),
        "   Enter the path to the directory containing your tests.".blue(),
        "   Relative and absolute paths are both accepted.".bright_black()
    ));
    out
}

fn render_output_options() -> String {
    let mut out = format!(
        "\n{}\n{}\n{}\n\n{}\n",
        separator('─', Color::BrightBlack),
        "📤 OUTPUT FORMAT SELECTION:".magenta().bold(),
        "   Choose how you'd like to receive your results.".magenta(),
        "📋 AVAILABLE OPTIONS:".blue().bold()
    );
    let options = [
        ("🖥️", "c", Color::Cyan, "Console", "Display results in the terminal"),
        ("📄", "t", Color::Yellow, "Text", "Save as plain text file (skipped_tests.txt)"),
        ("📊", "j", Color::Green, "JSON", "Save as structured JSON file (skipped_tests.json)"),
        ("📝", "m", Color::Blue, "Markdown", "Save as Markdown report (skipped_tests.md)"),
    ];
    for (icon, key, color, name, desc) in options {
        out.push_str(&format!(
            "   {} {icon} {} - {}\n     {}\n",
            "•".bright_black(),
            key.color(color).bold(),
            name.white().bold(),
            desc.bright_black()
        ));
    }
    out
}

fn render_goodbye() -> String {
    format!(
        "\n\n{}\n{}\n",
        "👋 Goodbye!".yellow().bold(),
        "   Thanks for using Skipped Tests Finder!".yellow()
    )
}
