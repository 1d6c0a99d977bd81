//! Colored terminal output.
//!
//! Renderers return strings so the binary decides where they go and tests can
//! inspect them. Coloring follows `colored`'s global switch (TTY detection,
//! `NO_COLOR`, `--no-color`).

use std::path::Path;

use colored::{Color, ColoredString, Colorize};

use crate::core::group::{distinct_files, group_by_language};
use crate::core::types::{OutputFormat, SkippedTest};

pub const WIDTH: usize = 70;

/// Apply a foreground color to `text`.
pub fn colorize(text: &str, color: Color) -> ColoredString {
    text.color(color)
}

/// A full-width line of `ch` in `color`.
pub fn separator(ch: char, color: Color) -> String {
    ch.to_string().repeat(WIDTH).color(color).to_string()
}

fn banner(title: &str, color: Color) -> String {
    format!(
        "{}\n{}\n{}\n",
        separator('═', color),
        format!("  {title}").white().bold(),
        separator('═', color)
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// `dir/` dimmed followed by the file name in cyan.
pub fn format_file_path(path: &Path) -> String {
    let display = path.display().to_string();
    match display.rsplit_once(['/', '\\']) {
        Some((dir, file)) => format!("{}{}", format!("{dir}/").dimmed(), file.cyan()),
        None => display.cyan().to_string(),
    }
}

fn format_test_name(test: &SkippedTest) -> ColoredString {
    match test.test_name.as_deref() {
        Some(name) if !name.is_empty() => name.white(),
        _ => test.display_name().bright_black(),
    }
}

/// Full scan report for the terminal.
pub fn render_results(tests: &[SkippedTest]) -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("SKIPPED TESTS FINDER - SCAN RESULTS", Color::Cyan));

    if tests.is_empty() {
        out.push_str(&format!("\n{}\n", "✅ SUCCESS!".green().bold()));
        out.push_str(&format!(
            "{}\n",
            "   No skipped tests found in the scanned directory.".green()
        ));
        out.push_str(&format!("\n{}\n", separator('─', Color::Green)));
        return out;
    }

    out.push_str(&format!("\n{}\n", "⚠️  FOUND SKIPPED TESTS".yellow().bold()));
    out.push_str(&format!(
        "{}\n",
        format!("   Total: {} skipped test{}", tests.len(), plural(tests.len())).yellow()
    ));

    let grouped = group_by_language(tests);
    out.push_str(&format!("\n{}\n", "📊 BREAKDOWN BY LANGUAGE:".blue().bold()));
    for (language, language_tests) in &grouped {
        let count = language_tests.len();
        out.push_str(&format!(
            "   {} {}: {} test{}\n",
            "•".blue(),
            language.white(),
            count.to_string().yellow(),
            plural(count)
        ));
    }

    out.push_str(&format!("\n{}\n", separator('─', Color::BrightBlack)));
    out.push_str(&format!("{}\n", "📋 DETAILED RESULTS:".magenta().bold()));

    for (language, language_tests) in &grouped {
        let count = language_tests.len();
        out.push_str(&format!(
            "\n   {}\n",
            format!("{language} ({count} test{})", plural(count)).white().bold()
        ));
        let rule_len = 20.max(language.chars().count() + 10);
        out.push_str(&format!("   {}\n", "─".repeat(rule_len).bright_black()));

        for (index, test) in language_tests.iter().enumerate() {
            let branch = if index + 1 == count { "└──" } else { "├──" };
            out.push_str(&format!(
                "   {} {}\n",
                branch.bright_black(),
                format_test_name(test)
            ));
            out.push_str(&format!(
                "        {} {}{}\n",
                "📁".blue(),
                format_file_path(&test.file_path),
                format!(":{}", test.line_number).yellow()
            ));
        }
    }

    out.push_str(&format!("\n{}\n", separator('─', Color::BrightBlack)));
    out.push_str(&format!("{}\n", "📈 SUMMARY STATISTICS:".cyan().bold()));
    for (label, value) in [
        ("Total skipped tests", tests.len()),
        ("Languages affected", grouped.len()),
        ("Files with skipped tests", distinct_files(tests)),
    ] {
        out.push_str(&format!(
            "   {} {}: {}\n",
            "•".cyan(),
            label,
            value.to_string().yellow().bold()
        ));
    }

    out.push_str(&format!("\n{}\n", "💡 TIP:".green().bold()));
    out.push_str(&format!(
        "{}\n{}\n",
        "   Review and address these skipped tests before your next release.".green(),
        "   Use -f=text flag to export results to a file for tracking.".green()
    ));
    out.push_str(&format!("\n{}\n", separator('═', Color::Cyan)));
    out
}

pub fn render_scan_start(dir: &Path) -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("SKIPPED TESTS FINDER - SCANNING", Color::Cyan));
    out.push_str(&format!("\n{}\n", "🔍 SCANNING DIRECTORY:".blue().bold()));
    out.push_str(&format!("   {} {}\n", "📁".blue(), format_file_path(dir)));
    out.push_str(&format!(
        "\n{}\n",
        "⏳ Please wait while scanning for skipped tests...".yellow()
    ));
    out.push_str(&format!("{}\n", separator('─', Color::BrightBlack)));
    out
}

pub fn render_error(message: &str) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!(
        "{}\n{}\n{}\n",
        separator('═', Color::Red),
        "  ERROR".white().bold().on_red(),
        separator('═', Color::Red)
    ));
    out.push_str(&format!("\n{}\n", "❌ SCAN FAILED:".red().bold()));
    out.push_str(&format!("   {} {}\n", "⚠️".red(), message.red()));
    out.push_str(&format!("\n{}\n", "💡 TROUBLESHOOTING:".yellow().bold()));
    for hint in [
        "Verify the directory path exists and is accessible",
        "Check file permissions for the target directory",
        "Use absolute paths to avoid navigation issues",
        "Run with -h flag for usage help",
    ] {
        out.push_str(&format!("{}\n", format!("   • {hint}").yellow()));
    }
    out.push_str(&format!("\n{}\n", separator('═', Color::Red)));
    out
}

/// Confirmation card after a report file was written.
pub fn render_file_written(path: &Path, format: OutputFormat, count: usize) -> String {
    let (icon, name, color) = match format {
        OutputFormat::Text => ("📄", "Text File", Color::Yellow),
        OutputFormat::Json => ("📊", "JSON File", Color::Green),
        OutputFormat::Markdown => ("📝", "Markdown Report", Color::Blue),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let location = path
        .parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    let mut out = String::from("\n");
    out.push_str(&banner(&format!("{icon} {} CREATED", name.to_uppercase()), color));
    out.push_str(&format!("\n{}\n", "✅ SUCCESS!".green().bold()));
    out.push_str(&format!(
        "   Results written to: {}\n",
        path.display().to_string().cyan()
    ));
    out.push_str(&format!("   {} File: {}\n", icon, file_name.cyan().bold()));
    out.push_str(&format!("   {} Location: {}\n", "📁".blue(), location.cyan()));
    out.push_str(&format!(
        "   {} Total skipped tests: {}\n",
        "📊".green(),
        count.to_string().yellow().bold()
    ));
    out.push_str(&format!(
        "   {} Format: {}\n",
        "🎯".magenta(),
        format.as_str().to_uppercase().color(color).bold()
    ));

    out.push_str(&format!("\n{}\n", "💡 NEXT STEPS:".yellow().bold()));
    let steps = match format {
        OutputFormat::Json => [
            "Use the JSON file with other tools or scripts",
            "Parse the structured data for automated reporting",
        ],
        OutputFormat::Markdown => [
            "View the Markdown file in any text editor",
            "Include in documentation or share with your team",
        ],
        OutputFormat::Text => [
            "Open the text file to review skipped tests",
            "Share the results with your team",
        ],
    };
    for step in steps {
        out.push_str(&format!("{}\n", format!("   • {step}").yellow()));
    }
    out.push_str(&format!("\n{}\n", separator('═', color)));
    out
}

/// Shown in file mode when the scan found nothing, so no file is written.
pub fn render_nothing_written() -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("✅ NO SKIPPED TESTS FOUND", Color::Green));
    out.push_str(&format!("\n{}\n", "🎉 EXCELLENT!".green().bold()));
    out.push_str(&format!(
        "{}\n{}\n",
        "   No skipped tests were found in your codebase.".green(),
        "   No output file was created since there are no results to save.".green()
    ));
    out.push_str(&format!("\n{}\n", separator('═', Color::Green)));
    out
}
