//! Markdown report: summary table plus per-file details.

use chrono::{DateTime, Local};

use crate::core::group::group_by_file;
use crate::core::language::report_language;
use crate::core::types::{SkippedTest, file_name_of};

pub fn generate_markdown_output(tests: &[SkippedTest]) -> String {
    generate_markdown_output_at(tests, Local::now())
}

/// Same as [`generate_markdown_output`] with a fixed timestamp.
pub fn generate_markdown_output_at(
    tests: &[SkippedTest],
    generated_at: DateTime<Local>,
) -> String {
    let grouped = group_by_file(tests);

    let mut md = String::from("# Skipped Tests Report\n\n");
    md.push_str(&format!(
        "**Generated:** {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    md.push_str("## Summary\n\n");
    md.push_str(&format!("- **Total Skipped Tests:** {}\n", tests.len()));
    md.push_str(&format!("- **Files with Skipped Tests:** {}\n\n", grouped.len()));

    md.push_str("## Summary by File\n\n");
    md.push_str("| File | Skipped Tests | Language |\n");
    md.push_str("|------|---------------|----------|\n");
    for (path, file_tests) in &grouped {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            file_name_of(path),
            file_tests.len(),
            report_language(path)
        ));
    }

    md.push_str("\n## Detailed Results\n\n");
    for (path, file_tests) in &grouped {
        let fence = report_language(path).to_lowercase();
        md.push_str(&format!("### {}\n\n", file_name_of(path)));
        md.push_str(&format!("**File:** `{}`\n\n", path.display()));
        md.push_str(&format!("**Skipped Tests:** {}\n\n", file_tests.len()));

        for (index, test) in file_tests.iter().enumerate() {
            md.push_str(&format!("#### {}. {}\n\n", index + 1, test.display_name()));
            md.push_str(&format!("- **Line:** {}\n", test.line_number));
            if let Some(reason) = test.reason.as_deref() {
                md.push_str(&format!("- **Reason:** {}\n", reason));
            }
            md.push_str("- **Code:**\n\n");
            md.push_str(&format!("```{}\n{}\n```\n\n", fence, test.line.trim()));
        }
    }

    md
}
