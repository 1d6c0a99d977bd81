//! Plain text report.

use crate::core::ansi::strip_ansi;
use crate::core::types::SkippedTest;

pub fn generate_text_output(tests: &[SkippedTest]) -> String {
    let mut output = format!("Total skipped tests: {}\n\nSkipped Tests:\n\n", tests.len());
    for test in tests {
        output.push_str(&format!(
            "- {} ({}:{})\n",
            test.display_name(),
            test.file_name(),
            test.line_number
        ));
    }
    strip_ansi(&output)
}
