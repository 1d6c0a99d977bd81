//! Extension to language names used by the reports.

use std::path::Path;

const LANGUAGES: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("jsx", "React"),
    ("tsx", "React/TS"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("java", "Java"),
    ("cs", "C#"),
    ("cpp", "C++"),
    ("cc", "C++"),
    ("cxx", "C++"),
    ("go", "Go"),
    ("php", "PHP"),
    ("rs", "Rust"),
    ("swift", "Swift"),
    ("kt", "Kotlin"),
    ("scala", "Scala"),
    ("dart", "Dart"),
    ("groovy", "Groovy"),
    ("pl", "Perl"),
    ("ex", "Elixir"),
    ("clj", "Clojure"),
    ("robot", "Robot Framework"),
];

/// Language for an extension given without the leading dot (case-insensitive).
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, language)| *language)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Language label for file reports; `Unknown` when unmapped.
pub fn report_language(path: &Path) -> &'static str {
    language_for_extension(&extension_of(path)).unwrap_or("Unknown")
}

/// Language label for the console; falls back to the upper-cased extension.
pub fn console_language(path: &Path) -> String {
    let ext = extension_of(path);
    match language_for_extension(&ext) {
        Some(language) => language.to_string(),
        None => ext.to_uppercase(),
    }
}
