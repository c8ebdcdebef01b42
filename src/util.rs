//! Name normalization and small text helpers

use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

/// Everything outside letters, digits, underscore, period, hyphen and comma
static TAG_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w.\-,]+").expect("valid tag filter regex"));

/// Convert a free-form note name into a file name ending in `.txt`.
///
/// Substitutions from [`C::FILE_NAME_SUBSTITUTIONS`] are applied in order,
/// then forbidden characters are dropped, the result is lower-cased and
/// stripped of whitespace. A trailing `.txt` the user already typed (which the
/// substitution has turned into `_txt`) is removed so the extension is not
/// doubled. An empty name yields an empty string, meaning "no valid name".
pub fn file_name_for(note_name: &str) -> String {
    let mut name = note_name.to_string();
    for (illegal, substitute) in C::FILE_NAME_SUBSTITUTIONS {
        name = name.replace(*illegal, &substitute.to_string());
    }

    let name: String = name
        .chars()
        .filter(|c| !C::FORBIDDEN_FILE_NAME_CHARS.contains(c) && !c.is_control())
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let stem = name.strip_suffix("_txt").unwrap_or(&name);

    if stem.is_empty() {
        return String::new();
    }
    format!("{}{}", stem, C::NOTE_EXTENSION)
}

/// Remove every character that is not a letter, digit, underscore, hyphen,
/// period or comma. Non-Latin scripts survive.
pub fn sanitize_tag(tag: &str) -> String {
    TAG_DISALLOWED.replace_all(tag, "").into_owned()
}

/// Insert line breaks so that no segment exceeds `width` characters.
///
/// Breaks happen at whitespace; a word longer than `width` is split. Every
/// line is prefixed with a single space for terminal indentation.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() { word.len() } else { current.chars().count() + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|line| format!(" {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
