//! Note document model
//!
//! A note is a plain-text file carrying metadata markers inside its body:
//!
//! ```text
//! @name Second World War
//! Summary paragraph, ends at the first blank line.
//!
//! More body text...
//! @tags history, war
//! @date 1939-1945
//! ```
//!
//! All markers are optional, case-insensitive and accept either a space or a
//! colon after the marker word. Every field is derived on first access and
//! cached; none of the extractors can fail, a missing marker simply yields an
//! empty value.

use std::io;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;

use crate::engine;
use crate::util;

static MARKER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@(?:name|tags|date)[ :]").expect("valid marker regex"));
static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@name[ :]").expect("valid name marker regex"));
static TAGS_OR_DATE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@(?:tags|date)[ :]").expect("valid tags/date marker regex"));

static NAME_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@name[ :](.+)").expect("valid name regex"));
static TAGS_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@tags[ :](.+)").expect("valid tags regex"));
static DATE_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@date[ :](.+)").expect("valid date regex"));

static DATE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\d\-./]+").expect("valid date filter regex"));
static DATE_RANGE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-").expect("valid date range regex"));

/// Parsed representation of one note file
#[derive(Debug, Clone)]
pub struct NoteDocument {
    raw_text: String,
    source_path: Option<PathBuf>,
    name: OnceCell<String>,
    summary: OnceCell<String>,
    text_body: OnceCell<String>,
    tags: OnceCell<Vec<String>>,
    date_text: OnceCell<String>,
    parsed_date: OnceCell<NaiveDate>,
}

impl NoteDocument {
    /// Build a document from literal text (no backing file)
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text.into(), None)
    }

    /// Read a note file. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = engine::read_all_text(path)?;
        log::debug!("parsed note {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text, Some(path.to_path_buf())))
    }

    fn new(raw_text: String, source_path: Option<PathBuf>) -> Self {
        Self {
            raw_text,
            source_path,
            name: OnceCell::new(),
            summary: OnceCell::new(),
            text_body: OnceCell::new(),
            tags: OnceCell::new(),
            date_text: OnceCell::new(),
            parsed_date: OnceCell::new(),
        }
    }

    /// Whether the text carries at least one metadata marker
    pub fn is_note(text: &str) -> bool {
        MARKER_LINE.is_match(text)
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// File name of the backing file, e.g. `second_world_war.txt`
    pub fn file_name(&self) -> Option<String> {
        self.source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Name of the directory holding the backing file
    pub fn folder_name(&self) -> Option<String> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent())
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Text after `@name`, trimmed; empty if the marker is absent
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| extract_name(&self.raw_text))
    }

    /// First paragraph after the `@name` line
    pub fn summary(&self) -> &str {
        self.summary.get_or_init(|| extract_summary(&self.raw_text))
    }

    /// Everything between the `@name` line and the first `@tags`/`@date` line
    pub fn text_body(&self) -> &str {
        self.text_body.get_or_init(|| extract_text_body(&self.raw_text))
    }

    pub fn tags(&self) -> &[String] {
        self.tags.get_or_init(|| extract_tags(&self.raw_text))
    }

    /// Raw date text, restricted to digits and `-./`
    pub fn date_text(&self) -> &str {
        self.date_text.get_or_init(|| extract_date_text(&self.raw_text))
    }

    /// Best-effort calendar date; [`NaiveDate::MIN`] when nothing parses
    pub fn parsed_date(&self) -> NaiveDate {
        *self.parsed_date.get_or_init(|| parse_note_date(self.date_text()))
    }

    /// False when [`parsed_date`](Self::parsed_date) is the unknown-date sentinel
    pub fn has_known_date(&self) -> bool {
        self.parsed_date() != NaiveDate::MIN
    }
}

/// True when a line contains any of the three markers
fn is_marker_line(line: &str) -> bool {
    MARKER_LINE.is_match(line)
}

fn extract_name(text: &str) -> String {
    NAME_VALUE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Scan states for the summary paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryScan {
    /// Skipping blank lines after the name line
    SeekingStart,
    /// Inside the paragraph that began at `start`
    SeekingEnd { start: usize },
}

fn extract_summary(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let name_index = match lines.iter().position(|line| NAME_LINE.is_match(line)) {
        Some(index) => index,
        None => return String::new(),
    };

    let mut state = SummaryScan::SeekingStart;
    for (index, line) in lines.iter().enumerate().skip(name_index + 1) {
        let blank = line.trim().is_empty();
        state = match state {
            SummaryScan::SeekingStart => {
                // A marker before any content means the note has no summary
                if is_marker_line(line) {
                    return String::new();
                }
                if blank {
                    SummaryScan::SeekingStart
                } else {
                    SummaryScan::SeekingEnd { start: index }
                }
            }
            SummaryScan::SeekingEnd { start } => {
                if blank || is_marker_line(line) {
                    return lines[start..index].join("\n").trim().to_string();
                }
                state
            }
        };
    }

    // Paragraph never closed
    String::new()
}

fn extract_text_body(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let first = lines
        .iter()
        .position(|line| NAME_LINE.is_match(line))
        .map(|index| index + 1)
        .unwrap_or(0);
    let last = lines
        .iter()
        .position(|line| TAGS_OR_DATE_LINE.is_match(line))
        .unwrap_or(lines.len());

    if last <= first {
        return String::new();
    }

    lines[first..last].join("\n").trim_matches('\n').to_string()
}

fn extract_tags(text: &str) -> Vec<String> {
    let raw = match TAGS_VALUE.captures(text) {
        Some(caps) => caps[1].to_string(),
        None => return Vec::new(),
    };

    let normalized = raw.replace(' ', ",").replace('.', "");
    util::sanitize_tag(&normalized)
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn extract_date_text(text: &str) -> String {
    DATE_VALUE
        .captures(text)
        .map(|caps| DATE_DISALLOWED.replace_all(&caps[1], "").into_owned())
        .unwrap_or_default()
}

/// Parse the date text of a note.
///
/// For a range such as `1935-1945` only the first year is used. Full dates
/// are read day first (`31.12.2018`, `31/12/2018`), `12.2018` means the first
/// of that month, and a bare year becomes January 1st.
pub fn parse_note_date(date_text: &str) -> NaiveDate {
    let candidate = DATE_RANGE_START
        .captures(date_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(date_text);

    parse_calendar_date(candidate)
        .or_else(|| parse_year(candidate))
        .unwrap_or(NaiveDate::MIN)
}

fn parse_calendar_date(candidate: &str) -> Option<NaiveDate> {
    for format in ["%d.%m.%Y", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
            return Some(date);
        }
    }

    // Month and year only
    let (month, year) = candidate.split_once('.')?;
    if month.is_empty() || month.len() > 2 || year.len() != 4 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_year(candidate: &str) -> Option<NaiveDate> {
    if candidate.is_empty() || candidate.len() > 4 || !candidate.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = candidate.parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // === Name ===

    #[test]
    fn test_name_mid_line() {
        let note = NoteDocument::from_text("moiks @name Hello World \n taas");
        assert_eq!(note.name(), "Hello World");
    }

    #[test]
    fn test_name_special_characters() {
        let note = NoteDocument::from_text("moiks @name Hello\t%.,World \n taas");
        assert_eq!(note.name(), "Hello\t%.,World");
    }

    #[test]
    fn test_name_case_insensitive_and_colon() {
        assert_eq!(NoteDocument::from_text("@NAME: Shout").name(), "Shout");
        assert_eq!(NoteDocument::from_text("@Name Hello World\n@Tags a").name(), "Hello World");
    }

    #[test]
    fn test_name_requires_separator() {
        assert_eq!(NoteDocument::from_text("@names are here").name(), "");
    }

    #[test]
    fn test_no_name_marker() {
        let note = NoteDocument::from_text("just some text\n@tags a, b");
        assert_eq!(note.name(), "");
        assert_eq!(note.summary(), "");
    }

    // === Summary ===

    #[test]
    fn test_summary_default() {
        let note = NoteDocument::from_text(
            "@name ExampleNote \nSummary \nMore summary text \n @tags moi, hei, jaa",
        );
        assert_eq!(note.summary(), "Summary \nMore summary text");
    }

    #[test]
    fn test_summary_stops_at_blank_line() {
        let note = NoteDocument::from_text(
            "@name ExampleNote \nSummary \nMore summary text \n\n Text Body\n @tags moi, hei, jaa",
        );
        assert_eq!(note.summary(), "Summary \nMore summary text");
    }

    #[test]
    fn test_summary_list() {
        let note = NoteDocument::from_text(
            "@name ToDo-List \nToDo:\n- Thing1\n- Thing2\n @tags moi, hei, jaa",
        );
        assert_eq!(note.summary(), "ToDo:\n- Thing1\n- Thing2");
    }

    #[test]
    fn test_summary_keeps_inner_whitespace() {
        let note = NoteDocument::from_text("@name ExampleNote \nSummary \n Text \n @tags moi, hei, jaa");
        assert_eq!(note.summary(), "Summary \n Text");
    }

    #[test]
    fn test_summary_skips_leading_blank_lines() {
        let note = NoteDocument::from_text("@name X\n\n   \nFirst\n\nSecond\n");
        assert_eq!(note.summary(), "First");
    }

    #[test]
    fn test_summary_empty_when_marker_comes_first() {
        let note = NoteDocument::from_text("@name X\n\n@tags a\nlater text\n\n");
        assert_eq!(note.summary(), "");
    }

    #[test]
    fn test_summary_empty_without_end_boundary() {
        let note = NoteDocument::from_text("@name X\nunterminated paragraph");
        assert_eq!(note.summary(), "");
    }

    // === Text body ===

    #[test]
    fn test_text_body_default() {
        let note = NoteDocument::from_text("@name ExampleNote \nSummary\nText\n@tags moi, hei, jaa");
        assert_eq!(note.text_body(), "Summary\nText");
    }

    #[test]
    fn test_text_body_empty() {
        let note = NoteDocument::from_text("@name ExampleNote\n\n@tags moi, hei, jaa");
        assert_eq!(note.text_body(), "");
    }

    #[test]
    fn test_text_body_without_tags() {
        let note = NoteDocument::from_text("@name ExampleNote\nSummary\nText\n\n");
        assert_eq!(note.text_body(), "Summary\nText");
    }

    #[test]
    fn test_text_body_without_name() {
        let note = NoteDocument::from_text("Summary\nText");
        assert_eq!(note.text_body(), "Summary\nText");
    }

    #[test]
    fn test_text_body_name_only() {
        let note = NoteDocument::from_text("@name hello world");
        assert_eq!(note.text_body(), "");
    }

    #[test]
    fn test_text_body_stops_at_date() {
        let note = NoteDocument::from_text("@name X\nSummary\n\nBody\n@date 2018\n@tags a");
        assert_eq!(note.text_body(), "Summary\n\nBody");
    }

    #[test]
    fn test_text_body_keeps_spaces() {
        let note = NoteDocument::from_text("@name X\n\n  indented \n\n@tags a");
        assert_eq!(note.text_body(), "  indented ");
    }

    // === Tags ===

    #[test]
    fn test_tags_default() {
        let note = NoteDocument::from_text("@tags moi, hei, jaa");
        assert_eq!(note.tags(), ["moi", "hei", "jaa"]);
    }

    #[test]
    fn test_tags_empty_entries_dropped() {
        let note = NoteDocument::from_text("@tags ,,moi, ,.,hei,, jaa,");
        assert_eq!(note.tags(), ["moi", "hei", "jaa"]);
    }

    #[test]
    fn test_tags_special_characters() {
        let note = NoteDocument::from_text("@tags %moi, \thei, \\jaa, ?joo!");
        assert_eq!(note.tags(), ["moi", "hei", "jaa", "joo"]);
    }

    #[test]
    fn test_tags_non_latin() {
        let note = NoteDocument::from_text("@tags かわいい,сукаблять");
        assert_eq!(note.tags(), ["かわいい", "сукаблять"]);
    }

    #[test]
    fn test_tags_space_separated_and_periods() {
        let note = NoteDocument::from_text("@Tags: one two.three four");
        assert_eq!(note.tags(), ["one", "twothree", "four"]);
    }

    #[test]
    fn test_tags_absent() {
        assert!(NoteDocument::from_text("@name X").tags().is_empty());
    }

    // === Date ===

    #[test]
    fn test_date_text_default() {
        assert_eq!(NoteDocument::from_text("@date 201 8").date_text(), "2018");
    }

    #[test]
    fn test_date_text_strips_letters() {
        assert_eq!(NoteDocument::from_text("@date 2 0 moih 18").date_text(), "2018");
    }

    #[test]
    fn test_date_text_keeps_separators() {
        assert_eq!(NoteDocument::from_text("@date 1.12.2018 -").date_text(), "1.12.2018-");
        assert_eq!(NoteDocument::from_text("@name X").date_text(), "");
    }

    #[test]
    fn test_parse_full_date() {
        assert_eq!(parse_note_date("01.12.2018"), ymd(2018, 12, 1));
        assert_eq!(parse_note_date("24/06/1990"), ymd(1990, 6, 24));
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_note_date("5.2018"), ymd(2018, 5, 1));
    }

    #[test]
    fn test_parse_year_only() {
        assert_eq!(parse_note_date("2018"), ymd(2018, 1, 1));
    }

    #[test]
    fn test_parse_range_uses_first_year() {
        assert_eq!(parse_note_date("1935-1945"), ymd(1935, 1, 1));
    }

    #[test]
    fn test_parse_failure_is_sentinel() {
        assert_eq!(parse_note_date(""), NaiveDate::MIN);
        assert_eq!(parse_note_date("12/2018"), NaiveDate::MIN);
        assert_eq!(parse_note_date("0"), NaiveDate::MIN);
        assert_eq!(parse_note_date("99999"), NaiveDate::MIN);
    }

    #[test]
    fn test_parsed_date_on_document() {
        let note = NoteDocument::from_text("@name War\n@date 1939-1945");
        assert_eq!(note.parsed_date(), ymd(1939, 1, 1));
        assert!(note.has_known_date());
        assert!(!NoteDocument::from_text("@name X").has_known_date());
    }

    // === Document ===

    #[test]
    fn test_fields_are_stable() {
        let note = NoteDocument::from_text("@name A B\nSum\n\nBody\n@tags x y\n@date 2001");
        assert_eq!(note.name(), note.name());
        assert_eq!(note.summary(), note.summary());
        assert_eq!(note.text_body(), note.text_body());
        assert_eq!(note.tags(), note.tags());
        assert_eq!(note.date_text(), note.date_text());
        assert_eq!(note.parsed_date(), note.parsed_date());

        let copy = note.clone();
        assert_eq!(copy.summary(), "Sum");
    }

    #[test]
    fn test_markers_above_name() {
        let note = NoteDocument::from_text("@date 2018\n@tags a\n@name X\nSum\n\nBody");
        assert_eq!(note.name(), "X");
        assert_eq!(note.summary(), "Sum");
        assert_eq!(note.tags(), ["a"]);
        assert_eq!(note.date_text(), "2018");
        assert_eq!(note.text_body(), "");
    }

    #[test]
    fn test_is_note() {
        assert!(NoteDocument::is_note("x\n@tags a"));
        assert!(NoteDocument::is_note("@Date: 2018"));
        assert!(!NoteDocument::is_note("plain text @namely"));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("history");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("testifilu.txt");
        fs::write(&path, "@name Testi Filu\nSummary\nText\n@tags moi, hei, voi").unwrap();

        let note = NoteDocument::from_file(&path).unwrap();
        assert_eq!(note.name(), "Testi Filu");
        assert_eq!(note.summary(), "Summary\nText");
        assert_eq!(note.tags(), ["moi", "hei", "voi"]);
        assert_eq!(note.text_body(), "Summary\nText");
        assert_eq!(note.file_name().as_deref(), Some("testifilu.txt"));
        assert_eq!(note.folder_name().as_deref(), Some("history"));
        assert_eq!(note.source_path(), Some(path.as_path()));
    }

    #[test]
    fn test_from_text_has_no_path() {
        let note = NoteDocument::from_text("@name X");
        assert!(note.source_path().is_none());
        assert!(note.file_name().is_none());
    }
}
