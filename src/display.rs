//! Terminal and JSON rendering of search results

use serde::Serialize;

use crate::constants as C;
use crate::note::NoteDocument;
use crate::query::ranked_tags;
use crate::util;

/// Serializable view of a note for `--json` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteView {
    pub name: String,
    pub file_name: Option<String>,
    pub folder: Option<String>,
    pub path: Option<String>,
    pub date: String,
    /// Parsed date as `YYYY-MM-DD`; absent when the date text does not parse
    pub parsed_date: Option<String>,
    pub summary: String,
    pub tags: Vec<String>,
}

impl From<&NoteDocument> for NoteView {
    fn from(note: &NoteDocument) -> Self {
        Self {
            name: note.name().to_string(),
            file_name: note.file_name(),
            folder: note.folder_name(),
            path: note.source_path().map(util::display_path),
            date: note.date_text().to_string(),
            parsed_date: note
                .has_known_date()
                .then(|| note.parsed_date().format("%Y-%m-%d").to_string()),
            summary: note.summary().to_string(),
            tags: note.tags().to_vec(),
        }
    }
}

/// Results as a pretty-printed JSON array
pub fn render_json(notes: &[NoteDocument]) -> serde_json::Result<String> {
    let views: Vec<NoteView> = notes.iter().map(NoteView::from).collect();
    serde_json::to_string_pretty(&views)
}

/// Aligned `NoteName | FileName | Folder | Date` table
pub fn render_table(notes: &[NoteDocument]) -> String {
    let rows: Vec<[String; 4]> = notes
        .iter()
        .map(|note| {
            [
                note.name().to_string(),
                note.file_name().unwrap_or_default(),
                note.folder_name().unwrap_or_default(),
                note.date_text().to_string(),
            ]
        })
        .collect();

    let width = |column: usize, header: &str| {
        rows.iter()
            .map(|row| row[column].chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0)
    };
    let name_width = width(0, "NoteName");
    let file_width = width(1, "FileName");
    let folder_width = width(2, C::FOLDER_HEADER);

    let format_row = |name: &str, file: &str, folder: &str, date: &str| {
        format!(
            " {:<nw$} | {:<fw$} | {:<dw$} | {}",
            name,
            file,
            folder,
            date,
            nw = name_width,
            fw = file_width,
            dw = folder_width
        )
    };

    let header = format_row("NoteName", "FileName", C::FOLDER_HEADER, "Date");
    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];
    for [name, file, folder, date] in &rows {
        lines.push(format_row(name, file, folder, date));
    }
    lines.join("\n")
}

/// Tags of all results, most used first, wrapped for the terminal
pub fn render_tags(notes: &[NoteDocument]) -> String {
    let tags = ranked_tags(notes).join(C::TAG_LIST_SEPARATOR);
    format!(" Tags:\n ------\n{}", util::wrap_text(&tags, C::WRAP_WIDTH))
}

/// Name, date and wrapped summary of every note
pub fn render_peek(notes: &[NoteDocument]) -> String {
    notes
        .iter()
        .map(|note| {
            let date = if note.date_text().is_empty() {
                String::new()
            } else {
                format!(" - {}", note.date_text())
            };
            let underline = "-".repeat(note.name().chars().count());
            format!(
                "{}{}\n{}\n{}",
                note.name(),
                date,
                underline,
                util::wrap_text(note.summary(), C::WRAP_WIDTH)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
