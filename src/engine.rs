//! NoteEngine - note operations over a notes root directory
//!
//! Provides:
//! - Recursive discovery of `*.txt` note files
//! - Loading and searching parsed notes
//! - Note creation with overwrite confirmation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants as C;
use crate::error::{NoteError, Result};
use crate::interact::Prompt;
use crate::note::NoteDocument;
use crate::query::{sort_notes, NoteQuery, SortOrder};
use crate::util;

/// Outcome of [`NoteEngine::create_note`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The note file was written
    Created(PathBuf),
    /// The file existed and the user declined to replace it
    Cancelled(PathBuf),
}

/// Core engine for note operations
#[derive(Debug, Clone)]
pub struct NoteEngine {
    root: PathBuf,
}

impl NoteEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // === Discovery ===

    /// All `*.txt` files below the root, in a stable order.
    /// Hidden directories (`.git` and friends) are skipped; hidden files are not.
    pub fn list_text_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !(entry.file_type().is_dir() && is_hidden(entry.file_name()))
            });

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && has_note_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        log::debug!("found {} text files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Parse every note file below the root
    pub fn load_notes(&self) -> io::Result<Vec<NoteDocument>> {
        self.list_text_files()?
            .iter()
            .map(NoteDocument::from_file)
            .collect()
    }

    // === Queries ===

    /// Re-read all notes and return the ones matching `query`
    pub fn search(&self, query: &NoteQuery, order: SortOrder) -> io::Result<Vec<NoteDocument>> {
        let mut notes = query.select(self.load_notes()?);
        sort_notes(&mut notes, order);
        Ok(notes)
    }

    /// First note (in enumeration order) matching the query's name
    pub fn find_first(&self, query: &NoteQuery) -> io::Result<Option<NoteDocument>> {
        Ok(self.search(query, SortOrder::None)?.into_iter().next())
    }

    // === Creation ===

    /// Path a note with this name is created at
    pub fn note_path(&self, note_name: &str) -> Option<PathBuf> {
        let file_name = util::file_name_for(note_name);
        if file_name.is_empty() {
            None
        } else {
            Some(self.root.join(file_name))
        }
    }

    /// Write a new note skeleton into the root directory.
    ///
    /// When the file already exists and `overwrite` is false, `prompt` decides
    /// whether to replace it.
    pub fn create_note(
        &self,
        note_name: &str,
        tags: &[String],
        overwrite: bool,
        prompt: &mut dyn Prompt,
    ) -> Result<CreateOutcome> {
        let note_path = self.note_path(note_name).ok_or(NoteError::MissingName("new"))?;

        if note_path.exists() && !overwrite {
            let question = format!("File \"{}\" already exists. Replace it?", display_file_name(&note_path));
            if !prompt.confirm(&question)? {
                return Ok(CreateOutcome::Cancelled(note_path));
            }
        }

        write_all_text(&note_path, &note_contents(note_name, tags))?;
        log::info!("created note {}", util::display_path(&note_path));

        Ok(CreateOutcome::Created(note_path))
    }
}

/// Text of a freshly created note
pub fn note_contents(note_name: &str, tags: &[String]) -> String {
    format!("@Name {}\n\n@Tags {}", note_name, tags.join(C::TAG_LIST_SEPARATOR))
}

/// Read a whole file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_all_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a whole file, creating parent directories if needed
pub fn write_all_text(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

/// File name part of a path for messages
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| util::display_path(path))
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn has_note_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(C::NOTE_EXTENSION_BARE))
        .unwrap_or(false)
}
