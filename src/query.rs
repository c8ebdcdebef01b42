//! Note selection and ranking
//!
//! A [`NoteQuery`] holds the search criteria typed by the user. The name axis
//! matches whole words only: a note named "Hello World" is found by "world"
//! but not by "worl".

use std::collections::HashMap;

use crate::note::NoteDocument;
use crate::util;

/// Search criteria. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub name_fragment: String,
    pub exact_file_name: String,
    pub tags: Vec<String>,
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep enumeration order
    #[default]
    None,
    DateAscending,
    DateDescending,
}

impl NoteQuery {
    pub fn new(name_fragment: impl Into<String>, tags: Vec<String>) -> Self {
        let name_fragment = name_fragment.into();
        let exact_file_name = util::file_name_for(&name_fragment);
        Self { name_fragment, exact_file_name, tags }
    }

    /// Build criteria from command-line words.
    ///
    /// Words before the first `#word` form the name; every `#word` is a tag.
    /// `["hello", "world", "#moi"]` gives name "hello world" and tag "moi".
    pub fn from_words(words: &[String]) -> Self {
        let name = words
            .iter()
            .map(String::as_str)
            .take_while(|word| !word.starts_with('#'))
            .collect::<Vec<_>>()
            .join(" ");

        let tags = words
            .iter()
            .filter_map(|word| word.strip_prefix('#'))
            .map(util::sanitize_tag)
            .filter(|tag| !tag.is_empty())
            .collect();

        Self::new(name, tags)
    }

    pub fn has_name_constraint(&self) -> bool {
        !self.name_fragment.is_empty() || !self.exact_file_name.is_empty()
    }

    /// Whether a document satisfies both axes. Unnamed documents never match.
    pub fn matches(&self, note: &NoteDocument) -> bool {
        if note.name().is_empty() {
            return false;
        }
        self.matches_name(note) && self.matches_tags(note)
    }

    fn matches_name(&self, note: &NoteDocument) -> bool {
        if !self.has_name_constraint() {
            return true;
        }

        if !self.exact_file_name.is_empty()
            && note.file_name().as_deref() == Some(self.exact_file_name.as_str())
        {
            return true;
        }

        let name = note.name().to_lowercase();
        let fragment = self.name_fragment.to_lowercase();
        if name == fragment {
            return true;
        }

        let fragment_words: Vec<&str> = words(&fragment).collect();
        let name_words: Vec<&str> = words(&name).collect();
        name_words.iter().any(|word| fragment_words.contains(word))
    }

    fn matches_tags(&self, note: &NoteDocument) -> bool {
        self.tags.is_empty() || note.tags().iter().any(|tag| self.tags.contains(tag))
    }

    /// Keep the matching documents, preserving input order
    pub fn select(&self, notes: Vec<NoteDocument>) -> Vec<NoteDocument> {
        let total = notes.len();
        let selected: Vec<NoteDocument> = notes.into_iter().filter(|note| self.matches(note)).collect();
        log::debug!("query {:?} matched {} of {} notes", self, selected.len(), total);
        selected
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// Sort in place by parsed date. The sort is stable; notes without a
/// parseable date carry the minimum date and come first when ascending.
pub fn sort_notes(notes: &mut [NoteDocument], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::DateAscending => notes.sort_by_key(|note| note.parsed_date()),
        SortOrder::DateDescending => notes.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date())),
    }
}

/// Count tag occurrences across notes, most frequent first.
/// Equal counts keep the order in which the tags were first seen.
pub fn tag_frequencies(notes: &[NoteDocument]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for note in notes {
        for tag in note.tags() {
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.as_str(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Tags ordered from most to least used
pub fn ranked_tags(notes: &[NoteDocument]) -> Vec<String> {
    tag_frequencies(notes).into_iter().map(|(tag, _)| tag).collect()
}
