use notechad::query::NoteQuery;
use notechad::util;
use notechad::{NoteEngine, NoteError, Opener, Result};

/// Open the first note whose name or file name matches. Tags are ignored.
pub fn run(engine: &NoteEngine, opener: &dyn Opener, words: &[String]) -> Result<()> {
    let query = NoteQuery {
        tags: Vec::new(),
        ..NoteQuery::from_words(words)
    };
    if !query.has_name_constraint() {
        return Err(NoteError::MissingName("open"));
    }

    let note = engine
        .find_first(&query)?
        .ok_or_else(|| NoteError::NoMatch(query.name_fragment.clone()))?;

    if let Some(path) = note.source_path() {
        println!("{}", util::display_path(path));
        opener.open(path)?;
    }

    Ok(())
}
