//! Find command module
//!
//! Prints the matching notes as a table followed by their tags, most used
//! first. `--peek` adds summaries, `--open` launches every result.

use std::io;
use notechad::display;
use notechad::query::NoteQuery;
use notechad::{NoteEngine, NoteError, Opener, ResolveContext, Result, SortKey, SortOrder};

#[allow(clippy::too_many_arguments)]
pub fn run(
    ctx: &ResolveContext,
    engine: &NoteEngine,
    opener: &dyn Opener,
    words: &[String],
    sort: Option<SortKey>,
    desc: bool,
    peek: bool,
    open: bool,
) -> Result<()> {
    let query = NoteQuery::from_words(words);
    let notes = engine.search(&query, sort_order(sort, desc))?;

    if notes.is_empty() {
        return Err(NoteError::NoNotes);
    }

    if ctx.json {
        let json = display::render_json(&notes).map_err(io::Error::from)?;
        println!("{}", json);
    } else {
        println!("{}", display::render_table(&notes));
        println!();
        println!("{}", display::render_tags(&notes));
        if peek {
            println!();
            println!("{}", display::render_peek(&notes));
        }
    }

    if open {
        for note in &notes {
            if let Some(path) = note.source_path() {
                opener.open(path)?;
            }
        }
    }

    Ok(())
}

fn sort_order(sort: Option<SortKey>, desc: bool) -> SortOrder {
    match (sort, desc) {
        (None, _) => SortOrder::None,
        (Some(SortKey::Date), false) => SortOrder::DateAscending,
        (Some(SortKey::Date), true) => SortOrder::DateDescending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl Opener for RecordingOpener {
        fn open(&self, path: &Path) -> io::Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn setup() -> (TempDir, ResolveContext, NoteEngine) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "@name Alpha Note\n@tags x\n@date 2001").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "@name Beta Note\n@tags y\n@date 1999").unwrap();
        let ctx = ResolveContext {
            root: temp_dir.path().to_path_buf(),
            editor: None,
            json: false,
        };
        let engine = NoteEngine::new(temp_dir.path());
        (temp_dir, ctx, engine)
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(sort_order(None, true), SortOrder::None);
        assert_eq!(sort_order(Some(SortKey::Date), false), SortOrder::DateAscending);
        assert_eq!(sort_order(Some(SortKey::Date), true), SortOrder::DateDescending);
    }

    #[test]
    fn test_find_opens_results_in_order() {
        let (temp_dir, ctx, engine) = setup();
        let opener = RecordingOpener::default();

        run(&ctx, &engine, &opener, &["note".to_string()], Some(SortKey::Date), false, true, true).unwrap();

        assert_eq!(
            *opener.opened.borrow(),
            vec![temp_dir.path().join("b.txt"), temp_dir.path().join("a.txt")]
        );
    }

    #[test]
    fn test_find_nothing() {
        let (_temp_dir, ctx, engine) = setup();
        let opener = RecordingOpener::default();

        let err = run(&ctx, &engine, &opener, &["#missing".to_string()], None, false, false, false).unwrap_err();
        assert!(matches!(err, NoteError::NoNotes));
    }

    #[test]
    fn test_find_json() {
        let (_temp_dir, mut ctx, engine) = setup();
        ctx.json = true;
        let opener = RecordingOpener::default();

        run(&ctx, &engine, &opener, &["#x".to_string()], None, false, false, false).unwrap();
        assert!(opener.opened.borrow().is_empty());
    }
}
