//! Create note command module

use notechad::engine::display_file_name;
use notechad::query::NoteQuery;
use notechad::util;
use notechad::{CreateOutcome, NoteEngine, Opener, Prompt, Result};

pub fn run(
    engine: &NoteEngine,
    opener: &dyn Opener,
    prompt: &mut dyn Prompt,
    words: &[String],
    overwrite: bool,
    no_open: bool,
) -> Result<()> {
    let query = NoteQuery::from_words(words);

    match engine.create_note(&query.name_fragment, &query.tags, overwrite, prompt)? {
        CreateOutcome::Created(note_path) => {
            // Output full path for shell pipeline compatibility
            println!("{}", util::display_path(&note_path));
            if !no_open {
                opener.open(&note_path)?;
            }
        }
        CreateOutcome::Cancelled(note_path) => {
            println!("Creation of \"{}\" cancelled.", display_file_name(&note_path));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use notechad::NoteError;
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

    struct Decline;

    impl Prompt for Decline {
        fn confirm(&mut self, _question: &str) -> io::Result<bool> {
            Ok(false)
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_new_creates_and_opens() {
        let temp_dir = TempDir::new().unwrap();
        let engine = NoteEngine::new(temp_dir.path());
        let opener = RecordingOpener::default();

        run(&engine, &opener, &mut Decline, &words(&["Hello", "World", "#greeting", "#"]), false, false).unwrap();

        let path = temp_dir.path().join("hello_world.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "@Name Hello World\n\n@Tags greeting");
        assert_eq!(*opener.opened.borrow(), vec![path]);
    }

    #[test]
    fn test_new_no_open() {
        let temp_dir = TempDir::new().unwrap();
        let engine = NoteEngine::new(temp_dir.path());
        let opener = RecordingOpener::default();

        run(&engine, &opener, &mut Decline, &words(&["Quiet"]), false, true).unwrap();

        assert!(temp_dir.path().join("quiet.txt").exists());
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_new_cancelled_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kept.txt");
        fs::write(&path, "original").unwrap();
        let engine = NoteEngine::new(temp_dir.path());
        let opener = RecordingOpener::default();

        run(&engine, &opener, &mut Decline, &words(&["Kept"]), false, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_new_requires_name() {
        let temp_dir = TempDir::new().unwrap();
        let engine = NoteEngine::new(temp_dir.path());
        let opener = RecordingOpener::default();

        let err = run(&engine, &opener, &mut Decline, &words(&["#only_tags"]), false, false).unwrap_err();
        assert!(matches!(err, NoteError::MissingName(_)));
    }
}
