pub mod cli;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod interact;
pub mod note;
pub mod query;
pub mod resolve;
pub mod util;

pub use cli::{Cli, Command, SortKey};
pub use engine::{CreateOutcome, NoteEngine};
pub use error::{NoteError, Result};
pub use interact::{ConsolePrompt, Opener, Prompt, SystemOpener};
pub use note::NoteDocument;
pub use query::{NoteQuery, SortOrder};
pub use resolve::ResolveContext;
