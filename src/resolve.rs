//! Notes root and runtime settings resolution
//!
//! Settings come from, in priority order:
//! - command-line flags (`--root`, `--json`)
//! - environment variables (NOTECHAD_ROOT, NOTECHAD_EDITOR)
//! - the current working directory as the notes root

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable names
pub const ENV_NOTE_ROOT: &str = "NOTECHAD_ROOT";
pub const ENV_EDITOR: &str = "NOTECHAD_EDITOR";

/// Resolution context shared by all commands
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Directory searched recursively for notes; new notes are written here
    pub root: PathBuf,
    /// Program used to open notes instead of the platform default handler
    pub editor: Option<String>,
    /// Whether to output in JSON format
    pub json: bool,
}

impl ResolveContext {
    /// Create a context from the command-line flags and the environment
    pub fn new(root_flag: Option<&str>, json: bool) -> io::Result<Self> {
        // Treat empty strings as None
        let root_env = env::var(ENV_NOTE_ROOT).ok().filter(|s| !s.is_empty());
        let editor = env::var(ENV_EDITOR).ok().filter(|s| !s.is_empty());
        let cwd = env::current_dir()?;

        let root = resolve_root(root_flag, root_env.as_deref(), &cwd);
        log::debug!("notes root: {}", root.display());

        Ok(Self { root, editor, json })
    }
}

/// Pick the notes root: flag, then environment, then `cwd`.
/// Relative paths are taken relative to `cwd`; existing directories are
/// canonicalized.
pub fn resolve_root(flag: Option<&str>, env_value: Option<&str>, cwd: &Path) -> PathBuf {
    let chosen = flag
        .filter(|s| !s.is_empty())
        .or(env_value)
        .map(expand_home);

    let root = match chosen {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };

    // dunce avoids the UNC prefix on Windows
    dunce::canonicalize(&root).unwrap_or(root)
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
