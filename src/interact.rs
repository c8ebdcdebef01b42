//! Side effects the commands depend on: launching a note in an external
//! program and asking the user a yes/no question.
//!
//! Both are traits so commands receive them explicitly and tests can swap in
//! fakes.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

/// Opens a note file for the user
pub trait Opener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Launches the configured editor, or the platform's default handler.
/// Does not wait for the launched program.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    editor: Option<String>,
}

impl SystemOpener {
    pub fn new(editor: Option<String>) -> Self {
        Self { editor }
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        match self.editor.as_deref().map(str::split_whitespace) {
            Some(mut parts) => {
                let program = parts.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "Editor command is empty")
                })?;
                log::info!("opening {} with {}", path.display(), program);
                Command::new(program).args(parts).arg(path).spawn()?;
                Ok(())
            }
            None => {
                log::info!("opening {} with default handler", path.display());
                open::that_detached(path)
            }
        }
    }
}

/// Asks the user to confirm an action
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Line-based yes/no prompt. Repeats until it gets an answer; end of input
/// counts as "no".
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "\n{} [y/n] ", question)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(false);
            }

            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid answer")?,
            }
        }
    }
}
