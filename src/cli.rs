use clap::{Parser, Subcommand, ValueEnum};

/// notechad - search and create plain-text notes
///
/// # Note Format
///
/// ```text
/// @name Second World War
/// Summary paragraph, up to the first blank line.
///
/// Longer text...
/// @tags history, axis_powers
/// @date 1939-1945
/// ```
///
/// # Quick Reference
///
/// ```bash
/// notechad new Second World War #history #axis_powers   # Create second_world_war.txt
/// notechad find world                                   # Notes with the word "world" in their name
/// notechad find #history --sort date --desc             # Notes tagged history, newest first
/// notechad find world --peek                            # Also print summaries
/// notechad open second world war                        # Open the first matching note
/// ```
///
/// # Environment Variables
///
/// - `NOTECHAD_ROOT`: Notes directory (default: current directory)
/// - `NOTECHAD_EDITOR`: Program used to open notes (default: system handler)
/// - `RUST_LOG`: Log level, e.g. `debug`
#[derive(Parser, Debug)]
#[command(name = "notechad")]
#[command(version)]
#[command(about = "Create, tag and search plain-text notes")]
pub struct Cli {
    /// Notes directory, searched recursively (default: $NOTECHAD_ROOT or current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note, e.g. "new Second World War #axis_powers"
    New {
        /// Note name followed by #tags
        #[arg(required = true, value_name = "NAME|#TAG")]
        words: Vec<String>,

        /// Replace an existing file without asking
        #[arg(long)]
        overwrite: bool,

        /// Do not open the created note
        #[arg(long)]
        no_open: bool,
    },

    /// Find notes with a corresponding name or tag
    #[command(alias = "f")]
    Find {
        /// Name words and/or #tags
        #[arg(required = true, value_name = "NAME|#TAG")]
        words: Vec<String>,

        /// Sort results
        #[arg(short, long, value_enum)]
        sort: Option<SortKey>,

        /// Sort in descending order
        #[arg(short, long)]
        desc: bool,

        /// Print the summary of every result
        #[arg(short, long)]
        peek: bool,

        /// Open every result
        #[arg(short, long)]
        open: bool,
    },

    /// Open the first note matching a name
    #[command(alias = "o")]
    Open {
        /// Note name or file name
        #[arg(required = true, value_name = "NAME")]
        words: Vec<String>,
    },
}

/// Sort keys accepted by `find --sort`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Date,
}
