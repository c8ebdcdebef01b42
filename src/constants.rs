//! Constants for notechad
//!
//! File naming rules and output formatting values shared
//! across the parser, the engine and the commands.

// === File Names ===

/// Extension of note files
pub const NOTE_EXTENSION: &str = ".txt";

/// Extension without the leading dot, as reported by `Path::extension`
pub const NOTE_EXTENSION_BARE: &str = "txt";

/// Ordered (illegal, substitute) pairs applied when turning a note name into a file name
pub const FILE_NAME_SUBSTITUTIONS: &[(char, char)] = &[
    ('ä', 'a'),
    ('ö', 'o'),
    ('å', 'o'),
    (' ', '_'),
    ('.', '_'),
];

/// Characters that are never allowed in a file name (control characters are rejected separately)
pub const FORBIDDEN_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

// === Note Contents ===

/// Separator between tags when writing a tag line
pub const TAG_LIST_SEPARATOR: &str = ", ";

// === Output ===

/// Column width used when wrapping summaries and tag lists
pub const WRAP_WIDTH: usize = 60;

/// Header of the folder column; also its minimum width
pub const FOLDER_HEADER: &str = "Folder";
