use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Parse errors – one malformed line
// ---------------------------------------------------------------------------

/// What went wrong with a single field (or the line as a whole).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `id` or `year` was empty.
    MissingRequired,
    InvalidInteger,
    InvalidFloat,
    /// Parsed as a float but was `NaN` or infinite.
    NonFinite,
    /// The line did not have exactly the expected number of columns.
    ColumnCount { expected: usize, found: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingRequired => write!(f, "required value is empty"),
            ParseErrorKind::InvalidInteger => write!(f, "not an integer"),
            ParseErrorKind::InvalidFloat => write!(f, "not a decimal number"),
            ParseErrorKind::NonFinite => write!(f, "not a finite number"),
            ParseErrorKind::ColumnCount { expected, found } => {
                write!(f, "expected {expected} columns, found {found}")
            }
        }
    }
}

/// A typed failure to turn one delimited line into a [`Score`](crate::data::model::Score).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column '{column}' ('{value}'): {kind}")]
pub struct ParseError {
    /// 1-based line number in the source file (0 when parsing a bare line).
    pub line: u64,
    pub column: &'static str,
    pub value: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(column: &'static str, value: &str, kind: ParseErrorKind) -> Self {
        Self {
            line: 0,
            column,
            value: value.to_string(),
            kind,
        }
    }

    /// Attach the source line number once the loader knows it.
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}

// ---------------------------------------------------------------------------
// Load errors – reading a whole file
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("line {line} is not valid UTF-8")]
    Encoding { line: u64 },
    #[error("invalid record at {0}")]
    Parse(#[from] ParseError),
}

// ---------------------------------------------------------------------------
// Store errors – lookups and commits
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("cannot open database '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

// ---------------------------------------------------------------------------
// Session errors – what the presentation layer sees
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error loading CSV file: {0}")]
    Load(#[from] LoadError),
    #[error("Error importing data: {0}")]
    Store(#[from] StoreError),
    #[error("another load or import is already running")]
    Busy,
}
