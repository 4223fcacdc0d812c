use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Location;

/// Main error type for msgc operations
#[derive(Error, Diagnostic, Debug)]
pub enum MsgError {
    #[error("Message file not found: {}", path.display())]
    #[diagnostic(code(msgc::io::not_found), help("Check the input path"))]
    InputNotFound { path: PathBuf },

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(msgc::io))]
    Io { path: PathBuf, message: String },

    #[error("{}:{location}: invalid string in message file, expected {expected}", file.display())]
    #[diagnostic(
        code(msgc::parse::malformed),
        help("Lines must be a [Section], a {{Section}} or a Key: \"value\" pair")
    )]
    MalformedSyntax {
        file: PathBuf,
        location: Location,
        expected: &'static str,
    },

    #[error("{}:{location}: closing quotation mark not found", file.display())]
    #[diagnostic(code(msgc::parse::unterminated_quote))]
    UnterminatedQuote { file: PathBuf, location: Location },

    #[error("{}:{location}: invalid escape sequence \\{symbol}", file.display())]
    #[diagnostic(
        code(msgc::parse::invalid_escape),
        help("Supported escapes are \\\\, \\n, \\r and \\\"")
    )]
    InvalidEscape {
        file: PathBuf,
        location: Location,
        symbol: char,
    },

    #[error("{}:{location}: key {key} does not belong to a section", file.display())]
    #[diagnostic(
        code(msgc::parse::unassigned_key),
        help("Add a [Section] or {{Section}} header before the first key")
    )]
    UnassignedKey {
        file: PathBuf,
        location: Location,
        key: String,
    },

    #[error("{}:{location}: section {section:?} contains two keys named {key}", file.display())]
    #[diagnostic(code(msgc::parse::duplicate_key))]
    DuplicateKey {
        file: PathBuf,
        location: Location,
        section: String,
        key: String,
    },

    #[error("{}:{location}: file contains two sections named {name}", file.display())]
    #[diagnostic(code(msgc::parse::duplicate_section))]
    DuplicateSection {
        file: PathBuf,
        location: Location,
        name: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(msgc::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(msgc::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl MsgError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, context: &str, err: std::io::Error) -> Self {
        MsgError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, MsgError>;
