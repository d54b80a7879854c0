use std::io;
use thiserror::Error;

/// Every failure the front end can report.
///
/// The `Display` text of lexical and syntax errors is the fixed diagnostic
/// shown to the user. Line numbers are carried alongside and exposed through
/// [`PseudoError::line`] instead of being baked into the message.
#[derive(Debug, Error)]
pub enum PseudoError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Lexical analysis errors
    #[error("Syntax error: unknown token '{token}'")]
    UnknownToken { token: String, line: usize },
    #[error("Syntax error: unterminated string literal")]
    UnterminatedString { line: usize },
    #[error("Syntax error: invalid number '{number}'")]
    InvalidNumber { number: String, line: usize },

    // Parsing errors
    #[error("Syntax error: {expected} expected")]
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    #[error("Syntax error: unexpected token '{token}'")]
    UnexpectedToken { token: String, line: usize },
    #[error("Syntax error: {message}")]
    InvalidStatement { message: String, line: usize },
}

impl PseudoError {
    /// Create a syntax error for a missing construct
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        PseudoError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Create an error for a construct that is well formed but not allowed where it appears
    pub fn invalid_statement(message: impl Into<String>, line: usize) -> Self {
        PseudoError::InvalidStatement {
            message: message.into(),
            line,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            PseudoError::FileReadError(_) | PseudoError::IoError(_) => None,
            PseudoError::UnknownToken { line, .. }
            | PseudoError::UnterminatedString { line }
            | PseudoError::InvalidNumber { line, .. }
            | PseudoError::SyntaxError { line, .. }
            | PseudoError::UnexpectedToken { line, .. }
            | PseudoError::InvalidStatement { line, .. } => Some(*line),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        self.line().is_some()
    }
}

// Type alias for Result with PseudoError
pub type PseudoResult<T> = Result<T, PseudoError>;
