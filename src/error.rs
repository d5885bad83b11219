use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid literal in clause ({a} {b}): 0 is the clause terminator")]
    InvalidLiteral { a: i32, b: i32 },

    #[error("line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("failed to read clause input: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
