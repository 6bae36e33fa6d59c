use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0} is not a string")]
    TypeMismatch(String),

    #[error(transparent)]
    NotSupported(#[from] NotSupportedError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Error::NotSupported(_) => ErrorKind::NotSupported,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Parse(_) => ErrorKind::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    TypeMismatch,
    NotSupported,
    Validation,
    Parse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::NotSupported => "not-supported",
            ErrorKind::Validation => "validation",
            ErrorKind::Parse => "parse",
        }
    }
}

// 長さ・文字種・値の範囲がこのクレートの扱える範囲を超えている
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotSupportedError {
    #[error("{input} is too long ({len} characters, at most {max})")]
    TooLong {
        input: String,
        len: usize,
        max: usize,
    },

    #[error("{input} contains unsupported characters. Supported format: {pattern}")]
    UnsupportedCharacters { input: String, pattern: String },

    #[error("{input} does not fit in a 64-bit unsigned integer")]
    Overflow { input: String },
}

// 機械的には読めるが一般的な書き方ではない
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty string")]
    EmptyInput,

    #[error("'一百' and '一十' are invalid in common writing. 100 is just '百', and 10 is just '十'")]
    RedundantOne,

    #[error("if '千' directly precedes the name of powers of myriad, '一' is normally attached before '千'")]
    MissingOneBeforeThousand,

    #[error("Each place (十,百,千) should not have more than one digit")]
    MultipleDigitsInPlace,

    #[error("万,億,兆 cannot be adjacent to each other or be the first character of the sequence")]
    AdjacentMyriadUnits,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Positional notation or place of '一' should not start with zero: {sequence}")]
    LeadingZero { sequence: String },

    #[error("Name of powers of 10 appears more than once in subsequence {sequence}")]
    UnsupportedSequence { sequence: String },

    #[error("{unit} appears more than once in subsequence {sequence}")]
    RepeatedUnit { unit: char, sequence: String },

    #[error("{sequence} does not fit in a 64-bit unsigned integer")]
    Overflow { sequence: String },
}
