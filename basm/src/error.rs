use std::fmt;

use pest::error::Error as PestError;
use pest::Span;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembly failures.
///
/// Every variant names the offending source line. Assembly is
/// all-or-nothing: the first failure aborts the whole translation and no
/// partial image is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The source text did not lex.
    Lex(PestError<Rule>),
    /// The mnemonic is not in the instruction table.
    UnknownMnemonic { line: usize, mnemonic: String },
    /// A register operand was malformed or out of `$r0..$r7`.
    BadRegister { line: usize, token: String },
    /// An immediate operand was malformed or not representable in 9 bits.
    BadImmediate { line: usize, token: String },
    /// A branch or jump names a label that was never declared.
    UnknownLabel { line: usize, label: String },
    /// A resolved byte offset does not fit the instruction's offset field.
    OffsetOutOfRange {
        line: usize,
        target: String,
        offset: i64,
    },
    /// An encoding slot did not come out at exactly 16 bits.
    InternalEncoding { line: usize },
}

impl Error {
    fn line(span: &Span) -> usize {
        span.start_pos().line_col().0
    }

    pub(crate) fn unknown_mnemonic(span: &Span, mnemonic: &str) -> Error {
        Error::UnknownMnemonic {
            line: Error::line(span),
            mnemonic: mnemonic.to_owned(),
        }
    }

    pub(crate) fn bad_register(span: &Span, token: &str) -> Error {
        Error::BadRegister {
            line: Error::line(span),
            token: token.to_owned(),
        }
    }

    pub(crate) fn bad_immediate(span: &Span, token: &str) -> Error {
        Error::BadImmediate {
            line: Error::line(span),
            token: token.to_owned(),
        }
    }

    pub(crate) fn unknown_label(span: &Span, label: &str) -> Error {
        Error::UnknownLabel {
            line: Error::line(span),
            label: label.to_owned(),
        }
    }

    pub(crate) fn offset_out_of_range(span: &Span, target: &str, offset: i64) -> Error {
        Error::OffsetOutOfRange {
            line: Error::line(span),
            target: target.to_owned(),
            offset,
        }
    }

    pub(crate) fn internal_encoding(span: &Span) -> Error {
        Error::InternalEncoding {
            line: Error::line(span),
        }
    }

    pub(crate) fn internal_encoding_at(line: usize) -> Error {
        Error::InternalEncoding { line }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "{}", err),
            Error::UnknownMnemonic { line, mnemonic } => {
                write!(f, "line {}: unknown mnemonic `{}`", line, mnemonic)
            }
            Error::BadRegister { line, token } => {
                write!(f, "line {}: `{}` is not a register ($r0..$r7)", line, token)
            }
            Error::BadImmediate { line, token } => {
                write!(f, "line {}: `{}` is not a valid immediate", line, token)
            }
            Error::UnknownLabel { line, label } => {
                write!(f, "line {}: unknown label `{}`", line, label)
            }
            Error::OffsetOutOfRange {
                line,
                target,
                offset,
            } => write!(
                f,
                "line {}: offset of {} bytes to `{}` does not fit the offset field",
                line, offset, target
            ),
            Error::InternalEncoding { line } => {
                write!(f, "line {}: instruction did not encode to 16 bits", line)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<PestError<Rule>> for Error {
    fn from(err: PestError<Rule>) -> Error {
        Error::Lex(err)
    }
}
