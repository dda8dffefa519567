//! Lexical scanner for the Lox scripting language.
//!
//! [`scan`] turns a complete source text into an ordered list of [`Token`]s
//! ending in a single EOF token. Malformed input never aborts a scan: each
//! problem goes to a [`Reporter`] and scanning resumes at the next character.

pub mod error;
pub mod literal;
pub mod reporter;
pub mod scanner;
pub mod token;

pub use {
    error::{DriverError, ScanError},
    literal::Literal,
    reporter::{ErrorLog, Report, Reporter},
    scanner::{scan, Scanner},
    token::{keywords, SourcePosition, Token, TokenKind},
};
