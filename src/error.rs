use {
    miette::{Diagnostic, SourceSpan},
    thiserror::Error,
};

/// Lexical errors. None of them stop the scan.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character '{character}'.")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        character: char,
        line: usize,
        #[label("cannot start a token")]
        span: SourceSpan,
    },
    #[error("Unterminated string.")]
    #[diagnostic(
        code(lox::scan::unterminated_string),
        help("add a closing '\"' before the end of input")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here and is never closed")]
        span: SourceSpan,
    },
}

impl ScanError {
    /// Line the error is reported at.
    ///
    /// For an unterminated string this is where scanning stopped, not where
    /// the opening quote was.
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> std::ops::Range<usize> {
        let span = match self {
            ScanError::UnexpectedCharacter { span, .. } => span,
            ScanError::UnterminatedString { span, .. } => span,
        };
        span.offset()..span.offset() + span.len()
    }
}

/// Failures of the command line driver itself.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Could not read from file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not install diagnostic handler")]
    Handler(#[from] miette::InstallError),
}

impl DriverError {
    /// Process exit status, following the BSD sysexits convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) => 64,
            DriverError::Io { .. } => 74,
            DriverError::Handler(_) => 70,
        }
    }
}
