use crate::error::ScanError;

/// Receiver of lexical errors.
///
/// The scanner never fails; it hands every problem it finds to a reporter and
/// keeps going. Whether anything went wrong is tracked here, not in the
/// scanner.
pub trait Reporter {
    fn report(&mut self, line: usize, location: &str, message: &str);

    fn had_error(&self) -> bool;

    /// Forget previously reported errors.
    fn reset(&mut self);

    fn report_scan_error(&mut self, error: &ScanError) {
        self.report(error.line(), "", &error.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Reporter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct ErrorLog {
    reports: Vec<Report>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl Reporter for ErrorLog {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.reports.push(Report {
            line,
            location: location.into(),
            message: message.into(),
        });
    }

    fn had_error(&self) -> bool {
        !self.reports.is_empty()
    }

    fn reset(&mut self) {
        self.reports.clear();
    }
}
