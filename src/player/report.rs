//! Textual outcome of a controller command

use super::error::CommandError;
use std::fmt;

/// Ordered lines describing what a command did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report consisting of a single line
    pub fn line(text: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.push(text);
        report
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append every line of another report
    pub fn extend(&mut self, other: Report) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<CommandError> for Report {
    fn from(err: CommandError) -> Self {
        Self::line(err.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
