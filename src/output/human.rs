#![forbid(unsafe_code)]

//! Human-readable report, optionally colored
//!
//! Records with issues are listed in input order, each under an
//! `@kind{key}` header with its line number, followed by a summary line.

use crate::engine::ExecutionResult;
use crate::types::Severity;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human output formatter
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report to a color-capable writer
    ///
    /// Colors are only emitted if the writer supports them, so the same code
    /// serves terminals, files and test buffers.
    pub fn write(&self, result: &ExecutionResult, out: &mut dyn WriteColor) -> io::Result<()> {
        for record in result.records_with_issues() {
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "@{}{{{}}}", record.kind(), record.citation_key())?;
            out.reset()?;
            writeln!(out, " (line {})", record.line_number())?;
            if let Some(title) = record.title() {
                writeln!(out, "  {}", title)?;
            }

            for issue in record.issues() {
                write!(out, "  ")?;
                out.set_color(&severity_color(issue.severity()))?;
                write!(out, "[{}]", issue.severity())?;
                out.reset()?;
                writeln!(out, " {} ({})", issue.message(), issue.legend())?;
            }
            writeln!(out)?;
        }

        let errors = result.count_severity(Severity::Error);
        let warnings = result.count_severity(Severity::Warning);

        if errors == 0 && warnings == 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "No issues found.")?;
            out.reset()?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "Checked {} of {} entries: {} errors, {} warnings",
            result.records_checked,
            result.records.len(),
            errors,
            warnings
        )?;
        out.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_color(severity: Severity) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match severity {
        Severity::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
        Severity::Warning => spec.set_fg(Some(Color::Yellow)).set_bold(true),
        Severity::Info => spec.set_fg(Some(Color::Cyan)),
    };
    spec
}
