use crate::context::{ContextId, Frames};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DivisionByZero,
    TypeMismatch,
}

/// Runtime diagnostic produced by arithmetic on [`NumericValue`]s.
///
/// Carries the four pieces of data the evaluator needs to attribute a
/// failure: the error kind, the source span it points at, a human-readable
/// message, and a handle to the execution frame it happened in. The span
/// is optional because a value the evaluator has not yet stamped carries
/// no span.
///
/// [`NumericValue`]: crate::value::NumericValue
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
    pub message: String,
    pub context: Option<ContextId>,
}

impl RuntimeError {
    pub fn new(
        kind: ErrorKind,
        span: Option<Span>,
        message: String,
        context: Option<ContextId>,
    ) -> Self {
        Self {
            kind,
            span,
            message,
            context,
        }
    }

    pub fn division_by_zero(span: Option<Span>, context: Option<ContextId>) -> Self {
        Self::new(
            ErrorKind::DivisionByZero,
            span,
            "Division by 0 isn't possible".to_string(),
            context,
        )
    }

    /// Built by the evaluator when a binary operand turns out not to be
    /// numeric. `op` is the verb ("add", "divide", ...), `found` the type
    /// name of the offending operand.
    pub fn type_mismatch(
        op: &str,
        found: &str,
        span: Option<Span>,
        context: Option<ContextId>,
    ) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            span,
            format!("Cannot {} number and {}", op, found),
            context,
        )
    }

    pub fn report(&self, source: &str, filename: Option<&str>, frames: &Frames) {
        let filename = filename.unwrap_or("<repl>");
        self.build(filename, frames)
            .print((filename, Source::from(source)))
            .unwrap();
    }

    /// Same as [`report`](Self::report) but writes to an arbitrary sink.
    pub fn write_report<W: io::Write>(
        &self,
        source: &str,
        filename: Option<&str>,
        frames: &Frames,
        out: W,
    ) -> io::Result<()> {
        let filename = filename.unwrap_or("<repl>");
        self.build(filename, frames)
            .write((filename, Source::from(source)), out)
    }

    fn build<'a>(&self, filename: &'a str, frames: &Frames) -> Report<'a, (&'a str, Range<usize>)> {
        let color = match self.kind {
            ErrorKind::DivisionByZero => Color::Magenta,
            ErrorKind::TypeMismatch => Color::Yellow,
        };

        let kind_str = match self.kind {
            ErrorKind::DivisionByZero => "Runtime Error",
            ErrorKind::TypeMismatch => "Type Error",
        };

        let offset = self.span.map(|span| span.start).unwrap_or(0);
        let mut report_builder = Report::build(ReportKind::Error, filename, offset)
            .with_message(format!("{}: {}", kind_str.fg(color), self.message));

        if let Some(span) = self.span {
            report_builder = report_builder.with_label(
                Label::new((filename, span.start..span.end))
                    .with_message(&self.message)
                    .with_color(color),
            );
        }

        if let Some(context) = self.context {
            report_builder = report_builder.with_note(format!(
                "{}: {}",
                "traceback".fg(Color::Cyan),
                frames.traceback(context)
            ));
        }

        report_builder.finish()
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
