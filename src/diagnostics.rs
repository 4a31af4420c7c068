//! Terminal diagnostic rendering for fatal compiler errors.
//!
//! Syntax and type diagnostics are plain text by contract and go to
//! stdout as the compilation result. The fatal kinds — lexer errors and
//! internal code generation failures — are rendered here as [`ariadne`]
//! reports with the offending source range highlighted.

use std::ops::Range;

use anchor::CompileError;
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// A fallback range pointing at the last character of the source.
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        source.len().saturating_sub(1)..source.len()
    }
}

/// Clamps a possibly-empty span range into something ariadne can label.
fn renderable_range(start: usize, end: usize, source: &str) -> Range<usize> {
    if start < end {
        start..end
    } else if start < source.len() {
        start..start + 1
    } else {
        end_of_source_range(source)
    }
}

pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    let (range, message) = match error {
        CompileError::Lex(lex_error) => (
            renderable_range(lex_error.span.start, lex_error.span.end, source),
            lex_error.message.clone(),
        ),
        CompileError::Codegen(codegen_error) => (
            codegen_error
                .span
                .map(|span| renderable_range(span.start, span.end, source))
                .unwrap_or_else(|| end_of_source_range(source)),
            codegen_error.message.clone(),
        ),
    };

    if let Err(report_error) = print_range_report(filename, source, range, &message) {
        eprintln!("Error in {}: {}", filename, message);
        eprintln!("(Failed to display detailed error report: {})", report_error);
    }
}
