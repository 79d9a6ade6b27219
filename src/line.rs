//! Lenient line-level parsing of GEDCOM source text.
//!
//! This is the independent diagnostic pass invoked by
//! [`crate::decode_with_diagnostics`]: it walks the already-transcoded
//! source text line by line, recognizing the GEDCOM line grammar (`level
//! [xref] tag [value]`) and recording a [`crate::diagnostics::Diagnostic`]
//! for every malformed line instead of aborting. It does not itself build
//! the document; [`Tokenizer`](crate::tokenizer::Tokenizer) remains the
//! producer of the structures consumed by the assembler. Running both over
//! the same source gives callers syntax-tier diagnostics without changing
//! how the document gets built.

use crate::diagnostics::{Diagnostic, DiagnosticCollector, Severity};

/// A single structurally-recognized GEDCOM line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Depth within the record's tree; 0 begins a new record.
    pub level: u8,
    /// Cross-reference identifier (`@token@`), if this line declares one.
    pub xref: Option<String>,
    /// The tag token. Leading underscore indicates a vendor extension.
    pub tag: String,
    /// The remainder of the line, if any (may be empty but present).
    pub value: Option<String>,
    /// 1-based source line number.
    pub source_line: u32,
}

/// Maximum structural nesting depth enforced while scanning, matching the
/// decoder's configurable default (see [`crate::builder::ParserConfig`]).
const DEFAULT_MAX_DEPTH: u8 = 100;

/// Scans `source` line by line, recognizing the GEDCOM line grammar and
/// recording a diagnostic for every malformed line instead of aborting.
///
/// Returns the sequence of successfully recognized lines, in source order.
/// A malformed line is skipped (not included in the result) and does not
/// prevent later, valid lines from being recognized.
pub fn parse_lines(source: &str, collector: &mut DiagnosticCollector) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut last_level: Option<u8> = None;

    for (idx, raw) in source.lines().enumerate() {
        let source_line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let trimmed = raw.trim_end_matches('\r');

        if trimmed.trim().is_empty() {
            collector.push(Diagnostic::new(
                source_line,
                Severity::Warning,
                "empty-line",
                "line is empty",
            ));
            continue;
        }

        let Some(line) = parse_one_line(trimmed, source_line, collector) else {
            continue;
        };

        if let Some(prev) = last_level {
            if line.level > prev + 1 {
                collector.push(
                    Diagnostic::new(
                        source_line,
                        Severity::Error,
                        "bad-level-jump",
                        format!("level jumped from {prev} to {}", line.level),
                    )
                    .with_context(trimmed.to_string()),
                );
                continue;
            }
        } else if line.level != 0 {
            collector.push(
                Diagnostic::new(
                    source_line,
                    Severity::Error,
                    "bad-level-jump",
                    format!("first line has level {} instead of 0", line.level),
                )
                .with_context(trimmed.to_string()),
            );
            continue;
        }

        if line.level >= DEFAULT_MAX_DEPTH {
            collector.push(
                Diagnostic::new(
                    source_line,
                    Severity::Error,
                    "bad-level-jump",
                    format!("nesting depth {} exceeds maximum of {DEFAULT_MAX_DEPTH}", line.level),
                )
                .with_context(trimmed.to_string()),
            );
            continue;
        }

        last_level = Some(line.level);
        lines.push(line);
    }

    lines
}

fn parse_one_line(trimmed: &str, source_line: u32, collector: &mut DiagnosticCollector) -> Option<Line> {
    let mut rest = trimmed;

    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        collector.push(
            Diagnostic::new(source_line, Severity::Error, "invalid-level", "line does not start with a level number")
                .with_context(trimmed.to_string()),
        );
        return None;
    }

    let level = match rest[..digits_end].parse::<u8>() {
        Ok(level) => level,
        Err(_) => {
            collector.push(
                Diagnostic::new(source_line, Severity::Error, "invalid-level", format!("level number out of range: {}", &rest[..digits_end]))
                    .with_context(trimmed.to_string()),
            );
            return None;
        }
    };
    rest = rest[digits_end..].trim_start();

    if rest.is_empty() {
        collector.push(
            Diagnostic::new(source_line, Severity::Error, "syntax-error", "line has a level but no tag")
                .with_context(trimmed.to_string()),
        );
        return None;
    }

    let mut xref = None;
    if let Some(stripped) = rest.strip_prefix('@') {
        match stripped.find('@') {
            Some(0) | None => {
                collector.push(
                    Diagnostic::new(source_line, Severity::Error, "invalid-xref", "malformed cross-reference")
                        .with_context(trimmed.to_string()),
                );
                return None;
            }
            Some(end) => {
                xref = Some(format!("@{}@", &stripped[..end]));
                rest = stripped[end + 1..].trim_start();
            }
        }
    }

    if rest.is_empty() {
        collector.push(
            Diagnostic::new(source_line, Severity::Error, "syntax-error", "line is missing a tag")
                .with_context(trimmed.to_string()),
        );
        return None;
    }

    let tag_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let tag = rest[..tag_end].to_string();
    let value_part = rest[tag_end..].trim_start();
    let value = if value_part.is_empty() { None } else { Some(value_part.to_string()) };

    Some(Line {
        level,
        xref,
        tag,
        value,
        source_line,
    })
}
