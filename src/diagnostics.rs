//! Lenient-mode diagnostics collection.
//!
//! Decoding never halts on a syntax- or semantic-tier problem in lenient
//! mode; instead, each is recorded as a [`Diagnostic`] in a
//! [`DiagnosticCollector`]. The collector is nil-tolerant: every mutating
//! method is a no-op on an absent collector, so populators share a single
//! code path regardless of whether the caller wants diagnostics at all.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a recorded [`Diagnostic`].
///
/// The symbolic variant names are part of the stable surface; their
/// relative ordering/discriminant values are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Informational note; does not indicate a problem with the input.
    Info,
    /// A recoverable problem; the affected line or field was skipped or
    /// given a default value.
    Warning,
    /// A syntax-tier problem that, in strict mode, would have been fatal.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(f, "{s}")
    }
}

/// A single recorded problem encountered while decoding.
///
/// `code` is a short stable symbolic identifier (e.g. `invalid-level`,
/// `bad-level-jump`, `unknown-tag`, `invalid-value`) distinct from the
/// free-text `message`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// 1-based source line number the problem was found at.
    pub line: u32,
    /// How serious the problem is.
    pub severity: Severity,
    /// Stable symbolic code identifying the kind of problem.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// A short snippet of the offending source, when available.
    pub context: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with no context snippet.
    #[must_use]
    pub fn new(line: u32, severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            severity,
            code: code.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Attaches a context snippet to this diagnostic.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the stable diagnostic text form: `[SEVERITY] line N: CODE:
    /// message`, optionally followed by ` (context: "<snippet>")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] line {}: {}: {}",
            self.severity, self.line, self.code, self.message
        )?;
        if let Some(ref context) = self.context {
            write!(f, " (context: \"{context}\")")?;
        }
        Ok(())
    }
}

/// An append-only sequence of [`Diagnostic`]s accumulated during a decode.
///
/// Strict mode simply never constructs one. Populators that accept an
/// `Option<&mut DiagnosticCollector>` should route through [`push_to`]
/// rather than unwrapping, so the same code runs whether or not a collector
/// is present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    cap: Option<usize>,
}

impl DiagnosticCollector {
    /// Creates an empty collector with no error cap.
    #[must_use]
    pub fn new() -> Self {
        DiagnosticCollector::default()
    }

    /// Creates an empty collector that stops accepting new diagnostics once
    /// `cap` have been recorded, bounding memory usage on adversarial input.
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        DiagnosticCollector {
            diagnostics: Vec::new(),
            cap: Some(cap),
        }
    }

    /// Appends a diagnostic, unless the configured cap has been reached.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if let Some(cap) = self.cap {
            if self.diagnostics.len() >= cap {
                return;
            }
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if any diagnostic has [`Severity::Error`].
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns true if no diagnostics have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns all recorded diagnostics, in source order.
    #[must_use]
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns only the diagnostics with [`Severity::Error`].
    #[must_use]
    pub fn errors_only(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    /// Returns only the diagnostics with [`Severity::Warning`].
    #[must_use]
    pub fn warnings_only(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    /// Appends every diagnostic from `other`, respecting this collector's
    /// cap (not `other`'s).
    pub fn extend(&mut self, other: DiagnosticCollector) {
        for diagnostic in other.diagnostics {
            self.push(diagnostic);
        }
    }

    /// Renders every diagnostic on its own line, in source order.
    #[must_use]
    pub fn summary(&self) -> String {
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Appends `diagnostic` to `collector` if present; a no-op when `collector`
/// is `None`. Lets populators share one code path between strict mode
/// (collector absent) and lenient mode (collector attached).
pub fn push_to(collector: Option<&mut DiagnosticCollector>, diagnostic: Diagnostic) {
    if let Some(collector) = collector {
        collector.push(diagnostic);
    }
}
