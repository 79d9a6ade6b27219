//! Error types produced while decoding GEDCOM data.
//!
//! `GedcomError` covers the fatal tier described by the crate: conditions
//! that always abort decoding. Lower-severity syntax and semantic problems
//! are instead routed through a [`crate::diagnostics::DiagnosticCollector`]
//! when the caller opts into lenient mode, rather than becoming a `GedcomError`.

use std::fmt;

/// Represents errors that can occur during GEDCOM parsing.
#[derive(Debug)]
pub enum GedcomError {
    /// A parsing error, with the line number and a message.
    ParseError {
        /// The line number where the error occurred.
        line: usize,
        /// The error message.
        message: String,
    },
    /// An invalid GEDCOM format error.
    InvalidFormat(String),
    /// An I/O error encountered while reading a source.
    IoError(String),
    /// A character-set detection or transcoding error.
    EncodingError(String),
    /// The input exceeded a configured size limit.
    FileSizeLimitExceeded {
        /// The observed size, in bytes.
        size: usize,
        /// The configured maximum, in bytes.
        max_size: usize,
    },
    /// Nesting exceeded the configured maximum structural depth.
    NestingDepthExceeded {
        /// The depth at which the limit was hit.
        depth: usize,
        /// The configured maximum depth.
        max_depth: usize,
    },
    /// Decoding was stopped by a caller-supplied cancellation handle.
    Cancelled,
}

impl fmt::Display for GedcomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GedcomError::ParseError { line, message } => {
                write!(f, "Parse error at line {line}: {message}")
            }
            GedcomError::InvalidFormat(msg) => write!(f, "Invalid GEDCOM format: {msg}"),
            GedcomError::IoError(err) => write!(f, "IO error: {err}"),
            GedcomError::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            GedcomError::FileSizeLimitExceeded { size, max_size } => write!(
                f,
                "input size {size} bytes exceeds configured limit of {max_size} bytes"
            ),
            GedcomError::NestingDepthExceeded { depth, max_depth } => write!(
                f,
                "structural nesting depth {depth} exceeds configured maximum of {max_depth}"
            ),
            GedcomError::Cancelled => write!(f, "decoding was cancelled"),
        }
    }
}

impl std::error::Error for GedcomError {}

impl From<std::io::Error> for GedcomError {
    fn from(err: std::io::Error) -> Self {
        GedcomError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = GedcomError::ParseError {
            line: 10,
            message: "Unexpected token".to_string(),
        };
        assert_eq!(format!("{err}"), "Parse error at line 10: Unexpected token");
    }

    #[test]
    fn test_invalid_format_display() {
        let err = GedcomError::InvalidFormat("Missing header".to_string());
        assert_eq!(format!("{err}"), "Invalid GEDCOM format: Missing header");
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: GedcomError = io_err.into();
        assert_eq!(format!("{err}"), "IO error: File not found");
    }

    #[test]
    fn test_encoding_error_display() {
        let err = GedcomError::EncodingError("Invalid UTF-8 sequence".to_string());
        assert_eq!(format!("{err}"), "Encoding error: Invalid UTF-8 sequence");
    }

    #[test]
    fn test_file_size_limit_display() {
        let err = GedcomError::FileSizeLimitExceeded {
            size: 200,
            max_size: 100,
        };
        assert_eq!(
            format!("{err}"),
            "input size 200 bytes exceeds configured limit of 100 bytes"
        );
    }

    #[test]
    fn test_nesting_depth_exceeded_display() {
        let err = GedcomError::NestingDepthExceeded {
            depth: 101,
            max_depth: 100,
        };
        assert_eq!(
            format!("{err}"),
            "structural nesting depth 101 exceeds configured maximum of 100"
        );
    }
}
