/*!
`ged_io` is a Rust crate for parsing GEDCOM files.

The library works with GEDCOM (GEnealogical Data Communication), a text-based format widely
supported by genealogy software for storing and exchanging family history data. `ged_io` transforms
this text format into workable Rust data structures through four stages: character-set detection
and transcoding ([`encoding`]), line-level tokenizing ([`tokenizer`]), structural assembly into
typed, cross-linked records ([`types`]), and, where GEDCOM dates name a non-Gregorian calendar,
multi-calendar date arithmetic ([`calendar`]).

Basic example:

```rust
use ged_io::Gedcom;

// Parse a GEDCOM file
let source = std::fs::read_to_string("./tests/fixtures/sample.ged").unwrap();
let mut gedcom = Gedcom::new(source.chars()).unwrap();
let gedcom_data = gedcom.parse_data().unwrap();

// Display file statistics
gedcom_data.stats();
```

Callers who need strict/lenient control, cross-reference validation, progress reporting, or
cancellation should build through [`GedcomBuilder`] instead, or call [`decode`] /
[`decode_with_diagnostics`] directly.

This crate contains an optional `"json"` feature that implements serialization and deserialization to JSON with [`serde`](https://serde.rs).

JSON serialization example:

```rust
#[cfg(feature = "json")]
use ged_io::Gedcom;
# #[cfg(feature = "json")]
# fn main() {

// Parse a GEDCOM file
let source = std::fs::read_to_string("./tests/fixtures/sample.ged").unwrap();
let mut gedcom = Gedcom::new(source.chars()).unwrap();
let gedcom_data = gedcom.parse_data().unwrap();

// Serialize to JSON
let json_output = serde_json::to_string_pretty(&gedcom_data).unwrap();
println!("{}", json_output);

// Or save to file
std::fs::write("family.json", json_output).unwrap();
# }
# #[cfg(not(feature = "json"))]
# fn main() {}
```
*/

#![deny(clippy::pedantic)]
#![warn(missing_docs)]

#[macro_use]
mod util;

pub(crate) mod tokenizer;

mod error;
pub use error::GedcomError;

pub mod parser;
pub use parser::{parse_subset, Parser};

mod gedcom;
pub use gedcom::Gedcom;

pub mod types;
pub use types::GedcomData;

pub mod encoding;
pub mod line;
pub mod version;
pub mod vendor;
pub mod diagnostics;
pub mod calendar;

mod builder;
pub use builder::{GedcomBuilder, ParserConfig};

pub mod indexed;
pub use indexed::IndexedGedcomData;

pub mod stream;

mod debug;
mod display;

#[cfg(feature = "gedzip")]
pub mod gedzip;

pub mod writer;

use diagnostics::DiagnosticCollector;

/// Decodes GEDCOM source text with default (lenient) options.
///
/// This is a convenience wrapper around [`GedcomBuilder::build_from_str`] for
/// callers who do not need progress reporting, cancellation, or a diagnostic
/// collection.
///
/// # Errors
///
/// Returns a `GedcomError` if the input does not conform to the GEDCOM grammar,
/// or if a fatal-tier condition (unsupported encoding, invalid UTF-8, nesting
/// depth exceeded) is encountered.
pub fn decode(source: &str) -> Result<GedcomData, GedcomError> {
    GedcomBuilder::new().build_from_str(source)
}

/// Decodes GEDCOM source text using an explicitly configured [`GedcomBuilder`].
///
/// # Errors
///
/// Returns a `GedcomError` under the same conditions as [`decode`], plus any
/// additional constraints configured on `builder` (file size limit, strict
/// mode, reference validation).
pub fn decode_with_options(builder: GedcomBuilder, source: &str) -> Result<GedcomData, GedcomError> {
    builder.build_from_str(source)
}

/// Decodes GEDCOM source text in lenient mode, collecting syntax- and
/// semantic-tier problems (empty lines, unparseable levels, malformed
/// cross-references, bad level jumps, out-of-range enumerated values) into
/// `collector` instead of treating them as fatal.
///
/// The source is first walked line-by-line by [`line::parse_lines`], which is
/// where syntax-tier diagnostics are raised. The same collector is then
/// attached to the tokenizer that drives structural assembly, so
/// record-content parsers (e.g. an invalid `QUAY` value) can also record
/// semantic-tier diagnostics via [`diagnostics::push_to`]. Returns the parsed
/// [`GedcomData`] even when `collector` has recorded errors; callers should
/// check [`DiagnosticCollector::has_errors`] before trusting the result when
/// that matters for their use case.
///
/// # Errors
///
/// Returns a `GedcomError` only for conditions in the fatal tier (I/O failure,
/// unsupported encoding, invalid UTF-8, nesting depth exceeded, cancellation).
pub fn decode_with_diagnostics(
    source: &str,
    collector: &mut DiagnosticCollector,
) -> Result<GedcomData, GedcomError> {
    line::parse_lines(source, collector);

    let mut tokenizer =
        tokenizer::Tokenizer::new(source.chars()).with_diagnostics(std::mem::take(collector));
    tokenizer.next_token()?;
    let result = GedcomData::new(&mut tokenizer, 0);
    if let Some(semantic) = tokenizer.take_diagnostics() {
        collector.extend(semantic);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_document() {
        let sample = "0 HEAD\n1 GEDC\n2 VERS 5.5\n0 TRLR";
        let data = decode(sample).unwrap();
        assert_eq!(
            data.header.unwrap().gedcom.unwrap().version.unwrap(),
            "5.5"
        );
    }

    #[test]
    fn test_decode_with_diagnostics_is_nil_tolerant() {
        let sample = "0 HEAD\n1 GEDC\n2 VERS 5.5\n0 TRLR";
        let mut collector = DiagnosticCollector::new();
        let data = decode_with_diagnostics(sample, &mut collector).unwrap();
        assert!(!collector.has_errors());
        assert_eq!(data.header.unwrap().gedcom.unwrap().version.unwrap(), "5.5");
    }
}
