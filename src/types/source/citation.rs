pub mod data;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    parser::{parse_subset, Parser},
    tokenizer::{Token, Tokenizer},
    types::{
        custom::UserDefinedTag,
        multimedia::Multimedia,
        note::Note,
        source::{citation::data::Data, quay::CertaintyAssessment},
        Xref,
    },
    GedcomError,
};

/// Ancestry.com's vendor-specific `_APID` citation identifier.
///
/// Ancestry encodes this as `version,database::record` (e.g. `1,7163::0`);
/// the `database`/`record` pair is reconstructable into an Ancestry search
/// URL via [`ApidReference::to_url`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct ApidReference {
    pub version: String,
    pub database: String,
    pub record: String,
}

impl ApidReference {
    /// Parses a raw `_APID` value. Returns `None` if it doesn't match the
    /// `version,database::record` shape.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (version, rest) = raw.split_once(',')?;
        let (database, record) = rest.split_once("::")?;
        Some(ApidReference {
            version: version.to_string(),
            database: database.to_string(),
            record: record.to_string(),
        })
    }

    /// Reconstructs the Ancestry record URL this identifier points to.
    #[must_use]
    pub fn to_url(&self) -> String {
        format!(
            "https://search.ancestry.com/cgi-bin/sse.dll?db={}&rec={}",
            self.database, self.record
        )
    }
}

/// The data provided in the `SourceCitation` structure is source-related information specific to
/// the data being cited. (See GEDCOM 5.5 Specification page 39.)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Citation {
    /// Reference to the `Source`
    pub xref: Xref,
    /// Page number of source
    pub page: Option<String>,
    pub data: Option<Data>,
    pub note: Option<Note>,
    pub certainty_assessment: Option<CertaintyAssessment>,
    /// handles "RFN" tag; found in Ancestry.com export
    pub submitter_registered_rfn: Option<String>,
    /// Ancestry.com's vendor-specific permanent identifier (tag: `_APID`).
    pub apid: Option<ApidReference>,
    pub multimedia: Vec<Multimedia>,
    pub custom_data: Vec<Box<UserDefinedTag>>,
}

impl Citation {
    /// Creates a new `Citation` from a `Tokenizer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if parsing fails.
    pub fn new(tokenizer: &mut Tokenizer, level: u8) -> Result<Citation, GedcomError> {
        let mut citation = Citation {
            xref: tokenizer.take_line_value()?,
            page: None,
            data: None,
            note: None,
            certainty_assessment: None,
            multimedia: Vec::new(),
            custom_data: Vec::new(),
            submitter_registered_rfn: None,
            apid: None,
        };
        citation.parse(tokenizer, level)?;
        Ok(citation)
    }

    pub fn add_multimedia(&mut self, m: Multimedia) {
        self.multimedia.push(m);
    }
}

impl Parser for Citation {
    fn parse(&mut self, tokenizer: &mut Tokenizer, level: u8) -> Result<(), GedcomError> {
        tokenizer.next_token()?;

        let handle_subset = |tag: &str, tokenizer: &mut Tokenizer| -> Result<(), GedcomError> {
            let mut pointer: Option<String> = None;
            if let Token::Pointer(xref) = &tokenizer.current_token {
                pointer = Some(xref.to_string());
                tokenizer.next_token()?;
            }
            match tag {
                "PAGE" => self.page = Some(tokenizer.take_continued_text(level + 1)?),
                "DATA" => self.data = Some(Data::new(tokenizer, level + 1)?),
                "NOTE" => self.note = Some(Note::new(tokenizer, level + 1)?),
                "QUAY" => {
                    self.certainty_assessment =
                        Some(CertaintyAssessment::new(tokenizer, level + 1)?)
                }
                "RFN" => self.submitter_registered_rfn = Some(tokenizer.take_line_value()?),
                "OBJE" => self.add_multimedia(Multimedia::new(tokenizer, level + 1, pointer)?),
                _ => {
                    return Err(GedcomError::ParseError {
                        line: tokenizer.line,
                        message: format!("Unhandled SourceCitation Tag: {tag}"),
                    })
                }
            }
            Ok(())
        };
        self.custom_data = parse_subset(tokenizer, level, handle_subset)?;

        // `_APID` is a custom tag (leading underscore), so `parse_subset` routes it
        // to `custom_data` rather than `handle_subset` above; pull it out into its
        // own typed field instead of leaving it in the generic vendor-tag bucket.
        if let Some(pos) = self.custom_data.iter().position(|t| t.tag == "_APID") {
            let apid_tag = self.custom_data.remove(pos);
            self.apid = apid_tag.value.as_deref().and_then(ApidReference::parse);
        }

        Ok(())
    }
}
