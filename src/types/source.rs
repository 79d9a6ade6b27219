pub mod citation;
pub mod data;
pub mod quay;
pub mod text;

use crate::{
    parser::{parse_subset, Parser},
    tokenizer::{Token, Tokenizer},
    types::{
        custom::UserDefinedTag, date::change_date::ChangeDate, event::detail::Detail,
        multimedia::Multimedia, note::Note, repository::citation::Citation, source::data::Data,
    },
    GedcomError,
};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// Source for genealogy facts
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Source {
    pub xref: Option<String>,
    pub data: Data,
    pub abbreviation: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_facts: Option<String>,
    pub citation_from_source: Option<String>,
    pub change_date: Option<Box<ChangeDate>>,
    pub multimedia: Vec<Multimedia>,
    pub notes: Vec<Note>,
    pub repo_citations: Vec<Citation>,
    /// handles "RFN" tag; found in Ancestry.com export
    pub submitter_registered_rfn: Option<String>,
    pub custom_data: Vec<Box<UserDefinedTag>>,
}

impl Source {
    /// Creates a new `Source` from a `Tokenizer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if parsing fails.
    pub fn new(
        tokenizer: &mut Tokenizer,
        level: u8,
        xref: Option<String>,
    ) -> Result<Source, GedcomError> {
        let mut sour = Source {
            xref,
            ..Default::default()
        };
        sour.parse(tokenizer, level)?;
        Ok(sour)
    }

    pub fn add_multimedia(&mut self, media: Multimedia) {
        self.multimedia.push(media);
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn add_repo_citation(&mut self, citation: Citation) {
        self.repo_citations.push(citation);
    }
}

impl Parser for Source {
    fn parse(&mut self, tokenizer: &mut Tokenizer, level: u8) -> Result<(), GedcomError> {
        // skip SOUR tag
        tokenizer.next_token()?;

        let handle_subset = |tag: &str, tokenizer: &mut Tokenizer| -> Result<(), GedcomError> {
            let mut pointer: Option<String> = None;
            if let Token::Pointer(xref) = &tokenizer.current_token {
                pointer = Some(xref.to_string());
                tokenizer.next_token()?;
            }
            match tag {
                "DATA" => {
                    tokenizer.next_token()?;
                }
                "EVEN" => {
                    let events_recorded = tokenizer.take_line_value()?;
                    let mut event = Detail::new(tokenizer, level + 2, "OTHER")?;
                    event.with_source_data(events_recorded);
                    self.data.add_event(event);
                }
                "AGNC" => self.data.agency = Some(tokenizer.take_line_value()?),
                "ABBR" => self.abbreviation = Some(tokenizer.take_continued_text(level + 1)?),
                "CHAN" => {
                    self.change_date = Some(Box::new(ChangeDate::new(tokenizer, level + 1)?))
                }
                "TITL" => self.title = Some(tokenizer.take_continued_text(level + 1)?),
                "AUTH" => self.author = Some(tokenizer.take_continued_text(level + 1)?),
                "PUBL" => self.publication_facts = Some(tokenizer.take_continued_text(level + 1)?),
                "TEXT" => {
                    self.citation_from_source = Some(tokenizer.take_continued_text(level + 1)?)
                }
                "OBJE" => self.add_multimedia(Multimedia::new(tokenizer, level + 1, pointer)?),
                "NOTE" => self.add_note(Note::new(tokenizer, level + 1)?),
                "REPO" => self.add_repo_citation(Citation::new(tokenizer, level + 1)?),
                "RFN" => self.submitter_registered_rfn = Some(tokenizer.take_line_value()?),
                _ => {
                    return Err(GedcomError::ParseError {
                        line: tokenizer.line,
                        message: format!("Unhandled Source Tag: {tag}"),
                    })
                }
            }
            Ok(())
        };
        self.custom_data = parse_subset(tokenizer, level, handle_subset)?;
        Ok(())
    }
}
