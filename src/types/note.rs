#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    parser::{parse_subset, Parser},
    tokenizer::Tokenizer,
    types::{custom::UserDefinedTag, source::citation::Citation, translation::Translation},
    GedcomError,
};

/// Note (tag: NOTE) is a note structure attached in-line to its containing structure. See
/// <https://gedcom.io/specifications/FamilySearchGEDCOMv7.html#NOTE_STRUCTURE>.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Note {
    /// The text of the note, possibly continued across CONT/CONC lines.
    pub value: Option<String>,
    /// tag: MIME
    pub mime: Option<String>,
    /// tag: TRAN
    pub translation: Option<Translation>,
    /// tag: SOUR
    pub citation: Option<Citation>,
    /// tag: LANG
    pub language: Option<String>,
    pub custom_data: Vec<Box<UserDefinedTag>>,
}

impl Note {
    /// Creates a new `Note` from a `Tokenizer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if parsing fails.
    pub fn new(tokenizer: &mut Tokenizer, level: u8) -> Result<Note, GedcomError> {
        let mut note = Note::default();
        note.parse(tokenizer, level)?;
        Ok(note)
    }
}

impl Parser for Note {
    fn parse(&mut self, tokenizer: &mut Tokenizer, level: u8) -> Result<(), GedcomError> {
        self.value = Some(tokenizer.take_continued_text(level)?);

        let handle_subset = |tag: &str, tokenizer: &mut Tokenizer| -> Result<(), GedcomError> {
            match tag {
                "MIME" => self.mime = Some(tokenizer.take_line_value()?),
                "LANG" => self.language = Some(tokenizer.take_line_value()?),
                "TRAN" => self.translation = Some(Translation::new(tokenizer, level + 1)?),
                "SOUR" => self.citation = Some(Citation::new(tokenizer, level + 1)?),
                _ => {
                    return Err(GedcomError::ParseError {
                        line: tokenizer.line,
                        message: format!("Unhandled Note Tag: {tag}"),
                    })
                }
            }
            Ok(())
        };
        self.custom_data = parse_subset(tokenizer, level, handle_subset)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Gedcom;

    #[test]
    fn test_parse_note_with_continuation() {
        let sample = "\
            0 HEAD\n\
            1 GEDC\n\
            2 VERS 5.5\n\
            0 @PERSON1@ INDI\n\
            1 NOTE A note\n\
            2 CONT Note continued here. The word TE\n\
            2 CONC ST should not be broken!\n\
            0 TRLR";

        let mut doc = Gedcom::new(sample.chars()).unwrap();
        let data = doc.parse_data().unwrap();

        let note = data.individuals[0].note.as_ref().unwrap();
        assert_eq!(
            note.value.as_ref().unwrap(),
            "A note\nNote continued here. The word TEST should not be broken!"
        );
    }

    #[test]
    fn test_parse_note_with_mime_and_lang() {
        let sample = "\
            0 HEAD\n\
            1 GEDC\n\
            2 VERS 5.5\n\
            0 @PERSON1@ INDI\n\
            1 NOTE Some text\n\
            2 MIME text/plain\n\
            2 LANG en\n\
            0 TRLR";

        let mut doc = Gedcom::new(sample.chars()).unwrap();
        let data = doc.parse_data().unwrap();

        let note = data.individuals[0].note.as_ref().unwrap();
        assert_eq!(note.mime.as_ref().unwrap(), "text/plain");
        assert_eq!(note.language.as_ref().unwrap(), "en");
    }
}
