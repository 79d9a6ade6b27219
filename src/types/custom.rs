#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    tokenizer::{Token, Tokenizer},
    GedcomError,
};

/// A user-defined (non-standard) GEDCOM tag, conventionally prefixed with an underscore
/// (e.g. `_MYOWNTAG`). GEDCOM applications may attach arbitrary data under such tags;
/// this structure preserves the tag name, its line value, and any nested substructure
/// verbatim so that round-tripping and application-specific extensions are not lost.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct UserDefinedTag {
    /// The tag name, including its leading underscore when present.
    pub tag: String,
    /// An `@XREF@` pointer carried on the tag's line, if any.
    pub pointer: Option<String>,
    /// The line value of the tag, if any.
    pub value: Option<String>,
    /// Nested user-defined tags found under this one.
    pub children: Vec<Box<UserDefinedTag>>,
}

impl UserDefinedTag {
    /// Creates a new `UserDefinedTag` from a `Tokenizer`, having already consumed the
    /// `Level` token that introduced it and with `tag` naming the current tag.
    ///
    /// # Errors
    ///
    /// This function will return an error if parsing fails.
    pub fn new(
        tokenizer: &mut Tokenizer,
        level: u8,
        tag: &str,
    ) -> Result<UserDefinedTag, GedcomError> {
        let mut custom_tag = UserDefinedTag {
            tag: tag.to_string(),
            ..Default::default()
        };
        custom_tag.parse(tokenizer, level)?;
        Ok(custom_tag)
    }

    fn parse(&mut self, tokenizer: &mut Tokenizer, level: u8) -> Result<(), GedcomError> {
        tokenizer.next_token()?;

        if let Token::Pointer(xref) = &tokenizer.current_token {
            self.pointer = Some(xref.to_string());
            tokenizer.next_token()?;
        }

        if let Token::LineValue(value) = &tokenizer.current_token {
            self.value = Some(value.to_string());
            tokenizer.next_token()?;
        }

        loop {
            if let Token::Level(current_level) = tokenizer.current_token {
                if current_level <= level {
                    break;
                }
            }

            match &tokenizer.current_token {
                Token::Tag(tag) | Token::CustomTag(tag) => {
                    let child_tag = tag.to_string();
                    self.children
                        .push(Box::new(UserDefinedTag::new(tokenizer, level + 1, &child_tag)?));
                }
                Token::Level(_) => tokenizer.next_token()?,
                Token::EOF => break,
                _ => {
                    return Err(GedcomError::ParseError {
                        line: tokenizer.line,
                        message: format!("Unhandled Token in custom tag: {:?}", tokenizer.current_token),
                    })
                }
            }
        }

        Ok(())
    }
}
