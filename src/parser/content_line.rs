//! Parse the result of `LineReader` into parts.
//!
//! A content line has the shape `NAME[;params]:VALUE`:
//! - The name is everything before the first `;` or `:`. It is kept as written, names are
//!   matched case-sensitively.
//! - The parameters are kept as one raw string; nothing downstream interprets them.
//! - The value is everything after the first `:`, further colons included.
//!
//! #### Warning
//!   No checks are made on the validity of the name or the value.
//!
//! # Examples
//!
//! ```rust
//! let line = coursecal::parser::Line::new(1, "DTSTART;TZID=Asia/Shanghai:20240902T080000");
//! let content = coursecal::ContentLine::parse(&line).unwrap();
//!
//! assert_eq!(content.name, "DTSTART");
//! assert_eq!(content.params, Some("TZID=Asia/Shanghai"));
//! assert_eq!(content.value, "20240902T080000");
//! ```

use std::fmt;

use super::{Line, LineReader};
use crate::{PARAM_DELIMITER, VALUE_DELIMITER};

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentLineError {
    #[error("Line {0}: Missing property name.")]
    MissingName(usize),
    #[error("Line {0}: Missing a \"{1}\" delimiter.")]
    MissingDelimiter(usize, char),
}

/// A single `NAME[;params]:VALUE` line, borrowed from the input.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct ContentLine<'a> {
    /// Property name.
    pub name: &'a str,
    /// Raw parameter list, without the leading `;`.
    pub params: Option<&'a str>,
    /// Property value, possibly empty.
    pub value: &'a str,
}

impl fmt::Display for ContentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name: {}\nparams: {:?}\nvalue: {:?}",
            self.name, self.params, self.value
        )
    }
}

pub struct ContentLineParser<I>(I);

impl<'a> ContentLineParser<LineReader<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        ContentLineParser(LineReader::from_text(text))
    }
}

impl<'a, I: Iterator<Item = Line<'a>>> ContentLineParser<I> {
    pub fn new(lines: I) -> Self {
        ContentLineParser(lines)
    }
}

impl<'a> ContentLine<'a> {
    pub fn parse(line: &Line<'a>) -> Result<Self, ContentLineError> {
        let to_parse = line.as_str();

        let Some((head, value)) = to_parse.split_once(VALUE_DELIMITER) else {
            return Err(ContentLineError::MissingDelimiter(
                line.number(),
                VALUE_DELIMITER,
            ));
        };

        let (name, params) = match head.split_once(PARAM_DELIMITER) {
            Some((name, params)) => (name, Some(params)),
            None => (head, None),
        };
        if name.is_empty() {
            return Err(ContentLineError::MissingName(line.number()));
        }

        Ok(ContentLine {
            name,
            params,
            value,
        })
    }
}

impl<'a, I: Iterator<Item = Line<'a>>> Iterator for ContentLineParser<I> {
    type Item = Result<ContentLine<'a>, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|line| ContentLine::parse(&line))
    }
}
