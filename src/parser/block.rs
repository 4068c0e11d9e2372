use std::collections::HashMap;

use crate::{
    BEGIN_EVENT, END_EVENT, ParserError,
    parser::{ContentLineParser, Field, Line, LineReader, ParseProp},
};

/// The recognized fields of one `BEGIN:VEVENT` … `END:VEVENT` block.
///
/// A later line with the same name replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEventBlock<'a> {
    number: usize,
    fields: HashMap<Field, &'a str>,
}

impl<'a> RawEventBlock<'a> {
    /// Decode the lines collected between the markers. Lines that are not content lines and
    /// properties without a [`Field`] are skipped.
    pub fn from_lines(number: usize, lines: Vec<Line<'a>>) -> Self {
        let mut fields = HashMap::new();
        for content in ContentLineParser::new(lines.into_iter()) {
            match content {
                Ok(content) => match Field::from_name(content.name) {
                    Some(field) => {
                        fields.insert(field, content.value);
                    }
                    None => tracing::trace!(name = content.name, "skipping property"),
                },
                Err(err) => tracing::trace!(%err, "skipping line"),
            }
        }
        RawEventBlock { number, fields }
    }

    /// Line number of the `BEGIN:VEVENT` marker.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.fields.get(&field).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get_optional<T: ParseProp>(&self, field: Field) -> Result<Option<T>, ParserError> {
        self.get(field)
            .map(|value| T::parse_prop(field, value))
            .transpose()
    }

    pub fn get_required<T: ParseProp>(&self, field: Field) -> Result<T, ParserError> {
        self.get_optional(field)?
            .ok_or(ParserError::MissingProperty(field.name()))
    }
}

/// Iterator over the event blocks of a text.
///
/// Lines outside of a block are ignored, a block that is still open when the text ends is
/// discarded and a repeated `BEGIN:VEVENT` restarts the current block.
pub struct BlockReader<'a> {
    lines: LineReader<'a>,
}

impl<'a> BlockReader<'a> {
    pub fn new(lines: LineReader<'a>) -> Self {
        BlockReader { lines }
    }

    pub fn from_text(text: &'a str) -> Self {
        BlockReader::new(LineReader::from_text(text))
    }

    /// Skip to the next begin marker and return its line number.
    #[inline]
    fn find_header(&mut self) -> Option<usize> {
        self.lines
            .find(|line| line.as_str() == BEGIN_EVENT)
            .map(|line| line.number())
    }
}

impl<'a> Iterator for BlockReader<'a> {
    type Item = RawEventBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut number = self.find_header()?;
        let mut buffer = vec![];

        loop {
            let Some(line) = self.lines.next() else {
                tracing::debug!(line = number, "discarding unterminated event block");
                return None;
            };

            match line.as_str() {
                END_EVENT => return Some(RawEventBlock::from_lines(number, buffer)),
                BEGIN_EVENT => {
                    number = line.number();
                    buffer.clear();
                }
                _ => buffer.push(line),
            }
        }
    }
}
