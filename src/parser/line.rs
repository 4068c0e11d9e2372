//! Split the input text into numbered, trimmed lines.
//!
//! Timetable exports are not folded, so a physical line is a logical line. Lines end at
//! `\r\n`, `\n` or a lone `\r`. Surrounding whitespace is removed before any other stage
//! looks at it.

use std::fmt;

const LINE_BREAKS: [char; 2] = ['\r', '\n'];
const CRLF: &str = "\r\n";

/// A single trimmed line together with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    number: usize,
    inner: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, inner: &'a str) -> Self {
        Line { number, inner }
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.inner
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.inner)
    }
}

pub struct LineReader<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> LineReader<'a> {
    pub fn from_text(text: &'a str) -> Self {
        LineReader {
            rest: text,
            number: 0,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (raw, rest) = match self.rest.find(LINE_BREAKS) {
            Some(idx) => {
                let (raw, tail) = self.rest.split_at(idx);
                // Both break characters are a single byte
                (raw, tail.strip_prefix(CRLF).unwrap_or(&tail[1..]))
            }
            None => (self.rest, ""),
        };
        self.rest = rest;
        self.number += 1;
        Some(Line::new(self.number, raw.trim()))
    }
}
