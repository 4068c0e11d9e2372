use chrono::NaiveDateTime;
use phf::phf_map;

use crate::{ParserError, types::parse_timestamp};

/// The property names an event block is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Summary,
    DtStart,
    DtEnd,
    RRule,
    Location,
    Description,
}

static FIELDS: phf::Map<&'static str, Field> = phf_map! {
    "SUMMARY" => Field::Summary,
    "DTSTART" => Field::DtStart,
    "DTEND" => Field::DtEnd,
    "RRULE" => Field::RRule,
    "LOCATION" => Field::Location,
    "DESCRIPTION" => Field::Description,
};

impl Field {
    /// Look up a property name, case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        FIELDS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Summary => "SUMMARY",
            Self::DtStart => "DTSTART",
            Self::DtEnd => "DTEND",
            Self::RRule => "RRULE",
            Self::Location => "LOCATION",
            Self::Description => "DESCRIPTION",
        }
    }
}

pub trait ParseProp: Sized {
    fn parse_prop(field: Field, value: &str) -> Result<Self, ParserError>;
}

/// Free text, trimmed.
impl ParseProp for String {
    fn parse_prop(_field: Field, value: &str) -> Result<Self, ParserError> {
        Ok(value.trim().to_owned())
    }
}

impl ParseProp for NaiveDateTime {
    fn parse_prop(field: Field, value: &str) -> Result<Self, ParserError> {
        parse_timestamp(value).map_err(|source| ParserError::InvalidTimestamp {
            property: field.name(),
            source,
        })
    }
}
