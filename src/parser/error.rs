use crate::types::TimestampError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("missing property: {0}")]
    MissingProperty(&'static str),
    #[error("empty SUMMARY")]
    EmptyTitle,
    #[error("invalid {property} value: {source}")]
    InvalidTimestamp {
        property: &'static str,
        #[source]
        source: TimestampError,
    },
    #[error("no class period derivable for {0:?}")]
    NoPeriod(String),
}
