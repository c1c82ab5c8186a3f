use std::fmt::{Display, Formatter};

use lsp_types::Url;

/// Failures while resolving a query against a tree.
///
/// A query that simply finds nothing is `Ok(None)`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    LineOutOfRange {
        line: u32,
        line_count: usize,
    },
    ColumnOutOfRange {
        line: u32,
        character: u32,
        line_length: u32,
    },
    UnknownDocument(Url),
}

impl Display for LocateError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::LineOutOfRange {
                line,
                line_count,
            } => {
                write!(f, "line {line} is past the end of the document ({line_count} lines)")
            },
            Self::ColumnOutOfRange {
                line,
                character,
                line_length,
            } => {
                write!(f, "character {character} is past the end of line {line} (length {line_length})")
            },
            Self::UnknownDocument(uri) => write!(f, "no syntax tree stored for {uri}"),
        }
    }
}

impl std::error::Error for LocateError {}
