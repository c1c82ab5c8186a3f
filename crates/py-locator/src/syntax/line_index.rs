use lsp_types::{Position, Range};
use rowan::{TextRange, TextSize};

use crate::error::LocateError;

/// Pre-computed line starts for converting between byte offsets and LSP
/// positions (0-based line, UTF-16 character).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(i + 1);
            }
        }
        Self { line_offsets }
    }

    /// Number of lines in the text. A trailing newline opens one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Convert a position to a byte offset.
    ///
    /// The end of a line (just before its line break) is a valid position;
    /// anything past it is rejected rather than clamped. A character that
    /// lands inside a surrogate pair rounds down to the start of that char.
    pub fn offset(
        &self,
        text: &str,
        position: Position,
    ) -> Result<TextSize, LocateError> {
        let line = position.line as usize;
        let Some(&line_start) = self.line_offsets.get(line) else {
            return Err(LocateError::LineOutOfRange {
                line: position.line,
                line_count: self.line_count(),
            });
        };
        let line_end = self.line_offsets.get(line + 1).copied().unwrap_or(text.len());
        let line_text = text[line_start..line_end].trim_end_matches('\n').trim_end_matches('\r');

        let mut utf16_offset: u32 = 0;
        let mut byte_offset = line_start;
        for ch in line_text.chars() {
            if utf16_offset >= position.character {
                break;
            }
            let width = ch.len_utf16() as u32;
            if utf16_offset + width > position.character {
                break;
            }
            utf16_offset += width;
            byte_offset += ch.len_utf8();
        }

        if utf16_offset < position.character {
            let line_length = line_text.chars().map(|c| c.len_utf16() as u32).sum::<u32>();
            if position.character > line_length {
                return Err(LocateError::ColumnOutOfRange {
                    line: position.line,
                    character: position.character,
                    line_length,
                });
            }
        }

        Ok(text_size(byte_offset))
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the end.
    pub fn position(
        &self,
        text: &str,
        offset: TextSize,
    ) -> Position {
        let mut offset = usize::from(offset).min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_offsets[line];
        let character = text[line_start..offset].chars().map(|c| c.len_utf16() as u32).sum::<u32>();
        Position {
            line: line as u32,
            character,
        }
    }

    pub fn range(
        &self,
        text: &str,
        range: TextRange,
    ) -> Range {
        Range {
            start: self.position(text, range.start()),
            end: self.position(text, range.end()),
        }
    }
}

fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

#[cfg(test)]
#[path = "../../tests/src/syntax/line_index_tests.rs"]
mod tests;
