use tower_lsp_server::ls_types::{Position, Range};

/// Maps LSP positions (line + UTF-16 column) onto a document's bytes.
pub struct PositionMapper<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> PositionMapper<'a> {
    /// Create a new PositionMapper with pre-computed line starts
    pub fn new(text: &'a str) -> Self {
        let line_starts = compute_line_starts(text);
        Self { text, line_starts }
    }

    /// Text of `line` without its terminator (`\n` or `\r\n`).
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1, // Exclude the newline
            None => self.text.len(),
        };
        let line_text = &self.text[start..end];
        Some(line_text.strip_suffix('\r').unwrap_or(line_text))
    }

    /// Convert an LSP Position to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end.
    pub fn position_to_byte(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_text = self.line_text(line)?;

        match convert_utf16_to_byte_in_line(line_text, position.character as usize) {
            Some(byte_offset) => Some(line_start + byte_offset),
            None => Some(line_start + line_text.len()),
        }
    }

    /// Convert a byte offset back to an LSP Position.
    pub fn byte_to_position(&self, offset: usize) -> Option<Position> {
        if offset > self.text.len() {
            return None;
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let line_text = self.line_text(line)?;
        let column = offset.saturating_sub(line_start).min(line_text.len());
        let character = convert_byte_to_utf16_in_line(line_text, column)?;

        Some(Position {
            line: line as u32,
            character: character as u32,
        })
    }

    /// The current line from column 0 up to (not including) the cursor.
    pub fn line_prefix(&self, position: Position) -> Option<&'a str> {
        let line_text = self.line_text(position.line as usize)?;
        let end = convert_utf16_to_byte_in_line(line_text, position.character as usize)
            .unwrap_or(line_text.len());
        Some(&line_text[..end])
    }

    /// The identifier touching the cursor and its range.
    ///
    /// An identifier is a maximal run of `[A-Za-z0-9_]`. The cursor may sit
    /// anywhere inside it or directly after its last character.
    pub fn word_at(&self, position: Position) -> Option<(&'a str, Range)> {
        let line = position.line as usize;
        let line_text = self.line_text(line)?;
        let cursor = convert_utf16_to_byte_in_line(line_text, position.character as usize)
            .unwrap_or(line_text.len());

        let start = line_text[..cursor]
            .rfind(|c: char| !is_word_char(c))
            .map_or(0, |i| i + 1);
        let end = line_text[cursor..]
            .find(|c: char| !is_word_char(c))
            .map_or(line_text.len(), |i| cursor + i);

        if start == end {
            return None;
        }

        let range = Range {
            start: Position {
                line: position.line,
                character: convert_byte_to_utf16_in_line(line_text, start)? as u32,
            },
            end: Position {
                line: position.line,
                character: convert_byte_to_utf16_in_line(line_text, end)? as u32,
            },
        };
        Some((&line_text[start..end], range))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Compute line start offsets for efficient position mapping
pub fn compute_line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// Convert UTF-16 position to byte position within a line
/// Returns None if the UTF-16 position is beyond the end of the line
#[inline]
pub fn convert_utf16_to_byte_in_line(line_text: &str, utf16_pos: usize) -> Option<usize> {
    let mut utf16_offset = 0;

    for (byte_offset, ch) in line_text.char_indices() {
        if utf16_offset >= utf16_pos {
            return Some(byte_offset);
        }
        utf16_offset += ch.len_utf16();
    }

    (utf16_offset == utf16_pos).then_some(line_text.len())
}

/// Convert byte position to UTF-16 position within a line
/// Returns None if the byte position is invalid (e.g., in the middle of a multi-byte character)
#[inline]
pub fn convert_byte_to_utf16_in_line(line_text: &str, byte_pos: usize) -> Option<usize> {
    if !line_text.is_char_boundary(byte_pos) {
        return None;
    }
    Some(line_text[..byte_pos].encode_utf16().count())
}
