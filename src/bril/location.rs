//! Byte offset to line/column conversion for diagnostics
//!
//! Lexer and parser positions are byte offsets. Errors report them as
//! 1-based line and column numbers, which is what editors expect.

/// A 0-based line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 0-based position
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to the
    /// end of the source.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);

        Position::new(line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("main {}");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("main {\n  ret;\n}");

        assert_eq!(loc.byte_to_position(6), Position::new(0, 6));
        assert_eq!(loc.byte_to_position(7), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(9), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(14), Position::new(2, 0));
    }

    #[test]
    fn test_columns_count_characters() {
        let loc = SourceLocation::new("# w\u{f6}rld\nx");
        // the comment contains a two-byte character
        assert_eq!(loc.byte_to_position(5), Position::new(0, 4));
        assert_eq!(loc.byte_to_position(9), Position::new(1, 0));
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let loc = SourceLocation::new("ab");
        assert_eq!(loc.byte_to_position(10), Position::new(0, 2));
    }
}
