//! Rope-backed document snapshot.
//!
//! The kernel never mutates a document directly; it reads line structure from an
//! immutable snapshot and mutates only through [`EditBatch::apply`](crate::EditBatch::apply).
//! All offsets are character offsets (Unicode scalar values).

use crate::line_ending::LineEnding;
use ropey::Rope;

/// A logical line of the document.
///
/// `start` and `length` are character offsets/counts; `length` excludes the line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Character offset of the first character of the line.
    pub start: usize,
    /// Length of the line in characters, excluding the line break.
    pub length: usize,
    /// 1-based line number.
    pub number: usize,
}

impl Line {
    /// Character offset just past the last character of the line (before the break).
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A text document with O(log n) line access, backed by a [`ropey::Rope`].
///
/// Text is stored LF-normalized; the line ending detected on load is kept so the
/// host can restore it with [`Document::to_text_with_line_ending`].
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
}

impl Document {
    /// Build a document from source text, normalizing CRLF to LF.
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        Self {
            rope: Rope::from_str(&LineEnding::normalize(text)),
            line_ending,
        }
    }

    /// The preferred line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The line with the given 1-based number, clamped to the document.
    pub fn line(&self, number: usize) -> Line {
        let index = number.saturating_sub(1).min(self.line_count() - 1);
        self.line_from_index(index)
    }

    /// The line containing the given character offset, clamped to the document.
    pub fn line_at(&self, offset: usize) -> Line {
        let offset = offset.min(self.rope.len_chars());
        self.line_from_index(self.rope.char_to_line(offset))
    }

    fn line_from_index(&self, index: usize) -> Line {
        let start = self.rope.line_to_char(index);
        let length = if index + 1 < self.line_count() {
            // Exclude the trailing '\n'.
            self.rope.line_to_char(index + 1) - start - 1
        } else {
            self.rope.len_chars() - start
        };
        Line {
            start,
            length,
            number: index + 1,
        }
    }

    /// The text of a line, excluding the line break.
    pub fn slice(&self, line: &Line) -> String {
        self.text_range(line.start, line.length)
    }

    /// The text of an arbitrary character range, clamped to the document.
    pub fn text_range(&self, start: usize, length: usize) -> String {
        let start = start.min(self.rope.len_chars());
        let end = start.saturating_add(length).min(self.rope.len_chars());
        self.rope.slice(start..end).to_string()
    }

    /// Full document text (LF-normalized).
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Full document text rendered with the preferred line ending.
    pub fn to_text_with_line_ending(&self) -> String {
        self.line_ending.apply_to_text(&self.rope.to_string())
    }

    pub(crate) fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    pub(crate) fn delete(&mut self, start: usize, len_chars: usize) {
        let start = start.min(self.rope.len_chars());
        let end = start.saturating_add(len_chars).min(self.rope.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::from_text("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.char_count(), 0);
        let line = doc.line_at(0);
        assert_eq!((line.start, line.length, line.number), (0, 0, 1));
    }

    #[test]
    fn test_line_structure() {
        let doc = Document::from_text("ab\ncdef\n\ng");
        assert_eq!(doc.line_count(), 4);

        let line1 = doc.line(1);
        assert_eq!((line1.start, line1.length, line1.number), (0, 2, 1));

        let line2 = doc.line(2);
        assert_eq!((line2.start, line2.length, line2.number), (3, 4, 2));
        assert_eq!(line2.end(), 7);

        let line3 = doc.line(3);
        assert_eq!((line3.start, line3.length), (8, 0));

        let line4 = doc.line(4);
        assert_eq!((line4.start, line4.length), (9, 1));
    }

    #[test]
    fn test_line_at_offsets() {
        let doc = Document::from_text("ab\ncdef");
        assert_eq!(doc.line_at(0).number, 1);
        assert_eq!(doc.line_at(2).number, 1); // at line end, before the break
        assert_eq!(doc.line_at(3).number, 2);
        assert_eq!(doc.line_at(7).number, 2);
        assert_eq!(doc.line_at(100).number, 2); // clamped
    }

    #[test]
    fn test_slice_excludes_break() {
        let doc = Document::from_text("ab\ncdef");
        assert_eq!(doc.slice(&doc.line(1)), "ab");
        assert_eq!(doc.slice(&doc.line(2)), "cdef");
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let doc = Document::from_text("ab\n");
        assert_eq!(doc.line_count(), 2);
        let last = doc.line(2);
        assert_eq!((last.start, last.length), (3, 0));
        assert_eq!(doc.line_at(3).number, 2);
    }

    #[test]
    fn test_crlf_normalization() {
        let doc = Document::from_text("a\r\nb");
        assert_eq!(doc.get_text(), "a\nb");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.to_text_with_line_ending(), "a\r\nb");
    }

    #[test]
    fn test_text_range_clamps() {
        let doc = Document::from_text("abc");
        assert_eq!(doc.text_range(1, 10), "bc");
        assert_eq!(doc.text_range(10, 3), "");
    }

    #[test]
    fn test_unicode_offsets_are_chars() {
        let doc = Document::from_text("héllo\n你好");
        assert_eq!(doc.char_count(), 8);
        let line2 = doc.line(2);
        assert_eq!((line2.start, line2.length), (6, 2));
        assert_eq!(doc.slice(&line2), "你好");
    }
}
