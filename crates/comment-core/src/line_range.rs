//! Region-to-line extraction.

use crate::document::{Document, Line};
use crate::selection_set::Region;

/// The ordered, non-empty sequence of lines a region spans.
///
/// A zero-length region at a line boundary still yields the line containing it; a
/// region ending exactly at the start of a line includes that line.
pub fn region_lines(document: &Document, region: &Region) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = document.line_at(region.from());
    loop {
        let done = region.to() <= line.end() || line.number >= document.line_count();
        let number = line.number;
        lines.push(line);
        if done {
            break;
        }
        line = document.line(number + 1);
    }
    lines
}

/// Per-region line sequences for a whole selection set, in document order.
///
/// A line already collected for an earlier region is not collected again, so carets or
/// touching regions on the same line produce one edit, not two. The concatenation of
/// the returned sub-lists is the combined list used for classification.
pub fn gather_region_lines(document: &Document, regions: &[Region]) -> Vec<Vec<Line>> {
    let mut per_region = Vec::with_capacity(regions.len());
    let mut last_collected = 0usize;
    for region in regions {
        let mut lines = region_lines(document, region);
        lines.retain(|line| line.number > last_collected);
        if let Some(last) = lines.last() {
            last_collected = last.number;
        }
        per_region.push(lines);
    }
    per_region
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(lines: &[Line]) -> Vec<usize> {
        lines.iter().map(|l| l.number).collect()
    }

    #[test]
    fn test_caret_yields_containing_line() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(numbers(&region_lines(&doc, &Region::caret(0))), vec![1]);
        assert_eq!(numbers(&region_lines(&doc, &Region::caret(2))), vec![1]);
        assert_eq!(numbers(&region_lines(&doc, &Region::caret(3))), vec![2]);
    }

    #[test]
    fn test_multi_line_region() {
        let doc = Document::from_text("ab\ncd\nef");
        assert_eq!(numbers(&region_lines(&doc, &Region::new(1, 7))), vec![1, 2, 3]);
    }

    #[test]
    fn test_region_ending_at_line_start_includes_it() {
        let doc = Document::from_text("ab\ncd");
        // to == 3 is the first offset of line 2.
        assert_eq!(numbers(&region_lines(&doc, &Region::new(0, 3))), vec![1, 2]);
        // to == 2 is still within line 1.
        assert_eq!(numbers(&region_lines(&doc, &Region::new(0, 2))), vec![1]);
    }

    #[test]
    fn test_stops_at_document_end() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(numbers(&region_lines(&doc, &Region::new(0, 100))), vec![1, 2]);
    }

    #[test]
    fn test_gather_skips_already_collected_lines() {
        let doc = Document::from_text("ab\ncd");
        let regions = [Region::caret(0), Region::caret(1), Region::caret(4)];
        let gathered = gather_region_lines(&doc, &regions);
        assert_eq!(numbers(&gathered[0]), vec![1]);
        assert!(gathered[1].is_empty());
        assert_eq!(numbers(&gathered[2]), vec![2]);
    }
}
