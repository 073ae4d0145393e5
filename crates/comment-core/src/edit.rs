//! Atomic edit batches with position mapping.
//!
//! A command produces at most one [`EditBatch`]. Every [`Edit`] in a batch records its
//! offsets against the *pre-edit* document snapshot; [`EditBatch::apply`] commits the
//! edits in document order, remapping each target offset for the cumulative effect of
//! the edits before it. [`EditBatch::map_pos`] exposes the same cumulative-shift
//! arithmetic as a query so selections (and later edits under construction) can be
//! translated into post-edit offsets.

use crate::document::Document;
use crate::line_ending::split_lines_preserve_trailing;
use crate::selection_set::Region;

/// A single text edit expressed in character offsets against the pre-edit snapshot.
///
/// A removal has empty `inserted_text`, an insertion has empty `deleted_text`, and a
/// replacement carries both. `deleted_text` records the removed characters exactly,
/// which keeps batches invertible and makes tests precise about margins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start character offset of the edit in the pre-edit document.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl Edit {
    /// An insertion of `text` at `start`.
    pub fn insert_at(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: String::new(),
            inserted_text: text.into(),
        }
    }

    /// A removal of `deleted_text` beginning at `start`.
    pub fn remove_range(start: usize, deleted_text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: deleted_text.into(),
            inserted_text: String::new(),
        }
    }

    /// A replacement of `deleted_text` with `inserted_text` beginning at `start`.
    pub fn replace_range(
        start: usize,
        deleted_text: impl Into<String>,
        inserted_text: impl Into<String>,
    ) -> Self {
        Self {
            start,
            deleted_text: deleted_text.into(),
            inserted_text: inserted_text.into(),
        }
    }

    /// Length of the deleted text in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of the inserted text in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset in the pre-edit document.
    pub fn end(&self) -> usize {
        self.start + self.deleted_len()
    }

    /// The inserted text split into lines, for hosts whose edit protocol is line-based.
    pub fn inserted_lines(&self) -> Vec<String> {
        split_lines_preserve_trailing(&self.inserted_text)
    }
}

/// Which side of an insertion a mapped position sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// The position stays before text inserted exactly at it.
    Before,
    /// The position moves past text inserted exactly at it.
    After,
}

/// An ordered, atomic batch of edits against one document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<Edit>,
}

impl EditBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit. Offsets reference the pre-edit snapshot regardless of what is
    /// already in the batch.
    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// The recorded edits, in insertion order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Indices of the edits sorted into document order (stable for equal starts).
    fn document_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| self.edits[i].start);
        order
    }

    /// Translate a pre-edit offset into its post-edit offset.
    ///
    /// Positions inside a deleted range collapse to the (mapped) start of the deletion.
    pub fn map_pos(&self, pos: usize, assoc: Assoc) -> usize {
        let mut delta: i64 = 0;
        for &i in &self.document_order() {
            let edit = &self.edits[i];
            if edit.start > pos {
                break;
            }
            let deleted = edit.deleted_len();
            let end = edit.start + deleted;
            if end < pos || (end == pos && (deleted > 0 || assoc == Assoc::After)) {
                delta += edit.inserted_len() as i64 - deleted as i64;
            } else if pos > edit.start {
                // Inside the deleted range.
                return shifted(edit.start, delta);
            } else {
                break;
            }
        }
        shifted(pos, delta)
    }

    /// Translate a caret offset into its post-edit offset.
    ///
    /// Like [`EditBatch::map_pos`] with [`Assoc::After`], except that when several
    /// insertions land exactly at the caret, the caret moves past the first one only.
    /// A caret at a block-comment insertion point thus lands between the inserted
    /// open and close tokens.
    pub fn map_caret(&self, pos: usize) -> usize {
        let mut delta: i64 = 0;
        let mut crossed_insert_at_pos = false;
        for &i in &self.document_order() {
            let edit = &self.edits[i];
            if edit.start > pos {
                break;
            }
            let deleted = edit.deleted_len();
            let end = edit.start + deleted;
            if end < pos || (end == pos && deleted > 0) {
                delta += edit.inserted_len() as i64 - deleted as i64;
            } else if end == pos {
                // Pure insertion exactly at the caret.
                if !crossed_insert_at_pos {
                    crossed_insert_at_pos = true;
                    delta += edit.inserted_len() as i64;
                }
            } else if pos > edit.start {
                return shifted(edit.start, delta);
            } else {
                break;
            }
        }
        shifted(pos, delta)
    }

    /// Translate a region through the batch, preserving orientation.
    ///
    /// The `from` side maps with [`Assoc::After`] so it lands after any text the batch
    /// inserted as a comment prefix; the `to` side maps with [`Assoc::Before`] so it
    /// stays before an inserted close token. Empty regions map via
    /// [`EditBatch::map_caret`].
    pub fn map_region(&self, region: &Region) -> Region {
        if region.is_empty() {
            return Region::caret(self.map_caret(region.head));
        }
        let map_side = |pos: usize, is_from_side: bool| {
            if is_from_side {
                self.map_pos(pos, Assoc::After)
            } else {
                self.map_pos(pos, Assoc::Before)
            }
        };
        Region::new(
            map_side(region.anchor, region.is_forward()),
            map_side(region.head, !region.is_forward()),
        )
    }

    /// Apply the batch to a document atomically, in document order.
    pub fn apply(&self, document: &mut Document) {
        let mut delta: i64 = 0;
        for &i in &self.document_order() {
            let edit = &self.edits[i];
            let start = shifted(edit.start, delta);
            let deleted = edit.deleted_len();
            if deleted > 0 {
                document.delete(start, deleted);
            }
            if !edit.inserted_text.is_empty() {
                document.insert(start, &edit.inserted_text);
            }
            delta += edit.inserted_len() as i64 - deleted as i64;
        }
    }
}

fn shifted(pos: usize, delta: i64) -> usize {
    (pos as i64 + delta).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_two_inserts_in_document_order() {
        let mut doc = Document::from_text("foo\nbar");
        let mut batch = EditBatch::new();
        batch.push(Edit::insert_at(4, "// "));
        batch.push(Edit::insert_at(0, "// "));
        batch.apply(&mut doc);
        assert_eq!(doc.get_text(), "// foo\n// bar");
    }

    #[test]
    fn test_apply_removals_shift_later_offsets() {
        let mut doc = Document::from_text("// foo\n// bar");
        let mut batch = EditBatch::new();
        batch.push(Edit::remove_range(0, "// "));
        batch.push(Edit::remove_range(7, "// "));
        batch.apply(&mut doc);
        assert_eq!(doc.get_text(), "foo\nbar");
    }

    #[test]
    fn test_apply_replace() {
        let mut doc = Document::from_text("abc");
        let mut batch = EditBatch::new();
        batch.push(Edit::replace_range(1, "b", "xy"));
        batch.apply(&mut doc);
        assert_eq!(doc.get_text(), "axyc");
    }

    #[test]
    fn test_map_pos_across_insertion() {
        let mut batch = EditBatch::new();
        batch.push(Edit::insert_at(2, "//"));
        assert_eq!(batch.map_pos(1, Assoc::Before), 1);
        assert_eq!(batch.map_pos(2, Assoc::Before), 2);
        assert_eq!(batch.map_pos(2, Assoc::After), 4);
        assert_eq!(batch.map_pos(3, Assoc::Before), 5);
    }

    #[test]
    fn test_map_pos_inside_deletion_collapses() {
        let mut batch = EditBatch::new();
        batch.push(Edit::remove_range(2, "xyz"));
        assert_eq!(batch.map_pos(3, Assoc::Before), 2);
        assert_eq!(batch.map_pos(5, Assoc::Before), 2);
        assert_eq!(batch.map_pos(6, Assoc::Before), 3);
        assert_eq!(batch.map_pos(2, Assoc::Before), 2);
    }

    #[test]
    fn test_map_caret_between_paired_inserts() {
        let mut batch = EditBatch::new();
        batch.push(Edit::insert_at(3, "/* "));
        batch.push(Edit::insert_at(3, " */"));
        assert_eq!(batch.map_caret(3), 6);
        assert_eq!(batch.map_pos(3, Assoc::After), 9);
        assert_eq!(batch.map_pos(3, Assoc::Before), 3);
    }

    #[test]
    fn test_map_region_preserves_orientation() {
        let mut batch = EditBatch::new();
        batch.push(Edit::insert_at(0, "/* "));
        batch.push(Edit::insert_at(3, " */"));

        let forward = batch.map_region(&Region::new(0, 3));
        assert_eq!(forward, Region::new(3, 6));

        let backward = batch.map_region(&Region::new(3, 0));
        assert_eq!(backward, Region::new(6, 3));
    }

    #[test]
    fn test_inserted_lines_helper() {
        let edit = Edit::insert_at(0, "#|\nfoo\n|#");
        assert_eq!(edit.inserted_lines(), vec!["#|", "foo", "|#"]);
    }
}
