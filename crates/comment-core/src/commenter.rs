//! Comment-state detection and edit generation.
//!
//! Two commenter types share the same contract: classify the selected regions as
//! commented or uncommented, then emit the minimal [`EditBatch`] that toggles them.
//! Classification is binary per style; a partially commented region counts as
//! uncommented, so toggling comments it rather than stripping the partial tokens.

use std::collections::HashSet;

use crate::commands::EditorState;
use crate::document::{Document, Line};
use crate::edit::{Edit, EditBatch};
use crate::line_range::gather_region_lines;
use crate::scan::{Direction, ends_with_at, skip_whitespace, starts_with_at};
use crate::selection_set::Region;

/// Padding inserted between a comment token and the commented content.
pub const DEFAULT_MARGIN: &str = " ";

/// What a toggle invocation is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOption {
    /// Comment if uncommented, uncomment if commented.
    Toggle,
    /// Comment only; no-op when the regions are already commented.
    OnlyComment,
    /// Uncomment only; no-op when the regions are not commented.
    OnlyUncomment,
}

/// Where a block comment's tokens sit around a region, recorded during classification
/// so that uncommenting strips exactly the padding that commenting inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWitness {
    /// Character offset just past the open token.
    pub open_end: usize,
    /// 1 if whitespace separates the open token from the region, else 0.
    pub open_margin: usize,
    /// Character offset of the close token.
    pub close_start: usize,
    /// 1 if whitespace separates the region from the close token, else 0.
    pub close_margin: usize,
}

/// Toggles open/close-token block comments around regions.
#[derive(Debug, Clone)]
pub struct BlockCommenter {
    open: String,
    close: String,
    margin: String,
}

impl BlockCommenter {
    /// A block commenter with the default one-space margin.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self::with_margin(open, close, DEFAULT_MARGIN)
    }

    /// A block commenter with an explicit margin string.
    pub fn with_margin(
        open: impl Into<String>,
        close: impl Into<String>,
        margin: impl Into<String>,
    ) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            margin: margin.into(),
        }
    }

    /// Classify one region: `Some` with the token positions and margin widths if the
    /// region is surrounded by the token pair, `None` otherwise.
    ///
    /// The boundary search is line-local: it skips whitespace within the line
    /// containing the boundary and tests for the token there. An open token on an
    /// earlier line, separated by a line break, is not detected.
    pub fn is_range_commented(&self, document: &Document, region: &Region) -> Option<BlockWitness> {
        let from = region.from();
        let from_line = document.line_at(from);
        let from_text = document.slice(&from_line);
        let rel_from = from - from_line.start;
        let space_before = skip_whitespace(&from_text, rel_from, Direction::Backward);
        if !ends_with_at(&from_text, &self.open, rel_from - space_before) {
            return None;
        }

        let to = region.to();
        let to_line = document.line_at(to);
        let to_text = document.slice(&to_line);
        let rel_to = to - to_line.start;
        let space_after = skip_whitespace(&to_text, rel_to, Direction::Forward);
        if !starts_with_at(&to_text, &self.close, rel_to + space_after) {
            return None;
        }

        Some(BlockWitness {
            open_end: from - space_before,
            open_margin: usize::from(space_before > 0),
            close_start: to + space_after,
            close_margin: usize::from(space_after > 0),
        })
    }

    /// Decide and build the edit batch for the current selection, or `None` when the
    /// requested option does not apply.
    pub fn toggle(&self, option: CommentOption, state: &EditorState) -> Option<EditBatch> {
        let document = state.document();
        let regions = state.selections().regions();

        let witnesses: Option<Vec<BlockWitness>> = regions
            .iter()
            .map(|region| self.is_range_commented(document, region))
            .collect();

        let batch = match (witnesses, option) {
            (Some(witnesses), CommentOption::Toggle | CommentOption::OnlyUncomment) => {
                self.uncomment_edits(document, &witnesses)
            }
            (None, CommentOption::Toggle | CommentOption::OnlyComment) => {
                self.comment_edits(regions)
            }
            (Some(_), CommentOption::OnlyComment) | (None, CommentOption::OnlyUncomment) => {
                return None;
            }
        };

        if batch.is_empty() { None } else { Some(batch) }
    }

    fn comment_edits(&self, regions: &[Region]) -> EditBatch {
        let mut batch = EditBatch::new();
        for region in regions {
            batch.push(Edit::insert_at(
                region.from(),
                format!("{}{}", self.open, self.margin),
            ));
            batch.push(Edit::insert_at(
                region.to(),
                format!("{}{}", self.margin, self.close),
            ));
        }
        batch
    }

    fn uncomment_edits(&self, document: &Document, witnesses: &[BlockWitness]) -> EditBatch {
        let open_len = self.open.chars().count();
        let close_len = self.close.chars().count();
        let mut batch = EditBatch::new();
        for witness in witnesses {
            let open_start = witness.open_end - open_len;
            batch.push(Edit::remove_range(
                open_start,
                document.text_range(open_start, open_len + witness.open_margin),
            ));
            let close_start = witness.close_start - witness.close_margin;
            batch.push(Edit::remove_range(
                close_start,
                document.text_range(close_start, close_len + witness.close_margin),
            ));
        }
        batch
    }
}

#[derive(Debug)]
struct LineClassification {
    /// Shared alignment column: minimum indentation among qualifying lines.
    min_col: Option<usize>,
    /// `true` when every qualifying line carries the token at its own indentation.
    commented: bool,
    /// Numbers of whitespace-only lines.
    blank: HashSet<usize>,
}

/// Toggles single-token line comments across regions with column alignment.
#[derive(Debug, Clone)]
pub struct LineCommenter {
    token: String,
    margin: String,
}

impl LineCommenter {
    /// A line commenter with the default one-space margin.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_margin(token, DEFAULT_MARGIN)
    }

    /// A line commenter with an explicit margin string.
    pub fn with_margin(token: impl Into<String>, margin: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            margin: margin.into(),
        }
    }

    /// Decide and build the edit batch for the current selection, or `None` when the
    /// requested option does not apply.
    ///
    /// All regions share one verdict and one alignment column, computed over the
    /// combined line list; edits are emitted per region over its own lines.
    pub fn toggle(&self, option: CommentOption, state: &EditorState) -> Option<EditBatch> {
        let document = state.document();
        let per_region = gather_region_lines(document, state.selections().regions());
        let combined: Vec<&Line> = per_region.iter().flatten().collect();
        if combined.is_empty() {
            return None;
        }

        let classification = self.classify(document, &combined);
        let min_col = classification.min_col?;
        let multi_line = combined.len() > 1;

        // In a multi-line operation blank lines are never edit targets.
        let skip =
            |line: &Line| multi_line && classification.blank.contains(&line.number);

        let batch = match (classification.commented, option) {
            (true, CommentOption::Toggle | CommentOption::OnlyUncomment) => {
                self.uncomment_edits(document, &per_region, min_col, &skip)
            }
            (false, CommentOption::Toggle | CommentOption::OnlyComment) => {
                self.comment_edits(&per_region, min_col, &skip)
            }
            (true, CommentOption::OnlyComment) | (false, CommentOption::OnlyUncomment) => {
                return None;
            }
        };

        if batch.is_empty() { None } else { Some(batch) }
    }

    /// Classify the combined line list and compute the shared alignment column.
    ///
    /// A line qualifies for `min_col` when it is non-blank, or when it is the only
    /// line in the list (a single-line region aligns to its own indentation even when
    /// blank). All lines are scanned so the blank map is complete.
    fn classify(&self, document: &Document, combined: &[&Line]) -> LineClassification {
        let single_line = combined.len() == 1;
        let mut min_col: Option<usize> = None;
        let mut commented = true;
        let mut blank = HashSet::new();

        for line in combined {
            let text = document.slice(line);
            let indent = skip_whitespace(&text, 0, Direction::Forward);
            if indent == line.length {
                blank.insert(line.number);
            }
            if indent < line.length || single_line {
                min_col = Some(min_col.map_or(indent, |col| col.min(indent)));
                if !starts_with_at(&text, &self.token, indent) {
                    commented = false;
                }
            }
        }

        LineClassification {
            min_col,
            commented,
            blank,
        }
    }

    fn comment_edits(
        &self,
        per_region: &[Vec<Line>],
        min_col: usize,
        skip: &dyn Fn(&Line) -> bool,
    ) -> EditBatch {
        let mut batch = EditBatch::new();
        for lines in per_region {
            for line in lines {
                if skip(line) {
                    continue;
                }
                batch.push(Edit::insert_at(
                    line.start + min_col,
                    format!("{}{}", self.token, self.margin),
                ));
            }
        }
        batch
    }

    fn uncomment_edits(
        &self,
        document: &Document,
        per_region: &[Vec<Line>],
        min_col: usize,
        skip: &dyn Fn(&Line) -> bool,
    ) -> EditBatch {
        let token_len = self.token.chars().count();
        let mut batch = EditBatch::new();
        for lines in per_region {
            for line in lines {
                if skip(line) {
                    continue;
                }
                let text = document.slice(line);
                let margin_len = usize::from(
                    text.chars()
                        .nth(min_col + token_len)
                        .is_some_and(|c| c.is_whitespace()),
                );
                let start = line.start + min_col;
                batch.push(Edit::remove_range(
                    start,
                    document.text_range(start, token_len + margin_len),
                ));
            }
        }
        batch
    }
}
