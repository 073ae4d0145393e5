//! Selected regions of the document.
//!
//! A [`Region`] is an anchor/head pair of character offsets; the anchor is the fixed
//! end and the head is the moving end, so orientation survives edits. A
//! [`SelectionSet`] holds one or more regions plus the index of the primary one.

/// A selected span of the document, possibly empty (a caret).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// The fixed end of the selection.
    pub anchor: usize,
    /// The moving end of the selection (where the cursor is).
    pub head: usize,
}

impl Region {
    /// A region spanning `anchor..head` in either orientation.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// An empty region (caret) at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// The lower bound of the region.
    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// The upper bound of the region.
    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Returns `true` if the region selects nothing.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Returns `true` if the head is at or after the anchor.
    pub fn is_forward(&self) -> bool {
        self.anchor <= self.head
    }
}

/// One or more regions plus the primary region index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    regions: Vec<Region>,
    primary_index: usize,
}

impl SelectionSet {
    /// A selection set with a single region.
    pub fn single(region: Region) -> Self {
        Self {
            regions: vec![region],
            primary_index: 0,
        }
    }

    /// Build a normalized selection set: regions sorted in document order, overlapping
    /// regions merged, exact duplicates dropped, and the primary index re-derived from
    /// the old primary's head. An empty input degenerates to a caret at offset 0.
    pub fn new(regions: Vec<Region>, primary_index: usize) -> Self {
        let (regions, primary_index) = normalize_regions(regions, primary_index);
        Self {
            regions,
            primary_index,
        }
    }

    /// All regions, in document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The primary region.
    pub fn primary(&self) -> &Region {
        &self.regions[self.primary_index]
    }

    /// Index of the primary region in [`SelectionSet::regions`].
    pub fn primary_index(&self) -> usize {
        self.primary_index
    }
}

fn normalize_regions(mut regions: Vec<Region>, primary_index: usize) -> (Vec<Region>, usize) {
    if regions.is_empty() {
        return (vec![Region::caret(0)], 0);
    }

    let primary_head = regions
        .get(primary_index)
        .map(|r| r.head)
        .unwrap_or(regions[0].head);

    regions.sort_by(|a, b| {
        (a.from(), a.to(), a.head, a.anchor).cmp(&(b.from(), b.to(), b.head, b.anchor))
    });

    // Merge overlapping regions (half-open-ish: a region starting exactly at the
    // previous one's end is kept separate).
    let mut merged: Vec<Region> = Vec::with_capacity(regions.len());
    for region in regions {
        let Some(last) = merged.last_mut() else {
            merged.push(region);
            continue;
        };

        if region.from() < last.to() {
            // Merge to the union range; canonicalize to forward orientation.
            *last = Region::new(last.from().min(region.from()), last.to().max(region.to()));
        } else if region.from() == last.from() && region.to() == last.to() {
            // Exact duplicate - drop.
            continue;
        } else {
            merged.push(region);
        }
    }

    let new_primary_index = merged
        .iter()
        .position(|r| r.from() <= primary_head && primary_head <= r.to())
        .unwrap_or_else(|| merged.len().saturating_sub(1));

    (merged, new_primary_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_orientation() {
        let forward = Region::new(2, 5);
        assert_eq!((forward.from(), forward.to()), (2, 5));
        assert!(forward.is_forward());

        let backward = Region::new(5, 2);
        assert_eq!((backward.from(), backward.to()), (2, 5));
        assert!(!backward.is_forward());

        assert!(Region::caret(3).is_empty());
    }

    #[test]
    fn test_normalize_sorts_regions() {
        let set = SelectionSet::new(vec![Region::new(10, 12), Region::new(0, 2)], 0);
        assert_eq!(set.regions(), &[Region::new(0, 2), Region::new(10, 12)]);
        // Primary follows the old primary's head (12).
        assert_eq!(set.primary_index(), 1);
    }

    #[test]
    fn test_normalize_merges_overlapping() {
        let set = SelectionSet::new(vec![Region::new(0, 5), Region::new(3, 8)], 0);
        assert_eq!(set.regions(), &[Region::new(0, 8)]);
        assert_eq!(set.primary_index(), 0);
    }

    #[test]
    fn test_normalize_keeps_touching_regions_separate() {
        let set = SelectionSet::new(vec![Region::new(0, 3), Region::new(3, 6)], 1);
        assert_eq!(set.regions().len(), 2);
        assert_eq!(set.primary_index(), 1);
    }

    #[test]
    fn test_normalize_drops_duplicates() {
        let set = SelectionSet::new(vec![Region::new(1, 4), Region::new(1, 4)], 0);
        assert_eq!(set.regions(), &[Region::new(1, 4)]);
    }

    #[test]
    fn test_empty_input_degenerates_to_caret() {
        let set = SelectionSet::new(Vec::new(), 0);
        assert_eq!(set.regions(), &[Region::caret(0)]);
        assert_eq!(set.primary_index(), 0);
    }
}
