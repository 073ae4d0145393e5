//! Scanning primitives shared by the line and block commenters.
//!
//! All offsets are character offsets into the given text (usually a single line slice).

/// Direction of a whitespace scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scan characters at `pos`, `pos + 1`, ...
    Forward,
    /// Scan characters at `pos - 1`, `pos - 2`, ...
    Backward,
}

/// Count contiguous whitespace characters starting at `pos` in the given direction.
///
/// Whitespace follows Unicode `White_Space`, which includes the non-breaking space.
/// A backward scan examines the characters *before* `pos`, so the two directions
/// compose naturally around a boundary position.
pub fn skip_whitespace(text: &str, pos: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => text
            .chars()
            .skip(pos)
            .take_while(|c| c.is_whitespace())
            .count(),
        Direction::Backward => {
            let total = text.chars().count();
            let pos = pos.min(total);
            let mut count = 0;
            for (i, c) in text.chars().enumerate() {
                if i >= pos {
                    break;
                }
                if c.is_whitespace() {
                    count += 1;
                } else {
                    count = 0;
                }
            }
            // `count` now holds the run length ending just before `pos`.
            count
        }
    }
}

/// Returns `true` if `needle` occurs in `text` beginning exactly at `pos`.
pub fn starts_with_at(text: &str, needle: &str, pos: usize) -> bool {
    let mut chars = text.chars().skip(pos);
    needle.chars().all(|n| chars.next() == Some(n))
}

/// Returns `true` if `needle` occurs in `text` ending exactly at `end_pos`.
pub fn ends_with_at(text: &str, needle: &str, end_pos: usize) -> bool {
    let len = needle.chars().count();
    end_pos >= len && starts_with_at(text, needle, end_pos - len)
}
