//! Line ending helpers.
//!
//! The kernel stores document text using LF (`'\n'`) newlines. CRLF (`"\r\n"`) input is
//! normalized on load and the preferred ending is tracked so hosts can restore it when
//! rendering or saving the edited document.

/// The preferred newline sequence of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: any CRLF (`"\r\n"`) in the input means [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The newline sequence as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Normalize a source text to LF newlines.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Split text into lines, preserving trailing empty segments.
///
/// `str::split('\n')` keeps trailing empty segments, which matches editor line
/// semantics (N newlines => N+1 lines) and stays consistent with the rope-backed
/// document. Any stray `'\r'` before a break is stripped.
pub fn split_lines_preserve_trailing(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("plain"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_and_apply_round_trip() {
        let source = "a\r\nb\r\n";
        let normalized = LineEnding::normalize(source);
        assert_eq!(normalized, "a\nb\n");
        assert_eq!(LineEnding::Crlf.apply_to_text(&normalized), source);
        assert_eq!(LineEnding::Lf.apply_to_text(&normalized), normalized);
    }

    #[test]
    fn test_split_preserves_trailing_empty_line() {
        assert_eq!(split_lines_preserve_trailing("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines_preserve_trailing(""), vec![""]);
        assert_eq!(split_lines_preserve_trailing("a\r\nb"), vec!["a", "b"]);
    }
}
