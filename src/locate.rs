//! Page number resolution for paragraph text

use std::fmt;

/// Page on which a paragraph appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    /// 1-based page index
    Page(usize),
    /// The text was not found on any page
    Unknown,
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Page(n) => write!(f, "{}", n),
            PageNumber::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Find the first page whose text contains `text` verbatim
///
/// Paragraphs that the renderer reflowed across a page break (or joined
/// with different whitespace) are not found and resolve to `Unknown`.
pub fn locate<S: AsRef<str>>(text: &str, pages: &[S]) -> PageNumber {
    pages
        .iter()
        .position(|page| page.as_ref().contains(text))
        .map_or(PageNumber::Unknown, |index| PageNumber::Page(index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_second_page() {
        let pages = ["Hello world", "Goodbye"];
        assert_eq!(locate("Goodbye", &pages), PageNumber::Page(2));
        assert_eq!(locate("Nowhere", &pages), PageNumber::Unknown);
    }

    #[test]
    fn test_first_match_wins() {
        let pages = vec!["intro".to_string(), "repeat me".to_string(), "repeat me".to_string()];
        assert_eq!(locate("repeat", &pages), PageNumber::Page(2));
        assert_eq!(locate("repeat", &pages), locate("repeat", &pages));
    }

    #[test]
    fn test_substring_match() {
        let pages = ["Chapter 1\nThe quick brown fox jumps"];
        assert_eq!(locate("quick brown", &pages), PageNumber::Page(1));
    }

    #[test]
    fn test_split_across_pages_not_found() {
        let pages = ["The quick brown", "fox jumps"];
        assert_eq!(locate("The quick brown fox jumps", &pages), PageNumber::Unknown);
    }

    #[test]
    fn test_no_pages() {
        let pages: [&str; 0] = [];
        assert_eq!(locate("anything", &pages), PageNumber::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(PageNumber::Page(3).to_string(), "3");
        assert_eq!(PageNumber::Unknown.to_string(), "Unknown");
    }
}
