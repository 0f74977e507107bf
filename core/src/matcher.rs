use crate::error::{GenreError, Result};
use regex::{Regex, RegexBuilder};

/// One keyword occurrence: the configured keyword and its byte span in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'k> {
    pub keyword: &'k str,
    pub start: usize,
    pub end: usize,
}

/// All configured keywords compiled into one case-insensitive alternation.
///
/// Each keyword is escaped and wrapped in its own capture group so a match
/// can be mapped back to the configured spelling rather than the text's
/// casing. There are no word boundaries: `war` matches inside `award`.
/// When two keywords start at the same position the one listed first wins.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    keywords: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordIndex {
    pub fn build<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        if keywords.is_empty() {
            return Ok(Self { keywords, pattern: None });
        }
        // an empty alternative would match at every position
        if keywords.iter().any(String::is_empty) {
            return Err(GenreError::EmptyIndexKeyword);
        }
        let alternation = keywords
            .iter()
            .map(|k| format!("({})", regex::escape(k)))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;
        tracing::debug!(keywords = keywords.len(), "compiled keyword pattern");
        Ok(Self { keywords, pattern: Some(pattern) })
    }

    pub fn keywords(&self) -> &[String] { &self.keywords }

    /// Scan left to right and report every non-overlapping occurrence.
    pub fn find_spans(&self, text: &str) -> Vec<KeywordMatch<'_>> {
        let Some(pattern) = &self.pattern else { return Vec::new() };
        let mut out = Vec::new();
        for caps in pattern.captures_iter(text) {
            // group 0 is the whole match; group i + 1 belongs to keywords[i]
            let hit = caps.iter().skip(1).enumerate().find_map(|(i, m)| m.map(|m| (i, m)));
            if let Some((i, m)) = hit {
                out.push(KeywordMatch { keyword: &self.keywords[i], start: m.start(), end: m.end() });
            }
        }
        out
    }

    /// Matched keywords in order of occurrence, duplicates kept.
    pub fn find_keywords(&self, text: &str) -> Vec<&str> {
        self.find_spans(text).into_iter().map(|m| m.keyword).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively_inside_words() {
        let idx = KeywordIndex::build(["war"]).unwrap();
        assert_eq!(idx.find_keywords("WAR and an Award"), vec!["war", "war"]);
    }

    #[test]
    fn escapes_pattern_characters() {
        let idx = KeywordIndex::build(["c++", "a.b"]).unwrap();
        assert_eq!(idx.find_keywords("c++ and axb and a.b"), vec!["c++", "a.b"]);
    }

    #[test]
    fn earlier_keyword_wins_at_same_position() {
        let idx = KeywordIndex::build(["dragon", "dragonfly"]).unwrap();
        assert_eq!(idx.find_keywords("a dragonfly"), vec!["dragon"]);
        let idx = KeywordIndex::build(["dragonfly", "dragon"]).unwrap();
        assert_eq!(idx.find_keywords("a dragonfly"), vec!["dragonfly"]);
    }

    #[test]
    fn consumed_span_is_not_rescanned() {
        let idx = KeywordIndex::build(["aba"]).unwrap();
        let spans = idx.find_spans("ababa");
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (0, 3));

        let idx = KeywordIndex::build(["aba", "ba"]).unwrap();
        let spans: Vec<(usize, usize)> = idx.find_spans("ababa").iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, vec![(0, 3), (3, 5)]);
    }

    #[test]
    fn rejects_empty_keyword() {
        let err = KeywordIndex::build(["magic", ""]).unwrap_err();
        assert!(matches!(err, GenreError::EmptyIndexKeyword));
    }

    #[test]
    fn keeps_keyword_order() {
        let idx = KeywordIndex::build(["war", "magic", "love"]).unwrap();
        assert_eq!(idx.keywords(), ["war".to_string(), "magic".to_string(), "love".to_string()]);
    }

    #[test]
    fn empty_keyword_set_matches_nothing() {
        let idx = KeywordIndex::build(Vec::<String>::new()).unwrap();
        assert!(idx.keywords().is_empty());
        assert!(idx.find_keywords("anything at all").is_empty());
    }
}
