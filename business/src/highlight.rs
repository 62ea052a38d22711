//! Case-insensitive, literal matching for search and cell highlighting.
//!
//! Two characters match when their `char::to_lowercase` expansions are equal. Matching is done
//! one character at a time, so the filter and the highlighter always agree on what matches.

/// A contiguous run of cell text, tagged as matching the search query or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Split `text` into matched / unmatched segments for `query`.
///
/// Occurrences are found left to right without overlap, comparing characters
/// case-insensitively. The query is plain text: no character in it has a special meaning.
/// Original casing is preserved, and concatenating the segments yields `text` again.
///
/// An empty `query` (or empty `text`) yields a single unmatched segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: Vec<char> = query.chars().collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(end) = match_at(text, cursor, &needle) {
            if plain_start < cursor {
                segments.push(Segment::plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::matched(&text[cursor..end]));
            cursor = end;
            plain_start = end;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Whether `query` occurs in `text` under the same rule [`highlight`] uses.
///
/// An empty `query` is contained in every text.
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle: Vec<char> = query.chars().collect();
    text.char_indices()
        .any(|(start, _)| match_at(text, start, &needle).is_some())
}

/// Byte offset right after `needle` if it occurs at byte offset `start` of `text`.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut chars = text[start..].char_indices();
    for expected in needle {
        let (_, actual) = chars.next()?;
        if !eq_ignore_case(actual, *expected) {
            return None;
        }
    }
    Some(start + chars.offset())
}

#[inline]
fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn contains_agrees_with_highlight() {
        for (text, query) in [
            ("Bob Bobson", "BO"),
            ("a@x.com", "X.C"),
            ("ΟΔΟΣ", "ος"),
            ("ΟΔΟΣ", "οσ"),
            ("İstanbul", "i"),
            ("Amy", "zzz"),
        ] {
            let any_matched = highlight(text, query).iter().any(|s| s.matched);
            assert_eq!(contains_ignore_case(text, query), any_matched, "{text:?} / {query:?}");
        }
        assert!(contains_ignore_case("ΟΔΟΣ", "οσ"));
        assert!(!contains_ignore_case("ΟΔΟΣ", "ος"));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn empty_query_returns_text_unmatched() {
        assert_eq!(highlight("Bob", ""), vec![Segment::plain("Bob")]);
        assert_eq!(highlight("", ""), vec![Segment::plain("")]);
        assert_eq!(highlight("", "bo"), vec![Segment::plain("")]);
    }

    #[test]
    fn matches_case_insensitively_and_keeps_casing() {
        assert_eq!(
            highlight("Bob Bobson", "bo"),
            vec![
                Segment::matched("Bo"),
                Segment::plain("b "),
                Segment::matched("Bo"),
                Segment::plain("bson"),
            ]
        );
    }

    #[test]
    fn adjacent_occurrences_do_not_overlap() {
        assert_eq!(
            highlight("aaa", "aa"),
            vec![Segment::matched("aa"), Segment::plain("a")]
        );
        assert_eq!(
            highlight("abab", "ab"),
            vec![Segment::matched("ab"), Segment::matched("ab")]
        );
    }

    #[test]
    fn pattern_characters_are_literal() {
        assert_eq!(
            highlight("a.b@x.com", "."),
            vec![
                Segment::plain("a"),
                Segment::matched("."),
                Segment::plain("b@x"),
                Segment::matched("."),
                Segment::plain("com"),
            ]
        );
        assert_eq!(
            highlight("price (usd)", "(u"),
            vec![
                Segment::plain("price "),
                Segment::matched("(u"),
                Segment::plain("sd)"),
            ]
        );
        assert_eq!(highlight("abc", "[a-z]"), vec![Segment::plain("abc")]);
        assert_eq!(
            highlight("x*y", "*"),
            vec![Segment::plain("x"), Segment::matched("*"), Segment::plain("y")]
        );
    }

    #[test]
    fn no_match_returns_single_plain_segment() {
        assert_eq!(highlight("b@x.com", "bo"), vec![Segment::plain("b@x.com")]);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let segments = highlight("Zoë ÉCOLE école", "éc");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Zoë "),
                Segment::matched("ÉC"),
                Segment::plain("OLE "),
                Segment::matched("éc"),
                Segment::plain("ole"),
            ]
        );
    }

    #[test]
    fn segments_reconstruct_the_text() {
        let cases = [
            ("Leanne Graham", "an"),
            ("Sincere@april.biz", "I"),
            ("ÅÄÖ åäö", "äö"),
            ("mississippi", "ssi"),
            ("", "x"),
            ("query longer than text", "query longer than text, really"),
        ];
        for (text, query) in cases {
            let segments = highlight(text, query);
            assert_eq!(joined(&segments), text, "query {query:?}");
            assert!(
                segments.iter().all(|s| !s.text.is_empty()) || segments.len() == 1,
                "no empty segments for {text:?} / {query:?}"
            );
        }
    }
}
