//! Block-comment stripping.
//!
//! Block comments (`{- ... -}`) are removed from the raw text before any line processing. Matching
//! is non-greedy and non-nesting: a comment ends at the first `-}` after its `{-`. The removal
//! deletes the newlines inside the comment too, so text on either side joins into one line.
//!
//! Known limitation: an unterminated `{-` removes everything up to the end of the input.
//!
//! The stripper records every removed range so offsets into the stripped text can be mapped back
//! to the original input for diagnostics.

use conftoml_core::lang::punctuation::{self, PunctuationId};

/// One removed region, located in stripped-text coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Removal {
    /// Offset in the stripped text where the comment used to be.
    at: usize,
    /// Byte length of the removed comment.
    len: usize,
}

/// Comment-free text plus the mapping back to the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSource {
    text: String,
    removals: Vec<Removal>,
    unterminated: bool,
}

impl StrippedSource {
    /// The text with every block comment removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of comments removed.
    pub fn comment_count(&self) -> usize {
        self.removals.len()
    }

    /// `true` if the last comment had no closing marker and ran to the end of the input.
    pub fn had_unterminated_comment(&self) -> bool {
        self.unterminated
    }

    /// Map a byte offset in the stripped text to the matching offset in the original input.
    pub fn original_offset(&self, stripped: usize) -> usize {
        stripped
            + self
                .removals
                .iter()
                .take_while(|r| r.at <= stripped)
                .map(|r| r.len)
                .sum::<usize>()
    }
}

/// Remove every `{- ... -}` region from `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn strip_block_comments(source: &str) -> StrippedSource {
    let open = punctuation::as_str(PunctuationId::BlockCommentOpen);
    let close = punctuation::as_str(PunctuationId::BlockCommentClose);

    let mut text = String::with_capacity(source.len());
    let mut removals = Vec::new();
    let mut unterminated = false;
    let mut rest = source;

    while let Some(start) = rest.find(open) {
        text.push_str(&rest[..start]);
        let body = &rest[start + open.len()..];
        let removed = match body.find(close) {
            Some(end) => open.len() + end + close.len(),
            None => {
                unterminated = true;
                rest.len() - start
            }
        };
        removals.push(Removal {
            at: text.len(),
            len: removed,
        });
        rest = &rest[start + removed..];
    }
    text.push_str(rest);

    if unterminated {
        tracing::warn!("unterminated block comment; the rest of the input was discarded");
    }

    StrippedSource {
        text,
        removals,
        unterminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_multiline_comment() {
        let src = "{-\n this comment\n spans lines\n-}\nVALUE := 42;\n";
        let stripped = strip_block_comments(src);
        assert_eq!(stripped.text(), "\nVALUE := 42;\n");
        assert_eq!(stripped.comment_count(), 1);
        assert!(!stripped.had_unterminated_comment());
    }

    #[test]
    fn matching_is_non_greedy() {
        let stripped = strip_block_comments("a {- x -} b {- y -} c");
        assert_eq!(stripped.text(), "a  b  c");
    }

    #[test]
    fn comments_do_not_nest() {
        let stripped = strip_block_comments("{- outer {- inner -} tail -}");
        assert_eq!(stripped.text(), " tail -}");
    }

    #[test]
    fn open_marker_does_not_share_dash_with_close() {
        let stripped = strip_block_comments("a {-} b -} c");
        assert_eq!(stripped.text(), "a  c");
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        let stripped = strip_block_comments("A := 1;\n{- never closed\nB := 2;\n");
        assert_eq!(stripped.text(), "A := 1;\n");
        assert!(stripped.had_unterminated_comment());
    }

    #[test]
    fn joins_text_around_comment() {
        let stripped = strip_block_comments("key = {- gone\n -}value");
        assert_eq!(stripped.text(), "key = value");
    }

    #[test]
    fn maps_offsets_back_to_original() {
        let src = "{- abc -}X := 1;\n{-z-}Y := 2;";
        let stripped = strip_block_comments(src);
        assert_eq!(stripped.text(), "X := 1;\nY := 2;");
        let x = stripped.text().find('X').unwrap();
        let y = stripped.text().find('Y').unwrap();
        assert_eq!(&src[stripped.original_offset(x)..][..1], "X");
        assert_eq!(&src[stripped.original_offset(y)..][..1], "Y");
    }

    #[test]
    fn no_comments_is_identity() {
        let src = "PORT := 8080;\n[server]\nport = PORT\n";
        let stripped = strip_block_comments(src);
        assert_eq!(stripped.text(), src);
        assert_eq!(stripped.original_offset(5), 5);
    }
}
