// Comment removal for Elm source text
//
// Both passes keep every newline, so a line number in the stripped text is
// the same line number in the original file.

/// Opens a block comment
pub const BLOCK_OPEN: &str = "{-";
/// Closes a block comment
pub const BLOCK_CLOSE: &str = "-}";
/// Starts a comment running to the end of the line
pub const LINE_MARKER: &str = "--";
/// Delimits a string literal that may span lines
const MULTILINE_QUOTE: &str = "\"\"\"";

/// Source text with comments removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// The remaining text
    pub text: String,
    /// Line (1-indexed) of the outermost block comment that never closed
    pub unterminated_at: Option<usize>,
}

/// Remove block and line comments, in that order
pub fn strip_comments(source: &str) -> Stripped {
    let blocks = remove_block_comments(source);
    Stripped {
        text: remove_line_comments(&blocks.text),
        unterminated_at: blocks.unterminated_at,
    }
}

/// Replace every `{- ... -}` span with the newlines it contained.
///
/// Block comments nest. A comment still open at end of text swallows the
/// rest of the file. Outside comments, `--` line comments and string or
/// character literals are copied through untouched, so a `{-` inside them
/// opens nothing.
pub fn remove_block_comments(source: &str) -> Stripped {
    let mut text = String::with_capacity(source.len());
    let mut depth = 0usize;
    let mut line = 1;
    let mut opened_at = 0;
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        if rest.starts_with(BLOCK_OPEN) {
            if depth == 0 {
                opened_at = line;
            }
            depth += 1;
            rest = &rest[BLOCK_OPEN.len()..];
            continue;
        }

        if depth > 0 && rest.starts_with(BLOCK_CLOSE) {
            depth -= 1;
            rest = &rest[BLOCK_CLOSE.len()..];
            continue;
        }

        if depth == 0 {
            let verbatim = if rest.starts_with(LINE_MARKER) {
                rest.find('\n').unwrap_or(rest.len())
            } else if rest.starts_with(MULTILINE_QUOTE) {
                literal_len(rest, MULTILINE_QUOTE, true)
            } else if ch == '"' || ch == '\'' {
                literal_len(rest, &rest[..1], false)
            } else {
                0
            };

            if verbatim > 0 {
                let (copied, remaining) = rest.split_at(verbatim);
                line += copied.matches('\n').count();
                text.push_str(copied);
                rest = remaining;
                continue;
            }
        }

        if ch == '\n' {
            line += 1;
            text.push('\n');
        } else if depth == 0 {
            text.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    Stripped {
        text,
        unterminated_at: (depth > 0).then_some(opened_at),
    }
}

/// Byte length of the literal opening `rest`, delimiters included.
///
/// Single-line literals stop before the end of their line; an unclosed
/// literal runs to the end of the text.
fn literal_len(rest: &str, delimiter: &str, multiline: bool) -> usize {
    let start = delimiter.len();
    let body = &rest[start..];
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if let Some((j, '\n')) = chars.next() {
                if !multiline {
                    return start + j;
                }
            }
        } else if c == '\n' && !multiline {
            return start + i;
        } else if body[i..].starts_with(delimiter) {
            return start + i + delimiter.len();
        }
    }

    rest.len()
}

/// Truncate every line at its first `--`, keeping the newline
pub fn remove_line_comments(source: &str) -> String {
    let mut text = String::with_capacity(source.len());

    for (i, line) in source.split('\n').enumerate() {
        if i > 0 {
            text.push('\n');
        }
        match line.find(LINE_MARKER) {
            Some(pos) => text.push_str(&line[..pos]),
            None => text.push_str(line),
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_count(s: &str) -> usize {
        s.split('\n').count()
    }

    #[test]
    fn test_block_comment_replaced_by_newlines() {
        let source = "module A exposing (..)\n{- one\ntwo\nthree -}\nimport B\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "module A exposing (..)\n\n\n\nimport B\n");
        assert_eq!(stripped.unterminated_at, None);
    }

    #[test]
    fn test_nested_block_comments() {
        let source = "a {- outer {- inner -}\n still outer -} b";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "a \n b");
    }

    #[test]
    fn test_doc_comment_is_block_comment() {
        let source = "{-| Docs for the module.\n\n    import Fake\n-}\nmodule A exposing (x)\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "\n\n\n\nmodule A exposing (x)\n");
    }

    #[test]
    fn test_stray_close_is_kept() {
        let stripped = remove_block_comments("x -} y");
        assert_eq!(stripped.text, "x -} y");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let source = "module A exposing (..)\nimport B\n{- start\nimport C\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "module A exposing (..)\nimport B\n\n\n");
        assert_eq!(stripped.unterminated_at, Some(3));
    }

    #[test]
    fn test_unterminated_reports_outermost_opening() {
        let source = "{- a\n{- b -}\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.unterminated_at, Some(1));
    }

    #[test]
    fn test_line_comments() {
        let source = "import A -- why\n-- whole line\nimport B\nx = 1 -- trailing";
        assert_eq!(
            remove_line_comments(source),
            "import A \n\nimport B\nx = 1 "
        );
    }

    #[test]
    fn test_line_comment_eats_carriage_return() {
        assert_eq!(remove_line_comments("import A -- c\r\nimport B\r\n"), "import A \nimport B\r\n");
    }

    #[test]
    fn test_strip_preserves_line_count() {
        let sources = [
            "",
            "module A exposing (..)",
            "{- a\nb\n-}\nimport X -- y\n",
            "{- {- deep\n-}\n-}\n\n\n-- end",
            "{- never closed\n\n\n",
            "émoji {- ✓\n -} ünïcode -- ✗\n",
        ];
        for source in sources {
            let stripped = strip_comments(source);
            assert_eq!(line_count(&stripped.text), line_count(source), "{:?}", source);
        }
    }

    #[test]
    fn test_strip_is_idempotent() {
        let sources = [
            "module A exposing (..)\n{- x -}import B -- c\n",
            "{--}--\n{-}-}-}\n",
            "{- {- -} -} -- {- \nimport C",
            "a {-- b --} c\n- - -\n",
            "-- {- note\nx = \"{- --\" {- y -}\nimport C\n",
            "c = '\"' -- it's {-\n",
        ];
        for source in sources {
            let once = strip_comments(source);
            let twice = strip_comments(&once.text);
            assert_eq!(twice.text, once.text, "{:?}", source);
        }
    }

    #[test]
    fn test_open_marker_inside_line_comment() {
        let source = "module A exposing (..)\n-- wrap notes in {- ... like this\nimport B\n";
        let stripped = strip_comments(source);
        assert_eq!(stripped.text, "module A exposing (..)\n\nimport B\n");
        assert_eq!(stripped.unterminated_at, None);
    }

    #[test]
    fn test_open_marker_inside_string_literal() {
        let source = "open = \"{-\"\nclose = '{'\nimport B\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, source);
        assert_eq!(stripped.unterminated_at, None);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let source = "s = \"a \\\" {- b\" {- gone -}\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "s = \"a \\\" {- b\" \n");
    }

    #[test]
    fn test_multiline_string_keeps_markers() {
        let source = "s = \"\"\"\n{- not a comment\n\"\"\"\n{- a comment -}import B\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "s = \"\"\"\n{- not a comment\n\"\"\"\nimport B\n");
    }

    #[test]
    fn test_unclosed_string_stops_at_line_end() {
        let source = "s = \"open\n{- c -}import B\n";
        let stripped = remove_block_comments(source);
        assert_eq!(stripped.text, "s = \"open\nimport B\n");
    }

    #[test]
    fn test_block_removed_before_line_comments() {
        // The `--` inside the block comment must not cut the line short.
        let stripped = strip_comments("import A {- -- -} exposing (x)\n");
        assert_eq!(stripped.text, "import A  exposing (x)\n");
    }
}
