//! Cursor-based productions over a `.msg` buffer.
//!
//! Every function takes the whole buffer plus a byte offset and returns the
//! offset just past whatever it consumed. Nothing here knows about sections
//! or files; the catalog builder composes these into the full grammar.

use thiserror::Error;

const QUOTE: char = '"';

/// A failure inside a production that has already committed to matching.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("expected an opening quote")]
    MissingOpenQuote { offset: usize },

    #[error("closing quotation mark not found")]
    UnterminatedQuote { offset: usize },

    #[error("invalid escape sequence \\{symbol}")]
    InvalidEscape { symbol: char, offset: usize },
}

impl ScanError {
    /// Byte offset the error refers to.
    pub fn offset(&self) -> usize {
        match *self {
            ScanError::MissingOpenQuote { offset }
            | ScanError::UnterminatedQuote { offset }
            | ScanError::InvalidEscape { offset, .. } => offset,
        }
    }
}

/// A matched `Key: "value"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<'a> {
    /// Key name with surrounding whitespace removed
    pub key: &'a str,
    /// Concatenated, escape-decoded value
    pub value: String,
    /// Offset of the first opening quote of the value
    pub value_start: usize,
    /// Offset just past the last consumed character
    pub end: usize,
}

fn peek(buf: &str, pos: usize) -> Option<char> {
    buf.get(pos..)?.chars().next()
}

/// Skip whitespace, including newlines.
pub fn skip_whitespace(buf: &str, mut pos: usize) -> usize {
    while let Some(c) = peek(buf, pos) {
        if !c.is_whitespace() {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

fn starts_comment(rest: &str) -> bool {
    rest.starts_with(';') || rest.starts_with("//")
}

/// Skip whitespace and any number of `;` or `//` line comments.
pub fn skip_whitespace_and_comments(buf: &str, pos: usize) -> usize {
    let mut pos = skip_whitespace(buf, pos);
    while buf.get(pos..).is_some_and(starts_comment) {
        pos = match buf[pos..].find('\n') {
            Some(i) => pos + i,
            None => buf.len(),
        };
        pos = skip_whitespace(buf, pos);
    }
    pos
}

fn parse_delimited(buf: &str, pos: usize, open: char, close: char) -> Option<(&str, usize)> {
    let rest = buf.get(pos..)?.strip_prefix(open)?;
    let close_at = rest.find(close)?;
    let name = &rest[..close_at];
    Some((name, pos + open.len_utf8() + close_at + close.len_utf8()))
}

/// Match a positional section header: `[Name]`.
///
/// The returned name is the raw text between the brackets.
pub fn try_parse_bracket_section(buf: &str, pos: usize) -> Option<(&str, usize)> {
    parse_delimited(buf, pos, '[', ']')
}

/// Match a named section header: `{Name}`.
pub fn try_parse_brace_section(buf: &str, pos: usize) -> Option<(&str, usize)> {
    parse_delimited(buf, pos, '{', '}')
}

/// Check that a key looks like an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Match a `Key: "value" ["more"...]` line.
///
/// Returns `Ok(None)` when the text at `pos` is not a key (no colon, empty
/// key, or a key that is not an identifier). Once a valid key and its colon
/// are found, any problem with the value is an error.
pub fn try_parse_key_value(buf: &str, pos: usize) -> Result<Option<KeyValue<'_>>, ScanError> {
    let Some(rest) = buf.get(pos..) else {
        return Ok(None);
    };
    let colon = match rest.find(':') {
        Some(0) | None => return Ok(None),
        Some(i) => pos + i,
    };

    let key = buf[pos..colon].trim();
    if !is_valid_key(key) {
        return Ok(None);
    }

    let (value, value_start, end) = parse_value(buf, colon)?;
    Ok(Some(KeyValue {
        key,
        value,
        value_start,
        end,
    }))
}

/// Parse one or more adjacent quoted fragments following the colon at `colon`.
fn parse_value(buf: &str, colon: usize) -> Result<(String, usize, usize), ScanError> {
    let mut pos = skip_whitespace_and_comments(buf, colon + 1);
    if peek(buf, pos) != Some(QUOTE) {
        return Err(ScanError::MissingOpenQuote { offset: pos });
    }

    let value_start = pos;
    let mut raw = String::new();
    loop {
        let close =
            find_closing_quote(buf, pos).ok_or(ScanError::UnterminatedQuote { offset: pos })?;
        raw.push_str(&buf[pos + 1..close]);

        pos = skip_whitespace_and_comments(buf, close + 1);
        if peek(buf, pos) != Some(QUOTE) {
            break;
        }
    }

    let value = decode_escapes(&raw).map_err(|symbol| ScanError::InvalidEscape {
        symbol,
        offset: value_start,
    })?;
    Ok((value, value_start, pos))
}

/// Find the quote closing the one at `open`, skipping `\"`.
fn find_closing_quote(buf: &str, open: usize) -> Option<usize> {
    let bytes = buf.as_bytes();
    let mut from = open + 1;
    while let Some(i) = buf[from..].find(QUOTE) {
        let at = from + i;
        if bytes[at - 1] != b'\\' {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

/// Decode `\\`, `\n`, `\r` and `\"`. Any other escape yields the offending character.
pub fn decode_escapes(raw: &str) -> Result<String, char> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => decoded.push('\\'),
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('"') => decoded.push('"'),
            Some(other) => return Err(other),
            // A fragment never ends in a bare backslash since it would escape the closing quote.
            None => decoded.push('\\'),
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value_of(source: &str) -> String {
        try_parse_key_value(source, 0).unwrap().unwrap().value
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace("  \t\r\nx", 0), 5);
        assert_eq!(skip_whitespace("x", 0), 0);
        assert_eq!(skip_whitespace("   ", 0), 3);
    }

    #[test]
    fn test_skip_comments() {
        let source = "  ; first\n// second\n   Key";
        let pos = skip_whitespace_and_comments(source, 0);

        assert_eq!(&source[pos..], "Key");
    }

    #[test]
    fn test_skip_comment_at_eof() {
        let source = "// trailing comment";

        assert_eq!(skip_whitespace_and_comments(source, 0), source.len());
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        let source = "/ not a comment";

        assert_eq!(skip_whitespace_and_comments(source, 0), 0);
    }

    #[test]
    fn test_bracket_section() {
        let source = "[Common]\nOk: \"OK\"";
        let (name, pos) = try_parse_bracket_section(source, 0).unwrap();

        assert_eq!(name, "Common");
        assert_eq!(pos, 8);
    }

    #[test]
    fn test_bracket_section_keeps_raw_name() {
        let (name, _) = try_parse_bracket_section("[ Spaced ]", 0).unwrap();

        assert_eq!(name, " Spaced ");
    }

    #[test]
    fn test_empty_bracket_section() {
        let (name, pos) = try_parse_bracket_section("[]", 0).unwrap();

        assert_eq!(name, "");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_unclosed_bracket_section() {
        assert!(try_parse_bracket_section("[Common", 0).is_none());
        assert!(try_parse_bracket_section("Common]", 0).is_none());
    }

    #[test]
    fn test_brace_section() {
        let (name, pos) = try_parse_brace_section("  {Errors}", 2).unwrap();

        assert_eq!(name, "Errors");
        assert_eq!(pos, 10);
        assert!(try_parse_brace_section("[Errors]", 0).is_none());
    }

    #[test]
    fn test_valid_keys() {
        assert!(is_valid_key("Ok"));
        assert!(is_valid_key("_private"));
        assert!(is_valid_key("Key2_b"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("2Key"));
        assert!(!is_valid_key("Key-Name"));
        assert!(!is_valid_key("Two words"));
    }

    #[test]
    fn test_key_value() {
        let source = "Ok: \"OK\"\nNext";
        let kv = try_parse_key_value(source, 0).unwrap().unwrap();

        assert_eq!(kv.key, "Ok");
        assert_eq!(kv.value, "OK");
        assert_eq!(kv.value_start, 4);
        assert_eq!(&source[kv.end..], "Next");
    }

    #[test]
    fn test_key_is_trimmed() {
        let kv = try_parse_key_value("Cancel  : \"Cancel\"", 0).unwrap().unwrap();

        assert_eq!(kv.key, "Cancel");
    }

    #[test]
    fn test_not_a_key_value() {
        assert_eq!(try_parse_key_value("no colon here", 0), Ok(None));
        assert_eq!(try_parse_key_value(": \"x\"", 0), Ok(None));
        assert_eq!(try_parse_key_value("bad key: \"x\"", 0), Ok(None));
        assert_eq!(try_parse_key_value("9lives: \"x\"", 0), Ok(None));
    }

    #[test]
    fn test_adjacent_fragments_concatenate() {
        assert_eq!(value_of("Key: \"Hello, \" \"World!\""), "Hello, World!");
    }

    #[test]
    fn test_fragments_across_lines_and_comments() {
        let source = "Key: \"a\" ; first part\n  // more\n  \"b\"\nOther: \"c\"";
        let kv = try_parse_key_value(source, 0).unwrap().unwrap();

        assert_eq!(kv.value, "ab");
        assert_eq!(&source[kv.end..], "Other: \"c\"");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(value_of(r#"Key: "say \"hi\"""#), "say \"hi\"");
    }

    #[test]
    fn test_escape_decoding() {
        assert_eq!(value_of(r#"Key: "a\nb""#), "a\nb");
        assert_eq!(value_of(r#"Key: "a\r\nb""#), "a\r\nb");
        assert_eq!(value_of(r#"Key: "back\\slash""#), "back\\slash");
    }

    #[test]
    fn test_escaped_backslash_then_letter() {
        assert_eq!(value_of(r#"Key: "\\n""#), "\\n");
    }

    #[test]
    fn test_invalid_escape() {
        let err = try_parse_key_value(r#"Key: "x\qy""#, 0).unwrap_err();

        assert_eq!(
            err,
            ScanError::InvalidEscape {
                symbol: 'q',
                offset: 5
            }
        );
    }

    #[test]
    fn test_missing_open_quote() {
        let err = try_parse_key_value("Key: value", 0).unwrap_err();

        assert_eq!(err, ScanError::MissingOpenQuote { offset: 5 });
    }

    #[test]
    fn test_missing_value_at_eof() {
        let err = try_parse_key_value("Key:", 0).unwrap_err();

        assert_eq!(err, ScanError::MissingOpenQuote { offset: 4 });
    }

    #[test]
    fn test_unterminated_quote() {
        let err = try_parse_key_value("Key: \"never closed", 0).unwrap_err();

        assert_eq!(err, ScanError::UnterminatedQuote { offset: 5 });
    }

    #[test]
    fn test_unterminated_second_fragment() {
        let err = try_parse_key_value("Key: \"a\" \"b", 0).unwrap_err();

        assert_eq!(err, ScanError::UnterminatedQuote { offset: 9 });
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(value_of("Key: \"\""), "");
    }

    #[test]
    fn test_non_ascii_value() {
        assert_eq!(value_of("Key: \"Привет, мир\""), "Привет, мир");
    }

    #[test]
    fn test_decode_escapes_direct() {
        assert_eq!(decode_escapes("plain"), Ok("plain".to_string()));
        assert_eq!(decode_escapes("\\t"), Err('t'));
    }
}
