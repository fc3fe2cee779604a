/// Put a backslash in front of every double quote in `text`.
///
/// Each `"` is escaped on its own: a quote that was already escaped in the
/// source gets a second backslash, so applying this twice is not a no-op.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_single_quote_char() {
        assert_eq!(escape_quotes("a\"b"), "a\\\"b");
    }

    #[test]
    fn leaves_text_without_quotes_alone() {
        assert_eq!(escape_quotes("let x = 'y';"), "let x = 'y';");
        assert_eq!(escape_quotes(""), "");
    }

    #[test]
    fn already_escaped_quote_is_escaped_again() {
        assert_eq!(escape_quotes(r#"say \"hi\""#), r#"say \\"hi\\""#);
    }

    #[test]
    fn escaping_is_not_idempotent() {
        let once = escape_quotes("\"");
        assert_ne!(escape_quotes(&once), once);
    }
}
