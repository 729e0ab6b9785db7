//! Output sanitization.
//!
//! Every text field that reaches a response body goes through [`escape_html`]
//! exactly once. Escaping twice double-encodes, so the call sites live at the
//! response boundary and nowhere else.

/// Escape HTML-significant characters for safe embedding in an HTML or
/// JSON-rendered context.
///
/// Total over any input string. Plain alphanumeric text passes through
/// unchanged. Not idempotent: `escape_html("&")` is `"&amp;"`, and escaping
/// that again yields `"&amp;amp;"`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("The Hobbit"), "The Hobbit");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Tome 2, part 1"), "Tome 2, part 1");
    }

    #[test]
    fn test_markup_neutralized() {
        let escaped = escape_html("<script>alert('xss')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_quotes_and_ampersand() {
        assert_eq!(escape_html(r#"Tom & "Huck""#), "Tom &amp; &quot;Huck&quot;");
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn test_not_idempotent() {
        // escape_html(escape_html(s)) != escape_html(s) for any escapable s
        let once = escape_html("<b>Dune</b>");
        let twice = escape_html(&once);
        assert_ne!(once, twice);
        assert_eq!(once, "&lt;b&gt;Dune&lt;/b&gt;");
        assert_eq!(twice, "&amp;lt;b&amp;gt;Dune&amp;lt;/b&amp;gt;");
    }
}
