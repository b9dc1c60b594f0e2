/// Escaping collaborator used for every node-derived string before it is
/// embedded into markup.
///
/// All three operations are total: they always return a string, possibly
/// empty. The renderer never validates what comes back, it just embeds it.
pub trait Escape {
    /// Escape a value for an attribute context.
    fn attribute(&self, value: &str) -> String;

    /// Sanitize and escape a link target for an `href` attribute.
    fn url(&self, value: &str) -> String;

    /// Escape text for an element body.
    fn text(&self, value: &str) -> String;
}

/// Default [`Escape`] implementation for HTML output.
///
/// Attribute and text escaping are entity escaping via [`htmlize`]. URLs are
/// additionally sanitized first: control characters are stripped and the
/// characters that may not appear raw in a link target (space, quotes,
/// angle brackets, backtick) are percent-encoded, then the result is entity
/// escaped for the attribute context it ends up in.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscape;

impl Escape for HtmlEscape {
    fn attribute(&self, value: &str) -> String {
        htmlize::escape_attribute(value).into_owned()
    }

    fn url(&self, value: &str) -> String {
        let mut sanitized = String::with_capacity(value.len());
        for ch in value.trim().chars() {
            match ch {
                ' ' => sanitized.push_str("%20"),
                '"' => sanitized.push_str("%22"),
                '\'' => sanitized.push_str("%27"),
                '<' => sanitized.push_str("%3C"),
                '>' => sanitized.push_str("%3E"),
                '`' => sanitized.push_str("%60"),
                ch if ch.is_control() => {}
                ch => sanitized.push(ch),
            }
        }
        htmlize::escape_attribute(sanitized.as_str()).into_owned()
    }

    fn text(&self, value: &str) -> String {
        htmlize::escape_text(value).into_owned()
    }
}

#[test]
fn attribute_escapes_quotes_and_angle_brackets() {
    let escaped = HtmlEscape.attribute(r#"say "hi" & <wave>"#);
    assert_eq!(escaped, "say &quot;hi&quot; &amp; &lt;wave&gt;");
}

#[test]
fn text_escapes_markup() {
    let escaped = HtmlEscape.text("<script>1 & 2</script>");
    assert_eq!(escaped, "&lt;script&gt;1 &amp; 2&lt;/script&gt;");
}

#[test]
fn url_percent_encodes_unsafe_characters() {
    let escaped = HtmlEscape.url(r#"/search?q=a b"c"#);
    assert_eq!(escaped, "/search?q=a%20b%22c");
}

#[test]
fn url_keeps_query_ampersands_in_attribute_form() {
    let escaped = HtmlEscape.url("/filter?a=1&b=2");
    assert_eq!(escaped, "/filter?a=1&amp;b=2");
}

#[test]
fn url_strips_control_characters_and_outer_whitespace() {
    let escaped = HtmlEscape.url("  /path\u{7}/x\n  ");
    assert_eq!(escaped, "/path/x");
}
