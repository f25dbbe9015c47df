//! Escaping for attribute values, text content and client ids.

use std::borrow::Cow;

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Escape text content.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Make an id safe to use both as an `id` attribute and as a `#id`
/// reference target.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, so naming-container
/// separators like `form:carousel` come out as `form_carousel`.
pub fn escape_client_id(id: &str) -> Cow<'_, str> {
    if id.chars().all(is_id_char) {
        return Cow::Borrowed(id);
    }
    Cow::Owned(
        id.chars()
            .map(|c| if is_id_char(c) { c } else { '_' })
            .collect(),
    )
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_escapes_quotes_and_markup() {
        assert_eq!(escape_attr(r#"a "b" <c> & d"#), "a &quot;b&quot; &lt;c&gt; &amp; d");
    }

    #[test]
    fn text_leaves_quotes_alone() {
        assert_eq!(escape_text(r#"say "hi" & <go>"#), r#"say "hi" &amp; &lt;go&gt;"#);
    }

    #[test]
    fn clean_input_is_borrowed() {
        assert!(matches!(escape_attr("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape_text("it's fine"), Cow::Borrowed(_)));
        assert!(matches!(escape_client_id("main-carousel_1"), Cow::Borrowed(_)));
    }

    #[test]
    fn client_id_replaces_separators() {
        assert_eq!(escape_client_id("form:carousel"), "form_carousel");
        assert_eq!(escape_client_id("a.b c#d"), "a_b_c_d");
    }
}
