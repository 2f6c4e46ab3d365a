use std::borrow::Cow;

use serde::Serialize;

use crate::render::effects::NodeRef;

/// Escapes text for use in element content and double-quoted attributes.
/// Borrows when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"'][..]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// A rendered container body plus the nodes that need effects attached once
/// it is injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub markup: String,
    pub reveal: Vec<NodeRef>,
    pub tilt: Vec<NodeRef>,
}

/// `<li>` entries for an icon list, in catalog order.
pub(crate) fn icon_list_items<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    items
        .into_iter()
        .map(|(icon, text)| {
            format!(
                r#"<li><i class="{}"></i> <span>{}</span></li>"#,
                escape_html(icon),
                text
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape_html("Result: 8/10"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_html(r#"Java & <Kotlin> "x""#),
            "Java &amp; &lt;Kotlin&gt; &quot;x&quot;"
        );
    }

    #[test]
    fn test_escape_keeps_non_ascii() {
        assert_eq!(escape_html("Kết quả: 80% — tốt"), "Kết quả: 80% — tốt");
    }

    #[test]
    fn test_icon_list_items_keeps_markup_in_text() {
        let html = icon_list_items([("fas fa-star", "GPA: <strong>7.9/10</strong>")]);
        assert_eq!(
            html,
            r#"<li><i class="fas fa-star"></i> <span>GPA: <strong>7.9/10</strong></span></li>"#
        );
    }
}
