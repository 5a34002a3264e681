//! Text normalization for extracted elements.

use scraper::{ElementRef, Node};

/// Elements whose text never renders.
///
/// With scripting enabled, html5ever keeps the bodies of `noscript`, `iframe`,
/// `noembed` and `noframes` as one raw text node, markup included.
const HIDDEN_ELEMENTS: &[&str] = &[
    "script", "style", "template", "noscript", "iframe", "noembed", "noframes",
];

/// Get the visible text of an element, trimmed at both ends.
///
/// Descendant text nodes are joined in document order with no separator, so
/// `<p>Hello <b>World</b></p>` yields `Hello World`. Internal whitespace is
/// left untouched.
pub fn text_content(element: ElementRef) -> String {
    let mut result = String::new();
    collect_text(element, &mut result);
    result.trim().to_string()
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(el) => {
                if HIDDEN_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Count whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_text(html: &str, selector: &str) -> String {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        let element = document.select(&selector).next().unwrap();
        text_content(element)
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        assert_eq!(
            first_text("<p>Hello <strong>big <em>World</em></strong>!</p>", "p"),
            "Hello big World!"
        );
    }

    #[test]
    fn test_trims_but_keeps_internal_whitespace() {
        assert_eq!(
            first_text("<li>\n   Trade  in\tyour phone \n</li>", "li"),
            "Trade  in\tyour phone"
        );
    }

    #[test]
    fn test_skips_hidden_text() {
        assert_eq!(
            first_text("<p>Visible<script>var x = 1;</script><style>p{}</style> text</p>", "p"),
            "Visible text"
        );
    }

    #[test]
    fn test_skips_fallback_markup() {
        assert_eq!(
            first_text(
                r#"<p><noscript><img src="/img/iphone-repair.jpg"></noscript>Open seven days</p>"#,
                "p"
            ),
            "Open seven days"
        );
        assert_eq!(
            first_text("<li>Hi <noscript><b>there</b></noscript></li>", "li"),
            "Hi"
        );
        assert_eq!(
            first_text(
                "<p>Map<iframe><p>cash</p></iframe><noembed>x</noembed><noframes>y</noframes></p>",
                "p"
            ),
            "Map"
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(first_text("<h2>  <span> </span>\n</h2>", "h2"), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(word_count("  one\ttwo \n three  four "), 4);
        assert_eq!(word_count(""), 0);
    }
}
