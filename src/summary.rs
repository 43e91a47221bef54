use scraper::{ElementRef, Html, Selector};

use crate::store::ContentStore;
use crate::types::Summary;

const NON_SUMMARY_SELECTOR: &str = "div.ptx-image, div.ptx-sidebar";

/// Extracts the summary fragment from a rendered content body: the first
/// top-level paragraph, after dropping the first image/sidebar callout so
/// decorative markup at the head of a document is never captured.
pub fn extract_summary(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    let mut fragment = Html::parse_fragment(body);

    // Static selectors always parse.
    let non_summary = Selector::parse(NON_SUMMARY_SELECTOR).unwrap();

    let excluded = fragment.select(&non_summary).next().map(|element| element.id());
    if let Some(id) = excluded
        && let Some(mut node) = fragment.tree.get_mut(id)
    {
        node.detach();
    }

    for child in fragment.root_element().children() {
        if let Some(element) = ElementRef::wrap(child)
            && element.value().name() == "p"
        {
            return element.html();
        }
    }

    String::new()
}

/// Strips all markup from an HTML fragment and removes literal quote
/// characters, for meta-description style rendering.
pub fn strip_html_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.replace(['"', '\''], "")
}

/// Decides once whether a summary fragment needs template evaluation.
pub fn classify_summary(html: String) -> Summary {
    if html.is_empty() {
        Summary::Empty
    } else if html.contains("{{") || html.contains("{%") || html.contains("{#") {
        Summary::Templated(html)
    } else {
        Summary::Literal(html)
    }
}

/// Fills in summaries for every content that was flagged during parsing but
/// did not capture one explicitly.
pub fn extract_summaries(store: &mut ContentStore) {
    let pending: Vec<_> = store
        .filter(|content| content.has_summary && content.summary.is_empty())
        .iter()
        .collect();

    for content_ref in pending {
        let extracted = extract_summary(&store.get(content_ref).body);
        store.get_mut(content_ref).summary = classify_summary(extracted);
    }

    log::debug!("summary extraction pass finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Content;

    #[test]
    fn test_extract_first_top_level_paragraph() {
        let body = "<p>Hello <b>World</b></p><p>Second</p>";
        assert_eq!(extract_summary(body), "<p>Hello <b>World</b></p>");
    }

    #[test]
    fn test_extract_skips_sidebar() {
        let body = "<div class=\"ptx-sidebar\"><p>skip</p></div><p>Hello <b>World</b></p>";
        assert_eq!(extract_summary(body), "<p>Hello <b>World</b></p>");
    }

    #[test]
    fn test_extract_skips_image_callout() {
        let body = "<div class=\"ptx-image\"><img src=\"x.png\"></div><p>Text</p>";
        assert_eq!(extract_summary(body), "<p>Text</p>");
    }

    #[test]
    fn test_extract_ignores_nested_paragraphs() {
        let body = "<div><p>nested</p></div>";
        assert_eq!(extract_summary(body), "");
    }

    #[test]
    fn test_extract_no_paragraph_yields_empty() {
        assert_eq!(extract_summary("<ul><li>item</li></ul>"), "");
        assert_eq!(extract_summary(""), "");
    }

    #[test]
    fn test_extract_tolerates_malformed_html() {
        let body = "<p>unclosed <b>bold";
        assert_eq!(extract_summary(body), "<p>unclosed <b>bold</b></p>");
    }

    #[test]
    fn test_strip_html_tags_removes_quotes() {
        assert_eq!(strip_html_tags("<p>He said \"hi\"</p>"), "He said hi");
        assert_eq!(strip_html_tags("<p>it's <em>fine</em></p>"), "its fine");
    }

    #[test]
    fn test_classify_summary() {
        assert_eq!(classify_summary(String::new()), Summary::Empty);
        assert_eq!(
            classify_summary("<p>plain</p>".to_string()),
            Summary::Literal("<p>plain</p>".to_string())
        );
        assert_eq!(
            classify_summary("<p>{{ title }}</p>".to_string()),
            Summary::Templated("<p>{{ title }}</p>".to_string())
        );
    }

    #[test]
    fn test_extract_summaries_pass() {
        let mut store = ContentStore::new();
        let flagged = store.add(Content {
            id: "a".to_string(),
            path: "blog/a.md".to_string(),
            lang: "en".to_string(),
            body: "<p>First</p>".to_string(),
            has_summary: true,
            ..Content::default()
        });
        let unflagged = store.add(Content {
            id: "b".to_string(),
            path: "blog/b.md".to_string(),
            lang: "en".to_string(),
            body: "<p>Other</p>".to_string(),
            ..Content::default()
        });
        let captured = store.add(Content {
            id: "c".to_string(),
            path: "blog/c.md".to_string(),
            lang: "en".to_string(),
            body: "<p>Body</p>".to_string(),
            has_summary: true,
            summary: Summary::Literal("<p>kept</p>".to_string()),
            ..Content::default()
        });

        extract_summaries(&mut store);

        assert_eq!(
            store.get(flagged).summary,
            Summary::Literal("<p>First</p>".to_string())
        );
        assert!(store.get(unflagged).summary.is_empty());
        assert_eq!(
            store.get(captured).summary,
            Summary::Literal("<p>kept</p>".to_string())
        );
    }
}
