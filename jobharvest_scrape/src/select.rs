//! Small helpers over `scraper` selectors shared by the site extractors.

use scraper::{ElementRef, Selector};

/// Parses a selector literal. Only ever called with static strings the
/// extractors are compiled with, so a failure is a programming error.
pub(crate) fn sel(src: &'static str) -> Selector {
    Selector::parse(src).expect("static selector")
}

/// Collapses all whitespace runs to single spaces and trims the ends.
pub(crate) fn collapse_ws(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapsed text content of the element itself.
pub(crate) fn own_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<String>())
}

/// Collapsed text of the first descendant matching `selector`.
pub(crate) fn text_of(el: ElementRef<'_>, selector: &Selector) -> Option<String> {
    el.select(selector).next().map(own_text)
}

/// Attribute value of the first descendant matching `selector`.
pub(crate) fn attr_of(el: ElementRef<'_>, selector: &Selector, name: &str) -> Option<String> {
    el.select(selector)
        .next()
        .and_then(|n| n.value().attr(name))
        .map(str::to_string)
}

/// Text of an element's paragraphs and list items, one per line with list
/// items bulleted. Falls back to the collapsed whole-element text when the
/// element has no block children.
pub(crate) fn paragraph_text(el: ElementRef<'_>) -> String {
    let blocks = sel("p, li");
    let mut lines = Vec::new();
    for block in el.select(&blocks) {
        let text = own_text(block);
        if text.is_empty() {
            continue;
        }
        if block.value().name() == "li" {
            lines.push(format!("\u{2022} {}", text));
        } else {
            lines.push(text);
        }
    }
    if lines.is_empty() {
        own_text(el)
    } else {
        lines.join("\n")
    }
}

/// First run of ASCII digits in `raw`, parsed as an integer.
pub(crate) fn digits(raw: &str) -> Option<i64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn collapse_ws_flattens_runs() {
        assert_eq!(collapse_ws("  a\n\t b   c "), "a b c");
    }

    #[test]
    fn paragraph_text_bullets_list_items() {
        let doc = Html::parse_fragment(
            "<div><p>Intro</p><ul><li>One</li><li>Two</li></ul></div>",
        );
        let text = paragraph_text(doc.root_element());
        assert_eq!(text, "Intro\n\u{2022} One\n\u{2022} Two");
    }

    #[test]
    fn paragraph_text_falls_back_to_plain_text() {
        let doc = Html::parse_fragment("<div>Just <b>text</b> here</div>");
        assert_eq!(paragraph_text(doc.root_element()), "Just text here");
    }

    #[test]
    fn digits_finds_first_run() {
        assert_eq!(digits("1 - 45 of 1,234 jobs"), Some(1));
        assert_eq!(digits("Total: 630 openings"), Some(630));
        assert_eq!(digits("none"), None);
    }
}
