// src/utils/html.rs

use scraper::{ElementRef, Html, Node, Selector};

use crate::quiz::text::collapse_whitespace;

/// Selectors tried in order to find the page's primary heading.
const TITLE_SELECTORS: &[&str] = &["h1#firstHeading", "h1"];

/// Selectors tried in order to find the main content container.
/// Falls back to the whole document when none matches.
const CONTENT_SELECTORS: &[&str] = &["#mw-content-text", "#content"];

/// Elements whose whole subtree is dropped before text extraction:
/// layout tables, footnote markers, side content, and style/script blocks.
const EXCLUDED_TAGS: &[&str] = &["table", "sup", "aside", "style", "script"];

/// Separator placed between extracted paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The markup contains no text at all.
    #[error("document contains no text content")]
    NoText,
}

/// Extracts the article title and its paragraph prose from raw HTML.
///
/// * Title comes from the primary `<h1>`, or is empty if there is none.
/// * Only `<p>` blocks inside the content container contribute to the text.
/// * Tables, `<sup>` citation markers, asides, styles and scripts are skipped.
/// * Paragraphs are whitespace-normalized and joined with a blank line.
///
/// This is a pure transform: the same markup always yields the same pair.
pub fn extract(markup: &str) -> Result<(String, String), ExtractError> {
    let document = Html::parse_document(markup);

    if !has_text(&document) {
        return Err(ExtractError::NoText);
    }

    let title = TITLE_SELECTORS
        .iter()
        .find_map(|s| select_first(&document, s))
        .map(|h1| collapse_whitespace(&visible_text(h1)))
        .unwrap_or_default();

    let content = CONTENT_SELECTORS
        .iter()
        .find_map(|s| select_first(&document, s))
        .unwrap_or_else(|| document.root_element());

    let paragraphs: Vec<String> = paragraphs(content)
        .map(|p| collapse_whitespace(&visible_text(p)))
        .filter(|p| !p.is_empty())
        .collect();

    tracing::debug!(
        title = %title,
        paragraphs = paragraphs.len(),
        "Extracted article content"
    );

    Ok((title, paragraphs.join(PARAGRAPH_SEPARATOR)))
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn has_text(document: &Html) -> bool {
    document
        .tree
        .values()
        .any(|node| matches!(node, Node::Text(t) if !t.trim().is_empty()))
}

fn is_excluded(element: &ElementRef<'_>) -> bool {
    EXCLUDED_TAGS.contains(&element.value().name())
}

/// `<p>` elements under `content`, in document order, skipping any that sit
/// inside an excluded subtree.
fn paragraphs<'a>(content: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let root_id = content.id();
    content
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
        .filter(move |p| {
            !p.ancestors()
                .take_while(|n| n.id() != root_id)
                .filter_map(ElementRef::wrap)
                .any(|el| is_excluded(&el))
        })
}

/// Concatenated text of `element`, leaving out excluded subtrees.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_text(element, &mut out);
    out
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if !is_excluded(&child_el) {
                        push_text(child_el, out);
                    }
                }
            }
            _ => {}
        }
    }
}
