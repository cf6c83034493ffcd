// src/core/html.rs
//
// Typed lookups over a parsed HTML tree. A node is addressed by
// (tag name, class token); nothing here knows about quotes.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

/// "Element `<tag>` carrying class token `<class>`".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeQuery {
    pub tag: String,
    pub class: String,
}

impl NodeQuery {
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self { tag: tag.into(), class: class.into() }
    }

    /// CSS form, e.g. `div.quote`.
    pub fn css(&self) -> String {
        join!(&self.tag, ".", &self.class)
    }

    /// Compile into a selector. Tag and class must each be a single plain
    /// token; anything else would silently turn into a different selector.
    pub fn selector(&self) -> Result<Selector, ExtractError> {
        let bad = || ExtractError::Selector(self.css());

        if !is_token(&self.tag) || !is_token(&self.class) {
            return Err(bad());
        }
        Selector::parse(&self.css()).map_err(|_| bad())
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit() || c == '-')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn parse(text: &str) -> Html {
    Html::parse_document(text)
}

/// Every match in document order.
pub fn select_all<'a>(doc: &'a Html, sel: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(sel).collect()
}

/// First descendant of `node` (never `node` itself) that matches.
pub fn find_first<'a>(node: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    node.select(sel).next()
}

/// All descendant text, trimmed at both ends. Interior whitespace is kept.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.trim().to_string()
}
