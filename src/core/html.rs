// src/core/html.rs
//! Thin DOM façade over `scraper`.
//!
//! Specs only ever ask four questions of a page: *which node has this id*,
//! *which nodes carry this class*, *what is its text*, *what does it link to*.
//! Everything here answers one of those, so the engine never touches a DOM type.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(src: &str) -> Self {
        Self { html: Html::parse_document(src) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        elements(self.root()).find(|e| e.value().id() == Some(id))
    }

    /// All elements whose id starts with `prefix`, in document order.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Vec<ElementRef<'_>> {
        elements(self.root())
            .filter(|e| e.value().id().is_some_and(|id| id.starts_with(prefix)))
            .collect()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<ElementRef<'_>> {
        find_by_class(self.root(), class)
    }
}

/// Every element under (and including) `node`, depth-first.
pub fn elements<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().filter_map(ElementRef::wrap)
}

pub fn find_by_class<'a>(node: ElementRef<'a>, class: &str) -> Vec<ElementRef<'a>> {
    elements(node)
        .filter(|e| e.value().classes().any(|c| c == class))
        .collect()
}

/// First descendant with the given tag name (case-insensitive).
pub fn first_tag<'a>(node: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    elements(node).find(|e| e.value().name().eq_ignore_ascii_case(tag))
}

/// Text content as-is: text nodes concatenated, whitespace untouched.
pub fn raw_text(node: ElementRef<'_>) -> String {
    node.text().collect()
}

/// Text content with whitespace runs collapsed.
pub fn text(node: ElementRef<'_>) -> String {
    normalize_ws(&raw_text(node))
}

pub fn attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// `href` of every `<a href>` under `node`, in order.
pub fn links(node: ElementRef<'_>) -> Vec<String> {
    elements(node)
        .filter(|e| e.value().name().eq_ignore_ascii_case("a"))
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// The `<td>` cells of each `<tr>` under `table`. Rows without cells (header rows) are dropped.
pub fn rows<'a>(table: ElementRef<'a>) -> Vec<Vec<ElementRef<'a>>> {
    elements(table)
        .filter(|e| e.value().name().eq_ignore_ascii_case("tr"))
        .map(|tr| {
            tr.children()
                .filter_map(ElementRef::wrap)
                .filter(|c| c.value().name().eq_ignore_ascii_case("td"))
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}
