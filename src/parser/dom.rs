//! Tree-walking helpers over the `scraper` DOM.
//!
//! CSS selectors only reach descendants; the source rules also need direct
//! children and following siblings, which live here.

use scraper::ElementRef;

/// Concatenated text of all descendant text nodes, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Direct element children with the given tag name.
pub fn child_elements<'a>(
    el: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

/// First following sibling element with the given tag name.
pub fn next_sibling_element<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name() == name)
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}
