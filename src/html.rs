//! Small tree helpers over `scraper` elements.
//!
//! The verifier and the pipeline address elements by direct-child tag paths
//! (`div > div > ul` relative to the section), never by free-text search.

use scraper::ElementRef;

/// Direct element children of `parent` with the given tag name.
pub fn children_named<'a>(parent: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}

/// Elements reached from `parent` by following `path` one child level per tag.
///
/// `descendants_at(section, &["div", "div", "ul"])` matches the XPath
/// `./div/div/ul`, in document order.
pub fn descendants_at<'a>(parent: ElementRef<'a>, path: &[&str]) -> Vec<ElementRef<'a>> {
    path.iter().fold(vec![parent], |level, tag| {
        level
            .into_iter()
            .flat_map(|element| children_named(element, tag))
            .collect()
    })
}

/// All text below `element`, concatenated and trimmed.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text nodes that are direct children of `element`, untrimmed.
///
/// Matches the XPath `text()` step: markup below `element` contributes
/// nothing.
pub fn own_text_nodes<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}

/// Trimmed text of every direct `<li>` of a list element.
pub fn list_lines(list: ElementRef<'_>) -> Vec<String> {
    children_named(list, "li")
        .into_iter()
        .map(text_content)
        .collect()
}
