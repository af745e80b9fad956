use scraper::{Html, Selector};
use tracing::warn;

/// Headings and `<header>` navigation pulled straight from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStructure {
    pub titles: Vec<String>,
    pub header_links: Vec<String>,
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(action = "parse", component = "selector", selector = css, error = %e, "Invalid CSS selector");
            None
        }
    }
}

/// Text of every `h1`-`h6` in document order.
pub fn extract_titles(document: &Html) -> Vec<String> {
    let Some(sel) = selector("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };
    document
        .select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// `href` of every anchor under a `<header>`, header by header.
///
/// Nested headers report their anchors once per enclosing header.
pub fn extract_header_links(document: &Html) -> Vec<String> {
    let (Some(headers), Some(anchors)) = (selector("header"), selector("a[href]")) else {
        return Vec::new();
    };
    document
        .select(&headers)
        .flat_map(|header| {
            header
                .select(&anchors)
                .filter_map(|a| a.value().attr("href"))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn extract_structure(markup: &str) -> PageStructure {
    let document = Html::parse_document(markup);
    PageStructure {
        titles: extract_titles(&document),
        header_links: extract_header_links(&document),
    }
}
