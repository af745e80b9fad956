use regex::Regex;
use scraper::{Html, Node};
use std::sync::OnceLock;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S*|www\S*").unwrap())
}

/// All text content of a document, `<script>` and `<style>` bodies included.
/// Text nodes are joined with a single space.
pub fn extract_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let parts: Vec<&str> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect();

    parts.join(" ")
}

pub fn strip_urls(text: &str) -> String {
    url_regex().replace_all(text, "").into_owned()
}

pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Markup to plain text: tags, then URLs, then ASCII punctuation.
///
/// Dropping punctuation can glue fragments like `ht.tp` into a new URL-looking
/// run, so the URL pattern is applied once more at the end.
pub fn sanitize(markup: &str) -> String {
    let text = extract_text(markup);
    let text = strip_urls(&text);
    let text = strip_punctuation(&text);
    strip_urls(&text)
}
