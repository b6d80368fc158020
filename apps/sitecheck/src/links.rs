//! Link extraction from raw HTML.
//!
//! Uses html5ever (through `scraper`'s tree sink) as a permissive tree
//! parser: malformed markup is recovered, never rejected, so a broken page
//! just yields fewer links. Values come back in document order, `href`
//! before `src` per tag.
//!
//! Scripting is disabled so `<noscript>` content is parsed as markup.
//! `<noembed>` and `<noframes>` are always raw text to the tree builder,
//! so their text is scanned again as a fragment.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, HtmlTreeSink};

const LINK_ATTRS: &[&str] = &["href", "src"];
const RAW_TEXT_WITH_MARKUP: &[&str] = &["noembed", "noframes"];

fn parse(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}

/// Every non-empty `href`/`src` value in document order, whitespace-trimmed.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = parse(html);
    let mut links = Vec::new();
    for node in document.root_element().descendants() {
        let Some(el) = node.value().as_element() else {
            continue;
        };
        for attr in LINK_ATTRS {
            if let Some(v) = el.attr(attr) {
                if !v.is_empty() {
                    links.push(v.trim().to_string());
                }
            }
        }
        if RAW_TEXT_WITH_MARKUP.contains(&el.name()) {
            let inner: String = node
                .children()
                .filter_map(|c| c.value().as_text().map(|t| (**t).to_string()))
                .collect();
            links.extend(extract_links(&inner));
        }
    }
    links
}
