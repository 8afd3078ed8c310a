// Test helpers for rendering the page without a webview

use dioxus::prelude::*;

use crate::config::PageConfig;
use crate::ui_dioxus::App;

/// Build and render the full app with `config` supplied the way the launcher does.
pub fn mount_app(config: PageConfig) -> VirtualDom {
    let mut dom = VirtualDom::new(App).with_root_context(config);
    dom.rebuild_in_place();
    dom
}

/// Text content of every `<h1>` in rendered HTML, in document order.
pub fn heading_texts(html: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find("<h1") {
        let after_tag = &rest[start..];
        let Some(open_end) = after_tag.find('>') else {
            break;
        };
        let body = &after_tag[open_end + 1..];
        let Some(close) = body.find("</h1>") else {
            break;
        };
        texts.push(body[..close].to_string());
        rest = &body[close..];
    }

    texts
}

pub fn map_surface_count(html: &str) -> usize {
    html.matches("class=\"map-surface\"").count()
}

/// True when the first heading appears before the first map container.
pub fn heading_precedes_map(html: &str) -> bool {
    match (html.find("<h1"), html.find("class=\"map-surface\"")) {
        (Some(heading), Some(map)) => heading < map,
        _ => false,
    }
}
