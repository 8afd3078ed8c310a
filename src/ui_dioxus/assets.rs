// Keep the URLs in sync with [web.resource] in Dioxus.toml
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub const MAIN_CSS: &str = include_str!("../../assets/main.css");

/// `<head>` contents for the desktop webview, which never sees Dioxus.toml.
pub fn custom_head() -> String {
    format!(
        "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\" />\n\
         <script src=\"{LEAFLET_JS}\"></script>\n\
         <style>{MAIN_CSS}</style>"
    )
}
