use dioxus::prelude::*;
use tracing::debug;

use crate::config::PageConfig;
use crate::ui_dioxus::views::RootView;
use crate::utils::platform;

#[component]
pub fn App() -> Element {
    // Provided by the native launcher; the browser build uses the compiled-in config
    let config = try_use_context::<PageConfig>().unwrap_or_else(PageConfig::from_build_env);

    // The map surface reads its settings from context
    let map_settings = config.map.clone();
    use_context_provider(|| map_settings);

    let title = config.title;
    use_hook(|| {
        debug!(%title, "Mounting page");
        platform::set_document_title(&title);
    });

    rsx! {
        div {
            class: "app-container",

            RootView { title }
        }
    }
}
