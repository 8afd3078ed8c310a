use dioxus::prelude::*;

use crate::ui_dioxus::components::MapSurface;

/// The page: one heading, then the map.
///
/// The title is the only input. Nothing flows from the heading to the map.
#[component]
pub fn RootView(title: String) -> Element {
    rsx! {
        div {
            class: "root-view",

            h1 { class: "page-title", "{title}" }

            MapSurface {}
        }
    }
}
