use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::domain::{MapSettings, Neighborhood, london_neighborhoods};
use crate::ui_dioxus::leaflet::MapLifecycle;
use crate::utils::platform;

/// Host element for the Leaflet map.
///
/// Takes no props. Settings come from context when an ancestor provides
/// them, otherwise the London defaults apply. The map is attached once the
/// container is in the DOM and removed again when the surface unmounts.
#[component]
pub fn MapSurface() -> Element {
    let settings = try_use_context::<MapSettings>().unwrap_or_default();

    // Plain Rc so it is still readable on drop
    let lifecycle = use_hook(|| Rc::new(MapLifecycle::new(settings.container_id.clone())));

    {
        let lifecycle = lifecycle.clone();
        let container_id = settings.container_id.clone();
        use_drop(move || {
            if let Some(script) = lifecycle.detach() {
                debug!(%container_id, "Removing Leaflet map");
                let _ = eval(&script);
            }
        });
    }

    let container_id = settings.container_id.clone();
    let style = settings.container_style();

    rsx! {
        div {
            id: "{container_id}",
            class: "map-surface",
            style: "{style}",
            onmounted: move |_| {
                if lifecycle.is_attached() {
                    return;
                }
                if !platform::leaflet_available() {
                    warn!(container_id = %settings.container_id, "Leaflet not loaded; map left empty");
                    return;
                }

                let markers: &[Neighborhood] = if settings.show_neighborhoods {
                    london_neighborhoods()
                } else {
                    &[]
                };
                if let Some(script) = lifecycle.attach(&settings, markers) {
                    let _ = eval(&script);
                    info!(
                        container_id = %settings.container_id,
                        markers = markers.len(),
                        "Leaflet map attached"
                    );
                }
            },
        }
    }
}
