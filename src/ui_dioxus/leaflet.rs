//! JavaScript glue for the Leaflet map surface.
//!
//! Leaflet owns tiles, projection, pan/zoom and markers. This side only
//! builds the scripts that create a map in a container and remove it again.
//! Every dynamic value is embedded as JSON, never spliced in as raw text.

use serde_json::{Value, json};
use std::cell::Cell;

use crate::domain::{MapSettings, Neighborhood};

/// Window property holding live map handles, keyed by container id.
pub const REGISTRY: &str = "__neighborhoodMaps";

/// Serialize a value for embedding in a script body.
///
/// `</` and the JS line separators are escaped so the payload stays inert
/// even if the script ever ends up inside an HTML `<script>` element.
fn to_js_literal(value: &Value) -> String {
    value
        .to_string()
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn bootstrap_payload(settings: &MapSettings, neighborhoods: &[Neighborhood]) -> Value {
    let markers: Vec<Value> = neighborhoods
        .iter()
        .map(|n| {
            json!({
                "name": n.name,
                "borough": n.borough,
                "position": n.position.to_array(),
            })
        })
        .collect();

    json!({
        "containerId": settings.container_id,
        "center": settings.center.to_array(),
        "zoom": settings.zoom,
        "tileUrl": settings.tile_url,
        "attribution": settings.attribution,
        "markers": markers,
    })
}

/// Script that attaches a Leaflet map to the settings' container.
///
/// A map already registered for the same container is removed first, so
/// running it twice leaves exactly one map behind.
pub fn bootstrap_script(settings: &MapSettings, neighborhoods: &[Neighborhood]) -> String {
    let payload = to_js_literal(&bootstrap_payload(settings, neighborhoods));
    let registry = to_js_literal(&json!(REGISTRY));

    format!(
        r#"(function () {{
  const cfg = {payload};
  if (typeof L === "undefined") {{
    console.warn("Leaflet is not loaded; map surface left empty");
    return;
  }}
  const registry = window[{registry}] = window[{registry}] || {{}};
  if (registry[cfg.containerId]) {{
    registry[cfg.containerId].remove();
  }}
  const map = L.map(cfg.containerId).setView(cfg.center, cfg.zoom);
  L.tileLayer(cfg.tileUrl, {{ attribution: cfg.attribution, maxZoom: 19 }}).addTo(map);
  for (const m of cfg.markers) {{
    const popup = document.createElement("div");
    const name = document.createElement("strong");
    name.textContent = m.name;
    popup.appendChild(name);
    popup.appendChild(document.createElement("br"));
    popup.appendChild(document.createTextNode(m.borough));
    L.marker(m.position, {{ title: m.name }}).addTo(map).bindPopup(popup);
  }}
  registry[cfg.containerId] = map;
}})();"#
    )
}

/// Script that removes the map registered for `container_id`, if any.
pub fn teardown_script(container_id: &str) -> String {
    let id = to_js_literal(&json!(container_id));
    let registry = to_js_literal(&json!(REGISTRY));

    format!(
        r#"(function () {{
  const registry = window[{registry}];
  if (!registry) {{
    return;
  }}
  const map = registry[{id}];
  if (map) {{
    map.remove();
    delete registry[{id}];
  }}
}})();"#
    )
}

/// Tracks whether Leaflet owns a container and hands out the script for
/// each transition. A map is attached at most once and only detached if it
/// was attached.
#[derive(Debug)]
pub struct MapLifecycle {
    container_id: String,
    attached: Cell<bool>,
}

impl MapLifecycle {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            attached: Cell::new(false),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Bootstrap script for the first attach; `None` when already attached.
    pub fn attach(&self, settings: &MapSettings, neighborhoods: &[Neighborhood]) -> Option<String> {
        if self.attached.replace(true) {
            return None;
        }
        Some(bootstrap_script(settings, neighborhoods))
    }

    /// Teardown script if a map is attached; `None` otherwise.
    pub fn detach(&self) -> Option<String> {
        if !self.attached.replace(false) {
            return None;
        }
        Some(teardown_script(&self.container_id))
    }
}
