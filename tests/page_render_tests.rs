use neighborhood_map::config::{FASKIS_TITLE, LONDON_TITLE, PageConfig};
use neighborhood_map::test_helpers::{
    heading_precedes_map, heading_texts, map_surface_count, mount_app,
};
use rstest::rstest;

fn render(config: PageConfig) -> String {
    dioxus_ssr::render(&mount_app(config))
}

#[rstest]
#[case::london(LONDON_TITLE)]
#[case::faskis(FASKIS_TITLE)]
fn test_page_shows_heading_then_map(#[case] title: &str) {
    let html = render(PageConfig::new(title));

    assert_eq!(heading_texts(&html), vec![title.to_string()]);
    assert_eq!(map_surface_count(&html), 1);
    assert!(heading_precedes_map(&html), "heading must precede the map: {html}");
}

#[rstest]
#[case::london(PageConfig::london())]
#[case::faskis(PageConfig::faskis())]
#[case::custom(PageConfig::new("Walking Tours"))]
fn test_rendering_is_idempotent(#[case] config: PageConfig) {
    let first = render(config.clone());
    let second = render(config);
    assert_eq!(first, second);
}

#[test]
fn test_map_container_uses_default_settings() {
    let html = render(PageConfig::london());

    assert!(html.contains(r#"id="neighborhood-map""#));
    assert!(html.contains("height: 600px; width: 100%;"));
}
