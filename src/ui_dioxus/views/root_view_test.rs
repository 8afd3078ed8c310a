#[cfg(test)]
mod tests {
    use dioxus::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::config::{FASKIS_TITLE, LONDON_TITLE};
    use crate::test_helpers::{heading_precedes_map, heading_texts, map_surface_count};
    use crate::ui_dioxus::views::RootView;

    #[derive(Clone)]
    struct Title(&'static str);

    #[component]
    fn TitledRoot() -> Element {
        let title = use_context::<Title>();
        rsx! {
            RootView { title: title.0.to_string() }
        }
    }

    fn render_root_view(title: &'static str) -> String {
        let mut dom = VirtualDom::new(TitledRoot).with_root_context(Title(title));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_root_view_renders_single_heading() {
        let html = render_root_view(LONDON_TITLE);
        assert_eq!(heading_texts(&html), vec![LONDON_TITLE]);
    }

    #[test]
    fn test_root_view_mounts_single_map_surface() {
        for title in [LONDON_TITLE, FASKIS_TITLE] {
            let html = render_root_view(title);
            assert_eq!(map_surface_count(&html), 1, "title {title:?}");
        }
    }

    #[test]
    fn test_heading_comes_before_map() {
        assert!(heading_precedes_map(&render_root_view(FASKIS_TITLE)));
    }

    #[test]
    fn test_root_view_escapes_markup_in_title() {
        let html = render_root_view("<b>Bold</b>");
        assert!(!html.contains("<b>Bold</b>"));
        assert_eq!(map_surface_count(&html), 1);
    }

    #[derive(Clone)]
    struct Visible(Rc<Cell<bool>>);

    #[component]
    fn Toggle() -> Element {
        let visible = use_context::<Visible>();
        if visible.0.get() {
            rsx! {
                RootView { title: LONDON_TITLE.to_string() }
            }
        } else {
            rsx! {
                div { class: "empty" }
            }
        }
    }

    #[test]
    fn test_unmount_leaves_no_heading_or_map() {
        let visible = Rc::new(Cell::new(true));
        let mut dom = VirtualDom::new(Toggle).with_root_context(Visible(visible.clone()));
        dom.rebuild_in_place();

        let mounted = dioxus_ssr::render(&dom);
        assert_eq!(heading_texts(&mounted).len(), 1);
        assert_eq!(map_surface_count(&mounted), 1);

        visible.set(false);
        dom.mark_dirty(ScopeId::ROOT);
        let _ = dom.render_immediate_to_vec();

        let unmounted = dioxus_ssr::render(&dom);
        assert!(heading_texts(&unmounted).is_empty());
        assert_eq!(map_surface_count(&unmounted), 0);
        assert!(unmounted.contains("empty"));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let visible = Rc::new(Cell::new(true));
        let mut dom = VirtualDom::new(Toggle).with_root_context(Visible(visible));
        dom.rebuild_in_place();
        let first = dioxus_ssr::render(&dom);

        dom.mark_dirty(ScopeId::ROOT);
        let _ = dom.render_immediate_to_vec();
        let second = dioxus_ssr::render(&dom);

        assert_eq!(first, second);
    }
}
