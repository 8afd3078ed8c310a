use neighborhood_map::ui_dioxus::App;
use neighborhood_map::utils::logging;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use dioxus::prelude::VirtualDom;
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
    use neighborhood_map::config::PageConfig;
    use neighborhood_map::config::cli::CliArgs;
    use neighborhood_map::ui_dioxus::assets;
    use tracing::info;

    logging::init();

    let args = CliArgs::parse_args();
    let config = PageConfig::resolve(&args).context("Failed to load page configuration")?;
    info!(title = %config.title, "Launching desktop shell");

    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(1200.0, 860.0));
    let desktop = Config::new()
        .with_window(window)
        .with_custom_head(assets::custom_head());

    // The root App reads the resolved config from context
    let dom = VirtualDom::new(App).with_root_context(config);
    dioxus_desktop::launch::launch_virtual_dom(dom, desktop)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    logging::init();
    tracing::info!("Launching web shell");

    // No launcher context in the browser: App falls back to the build-time config
    dioxus_web::launch::launch(App, vec![], dioxus_web::Config::new());
}
