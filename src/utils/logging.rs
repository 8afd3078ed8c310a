/// Initialize logging for the current target.
///
/// Natively this installs a `tracing-subscriber` honoring `RUST_LOG`
/// (default `info`). In the browser, `tracing` forwards to the `log` facade,
/// which wasm-logger writes to the console.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    wasm_logger::init(wasm_logger::Config::default());
}
