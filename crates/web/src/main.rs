// =============================================================================
// CS:GO Pro Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use cspro_web::{App, PageConfig};

fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if a logger was already installed by `mount`
    let config = PageConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level());

    log::info!("Starting CS:GO Pro web ({})", config.environment);

    leptos::mount::mount_to_body(App);
}
