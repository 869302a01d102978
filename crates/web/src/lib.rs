// =============================================================================
// CS:GO Pro Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod host;
pub mod icons;
pub mod interaction;
pub mod state;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::PageConfig;
pub use state::PageState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = PageConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level());
    log::info!("Mounting CS:GO Pro landing page ({})", config.environment);
    leptos::mount::mount_to_body(app::App);
}
