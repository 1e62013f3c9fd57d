//! WASM entry point: logger, panic hook, and CSR mount.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("couldn't initialize logging");
    log::info!("vitrina starting");

    leptos::mount::mount_to_body(App);
}
