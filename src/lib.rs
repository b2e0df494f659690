//! Runtime for a single-page portfolio: renders the experience, skills and
//! awards sections from `data/portfolio.json` and animates two decorative
//! canvases.
//!
//! Everything outside `wasm` is plain Rust and is tested on the host.

pub mod config;
pub mod counter;
pub mod data;
pub mod error;
pub mod markup;
pub mod nav;
pub mod network;
pub mod random;
pub mod waves;

// Only compile browser glue when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    pub mod dom;
    pub mod interactions;
    pub mod loader;
    pub mod observe;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(|| spawn_local(loader::run()));
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            spawn_local(loader::run());
        }
        Ok(())
    }

    /// Stops the neural-network and brain-wave animations.
    #[wasm_bindgen(js_name = stopAnimations)]
    pub fn stop_animations() {
        loader::stop_scenes();
    }
}
