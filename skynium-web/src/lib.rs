#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod cookies;
pub mod dom;
pub mod logging;
pub mod surface;
pub mod trap;
pub mod wire;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = app::read_config();
    if config.debug {
        logging::init(log::LevelFilter::Debug);
    }
    app::run_when_ready(config);
}
