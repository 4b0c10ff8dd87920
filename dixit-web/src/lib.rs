#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod input;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let props = app::Props {
        backend: app::SharedBackend::new(storage::LocalStorageBackend),
    };
    yew::Renderer::<app::App>::with_props(props).render();
}
