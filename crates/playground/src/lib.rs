//! Browser playground mounting the proposed component set side by side.

mod app;
mod icons;

pub use app::PlaygroundApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <PlaygroundApp /> })
}
