//! Binary entrypoint for the browser-hosted playground.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    playground::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `playground_app` for wasm32 with the `csr` feature and serve it with trunk."
    );
}
