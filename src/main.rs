//! CSR entry point: install the panic hook and console logger, then mount
//! the application onto `<body>`.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(big2_client::app::App);
}

// The binary only makes sense compiled to WASM; on the host this crate is
// built for its library tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
