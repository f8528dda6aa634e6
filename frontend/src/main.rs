use bookviz_frontend::App;
use leptos::prelude::*;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // 只会在重复初始化时失败
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    mount_to_body(App);
}
