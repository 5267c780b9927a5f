#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// Native builds (tests included) have no JS console to import from.
#[cfg(not(target_arch = "wasm32"))]
fn log(s: &str) {
    eprintln!("{}", s);
}

pub fn wasm_logf(args: std::fmt::Arguments) {
    log(&args.to_string());
}

#[macro_export]
macro_rules! wasm_log {
    ($($t:tt)*) => ($crate::utils::wasm_logger::wasm_logf(format_args!($($t)*)))
}
