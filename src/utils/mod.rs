pub mod bit_ops;
pub mod math;
pub mod wasm_logger;
