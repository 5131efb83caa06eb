pub mod effect;
pub mod intent;
pub mod reducer;
pub mod runner;
pub mod scheduler;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
