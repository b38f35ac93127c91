pub mod args;
pub mod config;
pub mod main_lib;
pub mod render;

pub use main_lib::{init_tracing, run};
