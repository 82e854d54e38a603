pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod validate;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;
