//! Account layouts and the pool snapshot the math runs on

pub mod config;
pub mod market;
pub mod pool;

pub use config::*;
pub use market::*;
pub use pool::*;
