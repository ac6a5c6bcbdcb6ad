//! Instruction handlers
//!
//! - `initialize` - Create the quote config (once)
//! - `update_config` - Change the fee hook or amount cap (admin only)
//! - `quote` - Read-only trade and liquidity quotes against a live pool

pub mod initialize;
pub mod quote;
pub mod update_config;

pub use initialize::*;
pub use quote::*;
pub use update_config::*;
