//! # Automated Market Maker (AMM) Module
//!
//! Constant-product math for binary YES/NO pools, evaluated client-side for
//! previews and on-chain by the quote instructions.
//!
//! ```text
//!            k = YES · NO          LP = √(YES · NO)
//!
//!   ┌────────────────────────────────────────┐
//!   │    NO ▲                                │
//!   │       │╲                               │
//!   │       │ ╲                              │
//!   │       │  ╲__      k = constant         │
//!   │       │     ╲___                       │
//!   │       │         ╲_______               │
//!   │       └──────────────────▶ YES         │
//!   │                                         │
//!   │  Trades move along the curve           │
//!   │  Liquidity moves to a larger curve     │
//!   └────────────────────────────────────────┘
//! ```
//!
//! All values are [`Fixed`] reals with nine decimals; see
//! [`fixed_point`] for the rounding rules.

pub mod constant_product;
pub mod fixed_point;
pub mod liquidity;

pub use constant_product::*;
pub use fixed_point::*;
pub use liquidity::*;
