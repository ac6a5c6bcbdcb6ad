//! # Fixed-Point Reals
//!
//! Pool math is defined over real numbers, but quotes have to agree with the
//! pool program bit for bit, so every value is carried as a signed 128-bit
//! integer scaled by `10^9`:
//!
//! ```text
//!   real 12.5  <=>  raw 12_500_000_000
//! ```
//!
//! The scale is the one the pool program stores reserves and LP shares in,
//! so a wire `u64` *is* a raw value and converts without loss.
//!
//! ## Rounding
//!
//! Divisions floor (round toward negative infinity) unless the caller asks
//! for [`mul_div_ceil`], which the trade curve uses for the reserve left in
//! the pool. Both evaluate `a * b / c` with a single rounding step, which is
//! how all of the curve formulas are written. Intermediate products that do
//! not fit a `u128` are carried in 256 bits, so a result that fits an `i128`
//! is always exact.
//!
//! ## Degenerate inputs
//!
//! Nothing in this module panics:
//! - division by zero yields `0`
//! - results outside the `i128` range saturate at [`Fixed::MAX`] / [`Fixed::MIN`]
//! - the square root of a non-positive product is `0`

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

use anchor_lang::prelude::*;
mod u256 {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer for intermediate products
        pub struct U256(4);
    }
}
pub use u256::U256;

/// Errors raised when crossing from the math domain to the wire format
#[error_code]
pub enum AmmError {
    #[msg("Quote does not fit in a u64 amount")]
    Overflow,
}

/// Decimal places carried by a [`Fixed`] value (and by the pool's token amounts)
pub const DECIMALS: u32 = 9;

/// Raw units per whole token
pub const SCALE: i128 = 10i128.pow(DECIMALS);

/// Basis points scale (10,000 bps = 100%)
pub const BPS_SCALE: u64 = 10_000;

/// A real number with nine decimals of precision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i128);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);
    pub const HALF: Fixed = Fixed(SCALE / 2);
    pub const MAX: Fixed = Fixed(i128::MAX);
    pub const MIN: Fixed = Fixed(i128::MIN);

    pub const fn from_raw(raw: i128) -> Self {
        Fixed(raw)
    }

    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Wire amount (already scaled by `10^9`) into the math domain
    pub const fn from_units(units: u64) -> Self {
        Fixed(units as i128)
    }

    /// Whole tokens, e.g. `Fixed::from_int(100)` is 100.0
    pub const fn from_int(value: i64) -> Self {
        // |i64| * 10^9 < 2^94, no overflow possible
        Fixed(value as i128 * SCALE)
    }

    /// Back to a wire amount.
    ///
    /// Negative values clamp to `0`: a preview never shows a negative amount
    /// of shares. Values above `u64::MAX` raw units are an error.
    pub fn to_units(self) -> Result<u64> {
        if self.0 <= 0 {
            return Ok(0);
        }
        u64::try_from(self.0).map_err(|_| error!(AmmError::Overflow))
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Basis points of `self` relative to `whole`, clamped to `[0, 10_000]`.
    /// Zero when `whole` is not positive.
    pub fn bps_of(self, whole: Fixed) -> u64 {
        if whole.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        let bps = mul_div(self, Fixed(BPS_SCALE as i128), whole).0;
        bps.clamp(0, BPS_SCALE as i128) as u64
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    /// `floor(self * rhs)`
    fn mul(self, rhs: Fixed) -> Fixed {
        mul_div(self, rhs, Fixed::ONE)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// `floor(self / rhs)`, zero when `rhs` is zero
    fn div(self, rhs: Fixed) -> Fixed {
        mul_div(self, Fixed::ONE, rhs)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = SCALE as u128;
        write!(
            f,
            "{}{}.{:09}",
            sign,
            magnitude / scale,
            magnitude % scale
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Down,
    Up,
}

/// `floor(a * b / c)` with one rounding step.
///
/// Returns `0` when `c` is zero and saturates when the true result does not
/// fit in an `i128`.
pub fn mul_div(a: Fixed, b: Fixed, c: Fixed) -> Fixed {
    mul_div_rounded(a, b, c, Rounding::Down)
}

/// `ceil(a * b / c)` with one rounding step; otherwise as [`mul_div`].
pub fn mul_div_ceil(a: Fixed, b: Fixed, c: Fixed) -> Fixed {
    mul_div_rounded(a, b, c, Rounding::Up)
}

fn mul_div_rounded(a: Fixed, b: Fixed, c: Fixed, rounding: Rounding) -> Fixed {
    if c.0 == 0 {
        return Fixed::ZERO;
    }
    let negative = (a.0 < 0) ^ (b.0 < 0) ^ (c.0 < 0);

    // Order the factors so the result does not depend on argument order
    let (x, y) = {
        let (x, y) = (a.0.unsigned_abs(), b.0.unsigned_abs());
        if x >= y { (x, y) } else { (y, x) }
    };
    let divisor = c.0.unsigned_abs();

    let (quotient, exact) = match x.checked_mul(y) {
        Some(product) => (U256::from(product / divisor), product % divisor == 0),
        None => {
            let product = U256::from(x) * U256::from(y);
            let (quotient, remainder) = product.div_mod(U256::from(divisor));
            (quotient, remainder.is_zero())
        }
    };

    // Floor moves a negative quotient away from zero, ceil a positive one
    let away_from_zero = !exact && (negative != (rounding == Rounding::Up));
    let magnitude = if away_from_zero {
        quotient + U256::one()
    } else {
        quotient
    };
    from_magnitude(magnitude, negative)
}

/// `floor(sqrt(a * b))` in raw units: the geometric mean of two reals.
///
/// Zero when either factor is not positive.
pub fn sqrt_product(a: Fixed, b: Fixed) -> Fixed {
    if a.0 <= 0 || b.0 <= 0 {
        return Fixed::ZERO;
    }
    let (a, b) = (a.0 as u128, b.0 as u128);
    let root = match a.checked_mul(b) {
        Some(product) => sqrt(product),
        // a, b < 2^127 so the root is below 2^127 as well
        None => (U256::from(a) * U256::from(b)).integer_sqrt().low_u128(),
    };
    Fixed(root as i128)
}

/// Integer square root using Newton's method
///
/// Computes floor(√x) for any non-negative integer
pub fn sqrt(x: u128) -> u128 {
    if x == 0 {
        return 0;
    }

    // ceil(x / 2) without the overflow of (x + 1) / 2
    let mut z = x / 2 + x % 2;
    let mut y = x;

    while z < y {
        y = z;
        z = (x / z + z) / 2;
    }

    y
}

fn from_magnitude(magnitude: U256, negative: bool) -> Fixed {
    let limit = U256::from(i128::MAX as u128);

    match (magnitude > limit, negative) {
        (true, false) => Fixed::MAX,
        // -2^127 is the only magnitude past the limit that still fits
        (true, true) => Fixed::MIN,
        (false, false) => Fixed(magnitude.low_u128() as i128),
        (false, true) => Fixed(-(magnitude.low_u128() as i128)),
    }
}
