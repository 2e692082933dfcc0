use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Trait representing a monetary amount
///
/// Balances are compared with `PartialOrd` so that binary floating point can
/// back an account. Comparisons involving NaN are false, so a NaN amount
/// passes both the funds check and the sign check.
pub trait AmountType:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
{
    /// Parse from decimal string (e.g., "1.5")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Checked addition, returns None when the type cannot hold the sum
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None when the type cannot hold the difference
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;
}

impl AmountType for f64 {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(DomainError::MalformedAmount)
    }

    // IEEE arithmetic never fails: results saturate to infinity or become NaN
    fn checked_add(&self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        Some(self - other)
    }

    fn zero() -> Self {
        0.0
    }
}

/// Fixed-point decimal representation using i64 (multiply by 10,000)
/// Represents amounts with 4 decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;
    const DECIMALS: usize = 4;

    /// Create from raw scaled value
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl AmountType for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((integer, decimal)) => (integer, decimal),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer_part.is_empty()
            || !is_digits(integer_part)
            || !is_digits(decimal_part)
            || decimal_part.len() > Self::DECIMALS
        {
            return Err(DomainError::MalformedAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::MalformedAmount)?;

        // Pad to 4 digits so "5" reads as 5000 ten-thousandths
        let decimal: i64 = if decimal_part.is_empty() {
            0
        } else {
            format!("{:0<width$}", decimal_part, width = Self::DECIMALS)
                .parse()
                .map_err(|_| DomainError::MalformedAmount)?
        };

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

/// Natural rendering: no trailing zeros, no decimal point for whole amounts
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = Self::SCALE.unsigned_abs();
        let abs_value = self.0.unsigned_abs();
        let integer_part = abs_value / scale;
        let decimal_part = abs_value % scale;

        let sign = if self.0 < 0 { "-" } else { "" };
        if decimal_part == 0 {
            return write!(f, "{sign}{integer_part}");
        }

        let digits = format!("{:0width$}", decimal_part, width = Self::DECIMALS);
        write!(f, "{sign}{integer_part}.{}", digits.trim_end_matches('0'))
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
