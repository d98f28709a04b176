use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::DecimalError;

/// 32-bit fixed-point decimal with 2 decimal places of precision.
///
/// Range: ±21,474,836.47
/// Precision: 0.01
///
/// Overflow is detected *before* a result is produced. The checked
/// operators return `Option`/`Result`; chaining them with `?` or
/// `and_then` gives a calculation that fails as a unit — after the first
/// overflow no later step runs and no partial result can be observed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct D32 {
    value: i32,
}

/// Digit-count cutoff for the parser's overflow pre-check. A heuristic,
/// not an exact range check: integral parts longer than this cannot fit,
/// while 8-digit values above 21474836 slip through and wrap.
const MAX_INTEGRAL_DIGITS: usize = 8;

// ============================================================================
// Constants
// ============================================================================

impl D32 {
    /// The scale factor: 10^2
    pub const SCALE: i32 = 100;

    /// The number of decimal places
    pub const DECIMALS: u8 = 2;

    /// Maximum value: 21,474,836.47
    pub const MAX: Self = Self { value: i32::MAX };

    /// Minimum value: -21,474,836.48
    pub const MIN: Self = Self { value: i32::MIN };

    /// Zero
    pub const ZERO: Self = Self { value: 0 };

    /// One (1.0)
    pub const ONE: Self = Self { value: Self::SCALE };

    /// Ten (10.0)
    pub const TEN: Self = Self {
        value: 10 * Self::SCALE,
    };

    /// One hundred (100.0)
    pub const HUNDRED: Self = Self {
        value: 100 * Self::SCALE,
    };

    /// One hundredth (0.01), the smallest positive step
    pub const CENT: Self = Self { value: 1 };
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for D32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl D32 {
    /// Creates a new D32 from a raw scaled value.
    ///
    /// # Safety
    /// The caller must ensure the value is properly scaled by 10^2.
    #[inline(always)]
    pub const fn from_raw(value: i32) -> Self {
        Self { value }
    }

    /// Returns the raw internal value (scaled by 10^2).
    #[inline(always)]
    pub const fn to_raw(self) -> i32 {
        self.value
    }

    /// Creates a D32 from integer and fractional parts at compile time
    /// Example: `new(12, 34)` → 12.34
    ///
    /// The fractional part should always be positive.
    /// For negative numbers, use a negative integer part:
    /// `new(-12, 34)` → -12.34
    ///
    /// # Panics
    /// Panics if the value would overflow the i32 range.
    pub const fn new(integer: i32, fractional: i32) -> Self {
        let scaled = match integer.checked_mul(Self::SCALE) {
            Some(v) => v,
            None => panic!("overflow in D32::new: integer part too large"),
        };

        let value = if integer >= 0 {
            match scaled.checked_add(fractional) {
                Some(v) => v,
                None => panic!("overflow in D32::new: result too large"),
            }
        } else {
            match scaled.checked_sub(fractional) {
                Some(v) => v,
                None => panic!("overflow in D32::new: result too large"),
            }
        };

        Self { value }
    }
}

// ============================================================================
// Integer Conversion
// ============================================================================

impl D32 {
    /// Converts a plain integer to its fixed-point representation.
    ///
    /// This is a scaling primitive, not a checked operator: the caller must
    /// ensure `n * 100` fits in `i32`. Out-of-contract inputs wrap.
    ///
    /// ```rust
    /// use centidec::D32;
    /// assert_eq!(D32::from_int(12).to_raw(), 1200);
    /// ```
    #[inline(always)]
    pub const fn from_int(n: i32) -> Self {
        Self {
            value: n.wrapping_mul(Self::SCALE),
        }
    }

    /// Returns the integral part, truncating toward zero.
    ///
    /// ```rust
    /// use centidec::D32;
    /// assert_eq!(D32::from_raw(1234).to_int(), 12);
    /// assert_eq!(D32::from_raw(-250).to_int(), -2);
    /// ```
    #[inline(always)]
    pub const fn to_int(self) -> i32 {
        self.value / Self::SCALE
    }
}

// ============================================================================
// Arithmetic Operations - Addition
// ============================================================================

impl D32 {
    /// Checked addition. Returns `None` if the sum would leave the
    /// representable range.
    ///
    /// Only same-sign operands can overflow; the sign test is
    /// `(rhs > 0) == (lhs > 0)`, which pairs zero with the non-positive
    /// side. Magnitudes are compared in `i64`, so `i32::MIN` operands are
    /// reported as overflow rather than being undefined.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        if (rhs.value > 0) == (self.value > 0) {
            let lhs_mag = self.value.unsigned_abs() as i64;
            let rhs_mag = rhs.value.unsigned_abs() as i64;
            if lhs_mag > i32::MAX as i64 - rhs_mag {
                return None;
            }
        }

        Some(Self {
            value: self.value + rhs.value,
        })
    }

    /// Checked addition. Returns an error if overflow occurred.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_add(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_add(rhs) {
            Some(result) => Ok(result),
            None => Err(DecimalError::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Subtraction
// ============================================================================

impl D32 {
    /// Checked subtraction, defined as addition of the negated operand.
    /// Returns `None` on overflow, including when `rhs` is `i32::MIN` and
    /// has no negation.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match rhs.checked_neg() {
            Some(negated) => self.checked_add(negated),
            None => None,
        }
    }

    /// Checked subtraction. Returns an error if overflow occurred.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_sub(rhs) {
            Some(result) => Ok(result),
            None => Err(DecimalError::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl D32 {
    /// Checked multiplication. Returns `None` if the product would leave
    /// the representable range.
    ///
    /// The pre-check only fires when `rhs` has a nonzero integral part:
    /// `|lhs|` must not exceed `|MAX / rhs|`. Divisors below 1.0 cannot
    /// push the result past the range limit.
    ///
    /// The product splits `lhs` into integral and fractional components,
    /// `(lhs/100)*rhs + ((lhs%100)*rhs)/100`, delaying the final descale to
    /// keep intermediate magnitudes down. The split is evaluated in `i64`
    /// and truncated back, so inputs the pre-check misjudges wrap
    /// deterministically instead of aborting.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        if rhs.to_int() != 0 {
            let limit = Self::MAX.lossy_div(rhs).value.unsigned_abs();
            if self.value.unsigned_abs() > limit {
                return None;
            }
        }

        let lhs = self.value as i64;
        let scale = Self::SCALE as i64;
        let product = (lhs / scale) * rhs.value as i64
            + ((lhs % scale) * rhs.value as i64) / scale;

        Some(Self {
            value: product as i32,
        })
    }

    /// Checked multiplication. Returns an error if overflow occurred.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_mul(rhs) {
            Some(result) => Ok(result),
            None => Err(DecimalError::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Division
// ============================================================================

impl D32 {
    /// Division with a documented precision trade-off. Never fails.
    ///
    /// When `lhs` is small enough, it is rescaled by 100 first so the
    /// divisor keeps its fractional precision. For large `lhs` the rescale
    /// would overflow, so the fractional part of `rhs` is discarded
    /// instead — an intentional lossy fallback, not a bug.
    ///
    /// A divisor that is zero (or becomes zero after truncation) yields
    /// zero. Known gap inherited from the original design; callers that
    /// care must test the divisor themselves.
    ///
    /// ```rust
    /// use centidec::D32;
    /// assert_eq!(D32::from_raw(1234).lossy_div(D32::from_raw(5739)).to_raw(), 21);
    /// assert_eq!(D32::ONE.lossy_div(D32::ZERO), D32::ZERO);
    /// ```
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn lossy_div(self, rhs: Self) -> Self {
        // The guard is signed, so every negative lhs takes the precision
        // path; rescaling below i32::MIN/100 wraps, matching the original
        // two's-complement behavior.
        let (numerator, denominator) = if self.value < i32::MAX / Self::SCALE {
            (self.value.wrapping_mul(Self::SCALE), rhs.value)
        } else {
            (self.value, rhs.to_int())
        };

        if denominator == 0 {
            Self::ZERO
        } else {
            Self {
                value: numerator.wrapping_div(denominator),
            }
        }
    }
}

// ============================================================================
// Arithmetic Operations - Negation
// ============================================================================

impl D32 {
    /// Checked negation. Returns `None` for `i32::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.value.checked_neg() {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Checked negation. Returns an error if the result would overflow.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_neg(self) -> crate::Result<Self> {
        match self.checked_neg() {
            Some(result) => Ok(result),
            None => Err(DecimalError::Overflow),
        }
    }
}

// ============================================================================
// Sign and Magnitude
// ============================================================================

impl D32 {
    /// Returns the absolute value.
    ///
    /// # Panics
    /// Panics for `D32::MIN`, which has no positive counterpart, in every
    /// build profile.
    #[inline(always)]
    pub const fn abs(self) -> Self {
        match self.checked_abs() {
            Some(result) => result,
            None => panic!("attempt to negate with overflow"),
        }
    }

    /// Checked absolute value. Returns `None` for `D32::MIN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_abs(self) -> Option<Self> {
        match self.value.checked_abs() {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.value > 0
    }

    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.value < 0
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Returns 1, 0 or -1 according to the sign.
    #[inline(always)]
    pub const fn signum(self) -> i32 {
        if self.value > 0 {
            1
        } else if self.value < 0 {
            -1
        } else {
            0
        }
    }

    /// Returns the smaller of two values.
    #[inline(always)]
    pub const fn min(self, other: Self) -> Self {
        if self.value <= other.value { self } else { other }
    }

    /// Returns the larger of two values.
    #[inline(always)]
    pub const fn max(self, other: Self) -> Self {
        if self.value >= other.value { self } else { other }
    }

    /// Discards the fractional part, truncating toward zero.
    #[inline(always)]
    pub const fn trunc(self) -> Self {
        Self {
            value: (self.value / Self::SCALE) * Self::SCALE,
        }
    }

    /// Returns only the fractional part, keeping the sign.
    #[inline(always)]
    pub const fn fract(self) -> Self {
        Self {
            value: self.value % Self::SCALE,
        }
    }
}

// ============================================================================
// Mathematical Operations
// ============================================================================

impl D32 {
    /// Returns the reciprocal, with `lossy_div`'s semantics: zero input
    /// yields zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn recip(self) -> Self {
        Self::ONE.lossy_div(self)
    }

    /// Raises `self` to an integer power by repeated multiplication.
    ///
    /// Returns `None` as soon as any intermediate product overflows; later
    /// iterations never run. A zero exponent yields 1.0 for every base,
    /// including zero. A negative exponent yields the reciprocal of the
    /// positive power, with no checks beyond `lossy_div`'s own.
    ///
    /// Deliberately linear rather than squaring: squaring would reach
    /// different intermediate magnitudes and change which inputs overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_powi(self, exp: i32) -> Option<Self> {
        let negative = exp < 0;
        let mut remaining = exp.unsigned_abs();
        let mut result = Self::ONE;

        while remaining > 0 {
            result = match result.checked_mul(self) {
                Some(r) => r,
                None => return None,
            };
            remaining -= 1;
        }

        if negative {
            Some(Self::ONE.lossy_div(result))
        } else {
            Some(result)
        }
    }

    /// Checked integer power. Returns an error if overflow occurred.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_powi(self, exp: i32) -> crate::Result<Self> {
        match self.checked_powi(exp) {
            Some(result) => Ok(result),
            None => Err(DecimalError::Overflow),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for D32 {
    type Err = DecimalError;

    /// Parses a decimal string such as `"12.34"`, `"-0.5"` or `"7"`.
    ///
    /// The scanner is deliberately tolerant, like the original firmware
    /// parser: digits are consumed until the first non-digit, at most two
    /// fractional digits are read, and anything after them is ignored. A
    /// single fractional digit means tenths (`"1.2"` is 1.20, not 1.02).
    ///
    /// Overflow is rejected up front by a digit-count heuristic: an
    /// integral region longer than 8 bytes returns
    /// [`DecimalError::Overflow`]. 8-digit values past `21474836` evade
    /// the heuristic and wrap; that residual risk is part of the contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();

        let (negative, digits) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            _ => (false, bytes),
        };

        let point = digits
            .iter()
            .position(|&b| b == b'.')
            .unwrap_or(digits.len());
        if point > MAX_INTEGRAL_DIGITS {
            return Err(DecimalError::Overflow);
        }

        let mut pos = 0;
        let mut integral: i32 = 0;
        while pos < digits.len() && digits[pos].is_ascii_digit() {
            integral = integral
                .wrapping_mul(10)
                .wrapping_add((digits[pos] - b'0') as i32);
            pos += 1;
        }

        // Whatever stopped the integral scan is skipped as the separator.
        if pos < digits.len() {
            pos += 1;
        }

        let fraction_start = pos;
        let mut fractional: i32 = 0;
        while pos < digits.len() && digits[pos].is_ascii_digit() && pos - fraction_start < 2 {
            fractional = fractional * 10 + (digits[pos] - b'0') as i32;
            pos += 1;
        }
        if pos - fraction_start == 1 {
            // A single fractional digit is tenths, not hundredths.
            fractional *= 10;
        }

        // Past the heuristic there is no further guard; an oversized
        // magnitude wraps instead of panicking.
        let magnitude = integral.wrapping_mul(Self::SCALE).wrapping_add(fractional);
        let value = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };

        Ok(Self { value })
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Add for D32 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("attempt to add with overflow")
    }
}

impl Sub for D32 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("attempt to subtract with overflow")
    }
}

impl Mul for D32 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("attempt to multiply with overflow")
    }
}

impl Div for D32 {
    type Output = Self;

    /// Uses [`D32::lossy_div`]: infallible, with the documented precision
    /// fallback and zero-divisor gap.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.lossy_div(rhs)
    }
}

impl Neg for D32 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("attempt to negate with overflow")
    }
}

impl AddAssign for D32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for D32 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for D32 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for D32 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Standard Library Trait Implementations
// ============================================================================

impl From<i16> for D32 {
    #[inline(always)]
    fn from(value: i16) -> Self {
        Self::from_int(value as i32)
    }
}

impl From<u16> for D32 {
    #[inline(always)]
    fn from(value: u16) -> Self {
        Self::from_int(value as i32)
    }
}

impl From<i8> for D32 {
    #[inline(always)]
    fn from(value: i8) -> Self {
        Self::from_int(value as i32)
    }
}

impl From<u8> for D32 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        Self::from_int(value as i32)
    }
}

impl fmt::Display for D32 {
    /// Renders the canonical decimal text: a sign only when negative, no
    /// decimal point for whole values, and the hundredths digit dropped
    /// when it is zero (`2.30` prints as `"2.3"`, `0.10` as `"0.1"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return f.write_str("0");
        }

        let magnitude = self.value.unsigned_abs();
        let integral = magnitude / Self::SCALE as u32;
        let fractional = magnitude % Self::SCALE as u32;

        // "-21474836.48" is the longest rendition.
        let mut buffer = [0u8; 13];
        let mut pos = 0;

        if self.value < 0 {
            buffer[pos] = b'-';
            pos += 1;
        }

        if integral == 0 {
            buffer[pos] = b'0';
            pos += 1;
        } else {
            let start = pos;
            let mut n = integral;

            // Convert digits (will be in reverse order)
            while n > 0 {
                buffer[pos] = b'0' + (n % 10) as u8;
                n /= 10;
                pos += 1;
            }

            buffer[start..pos].reverse();
        }

        if fractional != 0 {
            buffer[pos] = b'.';
            buffer[pos + 1] = b'0' + (fractional / 10) as u8;
            pos += 2;

            // At most one trailing zero exists in a two-digit fraction;
            // trim it.
            if fractional % 10 != 0 {
                buffer[pos] = b'0' + (fractional % 10) as u8;
                pos += 1;
            }
        }

        // Only ASCII was written above.
        let s = core::str::from_utf8(&buffer[..pos]).unwrap();
        f.write_str(s)
    }
}

impl fmt::Debug for D32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows raw internals
            f.debug_struct("D32").field("value", &self.value).finish()
        } else {
            // {:?} shows formatted decimal
            write!(f, "D32({})", self)
        }
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for D32 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a D32> for D32 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl Product for D32 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a D32> for D32 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for D32 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - use string representation
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - serialize raw i32
            self.value.serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for D32 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            // JSON, TOML, etc. - parse from string
            let s = alloc::string::String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        } else {
            // Bincode, MessagePack, etc. - deserialize raw i32
            let value = i32::deserialize(deserializer)?;
            Ok(Self { value })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_d32_constants() {
        assert_eq!(D32::ZERO.to_raw(), 0);
        assert_eq!(D32::ONE.to_raw(), 100);
        assert_eq!(D32::CENT.to_raw(), 1);
        assert_eq!(D32::SCALE, 100);
    }

    #[test]
    fn test_int_conversion_round_trip() {
        assert_eq!(D32::from_int(12).to_raw(), 1200);
        assert_eq!(D32::from_int(-7).to_raw(), -700);
        assert_eq!(D32::from_int(42).to_int(), 42);
    }

    #[test]
    fn test_to_int_truncates_toward_zero() {
        assert_eq!(D32::from_raw(199).to_int(), 1);
        assert_eq!(D32::from_raw(-199).to_int(), -1);
        assert_eq!(D32::from_raw(-250).to_int(), -2);
        assert_eq!(D32::from_raw(99).to_int(), 0);
    }

    #[test]
    fn test_addition_sign_combinations() {
        let check = |a: i32, b: i32, expected: i32| {
            assert_eq!(
                D32::from_raw(a).checked_add(D32::from_raw(b)),
                Some(D32::from_raw(expected))
            );
        };

        check(1234, 5739, 6973);
        check(1234, -5739, -4505);
        check(-1234, 5739, 4505);
        check(-1234, -5739, -6973);
    }

    #[test]
    fn test_addition_overflow() {
        assert_eq!(D32::MAX.checked_add(D32::ONE), None);
        assert_eq!(D32::MAX.try_add(D32::CENT), Err(DecimalError::Overflow));
        assert_eq!(
            D32::MIN.checked_add(D32::from_raw(-1)),
            None
        );

        // Right at the boundary is still fine.
        assert_eq!(
            D32::from_raw(i32::MAX - 1).checked_add(D32::CENT),
            Some(D32::MAX)
        );
    }

    #[test]
    fn test_addition_zero_pairs_with_non_positive() {
        // Zero counts as "same sign" as a non-positive lhs, so the
        // magnitude check runs; for a positive lhs it is skipped. Neither
        // case changes the arithmetic result.
        assert_eq!(D32::MAX.checked_add(D32::ZERO), Some(D32::MAX));
        assert_eq!(
            D32::from_raw(-5).checked_add(D32::ZERO),
            Some(D32::from_raw(-5))
        );

        // The one magnitude with no i32 counterpart reports overflow.
        assert_eq!(D32::MIN.checked_add(D32::ZERO), None);
    }

    #[test]
    fn test_subtraction_sign_combinations() {
        let check = |a: i32, b: i32, expected: i32| {
            assert_eq!(
                D32::from_raw(a).checked_sub(D32::from_raw(b)),
                Some(D32::from_raw(expected))
            );
        };

        check(1234, 5739, -4505);
        check(1234, -5739, 6973);
        check(-1234, 5739, -6973);
        check(-1234, -5739, 4505);
    }

    #[test]
    fn test_subtraction_round_trip() {
        let a = D32::from_raw(123456);
        let b = D32::from_raw(-7890);

        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.checked_sub(b), Some(a));
    }

    #[test]
    fn test_subtracting_min_is_overflow() {
        // -i32::MIN does not exist; the negation inside checked_sub must
        // not wrap silently.
        assert_eq!(D32::ZERO.checked_sub(D32::MIN), None);
        assert_eq!(D32::ONE.try_sub(D32::MIN), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_multiplication_sign_combinations() {
        let check = |a: i32, b: i32, expected: i32| {
            assert_eq!(
                D32::from_raw(a).checked_mul(D32::from_raw(b)),
                Some(D32::from_raw(expected))
            );
        };

        check(10, 20, 2);
        check(1234, 5739, 70819);
        check(-1234, 5739, -70819);
        check(1234, -5739, -70819);
        check(-1234, -5739, 70819);
    }

    #[test]
    fn test_multiplication_overflow() {
        let big = D32::from_raw(999000); // 9990.0
        assert_eq!(big.checked_mul(big), None);
        assert_eq!(big.try_mul(big), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_multiplication_small_rhs_skips_precheck() {
        // |rhs| < 1.0 cannot push the result out of range, so no check
        // fires even for a maximal lhs.
        let result = D32::MAX.checked_mul(D32::from_raw(99)).unwrap();
        assert_eq!(result.to_raw(), 21_474_836 * 99 + (47 * 99) / 100);
    }

    #[test]
    fn test_division_sign_combinations() {
        let check = |a: i32, b: i32, expected: i32| {
            assert_eq!(
                D32::from_raw(a).lossy_div(D32::from_raw(b)),
                D32::from_raw(expected)
            );
        };

        check(1234, 5739, 21);
        check(1234, -5739, -21);
        check(-1234, 5739, -21);
        check(-1234, -5739, 21);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(D32::ONE.lossy_div(D32::ZERO), D32::ZERO);
        assert_eq!(D32::from_raw(-1234).lossy_div(D32::ZERO), D32::ZERO);
    }

    #[test]
    fn test_division_large_lhs_discards_rhs_fraction() {
        // Above the rescale limit the divisor is truncated to its integral
        // part: 21474836.00 / 1.50 behaves as 21474836.00 / 1.
        let large = D32::from_raw(2_147_483_600);
        let divisor = D32::from_raw(150);

        assert_eq!(large.lossy_div(divisor), large);

        // A truncated divisor below 1.0 collapses to the zero-divisor gap.
        assert_eq!(large.lossy_div(D32::from_raw(99)), D32::ZERO);
    }

    #[test]
    fn test_division_precision_path() {
        // Below the limit the dividend is rescaled and the divisor keeps
        // its fraction: 12.00 / 1.50 == 8.00.
        assert_eq!(
            D32::from_int(12).lossy_div(D32::from_raw(150)),
            D32::from_int(8)
        );
    }

    #[test]
    fn test_power_basic() {
        assert_eq!(
            D32::from_raw(200).checked_powi(3),
            Some(D32::from_raw(800))
        );
        assert_eq!(D32::from_int(10).checked_powi(2), Some(D32::from_int(100)));
    }

    #[test]
    fn test_power_zero_exponent() {
        assert_eq!(D32::ZERO.checked_powi(0), Some(D32::ONE));
        assert_eq!(D32::MAX.checked_powi(0), Some(D32::ONE));
        assert_eq!(D32::from_raw(-1234).checked_powi(0), Some(D32::ONE));
    }

    #[test]
    fn test_power_negative_exponent_is_reciprocal() {
        // 2.0^-1 == 0.5
        assert_eq!(
            D32::from_int(2).checked_powi(-1),
            Some(D32::from_raw(50))
        );

        let base = D32::from_raw(250); // 2.5
        let positive = base.checked_powi(2).unwrap();
        assert_eq!(
            base.checked_powi(-2),
            Some(D32::ONE.lossy_div(positive))
        );
    }

    #[test]
    fn test_power_overflow_short_circuits() {
        assert_eq!(D32::from_int(1000).checked_powi(4), None);
        assert_eq!(
            D32::from_int(1000).try_powi(4),
            Err(DecimalError::Overflow)
        );
    }

    #[test]
    fn test_overflow_chain_fails_as_a_unit() {
        // Result chaining replaces the old sticky flag: once a step has
        // overflowed, nothing downstream runs.
        let result = D32::MAX
            .try_add(D32::ONE)
            .and_then(|v| v.try_mul(D32::TEN))
            .and_then(|v| v.try_sub(D32::ONE));

        assert_eq!(result, Err(DecimalError::Overflow));
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!("12.34".parse::<D32>(), Ok(D32::from_raw(1234)));
        assert_eq!("-12.34".parse::<D32>(), Ok(D32::from_raw(-1234)));
        assert_eq!("123.01".parse::<D32>(), Ok(D32::from_raw(12301)));
        assert_eq!("5".parse::<D32>(), Ok(D32::from_int(5)));
        assert_eq!("0.05".parse::<D32>(), Ok(D32::from_raw(5)));
    }

    #[test]
    fn test_parse_single_fractional_digit_is_tenths() {
        assert_eq!("1.2".parse::<D32>(), Ok(D32::from_raw(120)));
        assert_eq!("-0.5".parse::<D32>(), Ok(D32::from_raw(-50)));
    }

    #[test]
    fn test_parse_extra_fractional_digits_ignored() {
        assert_eq!("1.234".parse::<D32>(), Ok(D32::from_raw(123)));
        assert_eq!("1.239999".parse::<D32>(), Ok(D32::from_raw(123)));
    }

    #[test]
    fn test_parse_overflow_heuristic() {
        // Eight integral digits still parse, up to the exact boundary.
        assert_eq!("21474836.47".parse::<D32>(), Ok(D32::MAX));

        // Nine integral digits trip the heuristic outright.
        assert_eq!(
            "214748364.7".parse::<D32>(),
            Err(DecimalError::Overflow)
        );
        assert_eq!(
            "123456789".parse::<D32>(),
            Err(DecimalError::Overflow)
        );
    }

    #[test]
    fn test_parse_tolerates_trailing_garbage() {
        // The digit scanner stops at the first non-digit, like the
        // original firmware parser.
        assert_eq!("12.34xyz".parse::<D32>(), Ok(D32::from_raw(1234)));
        assert_eq!("".parse::<D32>(), Ok(D32::ZERO));
    }

    #[test]
    fn test_format_fixture_table() {
        assert_eq!(D32::from_raw(1234).to_string(), "12.34");
        assert_eq!(D32::from_raw(-1234).to_string(), "-12.34");
        assert_eq!(D32::from_raw(0).to_string(), "0");
        assert_eq!(D32::from_raw(1).to_string(), "0.01");
        assert_eq!(D32::from_raw(21).to_string(), "0.21");
        assert_eq!(D32::from_raw(-21).to_string(), "-0.21");
    }

    #[test]
    fn test_format_trims_one_trailing_zero() {
        assert_eq!(D32::from_raw(230).to_string(), "2.3");
        assert_eq!(D32::from_raw(10).to_string(), "0.1");
        assert_eq!(D32::from_raw(-70).to_string(), "-0.7");
    }

    #[test]
    fn test_format_whole_values_have_no_point() {
        assert_eq!(D32::from_int(5).to_string(), "5");
        assert_eq!(D32::from_int(-120).to_string(), "-120");
    }

    #[test]
    fn test_format_parse_round_trip_at_extremes() {
        assert_eq!(D32::MAX.to_string(), "21474836.47");
        assert_eq!("21474836.47".parse::<D32>(), Ok(D32::MAX));

        assert_eq!(D32::MIN.to_string(), "-21474836.48");
        assert_eq!("-21474836.48".parse::<D32>(), Ok(D32::MIN));
    }

    #[test]
    fn test_new_constructor() {
        assert_eq!(D32::new(12, 34), D32::from_raw(1234));
        assert_eq!(D32::new(-12, 34), D32::from_raw(-1234));
        assert_eq!(D32::new(0, 7), D32::from_raw(7));
    }

    #[test]
    #[should_panic(expected = "overflow in D32::new")]
    fn test_new_constructor_panics_on_overflow() {
        let _ = D32::new(i32::MAX, 0);
    }

    #[test]
    fn test_operators() {
        let a = D32::from_raw(1234);
        let b = D32::from_raw(5739);

        assert_eq!(a + b, D32::from_raw(6973));
        assert_eq!(a - b, D32::from_raw(-4505));
        assert_eq!(a * b, D32::from_raw(70819));
        assert_eq!(a / b, D32::from_raw(21));
        assert_eq!(-a, D32::from_raw(-1234));

        let mut acc = a;
        acc += b;
        assert_eq!(acc, D32::from_raw(6973));
    }

    #[test]
    fn test_sum_and_product() {
        let values = [D32::from_int(1), D32::from_int(2), D32::from_int(3)];

        let total: D32 = values.iter().sum();
        assert_eq!(total, D32::from_int(6));

        let product: D32 = values.iter().product();
        assert_eq!(product, D32::from_int(6));
    }

    #[test]
    fn test_sign_checks() {
        assert!(D32::ONE.is_positive());
        assert!(!D32::ONE.is_negative());
        assert!(!D32::ONE.is_zero());

        assert!(D32::ZERO.is_zero());
        assert_eq!(D32::ZERO.signum(), 0);
        assert_eq!(D32::from_raw(-1).signum(), -1);
        assert_eq!(D32::CENT.signum(), 1);
    }

    #[test]
    fn test_trunc_and_fract() {
        let v = D32::from_raw(-1234);
        assert_eq!(v.trunc(), D32::from_int(-12));
        assert_eq!(v.fract(), D32::from_raw(-34));
        assert_eq!(v.trunc().to_raw() + v.fract().to_raw(), v.to_raw());
    }

    #[test]
    fn test_recip() {
        assert_eq!(D32::from_int(2).recip(), D32::from_raw(50));
        assert_eq!(D32::ZERO.recip(), D32::ZERO);
    }

    #[test]
    fn test_abs() {
        assert_eq!(D32::from_raw(-1234).abs(), D32::from_raw(1234));
        assert_eq!(D32::from_raw(1234).abs(), D32::from_raw(1234));
        assert_eq!(D32::MIN.checked_abs(), None);
    }

    #[test]
    #[should_panic(expected = "attempt to negate with overflow")]
    fn test_abs_min_panics() {
        let _ = D32::MIN.abs();
    }

    #[test]
    fn test_debug_formats() {
        use std::format;

        let v = D32::from_raw(1234);
        assert_eq!(format!("{:?}", v), "D32(12.34)");
        assert!(format!("{:#?}", v).contains("1234"));
    }
}
