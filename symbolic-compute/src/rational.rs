//! Exact rational numbers.
//!
//! Every numeric literal in an expression tree, and every result of constant folding, is a
//! [`Rational`]. Keeping numbers exact means folding `1/3 + 2/3` gives exactly `1`, and that the
//! same input always simplifies to the same printed output.

use crate::error::{DivisionByZero, NonFiniteNumber};
use rug::Integer;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};
use symbolic_error::Error;

/// The default number of decimal digits kept when converting a float with
/// [`Rational::from_f64`].
pub const DEFAULT_DIGITS: u32 = 6;

/// The most decimal digits a float can meaningfully carry. Larger digit budgets are clamped to this.
pub const MAX_DIGITS: u32 = 17;

/// A fraction of two arbitrary-precision integers, always kept in lowest terms.
///
/// The denominator is always positive; the sign of the number is carried by the numerator. Zero is
/// always represented as `0/1`. Because of this canonical form, two rationals are equal exactly
/// when their numerators and denominators are equal, which is what the derived [`PartialEq`]
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a rational number `numerator / denominator`, reduced to lowest terms.
    ///
    /// Fails with [`DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Result<Self, Error> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::spanless(DivisionByZero));
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Creates a rational number with denominator one.
    pub fn integer(value: impl Into<Integer>) -> Self {
        Self {
            numerator: value.into(),
            denominator: Integer::from(1),
        }
    }

    /// The rational number `0`.
    pub fn zero() -> Self {
        Self::integer(0)
    }

    /// The rational number `1`.
    pub fn one() -> Self {
        Self::integer(1)
    }

    /// Approximates a float with at most [`DEFAULT_DIGITS`] decimal digits after the point.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        Self::from_f64_digits(value, DEFAULT_DIGITS)
    }

    /// Approximates a float with at most `digits` decimal digits after the point. `digits` is
    /// clamped to [`MAX_DIGITS`].
    ///
    /// Digits of the fractional part are taken one at a time, each multiplying the denominator by
    /// ten, until what remains of the fractional part is below `10^-digits` or the digit budget is
    /// spent. The result is the terminating decimal closest to `value` at that precision, so
    /// `0.1` becomes exactly `1/10` rather than the binary value of the float.
    pub fn from_f64_digits(value: f64, digits: u32) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::spanless(NonFiniteNumber { value }));
        }

        let digits = digits.min(MAX_DIGITS);
        let scale = 10f64.powi(digits as i32);
        let round = |x: f64| (x * scale).round() / scale;
        let epsilon = scale.recip();

        let magnitude = value.abs();
        let mut residue = magnitude;
        let mut denominator = Integer::from(1);
        let mut taken = 0;
        while taken < digits && residue - round(residue).floor() > epsilon {
            residue -= round(residue).floor();
            residue *= 10.0;
            denominator *= 10;
            taken += 1;
        }

        let mut numerator = Integer::from_f64((magnitude * denominator.to_f64()).round())
            .ok_or_else(|| Error::spanless(NonFiniteNumber { value }))?;
        if value < 0.0 {
            numerator = -numerator;
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Normalizes the sign onto the numerator and divides out the greatest common divisor. The
    /// denominator must be nonzero.
    fn reduced(mut numerator: Integer, mut denominator: Integer) -> Self {
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let gcd = Integer::from(numerator.gcd_ref(&denominator));
        if gcd != 1 {
            numerator /= &gcd;
            denominator /= &gcd;
        }

        Self { numerator, denominator }
    }

    /// The numerator. Carries the sign of the number.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator. Always positive.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if this number is one.
    pub fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    /// Returns true if this number is an integer (its denominator is one).
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if this number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// If this number is an integer that fits in an [`i64`], returns it.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator.to_i64()
        } else {
            None
        }
    }

    /// The value of this number as the closest [`f64`].
    pub fn to_f64(&self) -> f64 {
        rug::Rational::from((&self.numerator, &self.denominator)).to_f64()
    }

    /// The absolute value of this number.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.clone().abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// The reciprocal `1 / self`. Fails with [`DivisionByZero`] if this number is zero.
    pub fn recip(&self) -> Result<Self, Error> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides this number by `rhs`. Fails with [`DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        //  a1     b1     a1 * b2
        // ---- / ---- = ---------
        //  a2     b2     a2 * b1
        Self::new(
            Integer::from(&self.numerator * &rhs.denominator),
            Integer::from(&self.denominator * &rhs.numerator),
        )
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        //  a1     b1     a1 * b2 + b1 * a2
        // ---- + ---- = -------------------
        //  a2     b2          a2 * b2
        let numerator = Integer::from(&self.numerator * &rhs.denominator)
            + Integer::from(&rhs.numerator * &self.denominator);
        let denominator = Integer::from(&self.denominator * &rhs.denominator);
        Rational::reduced(numerator, denominator)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self + &-rhs
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        //  a1     b1     a1 * b1
        // ---- * ---- = ---------
        //  a2     b2     a2 * b2
        let numerator = Integer::from(&self.numerator * &rhs.numerator);
        let denominator = Integer::from(&self.denominator * &rhs.denominator);
        Rational::reduced(numerator, denominator)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: Integer::from(-&self.numerator),
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

/// Rationals are ordered exactly by cross-multiplication, which is consistent with [`Eq`].
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying preserves the order
        let lhs = Integer::from(&self.numerator * &other.denominator);
        let rhs = Integer::from(&other.numerator * &self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn reduces_to_lowest_terms() {
        let pairs = [(6, -8), (-6, -8), (0, -5), (12, 3), (7, 7), (-35, 14)];
        for (n, d) in pairs {
            let r = rat(n, d);
            assert!(*r.denominator() > 0);
            assert_eq!(Integer::from(r.numerator().gcd_ref(r.denominator())), 1);
        }

        assert_eq!(rat(6, -8), rat(-3, 4));
        assert_eq!(rat(0, -5), Rational::zero());
        assert_eq!(rat(12, 3), Rational::integer(4));
    }

    #[test]
    fn zero_denominator_fails() {
        let err = Rational::new(1, 0).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert!(Rational::zero().recip().unwrap_err().is::<DivisionByZero>());
        assert!(rat(1, 2).checked_div(&Rational::zero()).is_err());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) - rat(3, 4), rat(-1, 4));
        assert_eq!(rat(2, 3) * rat(9, 4), rat(3, 2));
        assert_eq!(rat(1, 3) + rat(2, 3), Rational::one());
        assert_eq!(rat(2, 3).checked_div(&rat(4, 9)).unwrap(), rat(3, 2));
        assert_eq!(-rat(5, 7), rat(-5, 7));
        assert_eq!(rat(-5, 7).abs(), rat(5, 7));
    }

    #[test]
    fn divide_then_multiply_round_trips() {
        let values = [rat(3, 4), rat(-2, 5), rat(7, 1), rat(0, 1), rat(-13, 6)];
        for a in &values {
            for b in values.iter().filter(|b| !b.is_zero()) {
                assert_eq!(&a.checked_div(b).unwrap() * b, *a);
            }
        }
    }

    #[test]
    fn ordering() {
        assert!(rat(1, 3) < rat(1, 2));
        assert!(rat(-1, 2) < rat(-1, 3));
        assert!(rat(5, 1) > rat(49, 10));
        assert_eq!(rat(2, 4).cmp(&rat(1, 2)), Ordering::Equal);
    }

    #[test]
    fn from_float() {
        assert_eq!(Rational::from_f64(0.75).unwrap(), rat(3, 4));
        assert_eq!(Rational::from_f64(-2.5).unwrap(), rat(-5, 2));
        assert_eq!(Rational::from_f64(0.1).unwrap(), rat(1, 10));
        assert_eq!(Rational::from_f64(42.0).unwrap(), Rational::integer(42));
        assert_eq!(Rational::from_f64(1.0 / 3.0).unwrap(), rat(333_333, 1_000_000));
        assert_eq!(Rational::from_f64_digits(1.0 / 3.0, 2).unwrap(), rat(33, 100));
    }

    #[test]
    fn from_float_with_huge_digit_budget() {
        assert_eq!(Rational::from_f64_digits(0.25, 400).unwrap(), rat(1, 4));
        assert_eq!(Rational::from_f64_digits(0.25, u32::MAX).unwrap(), rat(1, 4));
        assert_eq!(Rational::from_f64_digits(-2.5, u32::MAX).unwrap(), rat(-5, 2));
        assert_eq!(Rational::from_f64_digits(0.1, 400).unwrap(), rat(1, 10));
    }

    #[test]
    fn from_non_finite_float_fails() {
        assert!(Rational::from_f64(f64::NAN).unwrap_err().is::<NonFiniteNumber>());
        assert!(Rational::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn predicates_and_conversions() {
        assert!(Rational::zero().is_zero());
        assert!(Rational::one().is_one());
        assert!(rat(-3, 1).is_integer());
        assert!(rat(-3, 2).is_negative());
        assert_eq!(rat(-3, 1).to_i64(), Some(-3));
        assert_eq!(rat(1, 2).to_i64(), None);
        assert_float_relative_eq!(rat(15, 4).to_f64(), 3.75);
    }

    #[test]
    fn display() {
        assert_eq!(rat(3, 4).to_string(), "3/4");
        assert_eq!(rat(-8, 2).to_string(), "-4");
        assert_eq!(Rational::zero().to_string(), "0");
    }
}
