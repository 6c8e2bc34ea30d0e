// ============================================================================
// Fraction Value Object
// Rational numbers in lowest terms with checked arithmetic
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Greatest Common Divisor
// ============================================================================

/// Greatest common divisor of `|a|` and `|b|` (Euclid).
///
/// `gcd(0, n) == |n|`, `gcd(n, 0) == |n|`, `gcd(0, 0) == 0`. The result is
/// unsigned, so `gcd(i64::MIN, 0)` is representable.
#[inline]
pub fn gcd(a: i64, b: i64) -> u64 {
    // Result is at most max(|a|, |b|) <= 2^63
    gcd_u128(u128::from(a.unsigned_abs()), u128::from(b.unsigned_abs())) as u64
}

#[inline]
fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

// ============================================================================
// Fraction
// ============================================================================

/// A numerator/denominator pair.
///
/// Construction is unchecked: `Fraction::new(1, 0)` is a value, but every
/// operation that consumes it fails with `InvalidFraction`. Every operation
/// returns its result in lowest terms with a positive denominator.
///
/// Equality is structural, so compare simplified values.
///
/// # Example
/// ```
/// use calculator_engine::domain::Fraction;
///
/// let sum = Fraction::new(1, 3).checked_add(Fraction::new(1, 6))?;
/// assert_eq!(sum, Fraction::new(1, 2));
/// assert_eq!(Fraction::new(11, 4).to_mixed()?.to_string(), "2 3/4");
/// # Ok::<(), calculator_engine::numeric::CalcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// 0/1
    pub const ZERO: Self = Self::new(0, 1);

    /// 1/1
    pub const ONE: Self = Self::new(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction as given, without simplifying or validating.
    #[inline]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create `n/1`.
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self::new(n, 1)
    }

    /// Create from floating-point terms, e.g. values parsed from a form.
    ///
    /// # Errors
    /// Returns `InvalidFraction` if either term is NaN, infinite, has a
    /// fractional part, or lies outside the `i64` range.
    pub fn from_f64_parts(numerator: f64, denominator: f64) -> CalcResult<Self> {
        Ok(Self::new(
            integral_term(numerator)?,
            integral_term(denominator)?,
        ))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if the value is zero (and the fraction is valid).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Check if the value is negative, whichever term carries the sign.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numerator != 0
            && self.denominator != 0
            && (self.numerator < 0) != (self.denominator < 0)
    }

    /// Check if the terms share no common factor other than 1.
    #[inline]
    pub fn is_simplified(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// Fail with `InvalidFraction` on a zero denominator.
    #[inline]
    pub fn validate(&self) -> CalcResult<()> {
        if self.denominator == 0 {
            Err(CalcError::InvalidFraction)
        } else {
            Ok(())
        }
    }

    /// Render the fraction as `n/d` (or `n` for a unit denominator).
    ///
    /// # Errors
    /// Returns `InvalidFraction` if the denominator is zero.
    pub fn format(&self) -> CalcResult<String> {
        self.validate()?;
        Ok(self.to_string())
    }

    /// Approximate value as `f64`.
    pub fn to_f64(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(self.numerator as f64 / self.denominator as f64)
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// # Errors
    /// Returns `InvalidFraction` if the denominator is zero.
    pub fn simplify(self) -> CalcResult<Self> {
        self.validate()?;
        reduce(i128::from(self.numerator), i128::from(self.denominator))
    }

    /// Swap numerator and denominator, simplified.
    ///
    /// # Errors
    /// - `DivisionByZero` if the value is zero
    /// - `InvalidFraction` if the denominator is zero
    pub fn reciprocal(self) -> CalcResult<Self> {
        if self.numerator == 0 {
            return Err(CalcError::DivisionByZero);
        }
        self.validate()?;
        reduce(i128::from(self.denominator), i128::from(self.numerator))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition by cross-multiplication over `d1 * d2`.
    ///
    /// Operands are reduced first and intermediate terms are computed in
    /// i128; the simplified result is narrowed back to i64.
    ///
    /// # Errors
    /// - `InvalidFraction` if either denominator is zero
    /// - `Overflow` if the simplified result does not fit in i64
    pub fn checked_add(self, rhs: Self) -> CalcResult<Self> {
        self.validate()?;
        rhs.validate()?;
        let (a, b) = self.cross_terms(rhs);
        let numerator = a.checked_add(b).ok_or(CalcError::Overflow)?;
        reduce(numerator, self.common_denominator(rhs))
    }

    /// Checked subtraction by cross-multiplication over `d1 * d2`.
    ///
    /// # Errors
    /// Same as [`Fraction::checked_add`].
    pub fn checked_sub(self, rhs: Self) -> CalcResult<Self> {
        self.validate()?;
        rhs.validate()?;
        let (a, b) = self.cross_terms(rhs);
        let numerator = a.checked_sub(b).ok_or(CalcError::Overflow)?;
        reduce(numerator, self.common_denominator(rhs))
    }

    /// Checked multiplication: `(n1 * n2) / (d1 * d2)`.
    ///
    /// # Errors
    /// Same as [`Fraction::checked_add`].
    pub fn checked_mul(self, rhs: Self) -> CalcResult<Self> {
        self.validate()?;
        rhs.validate()?;
        let (n1, d1) = self.lowest_terms();
        let (n2, d2) = rhs.lowest_terms();
        reduce(n1 * n2, d1 * d2)
    }

    /// Checked division: `(n1 * d2) / (d1 * n2)`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` has a zero numerator, whatever its denominator
    /// - `InvalidFraction` if either denominator is zero
    /// - `Overflow` if the simplified result does not fit in i64
    pub fn checked_div(self, rhs: Self) -> CalcResult<Self> {
        if rhs.numerator == 0 {
            return Err(CalcError::DivisionByZero);
        }
        self.validate()?;
        rhs.validate()?;
        let (n1, d1) = self.lowest_terms();
        let (n2, d2) = rhs.lowest_terms();
        reduce(n1 * d2, d1 * n2)
    }

    /// Both products stay within i128 once the operands are reduced:
    /// each term is at most 2^63 in magnitude.
    #[inline]
    fn cross_terms(self, rhs: Self) -> (i128, i128) {
        let (n1, d1) = self.lowest_terms();
        let (n2, d2) = rhs.lowest_terms();
        (n1 * d2, n2 * d1)
    }

    #[inline]
    fn common_denominator(self, rhs: Self) -> i128 {
        self.lowest_terms().1 * rhs.lowest_terms().1
    }

    /// Terms in lowest form with a positive denominator, widened to i128.
    /// Caller validates the denominator.
    fn lowest_terms(self) -> (i128, i128) {
        let (mut numerator, mut denominator) =
            (i128::from(self.numerator), i128::from(self.denominator));
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let g = gcd_u128(numerator.unsigned_abs(), denominator.unsigned_abs());
        if g > 1 {
            // g divides a value of magnitude at most 2^63
            let g = g as i128;
            (numerator / g, denominator / g)
        } else {
            (numerator, denominator)
        }
    }

    // ========================================================================
    // Mixed Numbers
    // ========================================================================

    /// Split into a whole part and a proper remainder for display.
    ///
    /// The fraction is not simplified first: `10/4` renders as `2 2/4`.
    pub fn to_mixed(&self) -> CalcResult<MixedNumber> {
        self.validate()?;

        let negative = self.is_negative();
        let magnitude = self.numerator.unsigned_abs();
        let denominator = self.denominator.unsigned_abs();

        Ok(MixedNumber {
            negative,
            whole: magnitude / denominator,
            remainder: magnitude % denominator,
            denominator,
        })
    }
}

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

/// Simplify a transient pair and narrow it back to i64 terms.
fn reduce(numerator: i128, denominator: i128) -> CalcResult<Fraction> {
    if denominator == 0 {
        return Err(CalcError::InvalidFraction);
    }

    // Sign lives on the numerator
    let (numerator, denominator) = if denominator < 0 {
        (
            numerator.checked_neg().ok_or(CalcError::Overflow)?,
            denominator.checked_neg().ok_or(CalcError::Overflow)?,
        )
    } else {
        (numerator, denominator)
    };

    let g = gcd_u128(numerator.unsigned_abs(), denominator.unsigned_abs());
    let (numerator, denominator) = if g == 0 {
        (numerator, 1)
    } else {
        let g = i128::try_from(g).map_err(|_| CalcError::Overflow)?;
        (numerator / g, denominator / g)
    };

    Ok(Fraction::new(
        i64::try_from(numerator).map_err(|_| CalcError::Overflow)?,
        i64::try_from(denominator).map_err(|_| CalcError::Overflow)?,
    ))
}

fn integral_term(x: f64) -> CalcResult<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !x.is_finite() || x.fract() != 0.0 || x >= LIMIT || x < -LIMIT {
        return Err(CalcError::InvalidFraction);
    }
    Ok(x as i64)
}

// ============================================================================
// Display and Parsing
// ============================================================================

/// Renders `n` when the denominator is 1, otherwise `n/d`, with any
/// negative sign on the numerator.
///
/// Display does not validate: `Fraction::new(1, 0)` renders as `1/0`. Use
/// [`Fraction::format`] where a zero denominator must be rejected.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = if self.denominator < 0 {
            (-i128::from(self.numerator), -i128::from(self.denominator))
        } else {
            (i128::from(self.numerator), i128::from(self.denominator))
        };

        if denominator == 1 {
            write!(f, "{}", numerator)
        } else {
            write!(f, "{}/{}", numerator, denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = CalcError;

    /// Parse `"n"`, `"n/d"` or a mixed number `"w n/d"`.
    ///
    /// # Examples
    /// - "5" -> 5/1
    /// - "-3/4" -> -3/4
    /// - "-2 3/4" -> -11/4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        match parts.as_slice() {
            [single] => parse_simple(single),
            [whole_text, proper] => {
                let whole: i64 = whole_text.parse().map_err(|_| CalcError::InvalidInput)?;
                // "-0 1/2" is negative even though its whole part is zero
                let negative = whole_text.starts_with('-');
                let proper = parse_simple(proper)?;
                if proper.numerator < 0 || proper.denominator < 0 {
                    return Err(CalcError::InvalidInput);
                }

                let denominator = i128::from(proper.denominator);
                let magnitude = i128::from(whole.unsigned_abs()) * denominator
                    + i128::from(proper.numerator);
                let numerator = if negative { -magnitude } else { magnitude };

                Ok(Fraction::new(
                    i64::try_from(numerator).map_err(|_| CalcError::Overflow)?,
                    proper.denominator,
                ))
            },
            _ => Err(CalcError::InvalidInput),
        }
    }
}

fn parse_simple(s: &str) -> CalcResult<Fraction> {
    let (numerator, denominator) = match s.split_once('/') {
        Some((n, d)) => (n, d),
        None => (s, "1"),
    };

    let numerator: i64 = numerator.parse().map_err(|_| CalcError::InvalidInput)?;
    let denominator: i64 = denominator.parse().map_err(|_| CalcError::InvalidInput)?;

    let fraction = Fraction::new(numerator, denominator);
    fraction.validate()?;
    Ok(fraction)
}

// ============================================================================
// Mixed Number
// ============================================================================

/// Whole part plus proper remainder, used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u64,
    pub remainder: u64,
    pub denominator: u64,
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };

        if self.denominator == 1 || (self.whole > 0 && self.remainder == 0) {
            write!(f, "{}{}", sign, self.whole)
        } else if self.whole == 0 {
            // Proper fraction, no whole part
            write!(f, "{}{}/{}", sign, self.remainder, self.denominator)
        } else {
            write!(
                f,
                "{}{} {}/{}",
                sign, self.whole, self.remainder, self.denominator
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Fractions with small terms and a non-zero denominator of either sign.
    fn fraction() -> impl Strategy<Value = Fraction> {
        (
            -1000_i64..=1000,
            prop_oneof![-1000_i64..=-1, 1_i64..=1000],
        )
            .prop_map(|(n, d)| Fraction::new(n, d))
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        fraction().prop_filter("non-zero", |f| f.numerator() != 0)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn simplify_is_idempotent(f in fraction()) {
            let once = f.simplify().unwrap();
            prop_assert_eq!(once.simplify().unwrap(), once);
            prop_assert!(once.is_simplified());
            prop_assert!(once.denominator() > 0);
        }

        #[test]
        fn addition_commutes(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.checked_add(b).unwrap(), b.checked_add(a).unwrap());
        }

        #[test]
        fn multiplication_commutes(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.checked_mul(b).unwrap(), b.checked_mul(a).unwrap());
        }

        #[test]
        fn multiplication_distributes_over_addition(
            a in fraction(),
            b in fraction(),
            c in fraction(),
        ) {
            let lhs = a.checked_mul(b.checked_add(c).unwrap()).unwrap();
            let rhs = a
                .checked_mul(b)
                .unwrap()
                .checked_add(a.checked_mul(c).unwrap())
                .unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn reciprocal_product_is_one(f in non_zero_fraction()) {
            let product = f.checked_mul(f.reciprocal().unwrap()).unwrap();
            prop_assert_eq!(product, Fraction::ONE);
        }

        #[test]
        fn division_by_zero_always_fails(f in fraction(), d in 1_i64..1000) {
            prop_assert_eq!(
                f.checked_div(Fraction::new(0, d)),
                Err(CalcError::DivisionByZero)
            );
        }

        #[test]
        fn subtraction_undoes_addition(a in fraction(), b in fraction()) {
            let sum = a.checked_add(b).unwrap();
            prop_assert_eq!(sum.checked_sub(b).unwrap(), a.simplify().unwrap());
        }

        #[test]
        fn display_roundtrips_through_parse(f in fraction()) {
            let simplified = f.simplify().unwrap();
            let parsed: Fraction = simplified.to_string().parse().unwrap();
            prop_assert_eq!(parsed, simplified);
        }
    }
}

#[cfg(test)]
mod quickchecks {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn gcd_is_symmetric(a: i64, b: i64) -> bool {
            gcd(a, b) == gcd(b, a)
        }

        fn gcd_divides_both(a: i64, b: i64) -> bool {
            let g = gcd(a, b);
            if g == 0 {
                a == 0 && b == 0
            } else {
                a.unsigned_abs() % g == 0 && b.unsigned_abs() % g == 0
            }
        }

        fn gcd_with_zero_is_magnitude(a: i64) -> bool {
            gcd(a, 0) == a.unsigned_abs() && gcd(0, a) == a.unsigned_abs()
        }
    }
}
