// src/rings/quadratic_integer.rs

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num::{BigInt, Integer, One, Signed, Zero};

use crate::core::error::{QuadringError, Result};
use crate::core::static_random::RandomSource;
use crate::integer_math::cornacchia::Cornacchia;

/// The two quadratic-extension rings. Closed by design: the arithmetic,
/// conjugation, and prime-splitting rules below are the complete set, so
/// the variants dispatch through matches rather than an open trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingVariant {
    /// Z[i], i^2 = -1
    Gaussian,
    /// Z[w], w^2 + w + 1 = 0
    Eisenstein,
}

impl RingVariant {
    /// Marker character used by the textual form: `i` or `w`.
    pub fn unit_symbol(self) -> char {
        match self {
            RingVariant::Gaussian => 'i',
            RingVariant::Eisenstein => 'w',
        }
    }

    /// p ramifies: p is (up to units) the square of a single prime.
    pub fn ramifies(self, p: u64) -> bool {
        match self {
            RingVariant::Gaussian => p == 2,
            RingVariant::Eisenstein => p == 3,
        }
    }

    /// p stays prime in the ring.
    pub fn is_inert(self, p: u64) -> bool {
        match self {
            RingVariant::Gaussian => p % 4 == 3,
            RingVariant::Eisenstein => p % 3 == 2,
        }
    }

    /// p factors into two conjugate primes.
    pub fn splits(self, p: u64) -> bool {
        match self {
            RingVariant::Gaussian => p % 4 == 1,
            RingVariant::Eisenstein => p % 3 == 1,
        }
    }

    /// A prime factor of a split rational prime p, found through
    /// Cornacchia's equation x^2 + d*y^2 = p. Its conjugate is the other
    /// factor.
    pub fn split_prime_factor(
        self,
        p: u64,
        rng: &mut dyn RandomSource,
    ) -> Result<QuadraticInteger> {
        let d = match self {
            RingVariant::Gaussian => BigInt::one(),
            RingVariant::Eisenstein => BigInt::from(3),
        };

        let solution = Cornacchia::solve(&d, &BigInt::from(p), rng)?;
        match solution {
            Some((x, y)) => Ok(match self {
                RingVariant::Gaussian => QuadraticInteger::new(self, x, y),
                // x^2 + 3y^2 = p maps onto (x + y) + 2y*w
                RingVariant::Eisenstein => QuadraticInteger::new(self, &x + &y, y * 2),
            }),
            None => Err(QuadringError::logic_invariant(format!(
                "split prime {} has no x^2 + {}y^2 representation",
                p, d
            ))),
        }
    }
}

impl fmt::Display for RingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingVariant::Gaussian => write!(f, "Gaussian"),
            RingVariant::Eisenstein => write!(f, "Eisenstein"),
        }
    }
}

/// An element x + y*u of one of the two rings, with u the variant's
/// distinguished unit (i or w). Values are immutable; arithmetic produces
/// new elements. Elements of different variants never compare equal, and
/// mixing them in arithmetic is a programmer error that panics.
#[derive(Debug, Clone)]
pub struct QuadraticInteger {
    variant: RingVariant,
    x: BigInt,
    y: BigInt,
}

impl QuadraticInteger {
    pub fn new(variant: RingVariant, x: BigInt, y: BigInt) -> Self {
        QuadraticInteger { variant, x, y }
    }

    pub fn from_ints(variant: RingVariant, x: i64, y: i64) -> Self {
        Self::new(variant, BigInt::from(x), BigInt::from(y))
    }

    /// The rational integer p embedded in the ring.
    pub fn from_integer(variant: RingVariant, p: u64) -> Self {
        Self::new(variant, BigInt::from(p), BigInt::zero())
    }

    pub fn one(variant: RingVariant) -> Self {
        Self::from_ints(variant, 1, 0)
    }

    pub fn variant(&self) -> RingVariant {
        self.variant
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.x.is_one() && self.y.is_zero()
    }

    pub fn conj(&self) -> Self {
        match self.variant {
            RingVariant::Gaussian => Self::new(self.variant, self.x.clone(), -&self.y),
            RingVariant::Eisenstein => Self::new(self.variant, &self.x - &self.y, -&self.y),
        }
    }

    /// Multiplicative norm into the non-negative rational integers.
    pub fn norm(&self) -> BigInt {
        match self.variant {
            RingVariant::Gaussian => &self.x * &self.x + &self.y * &self.y,
            RingVariant::Eisenstein => {
                &self.x * &self.x - &self.x * &self.y + &self.y * &self.y
            }
        }
    }

    /// Square-and-multiply exponentiation. The unsigned exponent makes
    /// the non-negativity contract structural.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one(self.variant);
        let mut exponent = exponent;

        while exponent != 0 {
            if exponent % 2 == 1 {
                result = &result * &base;
            }

            base = &base * &base;
            exponent /= 2;
        }

        result
    }

    /// Nearest-element division: a * conj(b) with both components divided
    /// by norm(b) and rounded to the nearest integer. Only approximate;
    /// callers test exact divisibility by checking `quotient * b == a`.
    /// Panics on a zero divisor.
    pub fn rounded_div(&self, rhs: &Self) -> Self {
        self.require_same_variant(rhs, "divide");
        if rhs.is_zero() {
            panic!("division of a {} integer by zero", self.variant);
        }

        let numerator = self * &rhs.conj();
        let denominator = rhs.norm();

        Self::new(
            self.variant,
            div_round_nearest(&numerator.x, &denominator),
            div_round_nearest(&numerator.y, &denominator),
        )
    }

    fn require_same_variant(&self, other: &Self, operation: &str) {
        if self.variant != other.variant {
            panic!(
                "cannot {} a {} integer and a {} integer",
                operation, self.variant, other.variant
            );
        }
    }

    /// Parses the textual form: optional surrounding parentheses and
    /// whitespace, an integer real part, an optional signed unit term,
    /// ending in the variant's marker character. Examples: `12`, `-i`,
    /// `(5 + 8i)`, `3 - 2w`.
    pub fn parse(variant: RingVariant, input: &str) -> Result<Self> {
        let unit = variant.unit_symbol();
        let fail = || {
            QuadringError::invalid_argument(format!("could not parse a {} integer", variant))
        };

        let trimmed = input.trim();
        let inner = if trimmed.len() >= 2 && trimmed.starts_with('(') && trimmed.ends_with(')') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };

        let compact: String = inner.chars().filter(|c| *c != ' ').collect();
        if compact.is_empty()
            || !compact
                .chars()
                .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == unit)
        {
            return Err(fail());
        }

        match compact.find(unit) {
            // no unit marker: the whole string is the real part
            None => {
                let x = parse_signed_integer(&compact).ok_or_else(fail)?;
                Ok(Self::new(variant, x, BigInt::zero()))
            }
            // unit marker last: real part, then one signed unit term
            Some(position) if position + unit.len_utf8() == compact.len() => {
                let body = &compact[..position];
                let interior_signs: Vec<usize> = body
                    .char_indices()
                    .skip(1)
                    .filter(|&(_, c)| c == '+' || c == '-')
                    .map(|(index, _)| index)
                    .collect();

                match interior_signs.as_slice() {
                    [] => {
                        let y = parse_unit_coefficient(body).ok_or_else(fail)?;
                        Ok(Self::new(variant, BigInt::zero(), y))
                    }
                    [split] => {
                        let x = parse_signed_integer(&body[..*split]).ok_or_else(fail)?;
                        let y = parse_unit_coefficient(&body[*split..]).ok_or_else(fail)?;
                        Ok(Self::new(variant, x, y))
                    }
                    _ => Err(fail()),
                }
            }
            _ => Err(fail()),
        }
    }
}

/// Strict signed integer: one optional sign, then at least one digit.
fn parse_signed_integer(s: &str) -> Option<BigInt> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: BigInt = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Like `parse_signed_integer`, but a bare (or empty) sign means a
/// coefficient of plus or minus one, as in `3 + i` or `-w`.
fn parse_unit_coefficient(s: &str) -> Option<BigInt> {
    match s {
        "" | "+" => Some(BigInt::one()),
        "-" => Some(-BigInt::one()),
        _ => parse_signed_integer(s),
    }
}

fn div_round_nearest(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);

    if (&remainder * BigInt::from(2)).abs() >= denominator.abs() {
        if remainder.sign() == denominator.sign() {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

impl PartialEq for QuadraticInteger {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.x == other.x && self.y == other.y
    }
}

impl Eq for QuadraticInteger {}

impl Add for &QuadraticInteger {
    type Output = QuadraticInteger;

    fn add(self, rhs: Self) -> QuadraticInteger {
        self.require_same_variant(rhs, "add");
        QuadraticInteger::new(self.variant, &self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl Sub for &QuadraticInteger {
    type Output = QuadraticInteger;

    fn sub(self, rhs: Self) -> QuadraticInteger {
        self.require_same_variant(rhs, "subtract");
        QuadraticInteger::new(self.variant, &self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl Mul for &QuadraticInteger {
    type Output = QuadraticInteger;

    fn mul(self, rhs: Self) -> QuadraticInteger {
        self.require_same_variant(rhs, "multiply");

        let cross = &self.x * &rhs.y + &self.y * &rhs.x;
        let square = &self.y * &rhs.y;

        match self.variant {
            RingVariant::Gaussian => {
                QuadraticInteger::new(self.variant, &self.x * &rhs.x - &square, cross)
            }
            RingVariant::Eisenstein => QuadraticInteger::new(
                self.variant,
                &self.x * &rhs.x - &square,
                cross - square,
            ),
        }
    }
}

impl fmt::Display for QuadraticInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.variant.unit_symbol();

        let real = if self.x.is_zero() {
            String::new()
        } else {
            self.x.to_string()
        };

        let imaginary = if self.y.is_zero() {
            String::new()
        } else if self.y.abs().is_one() {
            unit.to_string()
        } else {
            format!("{}{}", self.y.abs(), unit)
        };

        if real.is_empty() && imaginary.is_empty() {
            return write!(f, "0");
        }

        if imaginary.is_empty() {
            return write!(f, "{}", real);
        }

        let sign = if self.y.is_negative() { "-" } else { "+" };

        if real.is_empty() {
            let prefix = if self.y.is_negative() { "-" } else { "" };
            return write!(f, "{}{}", prefix, imaginary);
        }

        write!(f, "({} {} {})", real, sign, imaginary)
    }
}
