// src/integer_math/cornacchia.rs

use log::debug;
use num::{BigInt, Integer, One, Zero};

use crate::core::error::{QuadringError, Result};
use crate::core::static_random::RandomSource;
use crate::integer_math::jacobi::Jacobi;
use crate::integer_math::modular_arithmetic::ModularArithmetic;
use crate::integer_math::tonelli_shanks::TonelliShanks;

pub struct Cornacchia;

impl Cornacchia {
    /// Solves x^2 + d*y^2 = p for odd prime p and 1 <= d < p.
    ///
    /// Returns `None` when no solution exists: either -d is a quadratic
    /// non-residue mod p, or the Euclidean descent ends on a remainder that
    /// fails the divisibility or perfect-square check.
    pub fn solve(
        d: &BigInt,
        p: &BigInt,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<(BigInt, BigInt)>> {
        if p.is_even() {
            return Err(QuadringError::invalid_argument("p must be an odd prime"));
        }

        if !(d >= &BigInt::one() && d < p) {
            return Err(QuadringError::invalid_argument("1 <= d < p must be true"));
        }

        match Jacobi::symbol(&-d, p)? {
            -1 => return Ok(None),
            0 => {
                // gcd(d, p) > 1 can only happen for composite p
                return Err(QuadringError::invalid_argument("p must be an odd prime"));
            }
            _ => {}
        }

        let mut x0 = TonelliShanks::sqrt_mod(&-d, p, rng)?;
        if &x0 * 2 < *p {
            x0 = p - x0;
        }

        let mut a = p.clone();
        let mut b = x0;

        let bound = ModularArithmetic::integer_sqrt(p)?;

        while b > bound {
            let remainder = a.mod_floor(&b);
            a = std::mem::replace(&mut b, remainder);
        }

        let t = p - &b * &b;
        let (quotient, leftover) = t.div_rem(d);
        if !leftover.is_zero() {
            debug!("cornacchia: {} not divisible by {}", t, d);
            return Ok(None);
        }

        let root = ModularArithmetic::integer_sqrt(&quotient)?;
        if &root * &root != quotient {
            debug!("cornacchia: {} is not a perfect square", quotient);
            return Ok(None);
        }

        Ok(Some((b, root)))
    }
}
