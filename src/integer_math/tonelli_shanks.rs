// src/integer_math/tonelli_shanks.rs

use log::debug;
use num::{BigInt, Integer, One, Zero};

use crate::core::error::{QuadringError, Result};
use crate::core::static_random::RandomSource;
use crate::integer_math::jacobi::Jacobi;
use crate::integer_math::modular_arithmetic::ModularArithmetic;

pub struct TonelliShanks;

impl TonelliShanks {
    /// Solves x^2 = a (mod p) for odd prime p.
    ///
    /// Requires jacobi(a, p) != -1; the condition is not checked, and
    /// violating it produces an undefined (but terminating) result. The
    /// random source only feeds the quadratic-non-residue search on the
    /// p = 1 (mod 8) path; about half of all candidates qualify, so the
    /// search finishes in O(1) expected draws.
    pub fn sqrt_mod(a: &BigInt, p: &BigInt, rng: &mut dyn RandomSource) -> Result<BigInt> {
        if p.is_even() {
            return Err(QuadringError::invalid_argument("p must be an odd prime"));
        }

        let a = a.mod_floor(p);
        let residue_class = p.mod_floor(&BigInt::from(8));

        if residue_class == BigInt::from(3) || residue_class == BigInt::from(7) {
            return ModularArithmetic::modular_pow(&a, &((p + 1) / 4), p);
        }

        if residue_class == BigInt::from(5) {
            let mut x = ModularArithmetic::modular_pow(&a, &((p + 3) / 8), p)?;
            if (&x * &x).mod_floor(p) != a {
                let adjust = ModularArithmetic::modular_pow(&BigInt::from(2), &((p - 1) / 4), p)?;
                x = (&x * &adjust).mod_floor(p);
            }
            return Ok(x);
        }

        // p = 1 (mod 8)

        let lower = BigInt::from(2);
        let upper = p - 2;
        let witness = loop {
            let candidate = rng.next_bigint(&lower, &upper);
            if Jacobi::symbol(&candidate, p)? == -1 {
                break candidate;
            }
        };
        debug!("tonelli-shanks witness {} for p = {}", witness, p);

        // p - 1 = 2^s * t with t odd
        let mut s = 0usize;
        let mut t: BigInt = p - 1;
        while t.is_even() {
            t /= 2;
            s += 1;
        }

        let big_a = ModularArithmetic::modular_pow(&a, &t, p)?;
        let big_d = ModularArithmetic::modular_pow(&witness, &t, p)?;

        let minus_one = p - 1;
        let mut m = BigInt::zero();

        for i in 0..s {
            let shifted = ModularArithmetic::modular_pow(&big_d, &m, p)?;
            let base = (&big_a * &shifted).mod_floor(p);
            let exponent = BigInt::one() << (s - 1 - i);
            if ModularArithmetic::modular_pow(&base, &exponent, p)? == minus_one {
                m += BigInt::one() << i;
            }
        }

        let first = ModularArithmetic::modular_pow(&a, &((&t + 1) / 2), p)?;
        let second = ModularArithmetic::modular_pow(&big_d, &(&m / 2), p)?;
        Ok((first * second).mod_floor(p))
    }
}
