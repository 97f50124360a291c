// src/integer_math/factorization_factory.rs

use log::debug;
use num::{BigInt, Integer, One, Zero};

use crate::core::error::{QuadringError, Result};
use crate::integer_math::prime_factory::PrimeFactory;

pub struct FactorizationFactory;

impl FactorizationFactory {
    /// Factors n >= 1 into ascending (prime, exponent) pairs by trial
    /// division against the shared prime list, extending it on demand.
    /// n = 1 factors into the empty product.
    pub fn factor_integer(n: &BigInt, primes: &mut PrimeFactory) -> Result<Vec<(u64, u32)>> {
        if n < &BigInt::one() {
            return Err(QuadringError::invalid_argument(
                "factor_integer requires a positive integer",
            ));
        }

        let mut factorization = Vec::new();

        if n.is_one() {
            return Ok(factorization);
        }

        let mut n = n.clone();
        let mut index = 0;

        loop {
            if index >= primes.len() {
                primes.extend(None)?;
            }

            let prime = primes.get(index);
            let prime_big = BigInt::from(prime);

            let mut num_divisions = 0u32;
            loop {
                let (quotient, remainder) = n.div_rem(&prime_big);
                if !remainder.is_zero() {
                    break;
                }
                n = quotient;
                num_divisions += 1;
            }

            if num_divisions != 0 {
                debug!("factor {}^{}", prime, num_divisions);
                factorization.push((prime, num_divisions));
            }

            if n.is_one() {
                return Ok(factorization);
            }

            index += 1;
        }
    }
}
