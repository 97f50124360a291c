// src/rings/ring_factorization.rs

use log::debug;

use crate::core::error::{QuadringError, Result};
use crate::core::static_random::RandomSource;
use crate::integer_math::factorization_factory::FactorizationFactory;
use crate::integer_math::prime_factory::PrimeFactory;
use crate::rings::quadratic_integer::{QuadraticInteger, RingVariant};

/// Factors a nonzero element into algebraic primes.
///
/// The norm of z is factored over the rational integers; each rational
/// prime is then classified and lifted:
///
/// - ramified: the fixed prime (1, -1) and its conjugate absorb the
///   exponent, ceil-half and floor-half;
/// - inert: the prime itself is the algebraic prime, with half the (always
///   even) norm exponent;
/// - split: a representative factor comes out of Cornacchia's equation,
///   and trial division of the evolving z decides how the exponent
///   distributes between it and its conjugate. The norm alone cannot
///   reveal that distribution.
///
/// Whatever remains of z at the end is a unit (or evidence of a logic
/// error) and is prepended with exponent 1 rather than dropped. The
/// product of `factor^exponent` over the result equals the original z;
/// callers verify through `reconstruct`.
pub fn factor(
    z: &QuadraticInteger,
    primes: &mut PrimeFactory,
    rng: &mut dyn RandomSource,
) -> Result<Vec<(QuadraticInteger, u32)>> {
    if z.is_zero() {
        return Err(QuadringError::invalid_argument("cannot factor zero"));
    }

    let variant = z.variant();
    let mut z = z.clone();
    let mut factorization: Vec<(QuadraticInteger, u32)> = Vec::new();

    let norm = z.norm();
    debug!("factoring {} element of norm {}", variant, norm);

    for (p, count) in FactorizationFactory::factor_integer(&norm, primes)? {
        if variant.ramifies(p) {
            // (1, -1) is the ramified prime in both rings
            let factor2 = QuadraticInteger::from_ints(variant, 1, -1);
            let factor1 = factor2.conj();

            let count1 = (count + 1) / 2;
            z = exact_div(&z, &factor1.pow(count1))?;
            factorization.push((factor1, count1));

            let count2 = count - count1;
            if count2 != 0 {
                z = exact_div(&z, &factor2.pow(count2))?;
                factorization.push((factor2, count2));
            }

            continue;
        }

        if variant.is_inert(p) {
            if count % 2 != 0 {
                return Err(QuadringError::logic_invariant(format!(
                    "inert prime {} carries odd exponent {} in the norm",
                    p, count
                )));
            }

            let factor = QuadraticInteger::from_integer(variant, p);
            let half = count / 2;
            z = exact_div(&z, &factor.pow(half))?;
            factorization.push((factor, half));

            continue;
        }

        // p splits
        let factor = variant.split_prime_factor(p, rng)?;
        debug!("split prime {} resolves through {}", p, factor);

        let mut num_divisions = 0u32;
        while num_divisions < count {
            let quotient = z.rounded_div(&factor);
            if &quotient * &factor == z {
                z = quotient;
                num_divisions += 1;
            } else {
                break;
            }
        }

        if num_divisions != 0 {
            factorization.push((factor.clone(), num_divisions));
        }

        let remaining = count - num_divisions;
        if remaining == 0 {
            continue;
        }

        let conjugate = factor.conj();
        z = exact_div(&z, &conjugate.pow(remaining))?;
        factorization.push((conjugate, remaining));
    }

    // a leftover unit stays visible instead of silently vanishing
    if !z.is_one() {
        factorization.insert(0, (z, 1));
    }

    Ok(factorization)
}

/// Product of `factor^exponent`; the caller-side check that a
/// factorization reproduces its input exactly.
pub fn reconstruct(
    variant: RingVariant,
    factorization: &[(QuadraticInteger, u32)],
) -> QuadraticInteger {
    factorization
        .iter()
        .fold(QuadraticInteger::one(variant), |product, (factor, exponent)| {
            &product * &factor.pow(*exponent)
        })
}

fn exact_div(z: &QuadraticInteger, divisor: &QuadraticInteger) -> Result<QuadraticInteger> {
    let quotient = z.rounded_div(divisor);
    if &quotient * divisor == *z {
        Ok(quotient)
    } else {
        Err(QuadringError::logic_invariant(format!(
            "{} does not divide {} exactly",
            divisor, z
        )))
    }
}
