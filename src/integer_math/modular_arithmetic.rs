// src/integer_math/modular_arithmetic.rs

use num::{BigInt, Integer, One, Signed, Zero};

use crate::core::error::{QuadringError, Result};

pub struct ModularArithmetic;

impl ModularArithmetic {
    /// base^exponent mod modulus by repeated squaring and multiplication.
    /// The result is always in `[0, modulus)`, also for negative bases.
    pub fn modular_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if exponent.is_negative() {
            return Err(QuadringError::invalid_argument(
                "exponent must be a non-negative integer",
            ));
        }

        if !modulus.is_positive() {
            return Err(QuadringError::invalid_argument(
                "modulus must be a positive integer",
            ));
        }

        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        let mut accumulator = BigInt::one();
        let mut base = base.mod_floor(modulus);
        let mut exponent = exponent.clone();

        if exponent.is_zero() {
            return Ok(BigInt::one());
        }

        if base.is_zero() {
            return Ok(BigInt::zero());
        }

        while !exponent.is_one() {
            if exponent.is_odd() {
                accumulator = (&accumulator * &base).mod_floor(modulus);
            }

            base = (&base * &base).mod_floor(modulus);
            exponent /= 2;
        }

        Ok((&accumulator * &base).mod_floor(modulus))
    }

    /// floor(sqrt(n)) by Newton iteration from a power-of-two seed above
    /// the root.
    pub fn integer_sqrt(n: &BigInt) -> Result<BigInt> {
        if n.is_negative() {
            return Err(QuadringError::invalid_argument(
                "cannot take the square root of a negative integer",
            ));
        }

        if n.is_zero() {
            return Ok(BigInt::zero());
        }

        let mut x = BigInt::one() << (((n.bits() + 1) / 2) as usize);

        loop {
            let y = (&x + n / &x) / 2;
            if y >= x {
                return Ok(x);
            }

            x = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::ToPrimitive;

    fn modpow(b: i64, e: i64, m: i64) -> i64 {
        ModularArithmetic::modular_pow(&BigInt::from(b), &BigInt::from(e), &BigInt::from(m))
            .unwrap()
            .to_i64()
            .unwrap()
    }

    fn isqrt(n: i64) -> BigInt {
        ModularArithmetic::integer_sqrt(&BigInt::from(n)).unwrap()
    }

    #[test]
    fn test_modular_pow_known_values() {
        // 3^5 mod 13 = 243 mod 13 = 9
        assert_eq!(modpow(3, 5, 13), 9);
        assert_eq!(modpow(2, 10, 1000), 24);
        assert_eq!(modpow(7, 0, 5), 1);
        assert_eq!(modpow(0, 12, 5), 0);
        assert_eq!(modpow(5, 1, 7), 5);
    }

    #[test]
    fn test_modular_pow_unit_modulus() {
        assert_eq!(modpow(17, 23, 1), 0);
        assert_eq!(modpow(0, 0, 1), 0);
    }

    #[test]
    fn test_modular_pow_negative_base() {
        // (-2)^3 = -8 = 2 (mod 5)
        assert_eq!(modpow(-2, 3, 5), 2);
        assert_eq!(modpow(-1, 7, 4), 3);
    }

    #[test]
    fn test_modular_pow_matches_widening_arithmetic() {
        for base in 0..12i64 {
            for exponent in 0..10i64 {
                for modulus in 1..9i64 {
                    let expected = (base.pow(exponent as u32) % modulus + modulus) % modulus;
                    assert_eq!(
                        modpow(base, exponent, modulus),
                        expected,
                        "pow({}, {}, {})",
                        base,
                        exponent,
                        modulus
                    );
                }
            }
        }
    }

    #[test]
    fn test_modular_pow_rejects_bad_arguments() {
        let one = BigInt::one();
        assert!(ModularArithmetic::modular_pow(&one, &BigInt::from(-1), &BigInt::from(5)).is_err());
        assert!(ModularArithmetic::modular_pow(&one, &one, &BigInt::zero()).is_err());
        assert!(ModularArithmetic::modular_pow(&one, &one, &BigInt::from(-5)).is_err());
    }

    #[test]
    fn test_integer_sqrt_small_values() {
        assert_eq!(isqrt(0), BigInt::zero());
        assert_eq!(isqrt(1), BigInt::one());
        assert_eq!(isqrt(2), BigInt::one());
        assert_eq!(isqrt(3), BigInt::one());
        assert_eq!(isqrt(4), BigInt::from(2));
        assert_eq!(isqrt(15), BigInt::from(3));
        assert_eq!(isqrt(16), BigInt::from(4));
        assert_eq!(isqrt(17), BigInt::from(4));
    }

    #[test]
    fn test_integer_sqrt_is_floor() {
        for n in 0..500i64 {
            let root = isqrt(n);
            assert!(&root * &root <= BigInt::from(n));
            let next = &root + 1;
            assert!(&next * &next > BigInt::from(n));
        }
    }

    #[test]
    fn test_integer_sqrt_large_value() {
        let n = BigInt::from(10).pow(18);
        assert_eq!(
            ModularArithmetic::integer_sqrt(&n).unwrap(),
            BigInt::from(10).pow(9)
        );
    }

    #[test]
    fn test_integer_sqrt_rejects_negative() {
        assert!(ModularArithmetic::integer_sqrt(&BigInt::from(-1)).is_err());
    }
}
