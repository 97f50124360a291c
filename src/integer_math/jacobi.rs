// src/integer_math/jacobi.rs

use num::{BigInt, Integer, One, Signed, Zero};

use crate::core::error::{QuadringError, Result};

pub struct Jacobi;

impl Jacobi {
    /// Jacobi symbol (a/m) for any integer a and positive odd m: 1 for a
    /// quadratic residue character, -1 for a non-residue character, 0 when
    /// gcd(a, m) > 1.
    pub fn symbol(a: &BigInt, m: &BigInt) -> Result<i32> {
        if !m.is_positive() || m.is_even() {
            return Err(QuadringError::invalid_argument(
                "m must be a positive odd integer",
            ));
        }

        let eight = BigInt::from(8);
        let four = BigInt::from(4);
        let three = BigInt::from(3);
        let five = BigInt::from(5);

        let mut a = a.mod_floor(m);
        let mut m = m.clone();
        let mut t = 1;

        while !a.is_zero() {
            while a.is_even() {
                a /= 2;
                let r = m.mod_floor(&eight);
                if r == three || r == five {
                    t = -t;
                }
            }

            std::mem::swap(&mut a, &mut m);

            if a.mod_floor(&four) == three && m.mod_floor(&four) == three {
                t = -t;
            }

            a = a.mod_floor(&m);
        }

        if m.is_one() {
            Ok(t)
        } else {
            Ok(0)
        }
    }
}
