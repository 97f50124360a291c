// tests/factorization_tests.rs
//
// End-to-end tests for the full pipeline: norm factorization over the
// rationals, prime classification, and the algebraic lift. Every case
// checks the product-reconstruction invariant.

use num::BigInt;
use quadring::core::static_random::StaticRandom;
use quadring::integer_math::factorization_factory::FactorizationFactory;
use quadring::integer_math::prime_factory::PrimeFactory;
use quadring::rings::quadratic_integer::{QuadraticInteger, RingVariant};
use quadring::rings::ring_factorization;

#[cfg(test)]
mod end_to_end {
    use super::*;

    fn factor_checked(z: &QuadraticInteger) -> Vec<(QuadraticInteger, u32)> {
        let mut primes = PrimeFactory::new();
        let mut rng = StaticRandom::from_seed_value(17);

        let factorization = ring_factorization::factor(z, &mut primes, &mut rng)
            .unwrap_or_else(|err| panic!("factoring {} failed: {}", z, err));

        let product = ring_factorization::reconstruct(z.variant(), &factorization);
        assert_eq!(&product, z, "factors of {} multiply to {}", z, product);

        factorization
    }

    #[test]
    fn test_factor_integer_concrete_scenarios() {
        let mut primes = PrimeFactory::new();

        let empty = FactorizationFactory::factor_integer(&BigInt::from(1), &mut primes).unwrap();
        assert_eq!(empty, vec![]);

        let twelve = FactorizationFactory::factor_integer(&BigInt::from(12), &mut primes).unwrap();
        assert_eq!(twelve, vec![(2, 2), (3, 1)]);
    }

    #[test]
    fn test_gaussian_split_prime_element() {
        // norm(5 + 8i) = 89 is prime, so 5 + 8i is a Gaussian prime times
        // a unit; each prime entry carries exponent 1
        let z = QuadraticInteger::from_ints(RingVariant::Gaussian, 5, 8);
        let factorization = factor_checked(&z);

        for (factor, exponent) in &factorization {
            let norm = factor.norm();
            assert!(
                norm == BigInt::from(1) || norm == BigInt::from(89),
                "unexpected norm {}",
                norm
            );
            assert_eq!(*exponent, 1);
        }
    }

    #[test]
    fn test_gaussian_rational_split_prime() {
        // 89 = pi * conj(pi), one copy each
        let z = QuadraticInteger::from_ints(RingVariant::Gaussian, 89, 0);
        let factorization = factor_checked(&z);

        assert_eq!(factorization.len(), 2);
        assert_eq!(factorization[0].0.conj(), factorization[1].0);
        assert!(factorization
            .iter()
            .all(|(factor, exponent)| factor.norm() == BigInt::from(89) && *exponent == 1));
    }

    #[test]
    fn test_eisenstein_ramified_three() {
        // 3 ramifies: two associated primes of norm 3, exponents summing
        // to 2 under the ceil/floor pairing rule
        let z = QuadraticInteger::from_ints(RingVariant::Eisenstein, 3, 0);
        let factorization = factor_checked(&z);

        let total: u32 = factorization.iter().map(|(_, exponent)| exponent).sum();
        assert_eq!(total, 2);
        assert!(factorization
            .iter()
            .all(|(factor, _)| factor.norm() == BigInt::from(3)));
    }

    #[test]
    fn test_units_surface_as_residual_entries() {
        for (x, y) in [(0i64, 1i64), (0, -1), (-1, 0)] {
            let z = QuadraticInteger::from_ints(RingVariant::Gaussian, x, y);
            let factorization = factor_checked(&z);
            assert_eq!(factorization, vec![(z.clone(), 1)]);
        }

        // the six Eisenstein units all factor as themselves
        for (x, y) in [(-1i64, 0i64), (0, 1), (0, -1), (1, 1), (-1, -1)] {
            let z = QuadraticInteger::from_ints(RingVariant::Eisenstein, x, y);
            let factorization = factor_checked(&z);
            assert_eq!(factorization, vec![(z.clone(), 1)]);
        }
    }

    #[test]
    fn test_reconstruction_over_both_rings() {
        for x in -5i64..=5 {
            for y in -5i64..=5 {
                if x == 0 && y == 0 {
                    continue;
                }

                let g = QuadraticInteger::from_ints(RingVariant::Gaussian, x, y);
                factor_checked(&g);

                let e = QuadraticInteger::from_ints(RingVariant::Eisenstein, x, y);
                factor_checked(&e);
            }
        }
    }

    #[test]
    fn test_larger_mixed_composites() {
        // (1 + i) * 3 * (2 + i) = 3 + 9i
        let z = QuadraticInteger::from_ints(RingVariant::Gaussian, 3, 9);
        let factorization = factor_checked(&z);
        assert!(factorization.len() >= 3);

        // 2^2 * 3 * 7 in the Eisenstein integers
        let z = QuadraticInteger::from_ints(RingVariant::Eisenstein, 84, 0);
        factor_checked(&z);

        // a split-power element: (2 + i)^4 * (1 + 2i)
        let pi = QuadraticInteger::from_ints(RingVariant::Gaussian, 2, 1);
        let rho = QuadraticInteger::from_ints(RingVariant::Gaussian, 1, 2);
        let z = &pi.pow(4) * &rho;
        factor_checked(&z);
    }

    #[test]
    fn test_shared_prime_list_amortizes_across_calls() {
        let mut primes = PrimeFactory::new();
        let mut rng = StaticRandom::from_seed_value(17);

        let first = QuadraticInteger::from_ints(RingVariant::Gaussian, 5, 8);
        ring_factorization::factor(&first, &mut primes, &mut rng).unwrap();
        let after_first = primes.len();
        assert!(after_first > 0);

        let second = QuadraticInteger::from_ints(RingVariant::Eisenstein, 84, 0);
        let factorization = ring_factorization::factor(&second, &mut primes, &mut rng).unwrap();
        assert_eq!(
            ring_factorization::reconstruct(RingVariant::Eisenstein, &factorization),
            second
        );
        assert!(primes.len() >= after_first);
    }
}
