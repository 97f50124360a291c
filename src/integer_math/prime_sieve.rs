// src/integer_math/prime_sieve.rs

use bitvec::prelude::*;
use log::debug;

use crate::core::error::{QuadringError, Result};

/// Bound of the first extension when the prime list starts out empty.
pub const DEFAULT_BOOTSTRAP_BOUND: u64 = 100;

pub struct PrimeSieve;

impl PrimeSieve {
    /// Full sieve of Eratosthenes over `[0, n]`: bit i is set iff i is
    /// prime.
    pub fn sieve_of_eratosthenes(n: u64) -> Result<BitVec> {
        if n < 2 {
            return Err(QuadringError::invalid_argument("n must be at least 2"));
        }

        let mut sieve = bitvec![1; (n + 1) as usize];
        sieve.set(0, false);
        sieve.set(1, false);

        let mut i: u64 = 2;
        while i <= n / i {
            if sieve[i as usize] {
                let mut j = i * i;
                while j <= n {
                    sieve.set(j as usize, false);
                    j += i;
                }
            }
            i += 1;
        }

        Ok(sieve)
    }

    /// All primes in `[2, n]`, ascending.
    pub fn generate_primes(n: u64) -> Result<Vec<u64>> {
        let sieve = Self::sieve_of_eratosthenes(n)?;
        Ok(sieve.iter_ones().map(|i| i as u64).collect())
    }

    /// Segmented extension: given a list of all primes up to its last
    /// element, appends every prime in `(last, new_max]`. Defaults to
    /// doubling the current maximum, or to the bootstrap bound when the
    /// list is empty. No-op when `new_max` does not exceed the current
    /// maximum. The result only depends on the final bound, not on the
    /// sequence of intermediate extensions that reached it.
    pub fn extend_primes(primes: &mut Vec<u64>, new_max: Option<u64>) -> Result<()> {
        if let Some(bound) = new_max {
            if bound < 2 {
                return Err(QuadringError::invalid_argument("new_max must be at least 2"));
            }
        }

        if primes.is_empty() {
            let bound = new_max.unwrap_or(DEFAULT_BOOTSTRAP_BOUND);
            debug!("bootstrapping prime list up to {}", bound);
            primes.extend(Self::generate_primes(bound)?);
            return Ok(());
        }

        let last = *primes.last().unwrap();
        let new_max = new_max.unwrap_or(2 * last);
        if new_max <= last {
            return Ok(());
        }

        debug!("extending prime list from {} to {}", last, new_max);

        // one window over (last, new_max]; value v sits at bit v - last - 1
        let mut window = bitvec![1; (new_max - last) as usize];

        for &prime in primes.iter().take_while(|&&p| p <= new_max / p) {
            let mut multiple = (last / prime + 1) * prime;
            while multiple <= new_max {
                window.set((multiple - last - 1) as usize, false);
                multiple += prime;
            }
        }

        // primes discovered inside the window also cull it, starting at
        // their square; everything below the square is already handled
        let mut i = last + 1;
        while i <= new_max / i {
            if window[(i - last - 1) as usize] {
                let mut j = i * i;
                while j <= new_max {
                    window.set((j - last - 1) as usize, false);
                    j += i;
                }
            }
            i += 1;
        }

        primes.extend(window.iter_ones().map(|bit| last + 1 + bit as u64));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_of_30() {
        assert_eq!(
            PrimeSieve::generate_primes(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_sieve_counts() {
        assert_eq!(PrimeSieve::generate_primes(2).unwrap(), vec![2]);
        assert_eq!(PrimeSieve::generate_primes(1_000).unwrap().len(), 168);
        assert_eq!(PrimeSieve::generate_primes(10_000).unwrap().len(), 1_229);
    }

    #[test]
    fn test_sieve_rejects_small_bounds() {
        assert!(PrimeSieve::sieve_of_eratosthenes(0).is_err());
        assert!(PrimeSieve::sieve_of_eratosthenes(1).is_err());
    }

    #[test]
    fn test_extend_bootstraps_empty_list() {
        let mut primes = Vec::new();
        PrimeSieve::extend_primes(&mut primes, None).unwrap();
        assert_eq!(primes, PrimeSieve::generate_primes(DEFAULT_BOOTSTRAP_BOUND).unwrap());

        let mut primes = Vec::new();
        PrimeSieve::extend_primes(&mut primes, Some(2)).unwrap();
        assert_eq!(primes, vec![2]);
    }

    #[test]
    fn test_extend_edge_cases() {
        let mut primes = Vec::new();
        assert!(PrimeSieve::extend_primes(&mut primes, Some(1)).is_err());
        assert!(primes.is_empty());

        PrimeSieve::extend_primes(&mut primes, Some(2)).unwrap();
        assert_eq!(primes, vec![2]);

        // bound at the current maximum is a no-op
        PrimeSieve::extend_primes(&mut primes, Some(2)).unwrap();
        assert_eq!(primes, vec![2]);

        PrimeSieve::extend_primes(&mut primes, Some(3)).unwrap();
        assert_eq!(primes, vec![2, 3]);

        // default doubles the current maximum
        primes.pop();
        PrimeSieve::extend_primes(&mut primes, None).unwrap();
        assert_eq!(primes, vec![2, 3]);
    }

    #[test]
    fn test_extend_matches_full_sieve() {
        let mut primes = Vec::new();
        PrimeSieve::extend_primes(&mut primes, Some(10)).unwrap();
        PrimeSieve::extend_primes(&mut primes, Some(500)).unwrap();
        PrimeSieve::extend_primes(&mut primes, Some(10_000)).unwrap();
        assert_eq!(primes, PrimeSieve::generate_primes(10_000).unwrap());
    }

    #[test]
    fn test_extend_is_history_independent() {
        let mut direct = Vec::new();
        PrimeSieve::extend_primes(&mut direct, Some(5_000)).unwrap();

        let mut stepped = Vec::new();
        PrimeSieve::extend_primes(&mut stepped, Some(53)).unwrap();
        PrimeSieve::extend_primes(&mut stepped, Some(54)).unwrap();
        PrimeSieve::extend_primes(&mut stepped, Some(200)).unwrap();
        PrimeSieve::extend_primes(&mut stepped, Some(5_000)).unwrap();

        let mut doubled = Vec::new();
        PrimeSieve::extend_primes(&mut doubled, Some(10)).unwrap();
        while *doubled.last().unwrap() < 2_501 {
            PrimeSieve::extend_primes(&mut doubled, None).unwrap();
        }
        PrimeSieve::extend_primes(&mut doubled, Some(5_000)).unwrap();

        assert_eq!(direct, stepped);
        assert_eq!(direct, doubled);
    }
}
