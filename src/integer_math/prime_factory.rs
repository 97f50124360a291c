// src/integer_math/prime_factory.rs

use log::debug;

use crate::core::error::Result;
use crate::integer_math::prime_sieve::PrimeSieve;

/// Owned handle over the shared, append-only prime list.
///
/// The list is ascending, grows monotonically through `extend`, and is
/// meant to be reused across factorization calls so sieve work amortizes.
/// Sequential reuse only: nothing here is synchronized.
pub struct PrimeFactory {
    primes: Vec<u64>,
}

impl PrimeFactory {
    /// Empty handle; the first `extend` bootstraps it.
    pub fn new() -> Self {
        PrimeFactory { primes: Vec::new() }
    }

    /// Handle covering all primes in `[2, bound]`.
    pub fn with_bound(bound: u64) -> Result<Self> {
        let mut factory = PrimeFactory::new();
        factory.extend(Some(bound))?;
        Ok(factory)
    }

    pub(crate) fn from_primes(primes: Vec<u64>) -> Self {
        PrimeFactory { primes }
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn get(&self, index: usize) -> u64 {
        self.primes[index]
    }

    /// Largest prime currently known, if any.
    pub fn max_value(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// Grows the list to cover `[2, new_max]`; see
    /// `PrimeSieve::extend_primes` for the bound defaults.
    pub fn extend(&mut self, new_max: Option<u64>) -> Result<()> {
        let before = self.primes.len();
        PrimeSieve::extend_primes(&mut self.primes, new_max)?;
        debug!(
            "prime factory grew from {} to {} entries (max {:?})",
            before,
            self.primes.len(),
            self.max_value()
        );
        Ok(())
    }
}

impl Default for PrimeFactory {
    fn default() -> Self {
        Self::new()
    }
}
