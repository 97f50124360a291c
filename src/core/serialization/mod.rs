// src/core/serialization/mod.rs

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::core::error::{QuadringError, Result};
use crate::integer_math::prime_factory::PrimeFactory;

// Cache file format: one 4-byte little-endian unsigned integer per prime,
// ascending, no header, no length prefix, no padding.

pub fn save_primes<P: AsRef<Path>>(path: P, factory: &PrimeFactory) -> Result<()> {
    let primes = factory.primes();
    let mut buffer = Vec::with_capacity(primes.len() * 4);

    for &prime in primes {
        let word = u32::try_from(prime).map_err(|_| {
            QuadringError::CacheFormat(format!(
                "prime {} does not fit the 32-bit cache format",
                prime
            ))
        })?;
        buffer.extend_from_slice(&word.to_le_bytes());
    }

    fs::write(path.as_ref(), &buffer)?;
    info!(
        "wrote {} primes ({} bytes) to {}",
        primes.len(),
        buffer.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn load_primes<P: AsRef<Path>>(path: P) -> Result<PrimeFactory> {
    let bytes = fs::read(path.as_ref())?;

    if bytes.len() % 4 != 0 {
        return Err(QuadringError::CacheFormat(format!(
            "cache length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    let mut primes = Vec::with_capacity(bytes.len() / 4);
    for chunk in bytes.chunks_exact(4) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        primes.push(u64::from(word));
    }

    for pair in primes.windows(2) {
        if pair[0] >= pair[1] {
            return Err(QuadringError::CacheFormat(format!(
                "cache entries not strictly ascending: {} before {}",
                pair[0], pair[1]
            )));
        }
    }

    debug!(
        "loaded {} primes from {}",
        primes.len(),
        path.as_ref().display()
    );
    Ok(PrimeFactory::from_primes(primes))
}
