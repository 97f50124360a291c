// src/bin/sieve_primes.rs
//
// Generates a prime cache file: one 4-byte little-endian unsigned integer
// per prime, ascending, up to the requested bound.

use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::info;

use quadring::core::serialization;
use quadring::integer_math::prime_factory::PrimeFactory;

const DEFAULT_MAX_PRIME: u64 = 1_000_000;

fn main() -> ExitCode {
    let env = Env::default()
        .filter_or("QUADRING_LOG_LEVEL", "info")
        .write_style_or("QUADRING_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();

    let (output_file, max_prime) = match args.len() {
        2 => (args[1].clone(), DEFAULT_MAX_PRIME),
        3 => match args[2].parse::<u64>() {
            Ok(bound) => (args[1].clone(), bound),
            Err(_) => {
                eprintln!("Please input an integer as the maximum prime");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Usage: sieve-primes <output_file> [max_prime]");
            return ExitCode::FAILURE;
        }
    };

    let factory = match PrimeFactory::with_bound(max_prime) {
        Ok(factory) => factory,
        Err(err) => {
            eprintln!("could not sieve up to {}: {}", max_prime, err);
            return ExitCode::FAILURE;
        }
    };

    info!("sieved {} primes up to {}", factory.len(), max_prime);

    if let Err(err) = serialization::save_primes(&output_file, &factory) {
        eprintln!("could not write {}: {}", output_file, err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
