// src/main.rs

use std::io::{self, BufRead, Write};
use std::path::Path;

use env_logger::Env;
use log::{error, info, warn};

use quadring::config::QuadringConfig;
use quadring::core::serialization;
use quadring::core::static_random::StaticRandom;
use quadring::integer_math::prime_factory::PrimeFactory;
use quadring::rings::quadratic_integer::{QuadraticInteger, RingVariant};
use quadring::rings::ring_factorization;

fn main() {
    let config = QuadringConfig::load().unwrap_or_else(|err| {
        eprintln!("falling back to default configuration: {}", err);
        QuadringConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("QUADRING_LOG_LEVEL", config.log_level.clone())
        .write_style_or("QUADRING_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    let mut primes = load_prime_cache(&config);
    let mut rng = StaticRandom::new();

    println!("\nFactor a Gaussian or Eisenstein integer!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n[1] Gaussian integer\n[2] Eisenstein integer\n[3] Exit\n");
        print!("Pick a choice: ");
        let _ = io::stdout().flush();

        let choice = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            _ => break,
        };

        let variant = match choice.as_str() {
            "1" => RingVariant::Gaussian,
            "2" => RingVariant::Eisenstein,
            "3" => break,
            _ => {
                println!("Please enter a valid choice (1, 2, 3)");
                continue;
            }
        };

        println!(
            "Enter a {} integer to factor (ex: 5 + 8{}):",
            variant,
            variant.unit_symbol()
        );

        let expression = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        let z = match QuadraticInteger::parse(variant, &expression) {
            Ok(z) => z,
            Err(err) => {
                println!("Please enter a valid {} integer ({})", variant, err);
                continue;
            }
        };

        println!("Input: {}", z);
        factor_and_print(&z, &mut primes, &mut rng);
    }

    save_prime_cache(&config, &primes);
}

fn factor_and_print(z: &QuadraticInteger, primes: &mut PrimeFactory, rng: &mut StaticRandom) {
    if z.is_zero() {
        println!("0 cannot be factored");
        return;
    }

    let factorization = match ring_factorization::factor(z, primes, rng) {
        Ok(factorization) => factorization,
        Err(err) => {
            error!("factorization of {} failed: {}", z, err);
            return;
        }
    };

    let rendered: Vec<String> = factorization
        .iter()
        .map(|(factor, exponent)| {
            let mut text = factor.to_string();
            if *exponent == 1 {
                return text;
            }

            if !text.starts_with('(') {
                text = format!("({})", text);
            }

            format!("{}^{}", text, exponent)
        })
        .collect();

    println!("{} = {}", z, rendered.join(" * "));

    // double check the product
    let product = ring_factorization::reconstruct(z.variant(), &factorization);
    if &product != z {
        error!(
            "reconstruction mismatch: expected {}, factors multiply to {}",
            z, product
        );
    }
}

fn load_prime_cache(config: &QuadringConfig) -> PrimeFactory {
    let Some(path) = config.prime_cache_file.as_deref() else {
        return PrimeFactory::new();
    };

    if !Path::new(path).exists() {
        info!("prime cache {} not found; starting empty", path);
        return PrimeFactory::new();
    }

    match serialization::load_primes(path) {
        Ok(primes) => {
            info!("loaded {} cached primes from {}", primes.len(), path);
            primes
        }
        Err(err) => {
            warn!("ignoring unreadable prime cache {}: {}", path, err);
            PrimeFactory::new()
        }
    }
}

fn save_prime_cache(config: &QuadringConfig, primes: &PrimeFactory) {
    let Some(path) = config.prime_cache_file.as_deref() else {
        return;
    };

    if primes.is_empty() {
        return;
    }

    if let Err(err) = serialization::save_primes(path, primes) {
        warn!("could not write prime cache {}: {}", path, err);
    }
}
