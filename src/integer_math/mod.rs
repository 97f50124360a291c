// src/integer_math/mod.rs

pub mod jacobi;
pub mod modular_arithmetic;
pub mod tonelli_shanks;
pub mod cornacchia;
pub mod prime_sieve;
pub mod prime_factory;
pub mod factorization_factory;
