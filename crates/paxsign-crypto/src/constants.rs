//! # Constant Generator — H and K Tables from Primes
//!
//! Derives the 8 initial hash words and 64 round constants of SHA-256 from
//! the first 64 prime numbers:
//!
//! - `H[i]` = first 32 bits of the fractional part of `sqrt(prime[i])`,
//!   for the first 8 primes.
//! - `K[i]` = first 32 bits of the fractional part of `cbrt(prime[i])`,
//!   for all 64 primes.
//!
//! The derivation is pure arithmetic and runs exactly once per process; the
//! result is published through a `OnceLock` so concurrent first calls neither
//! race nor recompute. Unit tests pin the derived tables bit-for-bit against
//! the constants published in FIPS 180-4, making the floating-point
//! derivation independently checkable.

use std::sync::OnceLock;

/// Upper bound of the composite sieve. The 64th prime is 311, so marking
/// multiples below 313 is sufficient to identify all primes we need.
const SIEVE_BOUND: usize = 313;

/// The derived SHA-256 constant tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha256Constants {
    /// Initial hash value: 8 words from square roots of the first 8 primes.
    pub h: [u32; 8],
    /// Round constants: 64 words from cube roots of the first 64 primes.
    pub k: [u32; 64],
}

static CONSTANTS: OnceLock<Sha256Constants> = OnceLock::new();

/// The process-wide SHA-256 constant tables.
///
/// The first call derives the tables; every subsequent call returns the same
/// published value. Reads after publication are lock-free.
pub fn constants() -> &'static Sha256Constants {
    CONSTANTS.get_or_init(derive_constants)
}

fn derive_constants() -> Sha256Constants {
    let primes = first_64_primes();
    let mut h = [0u32; 8];
    let mut k = [0u32; 64];
    for (i, &prime) in primes.iter().enumerate() {
        let p = f64::from(prime);
        if i < 8 {
            h[i] = fractional_word(p.sqrt());
        }
        k[i] = fractional_word(p.cbrt());
    }
    Sha256Constants { h, k }
}

/// First 32 bits of the fractional part of `x`, as an unsigned word.
///
/// `x` is a root of a small integer, so its fractional part is in [0, 1)
/// and the scaled value fits a `u32` after truncation.
fn fractional_word(x: f64) -> u32 {
    ((x - x.floor()) * 4_294_967_296.0) as u32
}

/// Find the first 64 primes by sieving candidates from 2 upward, marking
/// each prime's multiples composite up to [`SIEVE_BOUND`].
fn first_64_primes() -> [u32; 64] {
    let mut composite = [false; SIEVE_BOUND];
    let mut primes = [0u32; 64];
    let mut found = 0;
    let mut candidate = 2;
    while found < 64 {
        if !composite[candidate] {
            let mut multiple = candidate;
            while multiple < SIEVE_BOUND {
                composite[multiple] = true;
                multiple += candidate;
            }
            primes[found] = candidate as u32;
            found += 1;
        }
        candidate += 1;
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_finds_the_first_64_primes() {
        let primes = first_64_primes();
        assert_eq!(primes[0], 2);
        assert_eq!(primes[1], 3);
        assert_eq!(primes[7], 19);
        assert_eq!(primes[63], 311);
    }

    #[test]
    fn test_h_matches_fips_180_4() {
        let expected: [u32; 8] = [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
            0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
        ];
        assert_eq!(constants().h, expected);
    }

    #[test]
    fn test_k_matches_fips_180_4() {
        let expected: [u32; 64] = [
            0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4,
            0xab1c5ed5, 0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe,
            0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f,
            0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
            0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc,
            0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b,
            0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116,
            0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
            0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
            0xc67178f2,
        ];
        assert_eq!(constants().k, expected);
    }

    #[test]
    fn test_constants_are_cached() {
        // Same allocation on every call — the OnceLock publishes once.
        let first = constants() as *const Sha256Constants;
        let second = constants() as *const Sha256Constants;
        assert_eq!(first, second);
        assert_eq!(constants(), constants());
    }
}
