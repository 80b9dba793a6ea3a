//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet. The
//! drawing itself is the pure function [`generate_code`], parameterized by the
//! random source; services consume it through the injectable
//! [`CodeGenerator`] capability so tests can supply a seeded or scripted
//! source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Symbols a short code is drawn from.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of symbols in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Draws `length` independent symbols from [`ALPHABET`] using `rng`.
///
/// Calling again with the same generator yields the next code in its
/// sequence.
///
/// # Examples
///
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_code(&mut rng, 6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` consists only of [`ALPHABET`] symbols.
pub fn is_alphabet_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces the next candidate code.
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(&mut rand::rng(), self.length)
    }
}

/// Deterministic generator for reproducible sequences.
///
/// Two generators built from the same seed produce the same codes in the same
/// order.
#[derive(Debug)]
pub struct SeededCodeGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl SeededCodeGenerator {
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            length,
        }
    }
}

impl CodeGenerator for SeededCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_code(&mut *rng, self.length)
    }
}
