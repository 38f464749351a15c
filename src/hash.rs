use sha2::{Digest, Sha256};
use std::fmt;

/// Width of a [`Digest256`] in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 256-bit hash value, interpreted as a big-endian unsigned integer.
///
/// Ordering follows the numeric value, since the bytes are stored most
/// significant first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest256([u8; DIGEST_LEN]);

impl Digest256 {
    pub fn from_be_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns `self mod modulus`, computed exactly over all 256 bits.
    ///
    /// `modulus` must be non-zero. The accumulator stays below `modulus`
    /// between steps, so shifting in one byte never exceeds 72 bits.
    pub fn reduce(&self, modulus: usize) -> usize {
        debug_assert!(modulus > 0, "modulus must be > 0");
        let m = modulus as u128;
        self.0
            .iter()
            .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % m)
            as usize
    }
}

impl fmt::Debug for Digest256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest256(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// The `index`-th member of the hash family.
///
/// SHA-256 over the item bytes followed by the ASCII decimal form of
/// `index`. Pure: the same `(item, index)` always gives the same digest.
pub fn hash_item(item: &[u8], index: usize) -> Digest256 {
    let mut hasher = Sha256::new();
    hasher.update(item);
    hasher.update(index.to_string().as_bytes());
    Digest256(hasher.finalize().into())
}

/// Lazily yields `hash_item(item, i) mod modulus` for `i` in `0..num_hashes`.
///
/// Lazy so that membership checks can stop at the first unset bit.
pub fn hash_indices(
    item: &[u8],
    num_hashes: usize,
    modulus: usize,
) -> impl Iterator<Item = usize> + '_ {
    (0..num_hashes).map(move |i| hash_item(item, i).reduce(modulus))
}

/// Unrounded optimal bit count `-(n * ln p) / (ln 2)^2`.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> f64 {
    let ln2 = std::f64::consts::LN_2;
    -(n as f64 * fpr.ln()) / (ln2 * ln2)
}

/// Unrounded optimal hash count `(m / n) * ln 2`.
pub fn optimal_num_hashes(n: usize, m: f64) -> f64 {
    (m / n as f64) * std::f64::consts::LN_2
}

/// Count-Min width `ceil(e / epsilon)`, before the range check.
pub fn optimal_width(epsilon: f64) -> f64 {
    (std::f64::consts::E / epsilon).ceil()
}

/// Count-Min depth `ceil(ln(1 / delta))`, before the range check.
pub fn optimal_depth(delta: f64) -> f64 {
    (1.0 / delta).ln().ceil()
}
