use super::{MembershipOps, MembershipStats};
use crate::error::{Result, SketchError};
use crate::hash::hash_indices;
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};
use tracing::debug;

/// Fixed-size Bloom filter with `num_bits` bits and `num_hashes` rounds.
///
/// Bits are only ever set, so an added item is always reported present.
#[derive(Clone)]
pub struct BloomFilter {
    num_bits: usize,
    num_hashes: usize,
    bits: BitVec<usize, Lsb0>,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(num_bits: usize, num_hashes: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(SketchError::parameter("Bit count (m) must be > 0"));
        }
        if num_bits > BitSlice::<usize, Lsb0>::MAX_BITS {
            return Err(SketchError::parameter(format!(
                "Bit count (m) must be <= {}, got {num_bits}",
                BitSlice::<usize, Lsb0>::MAX_BITS
            )));
        }
        if num_hashes == 0 {
            return Err(SketchError::parameter("Hash count (k) must be > 0"));
        }

        debug!(num_bits, num_hashes, "created bloom filter");

        Ok(Self {
            num_bits,
            num_hashes,
            bits: bitvec![usize, Lsb0; 0; num_bits],
            insert_count: 0,
        })
    }

    pub fn add(&mut self, item: impl AsRef<[u8]>) {
        for idx in hash_indices(item.as_ref(), self.num_hashes, self.num_bits) {
            self.bits.set(idx, true);
        }
        self.insert_count += 1;
    }

    /// `false` means the item was never added; `true` may be a false positive.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        hash_indices(item.as_ref(), self.num_hashes, self.num_bits)
            .all(|idx| self.bits[idx])
    }
}

impl MembershipOps for BloomFilter {
    fn add(&mut self, item: &[u8]) {
        BloomFilter::add(self, item);
    }

    fn contains(&self, item: &[u8]) -> bool {
        BloomFilter::contains(self, item)
    }
}

impl MembershipStats for BloomFilter {
    fn num_bits(&self) -> usize {
        self.num_bits
    }

    fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }

    fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ num_bits: {}, num_hashes: {}, insert_count: {}, bits_set: {} }}",
            self.num_bits,
            self.num_hashes,
            self.insert_count,
            self.bits_set()
        )
    }
}
