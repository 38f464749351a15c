/// Core set-membership operations, object safe over raw bytes
pub trait MembershipOps {
    fn add(&mut self, item: &[u8]);
    fn contains(&self, item: &[u8]) -> bool;
}

pub trait BulkMembershipOps {
    fn add_bulk(&mut self, items: &[&[u8]]);
    fn contains_bulk(&self, items: &[&[u8]]) -> Vec<bool>;
}

impl<F: MembershipOps + ?Sized> BulkMembershipOps for F {
    fn add_bulk(&mut self, items: &[&[u8]]) {
        for item in items {
            self.add(item);
        }
    }

    fn contains_bulk(&self, items: &[&[u8]]) -> Vec<bool> {
        items.iter().map(|item| self.contains(item)).collect()
    }
}

pub trait MembershipStats {
    /// Bit array size (m)
    fn num_bits(&self) -> usize;
    /// Hash rounds per operation (k)
    fn num_hashes(&self) -> usize;
    /// Number of `add` calls, duplicates included
    fn insert_count(&self) -> usize;
    fn bits_set(&self) -> usize;

    fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.num_bits() as f64
    }

    /// `(1 - e^(-k * n / m))^k` with `n` taken as the insert count
    fn estimated_false_positive_rate(&self) -> f64 {
        let k = self.num_hashes() as f64;
        let n = self.insert_count() as f64;
        let m = self.num_bits() as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }
}
