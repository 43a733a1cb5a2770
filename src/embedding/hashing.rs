use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::TextEncoder;

/// Signed feature-hashing encoder over lowercased alphanumeric tokens.
///
/// Each token is hashed to a bucket in a fixed-dimension vector and
/// accumulated with a hash-derived sign; the result is L2-normalized.
/// `DefaultHasher::new()` uses fixed keys, so identical text always encodes
/// to an identical vector within one model version.
pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn token_hash(token: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        hasher.finish()
    }
}

impl TextEncoder for HashingEncoder {
    fn encode(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            let hash = Self::token_hash(&token);
            let bucket = (hash % self.dimension as u64) as usize;
            // Sign bit taken above the bucket bits to keep the two independent
            let sign = if (hash >> 32) & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }

        vector
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
