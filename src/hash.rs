//! Key hashing and bucket placement.
//!
//! ## Overview
//!
//! Keys are hashed with djb2, Dan Bernstein's multiplicative string hash:
//! start from a seed of 5381 and fold each byte in with `hash * 33 + byte`.
//! The multiply is expressed as `(hash << 5) + hash`, with all arithmetic
//! wrapping modulo 2^64.
//!
//! ## Determinism
//!
//! Both functions are pure. The same key always lands in the same bucket
//! for a given capacity, which keeps bucket placement reproducible across
//! runs; there is no per-process seed.
//!
//! ## Examples
//!
//! ```
//! use lexmap::hash::{hash_djb2, bucket_index};
//!
//! assert_eq!(hash_djb2(b""), 5381);
//! assert_eq!(hash_djb2(b"a"), 177670);
//!
//! // Placement is just the hash reduced by the bucket count
//! assert_eq!(bucket_index(b"a", 1), 0);
//! assert_eq!(bucket_index(b"a", 64), 177670 % 64);
//! ```

/// djb2 seed value.
pub const DJB2_SEED: u64 = 5381;

/// Hash a byte sequence with the djb2 algorithm.
///
/// # Arguments
///
/// * `key` - The bytes to hash
///
/// # Example
///
/// ```
/// use lexmap::hash::hash_djb2;
///
/// // hash("ab") = (5381*33 + 'a')*33 + 'b'
/// assert_eq!(hash_djb2(b"ab"), 5_863_208);
/// ```
#[inline]
pub fn hash_djb2(key: &[u8]) -> u64 {
    let mut hash = DJB2_SEED;
    for &byte in key {
        // (hash << 5) + hash == hash * 33, wrapping mod 2^64
        hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte));
    }
    hash
}

/// Map a key to a bucket index in `[0, capacity)`.
///
/// # Arguments
///
/// * `key` - The key bytes
/// * `capacity` - Number of buckets, must be non-zero
///
/// # Panics
///
/// Panics if `capacity` is zero. [`SortedTable`](crate::SortedTable)
/// rejects zero capacities at construction, so table internals never hit
/// this path.
#[inline]
pub fn bucket_index(key: &[u8], capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket capacity must be non-zero");
    (hash_djb2(key) % capacity as u64) as usize
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        assert_eq!(hash_djb2(b""), DJB2_SEED);
    }

    #[test]
    fn test_known_values() {
        // Hand-computed: 5381*33 + 97 = 177670
        assert_eq!(hash_djb2(b"a"), 177_670);
        // 177670*33 + 98 = 5863208
        assert_eq!(hash_djb2(b"ab"), 5_863_208);
    }

    #[test]
    fn test_deterministic() {
        let key = b"deterministic";
        assert_eq!(hash_djb2(key), hash_djb2(key));
    }

    #[test]
    fn test_distinct_keys_distinct_hashes() {
        // Not a guarantee in general, but these classics must not collide
        assert_ne!(hash_djb2(b"apple"), hash_djb2(b"banana"));
        assert_ne!(hash_djb2(b"banana"), hash_djb2(b"cherry"));
    }

    #[test]
    fn test_long_key_wraps() {
        // A long input overflows 64 bits many times over; the fold must
        // wrap rather than panic
        let key = vec![0xFFu8; 4096];
        let _ = hash_djb2(&key);
    }

    #[test]
    fn test_bucket_index_range() {
        for capacity in [1usize, 2, 7, 64, 1024] {
            for key in [&b"a"[..], b"banana", b"zzz", b"0"] {
                assert!(bucket_index(key, capacity) < capacity);
            }
        }
    }

    #[test]
    fn test_bucket_index_capacity_one() {
        // Everything collides into the single bucket
        assert_eq!(bucket_index(b"apple", 1), 0);
        assert_eq!(bucket_index(b"banana", 1), 0);
    }
}
