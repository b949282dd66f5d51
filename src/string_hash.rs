//! Polynomial key hash.
//!
//! Folds the key's bytes into a `u64` with a fixed-seed polynomial
//! accumulator: multiply the running code by one odd prime, XOR in the byte
//! scaled by a second odd prime. The result depends on the key bytes only, so
//! a key maps to the same bucket for a given capacity across lookups and
//! across a rehash pass. Not a defense against adversarial keys; collision
//! chains absorb the damage.

const HASH_SEED: u64 = 4079;
const STEP_PRIME: u64 = 439;
const BYTE_PRIME: u64 = 829;

pub(crate) fn hash_key(key: &str) -> u64 {
    let mut code = HASH_SEED;
    for byte in key.bytes() {
        code = code.wrapping_mul(STEP_PRIME) ^ (u64::from(byte) * BYTE_PRIME);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::{hash_key, HASH_SEED};

    #[test]
    fn empty_key_hashes_to_seed() {
        assert_eq!(hash_key(""), HASH_SEED);
    }

    #[test]
    fn deterministic_per_key() {
        for key in ["a", "abc", "clave", "a slightly longer key"] {
            assert_eq!(hash_key(key), hash_key(key));
        }
    }

    #[test]
    fn order_of_bytes_matters() {
        assert_ne!(hash_key("ab"), hash_key("ba"));
        assert_ne!(hash_key("abc"), hash_key("cba"));
    }

    /// Invariant: short distinct keys spread over a small prime modulus rather
    /// than piling into one bucket.
    #[test]
    fn small_keys_spread_over_buckets() {
        let capacity = 7u64;
        let mut hit = [false; 7];
        for key in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"] {
            hit[(hash_key(key) % capacity) as usize] = true;
        }
        assert!(hit.iter().filter(|&&h| h).count() >= 3);
    }
}
