//! Keccak-256 Hashing
//!
//! This crate provides the Keccak-256 hash function: the pre-standardization
//! variant of SHA-3 used by Ethereum and other blockchain ecosystems. It
//! differs from NIST SHA3-256 only in the padding domain separator (`0x01`
//! instead of `0x06`), which makes the two produce unrelated digests.
//!
//! Both a one-shot function and a streaming hasher are provided. Neither
//! allocates: all working state is a fixed 200-byte sponge plus a partial
//! block buffer, held on the stack or inline in the hasher.
//!
//! # Limitations
//!
//! Output length, rate, and domain separation are fixed to the Keccak-256
//! parameters. The SHA-3 and SHAKE functions of FIPS 202, other output sizes,
//! and keyed modes are not provided.
//!
//! # Example Usage
//! ```
//! let digest: [u8; 32] = keccak256::sum256(b"hello");
//! let expected = "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8";
//! assert_eq!(expected, hex::encode(digest));
//!
//! // Streaming, any chunking produces the same digest.
//! let mut hasher = keccak256::Hasher::new();
//! hasher.update(b"he");
//! hasher.update(b"llo");
//! assert_eq!(digest, hasher.finalize());
//! ```

mod hasher;
mod permute;
mod sponge;

pub use crate::hasher::Hasher;

/// Keccak-256 hash of `data` in one call.
pub fn sum256(data: &[u8]) -> [u8; 32] {
    sponge::hash(data)
}

#[cfg(test)]
mod tests {
    use tiny_keccak::{Hasher as _, Keccak};

    use crate::sum256;

    fn reference(data: &[u8]) -> [u8; 32] {
        let mut keccak = Keccak::v256();
        keccak.update(data);
        let mut out = [0; 32];
        keccak.finalize(&mut out);
        out
    }

    #[test]
    fn can_hash() {
        let input = b"some input string";
        sum256(&input[..]);
    }

    #[cfg(not(miri))]
    #[test]
    fn compare_to_tiny_keccak() {
        // Go beyond two blocks
        for len in 0..300 {
            let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            assert_eq!(reference(&input), sum256(&input), "len {len} hash differs");
        }
    }
}
