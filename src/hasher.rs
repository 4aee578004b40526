//! Streaming Keccak-256 hasher.
use crate::permute::State;
use crate::sponge::{self, DIGEST_LEN, RATE};

/// Streaming Keccak-256 hasher.
///
/// Accepts input in chunks of any size and alignment and produces the same
/// digest as [`sum256`] over the concatenated input. All storage is inline;
/// hashing never touches the heap.
///
/// [`finalize`] borrows the hasher immutably, so it can be called repeatedly
/// and interleaved with further [`update`] calls that continue the stream.
///
/// [`sum256`]: crate::sum256
/// [`finalize`]: Self::finalize
/// [`update`]: Self::update
#[derive(Clone)]
pub struct Hasher {
    state: State,
    /// Input carried over between calls, always less than one block.
    buf: [u8; RATE],
    /// Bytes of `buf` in use. Invariant: `pending < RATE` between calls; a
    /// filled buffer is absorbed immediately.
    pending: usize,
}

impl Hasher {
    /// A hasher with nothing absorbed.
    pub fn new() -> Self {
        Self {
            state: State::new(),
            buf: [0; RATE],
            pending: 0,
        }
    }

    /// Absorb `data` into the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.pending > 0 {
            // Top up the carried partial block first.
            let take = (RATE - self.pending).min(data.len());
            let (head, rest) = data.split_at(take);
            self.buf[self.pending..self.pending + take].copy_from_slice(head);
            self.pending += take;
            data = rest;

            if self.pending < RATE {
                // data ran out before the block filled
                debug_assert!(data.is_empty());
                return;
            }
            sponge::xor_in(&mut self.state, &self.buf);
            self.state.permute();
            self.pending = 0;
        }

        // Full blocks are absorbed straight from the input, bypassing buf.
        let (blocks, tail) = data.as_chunks::<RATE>();
        for block in blocks {
            sponge::xor_in(&mut self.state, block);
            self.state.permute();
        }

        if !tail.is_empty() {
            self.buf[..tail.len()].copy_from_slice(tail);
            self.pending = tail.len();
        }
    }

    /// Digest of everything absorbed so far.
    ///
    /// Pads and squeezes a copy of the state; the hasher itself is left
    /// untouched and further [`update`](Self::update) calls keep extending
    /// the original stream.
    pub fn finalize(&self) -> [u8; DIGEST_LEN] {
        let mut state = self.state;
        sponge::xor_in(&mut state, &self.buf[..self.pending]);
        sponge::pad(&mut state, self.pending);
        state.permute();
        sponge::digest(&state)
    }

    /// Return the hasher to its initial state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.pending = 0;
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum256;

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7) as u8).collect()
    }

    #[test]
    fn chunked_updates_match_one_shot() {
        let sizes: Vec<Vec<usize>> = vec![
            vec![0],
            vec![0, 0],
            vec![0, 30],
            vec![0, 30, 200],
            vec![30, 200],
            vec![RATE, 200],
            vec![RATE - 1, 1],
            vec![RATE + 1, RATE],
            vec![40, RATE - 40],
            vec![40, RATE - 40, 30],
            vec![40, RATE - 40, 30, 0, 20],
            vec![15, 20, 40, RATE - 15 - 20 - 40, 20],
            vec![2 * RATE, 2 * RATE, 50],
        ];
        for chunk_sizes in sizes {
            let whole = patterned(chunk_sizes.iter().sum());
            let mut hasher = Hasher::new();
            let mut fed = 0;
            for &size in &chunk_sizes {
                hasher.update(&whole[fed..fed + size]);
                fed += size;
            }
            assert_eq!(
                sum256(&whole),
                hasher.finalize(),
                "chunk sizes {chunk_sizes:?}"
            );
        }
    }

    #[test]
    fn byte_by_byte_matches_one_shot() {
        let data = patterned(2 * RATE + 3);
        let mut hasher = Hasher::new();
        for byte in &data {
            hasher.update(core::slice::from_ref(byte));
        }
        assert_eq!(sum256(&data), hasher.finalize());
    }

    #[test]
    fn finalize_does_not_disturb_the_stream() {
        let data = patterned(300);
        let (first, second) = data.split_at(157);

        let mut hasher = Hasher::new();
        hasher.update(first);
        let mid = hasher.finalize();
        assert_eq!(sum256(first), mid);
        assert_eq!(mid, hasher.finalize());

        // The stream continues from where update left off.
        hasher.update(second);
        assert_eq!(sum256(&data), hasher.finalize());
        assert_eq!(sum256(&data), hasher.finalize());
    }

    #[test]
    fn reset_is_a_fresh_hasher() {
        let mut hasher = Hasher::new();
        hasher.update(&patterned(500));
        hasher.reset();
        assert_eq!(Hasher::new().finalize(), hasher.finalize());

        hasher.update(b"hello");
        let mut fresh = Hasher::new();
        fresh.update(b"hello");
        assert_eq!(fresh.finalize(), hasher.finalize());
    }

    #[test]
    fn pending_never_reaches_rate() {
        let mut hasher = Hasher::new();
        for size in [1, RATE - 1, RATE, RATE + 1, 3 * RATE, 7] {
            hasher.update(&patterned(size));
            assert!(hasher.pending < RATE, "after update of {size}");
        }
    }
}
