//! Keccak-256 sponge: absorb, pad, squeeze.
use crate::permute::State;

/// Sponge rate in bytes: (1600 - 2 * 256) / 8.
///
/// The 64 bytes of state past the rate are the capacity and are never
/// directly absorbed into or read from.
pub(crate) const RATE: usize = 136;

/// Digest length in bytes.
pub(crate) const DIGEST_LEN: usize = 32;

/// Domain separator and first padding bit. Pre-standardization Keccak uses
/// 0x01, not SHA-3's 0x06.
const DOMAIN_SEPARATOR: u8 = 0x01;

/// Final 1 bit of the pad10*1 multi-rate padding.
const PAD_END: u8 = 0x80;

/// XOR `data` into the leading bytes of `state`, without permuting.
///
/// `data` is at most one rate block. Whole 8-byte lanes are merged with a
/// single XOR each; the remainder shorter than a lane is merged bytewise.
pub(crate) fn xor_in(state: &mut State, data: &[u8]) {
    debug_assert!(data.len() <= RATE);
    let (lanes, rest) = data.as_chunks::<8>();
    for (state_lane, lane) in state.lanes_mut().iter_mut().zip(lanes) {
        // XORing the raw lane bits is the bytewise XOR on either endianness.
        *state_lane ^= u64::from_ne_bytes(*lane);
    }
    let rest_start = lanes.len() * 8;
    for (state_byte, byte) in state.bytes_mut()[rest_start..].iter_mut().zip(rest) {
        *state_byte ^= byte;
    }
}

/// Apply the Keccak pad10*1 padding for a partial block of `len` bytes
/// already absorbed into `state`.
///
/// Two separate XORs: when `len == RATE - 1` both land on the same byte and
/// combine to 0x81.
pub(crate) fn pad(state: &mut State, len: usize) {
    debug_assert!(len < RATE);
    let bytes = state.bytes_mut();
    bytes[len] ^= DOMAIN_SEPARATOR;
    bytes[RATE - 1] ^= PAD_END;
}

/// First [`DIGEST_LEN`] bytes of the state, copied out.
pub(crate) fn digest(state: &State) -> [u8; DIGEST_LEN] {
    let mut out = [0; DIGEST_LEN];
    out.copy_from_slice(&state.bytes()[..DIGEST_LEN]);
    out
}

/// One-shot Keccak-256: absorb `data`, pad, permute, squeeze.
pub(crate) fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut state = State::new();
    let (blocks, tail) = data.as_chunks::<RATE>();
    for block in blocks {
        xor_in(&mut state, block);
        state.permute();
    }
    xor_in(&mut state, tail);
    pad(&mut state, tail.len());
    state.permute();
    digest(&state)
}
