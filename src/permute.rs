//! Keccak-f[1600] permutation state.
//!
//! The 1600-bit state is stored as 25 lanes of 64 bits. The byte view of the
//! state is kept in the little-endian wire order mandated by the sponge, on
//! every architecture: big-endian hosts swap lane bytes on entry to and exit
//! from the permutation, so absorption and squeezing always see wire-order
//! bytes.
//!
//! Two bit-identical permutation backends exist. The choice is fixed at
//! compile time and never changes for the lifetime of the process:
//!
//! - [`unrolled`]: all 24 rounds unrolled with lanes held in locals, used on
//!   64-bit targets.
//! - [`generic`]: loop-based transform following the FIPS 202 algorithm
//!   descriptions, used on other targets or when the `portable` feature is
//!   enabled.

#[cfg(any(test, not(target_pointer_width = "64"), feature = "portable"))]
mod generic;
#[cfg(any(test, all(target_pointer_width = "64", not(feature = "portable"))))]
mod unrolled;

/// Number of rounds of Keccak-f[1600].
pub(crate) const ROUNDS: usize = 24;

/// Lane of the state containing w = 64 bits.
pub(crate) type Lane = u64;

/// Round constants XORed into lane (0, 0) by the ι step, one per round.
///
/// Values from the Keccak reference (XKCP KeccakP-1600-reference.c).
const ROUND_CONSTANTS: [Lane; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// The 1600-bit sponge state: 25 lanes, 200 bytes.
#[derive(Clone, Copy)]
pub(crate) struct State([Lane; 25]);

impl State {
    /// All-zero state, the sponge's initial value.
    pub(crate) fn new() -> Self {
        Self([0; 25])
    }

    /// Wire-order byte view of the full state.
    pub(crate) fn bytes(&self) -> &[u8; 200] {
        // SAFETY:
        // - ptr is non-null
        // - ptr is correctly aligned (align(u8) < align(u64))
        // - [u64; 25] is exactly 200 valid, initialized bytes
        unsafe { &*self.0.as_ptr().cast() }
    }

    /// Mutable wire-order byte view of the full state.
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8; 200] {
        // SAFETY:
        // - ptr is non-null
        // - ptr is correctly aligned (align(u8) < align(u64))
        // - [u64; 25] is exactly 200 valid, initialized bytes
        unsafe { &mut *self.0.as_mut_ptr().cast() }
    }

    /// Mutable lane view, for whole-lane absorption.
    pub(crate) fn lanes_mut(&mut self) -> &mut [Lane; 25] {
        &mut self.0
    }

    /// Apply Keccak-f[1600] in place.
    pub(crate) fn permute(&mut self) {
        self.lanes_to_le();
        #[cfg(all(target_pointer_width = "64", not(feature = "portable")))]
        unrolled::keccak_f1600(&mut self.0);
        #[cfg(any(not(target_pointer_width = "64"), feature = "portable"))]
        generic::keccak_f1600(&mut self.0);
        self.lanes_to_le();
    }

    /// On big-endian arch, convert lanes between wire byte order and native
    /// lane values by swapping bytes.
    ///
    /// No-op on little endian architecture.
    fn lanes_to_le(&mut self) {
        #[cfg(target_endian = "big")]
        self.0.iter_mut().for_each(|l| *l = l.to_le());
    }
}
