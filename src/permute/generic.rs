//! Loop-based Keccak-f[1600] following the FIPS 202 algorithm descriptions.
//!
//! Structured after the XKCP `ref-64bits` reference implementation: each of
//! the five step mappings is its own pass over the lane array. Slower than the
//! unrolled backend but compact, and a readable cross-check for it.
#![allow(non_snake_case)]

use super::{Lane, ROUND_CONSTANTS, ROUNDS};

/// Lane index for coordinates `(x, y)`, both taken modulo 5.
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    // % ops are optimized out for in-range coordinates
    (x % 5) + 5 * (y % 5)
}

/// 3.2.1 Algorithm 1: θ(A)
///
/// XORs every lane with the parity of two neighbouring columns.
fn theta(A: &mut [Lane; 25]) {
    // Column parities, one lane per sheet.
    let mut C: [Lane; 5] = Default::default();
    for (x, Cx) in C.iter_mut().enumerate() {
        for y in 0..5 {
            *Cx ^= A[idx(x, y)];
        }
    }

    for x in 0..5 {
        // (x + 4) % 5 is (x - 1) % 5 without underflow
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[idx(x, y)] ^= D;
        }
    }
}

/// Table 2: rotation offsets modulo the lane width w = 64, in row-major order
/// starting at x = 0, y = 0.
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// 3.2.2 Algorithm 2: ρ(A)
///
/// Rotates each lane by a fixed per-coordinate offset.
fn rho(A: &mut [Lane; 25]) {
    for (lane, offset) in A.iter_mut().zip(RHO_OFFSETS) {
        *lane = lane.rotate_left(offset);
    }
}

/// 3.2.3 Algorithm 3: π(A)
///
/// Rearranges the lanes: (x, y) moves to (y, 2x + 3y).
fn pi(A: &mut [Lane; 25]) {
    let prev = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[idx(y, 2 * x + 3 * y)] = prev[idx(x, y)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// XORs each lane with a non-linear function of two other lanes in its row.
fn chi(A: &mut [Lane; 25]) {
    let mut row: [Lane; 5] = Default::default();

    for y in 0..5 {
        for (x, r) in row.iter_mut().enumerate() {
            *r = A[idx(x, y)] ^ (!A[idx(x + 1, y)] & A[idx(x + 2, y)]);
        }
        for (x, r) in row.into_iter().enumerate() {
            A[idx(x, y)] = r;
        }
    }
}

/// 3.2.5 Algorithm 6: ι(A, ir)
///
/// Mixes the round constant into lane (0, 0); no other lane is affected.
fn iota(A: &mut [Lane; 25], round: usize) {
    A[idx(0, 0)] ^= ROUND_CONSTANTS[round];
}

/// 3.3 Algorithm 7: KECCAK-p[b, nr](S), specialized to b = 1600, nr = 24.
pub(crate) fn keccak_f1600(lanes: &mut [Lane; 25]) {
    for round in 0..ROUNDS {
        theta(lanes);
        rho(lanes);
        pi(lanes);
        chi(lanes);
        iota(lanes, round);
    }
}
