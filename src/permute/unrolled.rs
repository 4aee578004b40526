//! Unrolled Keccak-f[1600] for 64-bit targets.
//!
//! The whole state lives in 25 locals for the duration of the 24 rounds, so
//! on register-rich targets the round functions compile down to straight-line
//! register arithmetic with a single load and store of the state array.
//! θ, ρ, π, χ and ι are fused into one round body; ρ and π are applied
//! together by writing each rotated lane directly to its permuted position.

use super::{Lane, ROUND_CONSTANTS};

pub(crate) fn keccak_f1600(lanes: &mut [Lane; 25]) {
    let [
        mut s0, mut s1, mut s2, mut s3, mut s4, mut s5, mut s6, mut s7, mut s8, mut s9, mut s10,
        mut s11, mut s12, mut s13, mut s14, mut s15, mut s16, mut s17, mut s18, mut s19, mut s20,
        mut s21, mut s22, mut s23, mut s24,
    ] = *lanes;

    for rc in ROUND_CONSTANTS {
        // θ: column parities and their mix into every lane
        let c0 = s0 ^ s5 ^ s10 ^ s15 ^ s20;
        let c1 = s1 ^ s6 ^ s11 ^ s16 ^ s21;
        let c2 = s2 ^ s7 ^ s12 ^ s17 ^ s22;
        let c3 = s3 ^ s8 ^ s13 ^ s18 ^ s23;
        let c4 = s4 ^ s9 ^ s14 ^ s19 ^ s24;

        let d0 = c4 ^ c1.rotate_left(1);
        let d1 = c0 ^ c2.rotate_left(1);
        let d2 = c1 ^ c3.rotate_left(1);
        let d3 = c2 ^ c4.rotate_left(1);
        let d4 = c3 ^ c0.rotate_left(1);

        s0 ^= d0;
        s5 ^= d0;
        s10 ^= d0;
        s15 ^= d0;
        s20 ^= d0;

        s1 ^= d1;
        s6 ^= d1;
        s11 ^= d1;
        s16 ^= d1;
        s21 ^= d1;

        s2 ^= d2;
        s7 ^= d2;
        s12 ^= d2;
        s17 ^= d2;
        s22 ^= d2;

        s3 ^= d3;
        s8 ^= d3;
        s13 ^= d3;
        s18 ^= d3;
        s23 ^= d3;

        s4 ^= d4;
        s9 ^= d4;
        s14 ^= d4;
        s19 ^= d4;
        s24 ^= d4;

        // ρ + π: rotate each lane and place it at its permuted position
        let t0 = s0;
        let t10 = s1.rotate_left(1);
        let t20 = s2.rotate_left(62);
        let t5 = s3.rotate_left(28);
        let t15 = s4.rotate_left(27);

        let t16 = s5.rotate_left(36);
        let t1 = s6.rotate_left(44);
        let t11 = s7.rotate_left(6);
        let t21 = s8.rotate_left(55);
        let t6 = s9.rotate_left(20);

        let t7 = s10.rotate_left(3);
        let t17 = s11.rotate_left(10);
        let t2 = s12.rotate_left(43);
        let t12 = s13.rotate_left(25);
        let t22 = s14.rotate_left(39);

        let t23 = s15.rotate_left(41);
        let t8 = s16.rotate_left(45);
        let t18 = s17.rotate_left(15);
        let t3 = s18.rotate_left(21);
        let t13 = s19.rotate_left(8);

        let t14 = s20.rotate_left(18);
        let t24 = s21.rotate_left(2);
        let t9 = s22.rotate_left(61);
        let t19 = s23.rotate_left(56);
        let t4 = s24.rotate_left(14);

        // χ: row-wise non-linear mix
        s0 = t0 ^ (!t1 & t2);
        s1 = t1 ^ (!t2 & t3);
        s2 = t2 ^ (!t3 & t4);
        s3 = t3 ^ (!t4 & t0);
        s4 = t4 ^ (!t0 & t1);

        s5 = t5 ^ (!t6 & t7);
        s6 = t6 ^ (!t7 & t8);
        s7 = t7 ^ (!t8 & t9);
        s8 = t8 ^ (!t9 & t5);
        s9 = t9 ^ (!t5 & t6);

        s10 = t10 ^ (!t11 & t12);
        s11 = t11 ^ (!t12 & t13);
        s12 = t12 ^ (!t13 & t14);
        s13 = t13 ^ (!t14 & t10);
        s14 = t14 ^ (!t10 & t11);

        s15 = t15 ^ (!t16 & t17);
        s16 = t16 ^ (!t17 & t18);
        s17 = t17 ^ (!t18 & t19);
        s18 = t18 ^ (!t19 & t15);
        s19 = t19 ^ (!t15 & t16);

        s20 = t20 ^ (!t21 & t22);
        s21 = t21 ^ (!t22 & t23);
        s22 = t22 ^ (!t23 & t24);
        s23 = t23 ^ (!t24 & t20);
        s24 = t24 ^ (!t20 & t21);

        // ι
        s0 ^= rc;
    }

    *lanes = [
        s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15, s16, s17, s18, s19,
        s20, s21, s22, s23, s24,
    ];
}
