//! The bitsliced Serpent S-boxes.
//!
//! Serpent substitutes 4-bit nibbles through eight fixed S-boxes `S0..S7`
//! (and their inverses `iS0..iS7`). A 128-bit Serpent state is four 32-bit
//! words; viewed column-wise, bit position `p` of each of the four words
//! forms one 4-bit nibble, and all 32 positions hold an independent,
//! identically-substituted nibble. Rather than extracting and re-packing
//! those nibbles, each S-box is realized directly as a fixed Boolean
//! function of the four *words*, computed once for all 32 lanes at once —
//! this is bitslicing. Every function here uses only AND, OR, XOR and NOT,
//! so there are no data-dependent lookups or branches.
//!
//! The specific gate sequences below (16-18 gates each, with the named
//! intermediates `t1..t17` kept to mirror the register-pressure-minimizing
//! form the algorithm is usually published in) are a direct port of the
//! Gladman AES-submission realization of the Serpent S-boxes. Any other
//! straight-line realization computing the same truth table is equally
//! correct; this one is simply a well-known and heavily scrutinized choice.

/// S0: `3 8 15 1 10 6 5 11 14 13 4 2 7 0 9 12`.
#[inline]
pub fn s0(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = b ^ d;
    let t2 = !t1;
    let t3 = a | d;
    let t4 = b ^ c;
    let h = t3 ^ t4;
    let t6 = a ^ b;
    let t7 = a | t4;
    let t8 = c & t6;
    let t9 = t2 | t8;
    let e = t7 ^ t9;
    let t11 = a ^ h;
    let t12 = t1 & t6;
    let t13 = e ^ t11;
    let f = t12 ^ t13;
    let t15 = e | f;
    let t16 = t3 & t15;
    let g = b ^ t16;
    (e, f, g, h)
}

/// Inverse of [`s0`].
#[inline]
pub fn inv_s0(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a ^ d;
    let t2 = c ^ d;
    let t3 = !t2;
    let t4 = a | b;
    let g = t3 ^ t4;
    let t6 = b ^ t1;
    let t7 = c | t6;
    let t8 = a ^ t7;
    let t9 = t2 & t8;
    let f = t6 ^ t9;
    let t11 = !t8;
    let t12 = b & d;
    let t13 = f | t12;
    let h = t11 ^ t13;
    let t15 = t2 ^ t12;
    let t16 = f | h;
    let e = t15 ^ t16;
    (e, f, g, h)
}

/// S1: `15 12 2 7 9 0 5 10 1 11 14 8 6 13 3 4`.
#[inline]
pub fn s1(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a ^ d;
    let t2 = b ^ d;
    let t3 = a & b;
    let t4 = !c;
    let t5 = t2 ^ t3;
    let g = t4 ^ t5;
    let t7 = a ^ t2;
    let t8 = b | t4;
    let t9 = d | g;
    let t10 = t7 & t9;
    let f = t8 ^ t10;
    let t12 = c ^ d;
    let t13 = t1 | t2;
    let t14 = f ^ t12;
    let h = t13 ^ t14;
    let t16 = t1 | g;
    let t17 = t8 ^ t14;
    let e = t16 ^ t17;
    (e, f, g, h)
}

/// Inverse of [`s1`].
#[inline]
pub fn inv_s1(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a ^ d;
    let t2 = a & b;
    let t3 = b ^ c;
    let t4 = a ^ t3;
    let t5 = b | d;
    let h = t4 ^ t5;
    let t7 = c | t1;
    let t8 = b ^ t7;
    let t9 = t4 & t8;
    let f = t1 ^ t9;
    let t11 = !t2;
    let t12 = h & f;
    let t13 = t9 ^ t11;
    let g = t12 ^ t13;
    let t15 = a & d;
    let t16 = c ^ t13;
    let e = t15 ^ t16;
    (e, f, g, h)
}

/// S2: `8 6 7 9 3 12 10 15 13 1 14 4 0 11 5 2`.
#[inline]
pub fn s2(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !a;
    let t2 = b ^ d;
    let t3 = c & t1;
    let e = t2 ^ t3;
    let t5 = c ^ t1;
    let t6 = c ^ e;
    let t7 = b & t6;
    let h = t5 ^ t7;
    let t9 = d | t7;
    let t10 = e | t5;
    let t11 = t9 & t10;
    let g = a ^ t11;
    let t13 = d | t1;
    let t14 = t2 ^ h;
    let t15 = g ^ t13;
    let f = t14 ^ t15;
    (e, f, g, h)
}

/// Inverse of [`s2`].
#[inline]
pub fn inv_s2(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = b ^ d;
    let t2 = !t1;
    let t3 = a ^ c;
    let t4 = c ^ t1;
    let t5 = b & t4;
    let e = t3 ^ t5;
    let t7 = a | t2;
    let t8 = d ^ t7;
    let t9 = t3 | t8;
    let h = t1 ^ t9;
    let t11 = !t4;
    let t12 = e | h;
    let f = t11 ^ t12;
    let t14 = d & t11;
    let t15 = t3 ^ t12;
    let g = t14 ^ t15;
    (e, f, g, h)
}

/// S3: `0 15 11 8 12 9 6 3 13 1 2 4 10 7 5 14`.
#[inline]
pub fn s3(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a ^ c;
    let t2 = a | d;
    let t3 = a & b;
    let t4 = a & d;
    let t5 = b | t4;
    let t6 = t1 & t2;
    let f = t5 ^ t6;
    let t8 = b ^ d;
    let t9 = c | t3;
    let t10 = t6 ^ t8;
    let h = t9 ^ t10;
    let t12 = c ^ t3;
    let t13 = t2 & h;
    let g = t12 ^ t13;
    let t15 = !g;
    let t16 = t2 ^ t3;
    let t17 = f & t15;
    let e = t16 ^ t17;
    (e, f, g, h)
}

/// Inverse of [`s3`].
#[inline]
pub fn inv_s3(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = b ^ c;
    let t2 = b | c;
    let t3 = a ^ c;
    let t4 = t2 ^ t3;
    let t5 = d | t4;
    let e = t1 ^ t5;
    let t7 = a ^ d;
    let t8 = t1 | t5;
    let t9 = t2 ^ t7;
    let g = t8 ^ t9;
    let t11 = a & t4;
    let t12 = e | t9;
    let f = t11 ^ t12;
    let t14 = a & g;
    let t15 = t2 ^ t14;
    let t16 = e & t15;
    let h = t4 ^ t16;
    (e, f, g, h)
}

/// S4: `1 15 8 3 12 0 11 6 2 5 4 10 9 14 7 13`.
#[inline]
pub fn s4(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !a;
    let t2 = a ^ d;
    let t3 = a ^ b;
    let t4 = c ^ t1;
    let t5 = t2 | t3;
    let e = t4 ^ t5;
    let t7 = !e;
    let t8 = b | t7;
    let h = t2 ^ t8;
    let t10 = a & e;
    let t11 = b ^ h;
    let t12 = t8 & t11;
    let g = t10 ^ t12;
    let t14 = a | t7;
    let t15 = t3 ^ t14;
    let t16 = h & g;
    let f = t15 ^ t16;
    (e, f, g, h)
}

/// Inverse of [`s4`].
#[inline]
pub fn inv_s4(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = c ^ d;
    let t2 = c | d;
    let t3 = b ^ t2;
    let t4 = a & t3;
    let f = t1 ^ t4;
    let t6 = a ^ d;
    let t7 = b | d;
    let t8 = t6 & t7;
    let h = t3 ^ t8;
    let t10 = !a;
    let t11 = c ^ h;
    let t12 = t10 | t11;
    let e = t3 ^ t12;
    let t14 = c | t4;
    let t15 = t7 ^ t14;
    let t16 = h | t10;
    let g = t15 ^ t16;
    (e, f, g, h)
}

/// S5: `15 5 2 11 4 10 9 12 0 3 14 8 13 6 7 1`.
#[inline]
pub fn s5(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !a;
    let t2 = a ^ b;
    let t3 = a ^ d;
    let t4 = c ^ t1;
    let t5 = t2 | t3;
    let e = t4 ^ t5;
    let t7 = !d;
    let t8 = e & t7;
    let f = t2 ^ t8;
    let t10 = b | f;
    let t11 = c | e;
    let t12 = t7 ^ t10;
    let h = t11 ^ t12;
    let t14 = d | f;
    let t15 = t1 ^ t14;
    let t16 = e | h;
    let g = t15 ^ t16;
    (e, f, g, h)
}

/// Inverse of [`s5`].
#[inline]
pub fn inv_s5(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !c;
    let t2 = b & t1;
    let t3 = d ^ t2;
    let t4 = a & t3;
    let t5 = b ^ t1;
    let h = t4 ^ t5;
    let t7 = b | h;
    let t8 = a & t7;
    let f = t3 ^ t8;
    let t10 = a | d;
    let t11 = t1 ^ t7;
    let e = t10 ^ t11;
    let t13 = a ^ c;
    let t14 = b & t10;
    let t15 = t4 | t13;
    let g = t14 ^ t15;
    (e, f, g, h)
}

/// S6: `7 2 12 5 8 4 6 11 14 9 1 15 13 3 10 0`.
#[inline]
pub fn s6(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a ^ c;
    let t2 = b | d;
    let t3 = b ^ c;
    let t4 = !t3;
    let t5 = a & d;
    let f = t4 ^ t5;
    let t7 = b | c;
    let t8 = d ^ t1;
    let t9 = t7 & t8;
    let h = t2 ^ t9;
    let t11 = t1 & t7;
    let t12 = t4 ^ t8;
    let t13 = h & t11;
    let e = t12 ^ t13;
    let t15 = t3 ^ t11;
    let t16 = h | t15;
    let g = t12 ^ t16;
    (e, f, g, h)
}

/// Inverse of [`s6`].
#[inline]
pub fn inv_s6(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !c;
    let t2 = a ^ c;
    let t3 = b ^ d;
    let t4 = a | t1;
    let f = t3 ^ t4;
    let t6 = a | b;
    let t7 = b & t2;
    let t8 = f ^ t6;
    let t9 = t7 | t8;
    let e = c ^ t9;
    let t11 = !f;
    let t12 = d | t2;
    let t13 = t9 ^ t11;
    let h = t12 ^ t13;
    let t15 = b ^ t11;
    let t16 = e & h;
    let g = t15 ^ t16;
    (e, f, g, h)
}

/// S7: `1 13 15 0 14 8 2 11 7 4 12 10 9 3 5 6`.
#[inline]
pub fn s7(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = !c;
    let t2 = b ^ c;
    let t3 = b | t1;
    let t4 = d ^ t3;
    let t5 = a & t4;
    let h = t2 ^ t5;
    let t7 = a ^ d;
    let t8 = b ^ t5;
    let t9 = t2 | t8;
    let f = t7 ^ t9;
    let t11 = d & t3;
    let t12 = t5 ^ f;
    let t13 = h & t12;
    let g = t11 ^ t13;
    let t15 = t1 | t4;
    let t16 = t12 ^ g;
    let e = t15 ^ t16;
    (e, f, g, h)
}

/// Inverse of [`s7`].
#[inline]
pub fn inv_s7(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let t1 = a & b;
    let t2 = a | b;
    let t3 = c | t1;
    let t4 = d & t2;
    let h = t3 ^ t4;
    let t6 = !d;
    let t7 = b ^ t4;
    let t8 = h ^ t6;
    let t9 = t7 | t8;
    let f = a ^ t9;
    let t11 = c ^ t7;
    let t12 = d | f;
    let e = t11 ^ t12;
    let t14 = a & h;
    let t15 = t3 ^ f;
    let t16 = e ^ t14;
    let g = t15 ^ t16;
    (e, f, g, h)
}

/// Apply forward S-box `index` (0..=7) to a state.
///
/// Used by the round driver, where the S-box to apply at round `r` is
/// `index = r % 8`.
#[inline]
pub fn apply(index: usize, a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    match index {
        0 => s0(a, b, c, d),
        1 => s1(a, b, c, d),
        2 => s2(a, b, c, d),
        3 => s3(a, b, c, d),
        4 => s4(a, b, c, d),
        5 => s5(a, b, c, d),
        6 => s6(a, b, c, d),
        7 => s7(a, b, c, d),
        _ => unreachable!("S-box index out of range: {index}"),
    }
}

/// Apply inverse S-box `index` (0..=7) to a state.
#[inline]
pub fn apply_inv(index: usize, a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    match index {
        0 => inv_s0(a, b, c, d),
        1 => inv_s1(a, b, c, d),
        2 => inv_s2(a, b, c, d),
        3 => inv_s3(a, b, c, d),
        4 => inv_s4(a, b, c, d),
        5 => inv_s5(a, b, c, d),
        6 => inv_s6(a, b, c, d),
        7 => inv_s7(a, b, c, d),
        _ => unreachable!("S-box index out of range: {index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The canonical Serpent S-box lookup tables, `S0..S7`, as published by
    /// Anderson, Biham and Knudsen. Each entry is the 4-bit output nibble for
    /// input `v`.
    const LOOKUP: [[u8; 16]; 8] = [
        [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
        [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
        [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
        [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
        [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
        [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
        [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
        [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
    ];

    /// Broadcast each bit of the nibble `v` across a full 32-bit lane so a
    /// single bitsliced call exercises all 32 lanes with the same nibble,
    /// letting us read the result back out of any one bit.
    fn lanes(v: u8) -> (u32, u32, u32, u32) {
        let bit = |n: u8| if v & (1 << n) != 0 { u32::MAX } else { 0 };
        (bit(0), bit(1), bit(2), bit(3))
    }

    fn nibble(e: u32, f: u32, g: u32, h: u32) -> u8 {
        (e & 1) as u8 | (((f & 1) as u8) << 1) | (((g & 1) as u8) << 2) | (((h & 1) as u8) << 3)
    }

    #[test]
    fn forward_matches_published_tables() {
        for (k, table) in LOOKUP.iter().enumerate() {
            for v in 0u8..16 {
                let (a, b, c, d) = lanes(v);
                let (e, f, g, h) = apply(k, a, b, c, d);
                assert_eq!(
                    nibble(e, f, g, h),
                    table[v as usize],
                    "S{k} mismatch for input {v}"
                );
            }
        }
    }

    #[test]
    fn inverse_undoes_forward_for_every_sbox_and_input() {
        for k in 0..8 {
            for v in 0u8..16 {
                let (a, b, c, d) = lanes(v);
                let (e, f, g, h) = apply(k, a, b, c, d);
                let (a2, b2, c2, d2) = apply_inv(k, e, f, g, h);
                assert_eq!((a2, b2, c2, d2), (a, b, c, d), "iS{k}(S{k}(.)) failed for {v}");
            }
        }
    }

    #[test]
    fn full_width_involution_chain() {
        // Exercise full 32-bit-wide, non-uniform lanes too, not just the
        // broadcast pattern used above.
        let inputs = [
            (0x1234_5678u32, 0x9abc_def0u32, 0xdead_beefu32, 0xcafe_babeu32),
            (0u32, 0u32, 0u32, 0u32),
            (u32::MAX, u32::MAX, u32::MAX, u32::MAX),
            (0x5555_5555, 0xaaaa_aaaa, 0x0f0f_0f0f, 0xf0f0_f0f0),
        ];
        for k in 0..8 {
            for &(a, b, c, d) in &inputs {
                let (e, f, g, h) = apply(k, a, b, c, d);
                assert_eq!(apply_inv(k, e, f, g, h), (a, b, c, d));
            }
        }
    }
}
