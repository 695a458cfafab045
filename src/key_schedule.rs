//! `UserKey` and the Serpent key schedule (`SetKey`, §4.3 of the
//! specification).
//!
//! Serpent accepts any key from 0 to 256 bits. Short keys are padded to 256
//! bits with a single `1` bit followed by zeros (§4.3 step 2) before the same
//! expansion runs regardless of the original length. Expansion has two
//! stages: a linear PHI-constant recurrence produces 132 "prekey" words from
//! the (padded) key, then groups of four prekeys are passed through a fixed
//! rotating sequence of S-boxes to produce the 33 round subkeys `K0..K32`.

use {
    crate::{error::Error, sbox},
    docext::docext,
    std::fmt,
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// The golden-ratio constant used to decorrelate the prekey recurrence:
/// $$
/// \phi = \left\lfloor 2^{32} \times \frac{\sqrt{5} - 1}{2} \right\rfloor
/// $$
#[docext]
const PHI: u32 = 0x9E3779B9;

/// S-box used at key-schedule round `r`, indexed by `r % 8`.
const SBOX_SCHEDULE: [usize; 8] = [3, 2, 1, 0, 7, 6, 5, 4];

/// A validated, zero-padded user key of 0..256 bits.
///
/// `UserKey` is an intermediate value: it exists to let [`UserKey::new`]
/// reject an out-of-range bit length before any key-schedule work happens,
/// and to hold the padded key bytes between validation and expansion. The
/// bytes are zeroized on drop, same as [`KeySchedule`].
pub struct UserKey {
    /// Key bytes, zero-padded up to 32 bytes (256 bits). Only the first
    /// `ceil(bits / 8)` bytes were supplied by the caller.
    bytes: [u8; 32],
    bits: u32,
}

impl UserKey {
    /// Validate and store a user key of `bits` bits, given as the leading
    /// `ceil(bits / 8)` bytes of `bytes` (trailing bytes, and any bytes
    /// beyond the 32 needed for a 256-bit key, are ignored).
    ///
    /// Returns [`Error::InvalidKeyLength`] if `bits` exceeds 256.
    pub fn new(bytes: &[u8], bits: u32) -> Result<Self, Error> {
        if bits > 256 {
            return Err(Error::InvalidKeyLength { bits });
        }
        let mut buf = [0u8; 32];
        let n = bytes.len().min(32);
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(UserKey { bytes: buf, bits })
    }

    /// Build the eight 32-bit prekey words `w₋₈..w₋₁`: the padded key,
    /// loaded in the block-reversed convention (§6), with the short-key
    /// terminator bit set if `bits < 256` (§4.3 step 2).
    fn prekeys(&self) -> [u32; 8] {
        let lk = self.bits.div_ceil(32) as usize;
        let mut prekey = [0u32; 8];
        for i in 0..lk {
            // Word j (counting from the start of the key buffer) lands at
            // prekey position lk - 1 - j, loaded big-endian: the same
            // "block reverse" convention used for plaintext/ciphertext
            // blocks, generalized to a variable word count.
            let j = lk - 1 - i;
            let word = &self.bytes[4 * j..4 * j + 4];
            prekey[i] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        if self.bits < 256 {
            let i = (self.bits / 32) as usize;
            let m = 1u32 << (self.bits % 32);
            prekey[i] = (prekey[i] & (m - 1)) | m;
        }
        prekey
    }
}

impl Zeroize for UserKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.bits.zeroize();
    }
}

impl ZeroizeOnDrop for UserKey {}

impl Drop for UserKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserKey").field("bits", &self.bits).finish_non_exhaustive()
    }
}

/// The 33 round subkeys `K0..K32` derived from a [`UserKey`].
///
/// A `KeySchedule` is immutable once built and holds no reference to the
/// `UserKey` it was built from; it is a plain value that can be cloned,
/// shared behind `&KeySchedule` across threads, and held for the lifetime
/// of a connection or session without recomputing anything per call. Its
/// subkey words are zeroized on drop.
#[derive(Clone)]
pub struct KeySchedule {
    subkeys: [[u32; 4]; 33],
}

impl KeySchedule {
    /// Expand `key` into a full 33-subkey schedule (§4.3).
    pub fn new(key: &UserKey) -> Self {
        // Scratch buffer: positions 0..8 hold the padded prekeys w₋₈..w₋₁,
        // positions 8..140 hold w₀..w₁₃₁, overwritten in place by their
        // S-box-mixed subkey words once the recurrence below has produced
        // them. Zeroized on drop regardless of how this function returns.
        let mut buf = Zeroizing::new([0u32; 140]);
        buf[..8].copy_from_slice(&key.prekeys());

        for i in 0..132usize {
            let t = buf[i] ^ buf[i + 3] ^ buf[i + 5] ^ buf[i + 7] ^ PHI ^ (i as u32);
            buf[i + 8] = t.rotate_left(11);
        }

        let mut subkeys = [[0u32; 4]; 33];
        for r in 0..=32usize {
            let sbox_index = SBOX_SCHEDULE[r % 8];
            let base = 8 + 4 * r;
            let (a, b, c, d) = (buf[base], buf[base + 1], buf[base + 2], buf[base + 3]);
            let (e, f, g, h) = sbox::apply(sbox_index, a, b, c, d);
            subkeys[r] = [e, f, g, h];
        }

        KeySchedule { subkeys }
    }

    /// The four words of subkey `K_r`, `r` in `0..=32`.
    #[inline]
    pub(crate) fn subkey(&self, r: usize) -> [u32; 4] {
        self.subkeys[r]
    }
}

impl Zeroize for KeySchedule {
    fn zeroize(&mut self) {
        for subkey in &mut self.subkeys {
            subkey.zeroize();
        }
    }
}

impl ZeroizeOnDrop for KeySchedule {}

impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_key_length() {
        assert_eq!(UserKey::new(&[0u8; 32], 257).unwrap_err(), Error::InvalidKeyLength { bits: 257 });
    }

    #[test]
    fn accepts_boundary_key_length() {
        assert!(UserKey::new(&[0u8; 32], 256).is_ok());
        assert!(UserKey::new(&[], 0).is_ok());
    }

    #[test]
    fn schedule_is_deterministic() {
        let key = UserKey::new(b"0123456789abcdef", 128).unwrap();
        let a = KeySchedule::new(&key);
        let b = KeySchedule::new(&key);
        for r in 0..=32 {
            assert_eq!(a.subkey(r), b.subkey(r));
        }
    }

    #[test]
    fn short_key_terminator_lands_on_boundary() {
        // A key whose length is an exact multiple of 32 bits must place its
        // terminator bit at the *next* prekey word, per §9's boundary note.
        for &bits in &[32u32, 64, 96, 128, 160, 192, 224] {
            let key = UserKey::new(&[0u8; 32], bits).unwrap();
            let prekey = key.prekeys();
            let word_index = (bits / 32) as usize;
            assert_eq!(prekey[word_index], 1, "bits={bits}");
            if word_index > 0 {
                assert_eq!(prekey[word_index - 1], 0, "bits={bits}");
            }
        }
    }

    #[test]
    fn different_keys_produce_different_schedules() {
        let key_a = UserKey::new(&[0u8; 32], 256).unwrap();
        let key_b = UserKey::new(&[0xffu8; 32], 256).unwrap();
        let a = KeySchedule::new(&key_a);
        let b = KeySchedule::new(&key_b);
        assert_ne!(a.subkey(0), b.subkey(0));
    }
}
