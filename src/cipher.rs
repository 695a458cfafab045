//! The Serpent block cipher: trait seam, byte/word conversion, and the
//! encryption/decryption round drivers.
//!
//! Serpent's key schedule is comparatively expensive to compute and, unlike
//! AES's, is meant to be a value the caller owns and reuses across many
//! blocks — sharing it behind `&Serpent`
//! rather than recomputing it on every call. That rules out the teacher's
//! [`BlockCipher`]-style traits, which hand the key to `encrypt`/`decrypt` on
//! every call (fine when the schedule is nearly free, as AES's is). Instead
//! this module generalizes that trait seam to a "construct once from a key,
//! encrypt or decrypt many blocks without resupplying it" shape, the same
//! split used by the `KeyInit` / `BlockEncrypt` / `BlockDecrypt` traits in
//! the RustCrypto `cipher` crate ecosystem.

use {
    crate::{error::Error, key_schedule::KeySchedule, lt, sbox, UserKey},
    std::fmt,
};

/// A block cipher over a fixed-size block.
pub trait BlockCipher {
    /// The fixed-size block this cipher operates on.
    type Block;
}

/// Construct a cipher instance from key material, once, ahead of any
/// encrypt/decrypt calls.
pub trait KeyInit: Sized {
    /// The key type accepted by [`KeyInit::new`].
    type Key;
    /// The error produced when `Key` doesn't describe a valid key.
    type Err;

    /// Expand `key` into a cipher instance ready to encrypt and decrypt.
    fn new(key: Self::Key) -> Result<Self, Self::Err>;
}

/// The encryption half of a [`BlockCipher`] whose key is already baked in by
/// [`KeyInit::new`].
pub trait BlockEncrypt: BlockCipher {
    /// Encrypt one block.
    fn encrypt_block(&self, block: Self::Block) -> Self::Block;
}

/// The decryption half of a [`BlockCipher`] whose key is already baked in by
/// [`KeyInit::new`].
pub trait BlockDecrypt: BlockCipher {
    /// Decrypt one block.
    fn decrypt_block(&self, block: Self::Block) -> Self::Block;
}

/// The Serpent block cipher, keyed with a [`KeySchedule`].
///
/// `Serpent` is cheap to construct from an existing [`KeySchedule`] (it just
/// stores it) and expensive to construct from a raw key via [`KeyInit::new`]
/// or [`Serpent::new_from_bytes`] (that's where the 33-subkey expansion
/// happens). Once built, `&Serpent` is `Send + Sync` and may be shared freely
/// — encryption and decryption never mutate it.
pub struct Serpent {
    schedule: KeySchedule,
}

impl Serpent {
    /// Build a cipher directly from an already-expanded [`KeySchedule`].
    pub fn from_schedule(schedule: KeySchedule) -> Self {
        Serpent { schedule }
    }

    /// Convenience constructor: validate `key_len_bits`, expand the
    /// schedule, and build a cipher in one call. Equivalent to
    /// `UserKey::new` followed by `KeySchedule::new`.
    pub fn new_from_bytes(key_bytes: &[u8], key_len_bits: u32) -> Result<Self, Error> {
        let key = UserKey::new(key_bytes, key_len_bits)?;
        Ok(Serpent::from_schedule(KeySchedule::new(&key)))
    }
}

impl fmt::Debug for Serpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serpent").finish_non_exhaustive()
    }
}

impl BlockCipher for Serpent {
    type Block = [u8; 16];
}

impl KeyInit for Serpent {
    type Key = UserKey;
    type Err = Error;

    fn new(key: UserKey) -> Result<Self, Error> {
        Ok(Serpent::from_schedule(KeySchedule::new(&key)))
    }
}

impl BlockEncrypt for Serpent {
    fn encrypt_block(&self, block: [u8; 16]) -> [u8; 16] {
        let (a, b, c, d) = block_to_words(&block);
        let (a, b, c, d) = encrypt_words(&self.schedule, a, b, c, d);
        words_to_block(a, b, c, d)
    }
}

impl BlockDecrypt for Serpent {
    fn decrypt_block(&self, block: [u8; 16]) -> [u8; 16] {
        let (a, b, c, d) = block_to_words(&block);
        let (a, b, c, d) = decrypt_words(&self.schedule, a, b, c, d);
        words_to_block(a, b, c, d)
    }
}

/// Load a 16-byte block into the four internal words, using the "block
/// reverse" convention described in [the module-level docs](crate::doc::serpent):
/// word `a` is the last four bytes, loaded big-endian, down to word `d`,
/// the first four bytes.
#[inline]
fn block_to_words(block: &[u8; 16]) -> (u32, u32, u32, u32) {
    let word = |i: usize| u32::from_be_bytes([block[i], block[i + 1], block[i + 2], block[i + 3]]);
    (word(12), word(8), word(4), word(0))
}

/// The exact inverse of [`block_to_words`].
#[inline]
fn words_to_block(a: u32, b: u32, c: u32, d: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[12..16].copy_from_slice(&a.to_be_bytes());
    block[8..12].copy_from_slice(&b.to_be_bytes());
    block[4..8].copy_from_slice(&c.to_be_bytes());
    block[0..4].copy_from_slice(&d.to_be_bytes());
    block
}

/// The encryption round driver: 31 rounds (`r = 0..=30`) of
/// `k_xor ∘ Sb ∘ L`, followed by a terminal round (`r = 31`) that replaces
/// `L` with a final whitening XOR against `K32`.
#[inline]
fn encrypt_words(
    schedule: &KeySchedule,
    mut a: u32,
    mut b: u32,
    mut c: u32,
    mut d: u32,
) -> (u32, u32, u32, u32) {
    for r in 0..=30usize {
        let [ka, kb, kc, kd] = schedule.subkey(r);
        let (a1, b1, c1, d1) = (a ^ ka, b ^ kb, c ^ kc, d ^ kd);
        let (a2, b2, c2, d2) = sbox::apply(r % 8, a1, b1, c1, d1);
        (a, b, c, d) = lt::l(a2, b2, c2, d2);
    }

    let [ka, kb, kc, kd] = schedule.subkey(31);
    let (a1, b1, c1, d1) = (a ^ ka, b ^ kb, c ^ kc, d ^ kd);
    let (a2, b2, c2, d2) = sbox::apply(7, a1, b1, c1, d1);
    let [ka32, kb32, kc32, kd32] = schedule.subkey(32);
    (a2 ^ ka32, b2 ^ kb32, c2 ^ kc32, d2 ^ kd32)
}

/// The decryption round driver: the exact inverse of
/// [`encrypt_words`].
#[inline]
fn decrypt_words(
    schedule: &KeySchedule,
    mut a: u32,
    mut b: u32,
    mut c: u32,
    mut d: u32,
) -> (u32, u32, u32, u32) {
    // Undo the terminal round: un-whiten with K32, then invert Sb7.
    let [ka32, kb32, kc32, kd32] = schedule.subkey(32);
    let (a1, b1, c1, d1) = (a ^ ka32, b ^ kb32, c ^ kc32, d ^ kd32);
    let (a2, b2, c2, d2) = sbox::apply_inv(7, a1, b1, c1, d1);
    let [ka31, kb31, kc31, kd31] = schedule.subkey(31);
    (a, b, c, d) = (a2 ^ ka31, b2 ^ kb31, c2 ^ kc31, d2 ^ kd31);

    for r in (0..=30usize).rev() {
        let (a1, b1, c1, d1) = lt::inv_l(a, b, c, d);
        let (a2, b2, c2, d2) = sbox::apply_inv(r % 8, a1, b1, c1, d1);
        let [ka, kb, kc, kd] = schedule.subkey(r);
        (a, b, c, d) = (a2 ^ ka, b2 ^ kb, c2 ^ kc, d2 ^ kd);
    }
    (a, b, c, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_conversion_round_trips() {
        let block: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ];
        let (a, b, c, d) = block_to_words(&block);
        assert_eq!(words_to_block(a, b, c, d), block);
    }

    #[test]
    fn block_reverse_convention_matches_word_layout() {
        // a is loaded from the *last* four bytes, big-endian.
        let mut block = [0u8; 16];
        block[12..16].copy_from_slice(&0x0102_0304u32.to_be_bytes());
        let (a, _b, _c, _d) = block_to_words(&block);
        assert_eq!(a, 0x0102_0304);
    }

    #[test]
    fn encrypt_then_decrypt_is_identity() {
        let cipher = Serpent::new_from_bytes(&[0u8; 32], 256).unwrap();
        let plaintext = [0x42u8; 16];
        let ciphertext = cipher.encrypt_block(plaintext);
        assert_eq!(cipher.decrypt_block(ciphertext), plaintext);
    }

    #[test]
    fn encryption_is_deterministic() {
        let cipher = Serpent::new_from_bytes(b"0123456789abcdef", 128).unwrap();
        let block = [7u8; 16];
        assert_eq!(cipher.encrypt_block(block), cipher.encrypt_block(block));
    }
}
