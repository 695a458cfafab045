//! An implementation of the Serpent block cipher: key schedule, bitsliced
//! S-boxes, linear transformation, and the 32-round encryption/decryption
//! drivers, as submitted to the AES competition by Anderson, Biham, and
//! Knudsen.
//!
//! ```
//! use serpent_cipher::{BlockDecrypt, BlockEncrypt, Serpent};
//!
//! let cipher = Serpent::new_from_bytes(b"an example very very secret key", 256).unwrap();
//! let plaintext = *b"0123456789abcdef";
//! let ciphertext = cipher.encrypt_block(plaintext);
//! assert_eq!(cipher.decrypt_block(ciphertext), plaintext);
//! ```

#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod cipher;
mod error;
mod key_schedule;
mod lt;
mod sbox;

pub use {
    cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, KeyInit, Serpent},
    error::Error,
    key_schedule::{KeySchedule, UserKey},
};
