//! Literate documentation, built only when building docs (`#[cfg(doc)]`).
//!
//! These modules hold background explanation that doesn't belong on any one
//! function: the shape of the cipher, the AES-competition context it was
//! designed in, and the "block reverse" byte-order convention that trips up
//! every from-scratch implementation at least once.

pub mod serpent;
