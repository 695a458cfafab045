//! Serpent is a 128-bit block cipher submitted to the AES competition by
//! Ross Anderson, Eli Biham, and Lars Knudsen. It lost to Rijndael on
//! performance grounds but was, by the designers' own account, the more
//! conservative choice: 32 rounds against Rijndael's 10-14, chosen so that
//! even a large, then-unforeseen cryptanalytic advance would be unlikely to
//! break the full cipher.
//!
//! Serpent accepts keys of 0 to 256 bits and encrypts 128-bit blocks through
//! 32 rounds, each built from the same three kinds of operation:
//!
//! - **Key mixing**: XOR the round's subkey into the state. This is where
//!   the key enters every round, not just the first.
//! - **Substitution**: one of eight S-boxes, reused in a fixed rotating
//!   order across the rounds, each a 4-bit-to-4-bit lookup applied to every
//!   nibble of the state in parallel — achieved here not with a lookup
//!   table but with *bitslicing*: the S-box is compiled into a small
//!   circuit of AND/OR/XOR/NOT gates and run once per round across all 32
//!   bit-lanes of a word simultaneously. This achieves
//!   [confusion](crate::doc::serpent#confusion).
//! - **Linear transformation**: a fixed sequence of rotations and XORs
//!   mixing the cipher's four 32-bit words together, present in every round
//!   but the last. This achieves
//!   [diffusion](crate::doc::serpent#diffusion).
//!
//! # Confusion
//!
//! Confusion is achieved when the relationship between plaintext, key, and
//! ciphertext is non-linear and therefore unpredictable — not expressible
//! as a linear (or affine) equation over the input bits. Serpent's S-boxes
//! are chosen, among other criteria, to have no linear approximation that
//! holds with high probability, resisting linear cryptanalysis.
//!
//! # Diffusion
//!
//! Diffusion is achieved when a single input bit — in the plaintext or the
//! key — influences, after enough rounds, every bit of the ciphertext.
//! Serpent's linear transformation is designed so that a one-bit difference
//! spreads across all four 32-bit words within a handful of rounds; run
//! across the cipher's full 32 rounds this gives a wide security margin
//! over the minimum needed to saturate diffusion.
//!
//! # The "block reverse" convention
//!
//! Serpent's original reference implementation represents a 128-bit block
//! or key not as 16 bytes read left to right, but as four 32-bit words read
//! *last to first*, each loaded big-endian. Concretely: given 16 input
//! bytes `b0..b15`, the internal word `a` is `b12..b15` read big-endian,
//! `b` is `b8..b11`, `c` is `b4..b7`, and `d` is `b0..b3` — and the same
//! reversal applies, word by word, to key material longer than four bytes.
//! Every test vector published for Serpent is stated in terms of this
//! convention; getting it backwards produces a cipher that is internally
//! consistent (it still round-trips its own output) but disagrees with
//! every other implementation on the planet.
//!
//! # Specification
//!
//! The original AES submission document describes the cipher in full;
//! Gladman, Anderson, and Biham's public-domain reference implementation
//! resolves every byte-order and constant ambiguity left open by the prose.
