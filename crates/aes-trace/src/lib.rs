//! AES-128 with a round-by-round trace.
//!
//! This crate mirrors the FIPS-197 specification for 128-bit keys and provides:
//! - GF(2^8) arithmetic and a compile-time S-box.
//! - Key schedule for AES-128.
//! - Single-block encryption, plain or recording a snapshot after every
//!   SubBytes, ShiftRows, MixColumns and AddRoundKey step.
//! - Hex helpers for feeding blocks in and rendering states out.
//!
//! The implementation aims for clarity and inspectability rather than
//! constant-time guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod codec;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;
mod trace;

pub use crate::block::{state_to_matrix, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, expand_key};
pub use crate::error::{Error, Input, Result};
pub use crate::key::{Aes128Key, RoundKeys, RCON, ROUND_KEY_COUNT};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::{sbox, SBOX};
pub use crate::trace::{encrypt_with_trace, trace_block, Operation, Round, Step, Trace};
