//! Key types for AES-128.

use serde::Serialize;

use crate::block::{Block, BLOCK_LEN};
use crate::error::{Error, Input};
use crate::gf::xtime;

/// Number of round keys produced for AES-128 (Nr + 1).
pub const ROUND_KEY_COUNT: usize = 11;

/// Round constants `rc(j)` for `j` in `1..=10`; index 0 is unused.
pub const RCON: [u8; ROUND_KEY_COUNT] = build_rcon();

const fn build_rcon() -> [u8; ROUND_KEY_COUNT] {
    let mut rcon = [0u8; ROUND_KEY_COUNT];
    rcon[1] = 0x01;
    let mut j = 2;
    while j < ROUND_KEY_COUNT {
        rcon[j] = xtime(rcon[j - 1]);
        j += 1;
    }
    rcon
}

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Aes128Key(pub [u8; BLOCK_LEN]);

impl From<[u8; BLOCK_LEN]> for Aes128Key {
    fn from(value: [u8; BLOCK_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; BLOCK_LEN] = bytes.try_into().map_err(|_| Error::InvalidInputLength {
            input: Input::Key,
            len: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than 10.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Round keys as a slice.
    pub fn as_slice(&self) -> &[Block] {
        &self.0
    }
}
