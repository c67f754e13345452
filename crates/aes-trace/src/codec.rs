//! Hex helpers for reading blocks and rendering states.

use crate::block::{state_to_matrix, Block, BLOCK_LEN};
use crate::error::{Error, Input, Result};

/// Strips every character that is not a hex digit, then lower-cases the rest.
pub fn sanitize_hex(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses a 16-byte block from hex, after [`sanitize_hex`].
///
/// Fails with [`Error::InvalidHexEncoding`] unless exactly 32 hex digits remain.
pub fn parse_block_hex(value: &str, input: Input) -> Result<Block> {
    let clean = sanitize_hex(value);
    if clean.len() != 2 * BLOCK_LEN {
        return Err(Error::InvalidHexEncoding {
            input,
            reason: format!(
                "expected {} hex characters, got {}",
                2 * BLOCK_LEN,
                clean.len()
            ),
        });
    }
    let mut block = [0u8; BLOCK_LEN];
    hex::decode_to_slice(&clean, &mut block).map_err(|e| Error::InvalidHexEncoding {
        input,
        reason: e.to_string(),
    })?;
    Ok(block)
}

/// Encodes `bytes` as lower-case hex, placing `sep` between bytes.
pub fn bytes_to_hex(bytes: &[u8], sep: &str) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Renders the state as four lines of space-separated hex bytes, one per row.
pub fn format_matrix(block: &Block) -> String {
    state_to_matrix(block)
        .iter()
        .map(|row| bytes_to_hex(row, " "))
        .collect::<Vec<_>>()
        .join("\n")
}
