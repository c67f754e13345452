//! Block representation helpers.

/// Length of an AES block (and of an AES-128 key) in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes, laid out column-major: byte `i` sits at row `i % 4`,
/// column `i / 4`.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns the state as a 4×4 matrix indexed `[row][col]`.
pub fn state_to_matrix(block: &Block) -> [[u8; 4]; 4] {
    let mut matrix = [[0u8; 4]; 4];
    for (i, byte) in block.iter().enumerate() {
        matrix[i % 4][i / 4] = *byte;
    }
    matrix
}
