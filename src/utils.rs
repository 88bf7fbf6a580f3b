use sha2::{Sha256, Digest};

use crate::error::AbelResult;


/// Length of the address checksum in bytes.
pub const CHECKSUM_LENGTH: usize = 32;

/// Checksum appended to the encoded address.
pub type Checksum = [u8; CHECKSUM_LENGTH];


/// Get double SHA-256 of a buffer. The double hash keeps the checksum
/// compatible with addresses already issued by the existing wallets.
pub fn checksum(buffer: &[u8]) -> Checksum {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    let first = hasher.finalize();

    let mut hasher = Sha256::new();
    hasher.update(first);
    hasher.finalize().into()
}


/// Get checksum length in bytes.
pub fn checksum_length() -> usize {
    CHECKSUM_LENGTH
}


/// Lowercase hex of a buffer.
pub fn to_hex(buffer: &[u8]) -> String {
    hex::encode(buffer)
}


/// Parse hex string into bytes.
pub fn from_hex(hex_str: &str) -> AbelResult<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}
