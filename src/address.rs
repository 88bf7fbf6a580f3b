//! Address facing to the users. Its `encode` form is what users share to
//! receive coins (mining or payment address).
//!
//! The crypto address inside is produced and interpreted by the underlying
//! crypto scheme only. This layer adds the network id and, in the text form,
//! a checksum to catch transcription errors.

use crate::validate;
use crate::error::AbelResult;
use crate::utils::{self, checksum, checksum_length};


/// Behaviour shared by all address variants. Binary form is
/// `net_id || crypto_address`, text form is `hex(binary) || hex(checksum)`.
pub trait AbelAddress: Sized {
    /// Size of the binary form in bytes.
    fn serialize_size(&self) -> usize;

    /// Bytes of `(net_id, crypto_address)`.
    fn serialize(&self) -> Vec<u8>;

    /// Parse bytes of `(net_id, crypto_address)` into an address.
    fn deserialize(serialized: &[u8]) -> AbelResult<Self>;

    /// Borrow the crypto address. It is read-only: the address owns its copy
    /// and the borrow cannot be used to change it.
    fn crypto_address(&self) -> &[u8];

    /// Check if the address belongs to the network `net_id`.
    fn is_for_net(&self, net_id: u8) -> bool;

    /// Hex of `(net_id, crypto_address, checksum)`, the user facing form.
    fn encode(&self) -> String {
        let serialized = self.serialize();
        let cs = checksum(&serialized);
        let mut addr_str = utils::to_hex(&serialized);
        addr_str.push_str(&utils::to_hex(&cs));
        addr_str
    }

    /// Parse hex of `(net_id, crypto_address, checksum)`. Nothing is built
    /// unless the length and the checksum are both correct.
    fn decode(addr_str: &str) -> AbelResult<Self> {
        let addr_bytes = utils::from_hex(addr_str)?;
        let checksum_len = checksum_length();

        validate!(
            addr_bytes.len() > 1 + checksum_len, MalformedInput,
            "abel-address {} has a wrong length", addr_str
        )?;

        let (serialized, cs) = addr_bytes.split_at(
            addr_bytes.len() - checksum_len
        );

        validate!(
            checksum(serialized).as_slice() == cs, ChecksumMismatch,
            "abel-address {} has a wrong check sum", addr_str
        )?;

        Self::deserialize(serialized)
    }

    /// Hex of `(net_id, crypto_address)` without checksum. Meant for logs and
    /// debugging, `decode` does not accept it.
    fn to_hex(&self) -> String {
        utils::to_hex(&self.serialize())
    }
}
