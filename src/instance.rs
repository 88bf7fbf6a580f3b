//! Reference address for schemes where the coin address is the crypto address
//! itself: the coin address is a part of the instance address and the two map
//! one-to-one. One byte is used for the network id (see `Network`).

use crate::validate;
use crate::error::AbelResult;
use crate::network::Network;
use crate::address::AbelAddress;


/// Pair of network id and crypto address. The crypto address is an opaque
/// blob owned by the instance; it is copied in on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceAddress {
    net_id: u8,
    crypto_address: Vec<u8>,
}


impl InstanceAddress {
    /// Create a new address from the network id and the crypto address bytes.
    /// An empty crypto address can be held but will not survive a round trip
    /// through `deserialize` or `decode`.
    pub fn new(net_id: u8, crypto_address: &[u8]) -> Self {
        Self { net_id, crypto_address: crypto_address.to_vec() }
    }

    /// Create a new address for a known network.
    pub fn for_network(network: Network, crypto_address: &[u8]) -> Self {
        Self::new(network.net_id(), crypto_address)
    }

    pub fn net_id(&self) -> u8 {
        self.net_id
    }

    /// Resolve the network id into a known network.
    pub fn network(&self) -> AbelResult<Network> {
        Network::try_from(self.net_id)
    }

    /// Take the crypto address out of the instance.
    pub fn into_crypto_address(self) -> Vec<u8> {
        self.crypto_address
    }
}


impl AbelAddress for InstanceAddress {
    fn serialize_size(&self) -> usize {
        1 + self.crypto_address.len()
    }

    fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialize_size());
        bytes.push(self.net_id);
        bytes.extend_from_slice(&self.crypto_address);
        bytes
    }

    fn deserialize(serialized: &[u8]) -> AbelResult<Self> {
        validate!(
            serialized.len() > 1, MalformedInput,
            "serialized instance address has a wrong length {}",
            serialized.len()
        )?;
        Ok(Self::new(serialized[0], &serialized[1..]))
    }

    fn crypto_address(&self) -> &[u8] {
        &self.crypto_address
    }

    fn is_for_net(&self, net_id: u8) -> bool {
        self.net_id == net_id
    }
}


/// Shows the unchecksummed hex. Use `encode` for the form given to users.
impl std::fmt::Display for InstanceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}


#[cfg(feature = "serde")]
impl serde::Serialize for InstanceAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}


#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InstanceAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D)
            -> Result<Self, D::Error> {
        let addr_str = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&addr_str).map_err(serde::de::Error::custom)
    }
}
