//! Networks the reference address scheme knows about. The address itself keeps
//! the raw byte, so ids outside of this list still serialize and decode.

use crate::error::{Error, ErrorKind};


/// Known deployment networks with their one-byte id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Network {
    MainNet = 0x00,
    RegressionNet = 0x01,
    TestNet3 = 0x02,
    SimNet = 0x03,
}


impl Network {
    /// All known networks.
    pub const ALL: [Network; 4] = [
        Network::MainNet,
        Network::RegressionNet,
        Network::TestNet3,
        Network::SimNet,
    ];

    /// Get the id byte stored in addresses.
    pub fn net_id(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::MainNet => "mainnet",
            Network::RegressionNet => "regtest",
            Network::TestNet3 => "testnet3",
            Network::SimNet => "simnet",
        }
    }
}


impl TryFrom<u8> for Network {
    type Error = Error;

    fn try_from(net_id: u8) -> Result<Self, Self::Error> {
        Self::ALL.into_iter()
            .find(|network| network.net_id() == net_id)
            .ok_or_else(|| Error::new(
                ErrorKind::UnknownNetwork,
                format!("unknown net id 0x{:02x}", net_id)
            ))
    }
}


impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_id() {
        assert_eq!(Network::MainNet.net_id(), 0x00);
        assert_eq!(Network::RegressionNet.net_id(), 0x01);
        assert_eq!(Network::TestNet3.net_id(), 0x02);
        assert_eq!(Network::SimNet.net_id(), 0x03);
    }

    #[test]
    fn test_try_from() {
        for network in Network::ALL {
            assert_eq!(Network::try_from(network.net_id()).unwrap(), network);
        }

        let err = Network::try_from(0x04).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownNetwork);
        assert_eq!(err.to_string(), "unknown net id 0x04");
    }

    #[test]
    fn test_display() {
        assert_eq!(Network::MainNet.to_string(), "mainnet");
        assert_eq!(Network::SimNet.to_string(), "simnet");
    }
}
