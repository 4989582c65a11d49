use thiserror::Error;

use crate::step::{consensus::ConsensusEncode, network::Network};

/// Network magic bytes to identify the network a message was intended for.
///
/// The bytes are rarely used upper ASCII, not valid as UTF-8, and produce a
/// large 4-byte integer at any alignment.
#[derive(Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, ConsensusEncode)]
pub struct Magic([u8; 4]);

impl Magic {
    /// Step main network magic bytes ("STEP").
    pub const MAINNET: Self = Self([0x53, 0x54, 0x45, 0x50]);
    /// Step regression test network magic bytes.
    pub const REGTEST: Self = Self([0xf1, 0xe2, 0xd3, 0xc4]);
    /// Step test network magic bytes ("step").
    pub const TESTNET: Self = Self([0x73, 0x74, 0x65, 0x70]);

    /// Creates a magic value from raw bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Returns the magic bytes as a 4-byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<Network> for Magic {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => Magic::MAINNET,
            Network::Testnet => Magic::TESTNET,
            Network::Regtest => Magic::REGTEST,
        }
    }
}

impl std::fmt::Display for Magic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Errors that can occur when working with magic bytes.
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum MagicError {
    /// The magic bytes don't correspond to any known network.
    #[error("unknown network magic: {0}")]
    UnknownMagic(Magic),
}

impl TryFrom<Magic> for Network {
    type Error = MagicError;

    fn try_from(magic: Magic) -> Result<Self, Self::Error> {
        match magic {
            Magic::MAINNET => Ok(Network::Mainnet),
            Magic::TESTNET => Ok(Network::Testnet),
            Magic::REGTEST => Ok(Network::Regtest),
            _ => Err(MagicError::UnknownMagic(magic)),
        }
    }
}
