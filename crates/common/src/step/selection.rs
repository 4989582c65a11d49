use thiserror::Error;

use crate::step::{network::Network, registry::NetworkRegistry};

/// Errors returned when resolving network flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// `-regtest` and `-testnet` were both given.
    #[error("-regtest and -testnet cannot be used together")]
    Conflicting,
}

/// The network selection flags of a command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkFlags {
    /// `-regtest` was given.
    pub regtest: bool,
    /// `-testnet` was given.
    pub testnet: bool,
}

impl NetworkFlags {
    /// Maps the flags to a network. No flag selects the main network.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Conflicting`] if both flags are set.
    pub fn resolve(self) -> Result<Network, SelectionError> {
        match (self.regtest, self.testnet) {
            (true, true) => Err(SelectionError::Conflicting),
            (true, false) => Ok(Network::Regtest),
            (false, true) => Ok(Network::Testnet),
            (false, false) => Ok(Network::Mainnet),
        }
    }
}

/// Resolves `flags` and makes the result active in `registry`.
///
/// On conflict the registry is left unchanged.
///
/// # Errors
///
/// Returns [`SelectionError::Conflicting`] if both flags are set.
pub fn select_from_flags(
    registry: &NetworkRegistry,
    flags: NetworkFlags,
) -> Result<Network, SelectionError> {
    let network = flags.resolve()?;
    registry.select(network);
    Ok(network)
}
