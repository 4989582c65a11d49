//! The parameter set a process runs with.
//!
//! All three networks are built up front. Selecting one only swaps an index,
//! so a reader holding an earlier [`Arc`] keeps a complete, consistent set.

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

use tracing::info;

use crate::step::{
    network::Network,
    params::{ChainParams, ParamsError},
};

/// Holds every network's [`ChainParams`] and the one currently active.
#[derive(Debug)]
pub struct NetworkRegistry {
    main: Arc<ChainParams>,
    test: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    active: AtomicU8,
}

impl NetworkRegistry {
    /// Builds all parameter sets. The main network is active.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamsError`] raised while building a network.
    pub fn new() -> Result<Self, ParamsError> {
        Ok(Self {
            main: Arc::new(ChainParams::build(Network::Mainnet)?),
            test: Arc::new(ChainParams::build(Network::Testnet)?),
            regtest: Arc::new(ChainParams::build(Network::Regtest)?),
            active: AtomicU8::new(Network::Mainnet.index()),
        })
    }

    /// Makes `network` the active one.
    pub fn select(&self, network: Network) {
        let previous = self.active.swap(network.index(), Ordering::AcqRel);
        if previous != network.index() {
            info!(%network, "selected chain parameters");
        }
    }

    /// The active network.
    pub fn active_network(&self) -> Network {
        match Network::from_index(self.active.load(Ordering::Acquire)) {
            Some(network) => network,
            None => unreachable!("only valid network indices are stored"),
        }
    }

    /// The active parameter set.
    pub fn active(&self) -> Arc<ChainParams> {
        self.get(self.active_network())
    }

    /// The parameter set of any network, active or not.
    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        let params = match network {
            Network::Mainnet => &self.main,
            Network::Testnet => &self.test,
            Network::Regtest => &self.regtest,
        };
        Arc::clone(params)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_default_is_main() {
        let registry = NetworkRegistry::new().unwrap();
        assert_eq!(registry.active_network(), Network::Mainnet);
        assert_eq!(registry.active().network(), Network::Mainnet);
        assert_eq!(registry.active().default_port(), 17777);
    }

    #[test]
    fn test_select_switches_active() {
        let registry = NetworkRegistry::new().unwrap();
        registry.select(Network::Testnet);
        assert_eq!(registry.active().network(), Network::Testnet);
        assert_eq!(registry.active().data_dir(), "testnet");

        registry.select(Network::Regtest);
        assert_eq!(registry.active().network(), Network::Regtest);

        registry.select(Network::Mainnet);
        assert_eq!(registry.active().network(), Network::Mainnet);
    }

    #[test]
    fn test_get_ignores_selection() {
        let registry = NetworkRegistry::new().unwrap();
        registry.select(Network::Regtest);
        for network in Network::ALL {
            assert_eq!(registry.get(network).network(), network);
        }
        assert!(Arc::ptr_eq(&registry.get(Network::Regtest), &registry.active()));
    }

    #[test]
    fn test_held_params_survive_switch() {
        let registry = NetworkRegistry::new().unwrap();
        let held = registry.active();
        registry.select(Network::Testnet);
        assert_eq!(held.network(), Network::Mainnet);
        assert_eq!(held.message_start(), Network::Mainnet.magic());
    }

    #[test]
    fn test_concurrent_readers() {
        assert_send_sync::<NetworkRegistry>();

        let registry = Arc::new(NetworkRegistry::new().unwrap());
        registry.select(Network::Testnet);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let params = registry.active();
                        assert_eq!(params.message_start(), params.network().magic());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
