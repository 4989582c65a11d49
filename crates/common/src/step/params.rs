//! Per-network chain parameters.
//!
//! Main network values form the base layer. The test network applies a
//! [`ParamsDelta`] on top of it, and regtest applies its own delta on top of
//! the test network, so a value set in one layer is inherited by every layer
//! after it unless overridden.

use bitcoin::{Amount, BlockHash, TxMerkleNode};
use primitive_types::U256;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::step::{
    blockdata::genesis::{
        ForgeError, GenesisBlock, GenesisForge, GenesisSummary, GenesisTemplate, SearchConfig,
    },
    hashes::Hash,
    network::Network,
    p2p::Magic,
    pow::Target,
    seeds::{self, PeerAddress, SeedSpec},
};

/// Errors raised while building a parameter set.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The genesis block does not match its published constants.
    #[error("{network} genesis: {source}")]
    Genesis {
        /// Network being built.
        network: Network,
        /// Underlying failure.
        #[source]
        source: ForgeError,
    },
    /// A hex constant in the parameter tables is malformed.
    #[error("{network} {what}: {source}")]
    InvalidConstant {
        /// Network being built.
        network: Network,
        /// Which constant.
        what: &'static str,
        /// Underlying failure.
        #[source]
        source: hex::FromHexError,
    },
}

/// Kinds of base58 version prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// WIF private key.
    SecretKey,
    /// BIP32 extended public key.
    ExtPublicKey,
    /// BIP32 extended private key.
    ExtSecretKey,
}

/// Base58 version prefixes of a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address version byte.
    pub pubkey_address: u8,
    /// Pay-to-script-hash address version byte.
    pub script_address: u8,
    /// WIF private key version byte.
    pub secret_key: u8,
    /// BIP32 extended public key version.
    pub ext_public_key: [u8; 4],
    /// BIP32 extended private key version.
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    /// The prefix bytes for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => std::slice::from_ref(&self.script_address),
            Base58Type::SecretKey => std::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Timestamp of the main network genesis block.
const MAIN_GENESIS_TIME: u32 = 1470355200;

/// Proof-of-stake and monetary parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsensusTunables {
    /// Subsidy of a proof-of-work block.
    pub pow_reward: Amount,
    /// Blocks before a coinbase or coinstake output can be spent.
    pub coinbase_maturity: u32,
    /// Confirmations before an output may stake.
    pub stake_min_confirmations: u32,
    /// Seconds before an output may stake.
    pub stake_min_age: u32,
    /// Seconds between stake modifier recomputations.
    pub modifier_interval: u32,
    /// Yearly staking reward rate, as an amount per coin.
    pub stake_coin_year_reward: Amount,
    /// Height of the first proof-of-stake block.
    pub first_pos_block: u32,
    /// Target seconds between blocks.
    pub target_spacing: u32,
    /// Difficulty retarget window in seconds.
    pub target_timespan: u32,
    /// Minimum seconds between blocks.
    pub min_delay: u32,
    /// Upper bound on the money supply.
    pub max_money: Amount,
    /// Chain launch time. Set from the main genesis timestamp and inherited
    /// unchanged by the other networks.
    pub launch_time: u32,
}

impl ConsensusTunables {
    /// Main network values.
    pub const MAINNET: Self = Self {
        pow_reward: Amount::ZERO,
        coinbase_maturity: 120,
        stake_min_confirmations: 120,
        stake_min_age: 8 * 60 * 60, // 8 hours
        modifier_interval: 10 * 60,
        stake_coin_year_reward: Amount::from_sat(1_000_000), // 1% per year
        first_pos_block: 160,
        target_spacing: 60,
        target_timespan: 20 * 60,
        min_delay: 2,
        max_money: Amount::from_sat(150_000_000_000_000_000), // 1.5 billion coins
        launch_time: MAIN_GENESIS_TIME,
    };
}

/// Partial override of [`ConsensusTunables`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TunablesDelta {
    /// Overrides [`ConsensusTunables::pow_reward`].
    pub pow_reward: Option<Amount>,
    /// Overrides [`ConsensusTunables::coinbase_maturity`].
    pub coinbase_maturity: Option<u32>,
    /// Overrides [`ConsensusTunables::stake_min_confirmations`].
    pub stake_min_confirmations: Option<u32>,
    /// Overrides [`ConsensusTunables::stake_min_age`].
    pub stake_min_age: Option<u32>,
    /// Overrides [`ConsensusTunables::modifier_interval`].
    pub modifier_interval: Option<u32>,
    /// Overrides [`ConsensusTunables::stake_coin_year_reward`].
    pub stake_coin_year_reward: Option<Amount>,
    /// Overrides [`ConsensusTunables::first_pos_block`].
    pub first_pos_block: Option<u32>,
    /// Overrides [`ConsensusTunables::target_spacing`].
    pub target_spacing: Option<u32>,
    /// Overrides [`ConsensusTunables::target_timespan`].
    pub target_timespan: Option<u32>,
    /// Overrides [`ConsensusTunables::min_delay`].
    pub min_delay: Option<u32>,
    /// Overrides [`ConsensusTunables::max_money`].
    pub max_money: Option<Amount>,
    /// Overrides [`ConsensusTunables::launch_time`].
    pub launch_time: Option<u32>,
}

impl TunablesDelta {
    fn apply_to(&self, base: &mut ConsensusTunables) {
        merge(&mut base.pow_reward, self.pow_reward);
        merge(&mut base.coinbase_maturity, self.coinbase_maturity);
        merge(&mut base.stake_min_confirmations, self.stake_min_confirmations);
        merge(&mut base.stake_min_age, self.stake_min_age);
        merge(&mut base.modifier_interval, self.modifier_interval);
        merge(&mut base.stake_coin_year_reward, self.stake_coin_year_reward);
        merge(&mut base.first_pos_block, self.first_pos_block);
        merge(&mut base.target_spacing, self.target_spacing);
        merge(&mut base.target_timespan, self.target_timespan);
        merge(&mut base.min_delay, self.min_delay);
        merge(&mut base.max_money, self.max_money);
        merge(&mut base.launch_time, self.launch_time);
    }
}

/// Genesis inputs and published constants of one layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisLayer {
    /// Message embedded in the coinbase input.
    pub coinbase_message: &'static str,
    /// Constant pushed before the message.
    pub extra_nonce: i64,
    /// Coinbase transaction timestamp.
    pub tx_time: u32,
    /// Block version.
    pub version: i32,
    /// Header timestamp.
    pub time: u32,
    /// Header nonce.
    pub nonce: u32,
    /// Published block hash, display (reversed) hex.
    pub hash: &'static str,
    /// Published merkle root, display (reversed) hex.
    pub merkle_root: &'static str,
    /// Run a nonce search when the built block does not hash to `hash`.
    pub search_on_mismatch: bool,
}

/// Partial override of [`GenesisLayer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenesisDelta {
    /// Overrides [`GenesisLayer::time`].
    pub time: Option<u32>,
    /// Overrides [`GenesisLayer::nonce`].
    pub nonce: Option<u32>,
    /// Overrides [`GenesisLayer::hash`].
    pub hash: Option<&'static str>,
    /// Overrides [`GenesisLayer::search_on_mismatch`].
    pub search_on_mismatch: Option<bool>,
}

/// A complete, not yet materialized parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamsLayer {
    /// Prefix of every wire message.
    pub message_start: Magic,
    /// P2P listening port.
    pub default_port: u16,
    /// RPC listening port.
    pub rpc_port: u16,
    /// Easiest proof-of-work target; also the genesis difficulty.
    pub pow_limit: Target,
    /// Easiest proof-of-stake target.
    pub pos_limit: Target,
    /// Alert signing key, uncompressed secp256k1, hex.
    pub alert_public_key: &'static str,
    /// Checkpoint signing key, uncompressed secp256k1, hex.
    pub checkpoint_public_key: &'static str,
    /// Base58 version prefixes.
    pub base58_prefixes: Base58Prefixes,
    /// Genesis inputs and published constants.
    pub genesis: GenesisLayer,
    /// Bootstrap peer table.
    pub seeds: &'static [SeedSpec],
    /// Proof-of-stake and monetary parameters.
    pub consensus: ConsensusTunables,
    /// Data directory name; empty on main.
    pub data_dir: &'static str,
    /// Whether the RPC server demands a password.
    pub require_rpc_password: bool,
}

/// Overrides applied on top of a [`ParamsLayer`]. `None` inherits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamsDelta {
    /// Overrides [`ParamsLayer::message_start`].
    pub message_start: Option<Magic>,
    /// Overrides [`ParamsLayer::default_port`].
    pub default_port: Option<u16>,
    /// Overrides [`ParamsLayer::rpc_port`].
    pub rpc_port: Option<u16>,
    /// Overrides [`ParamsLayer::pow_limit`].
    pub pow_limit: Option<Target>,
    /// Overrides [`ParamsLayer::pos_limit`].
    pub pos_limit: Option<Target>,
    /// Overrides [`ParamsLayer::alert_public_key`].
    pub alert_public_key: Option<&'static str>,
    /// Overrides [`ParamsLayer::checkpoint_public_key`].
    pub checkpoint_public_key: Option<&'static str>,
    /// Overrides [`ParamsLayer::base58_prefixes`].
    pub base58_prefixes: Option<Base58Prefixes>,
    /// Genesis overrides.
    pub genesis: GenesisDelta,
    /// Overrides [`ParamsLayer::seeds`].
    pub seeds: Option<&'static [SeedSpec]>,
    /// Consensus overrides.
    pub consensus: TunablesDelta,
    /// Overrides [`ParamsLayer::data_dir`].
    pub data_dir: Option<&'static str>,
    /// Overrides [`ParamsLayer::require_rpc_password`].
    pub require_rpc_password: Option<bool>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ParamsLayer {
    /// The main network layer.
    pub fn main() -> Self {
        Self {
            message_start: Magic::MAINNET,
            default_port: 17777,
            rpc_port: 17778,
            pow_limit: Target::new(U256::max_value() >> 16u32),
            pos_limit: Target::new(!U256::from(32u32)),
            alert_public_key: "04e3b77ed19efdc11ed11208b7785b79b20e81a759cc65f6e45919dadb960d45\
                               75dba105cbd121a43472976550cfc798562d3fc4a6f7641b93f817e1a15ae7adba",
            checkpoint_public_key: "04a3059fa6ff60fb459ad2b3703e294f55fa858dc57d35e89efdad5bb959\
                                    f311fc4fb2604881c0a1aa5fc47bf459d4a373a061ebddeba8255a99af74\
                                    8fe698ca08",
            base58_prefixes: Base58Prefixes {
                pubkey_address: 63,
                script_address: 95,
                secret_key: 163,
                ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
            },
            genesis: GenesisLayer {
                coinbase_message: "05/08/2016 00:00 Step by step",
                extra_nonce: 42,
                tx_time: MAIN_GENESIS_TIME,
                version: 1,
                time: MAIN_GENESIS_TIME,
                nonce: 5046295,
                hash: "4066aa83c029cad21d5c932fd0443e118afab6e914eec16d04d511d6512a79ca",
                merkle_root: "0702c16b56cc2c512663ce6e0629f41ffc21b3cbaa8e735f62403b21edeccd7b",
                search_on_mismatch: false,
            },
            seeds: seeds::MAIN_SEEDS,
            consensus: ConsensusTunables::MAINNET,
            data_dir: "",
            require_rpc_password: true,
        }
    }

    /// Overrides of the test network, on top of [`ParamsLayer::main`].
    pub fn test_delta() -> ParamsDelta {
        ParamsDelta {
            message_start: Some(Magic::TESTNET),
            default_port: Some(18777),
            rpc_port: Some(18778),
            pos_limit: Some(Target::new(!U256::from(20u32))),
            alert_public_key: Some(
                "04e14e1a52538e9f38311b2f518fe530440b7de50e292b5ddd0eadb89db8d515fc98\
                 55ef3fcb419111057073a7ae5b51290089b962d8bfbf293e319683b1cb9cee",
            ),
            checkpoint_public_key: Some(
                "04a4f10ca4156d8026990aed1fb70fd9511d73e341878e4d2f944fe9d9bb3dd262f3\
                 a62bdc7031157d19d9477b28d0d672ffdb54af232dbf0504707631f1768d94",
            ),
            base58_prefixes: Some(Base58Prefixes {
                pubkey_address: 125,
                script_address: 157,
                secret_key: 225,
                ext_public_key: [0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            }),
            genesis: GenesisDelta {
                nonce: Some(5791712),
                hash: Some("5817eb18c9765788d18cc47aaa34c8f93d8f6d8a1a4e52371b5f95087c087d20"),
                ..GenesisDelta::default()
            },
            seeds: Some(seeds::TEST_SEEDS),
            consensus: TunablesDelta {
                coinbase_maturity: Some(10),
                stake_min_confirmations: Some(10),
                max_money: Some(Amount::from_sat(200_000_000_000_000_000)), // 2 billion coins
                ..TunablesDelta::default()
            },
            data_dir: Some("testnet"),
            ..ParamsDelta::default()
        }
    }

    /// Overrides of regtest, on top of the test network.
    pub fn regtest_delta() -> ParamsDelta {
        ParamsDelta {
            message_start: Some(Magic::REGTEST),
            default_port: Some(47777),
            // RPC port and base58 prefixes differ from the published regtest,
            // which reuses the test network values.
            rpc_port: Some(47778),
            pow_limit: Some(Target::new(U256::max_value() >> 1u32)),
            base58_prefixes: Some(Base58Prefixes {
                pubkey_address: 111,
                script_address: 196,
                secret_key: 239,
                ext_public_key: [0x04, 0x35, 0x88, 0x1E],
                ext_secret_key: [0x04, 0x35, 0x84, 0xE4],
            }),
            genesis: GenesisDelta {
                time: Some(1470000000),
                nonce: Some(617537),
                hash: Some("cc37164ad5e4bb75b6c61b893d2831beb02f080cb813aba94e7bab84981c7086"),
                search_on_mismatch: Some(true),
            },
            data_dir: Some("regtest"),
            require_rpc_password: Some(false),
            ..ParamsDelta::default()
        }
    }

    /// The fully layered values for `network`.
    pub fn for_network(network: Network) -> Self {
        let mut layer = Self::main();
        if network != Network::Mainnet {
            layer.apply(&Self::test_delta());
        }
        if network == Network::Regtest {
            layer.apply(&Self::regtest_delta());
        }
        layer
    }

    /// Applies `delta` on top of this layer.
    pub fn apply(&mut self, delta: &ParamsDelta) {
        merge(&mut self.message_start, delta.message_start);
        merge(&mut self.default_port, delta.default_port);
        merge(&mut self.rpc_port, delta.rpc_port);
        merge(&mut self.pow_limit, delta.pow_limit);
        merge(&mut self.pos_limit, delta.pos_limit);
        merge(&mut self.alert_public_key, delta.alert_public_key);
        merge(&mut self.checkpoint_public_key, delta.checkpoint_public_key);
        merge(&mut self.base58_prefixes, delta.base58_prefixes);
        merge(&mut self.genesis.time, delta.genesis.time);
        merge(&mut self.genesis.nonce, delta.genesis.nonce);
        merge(&mut self.genesis.hash, delta.genesis.hash);
        merge(&mut self.genesis.search_on_mismatch, delta.genesis.search_on_mismatch);
        merge(&mut self.seeds, delta.seeds);
        delta.consensus.apply_to(&mut self.consensus);
        merge(&mut self.data_dir, delta.data_dir);
        merge(&mut self.require_rpc_password, delta.require_rpc_password);
    }

    /// The genesis template; bits are the compact form of `pow_limit`.
    pub fn genesis_template(&self) -> GenesisTemplate {
        GenesisTemplate {
            coinbase_message: self.genesis.coinbase_message,
            extra_nonce: self.genesis.extra_nonce,
            tx_time: self.genesis.tx_time,
            version: self.genesis.version,
            time: self.genesis.time,
            bits: self.pow_limit.to_compact(),
            nonce: self.genesis.nonce,
        }
    }
}

/// Decodes a display-order 32-byte hash.
fn decode_hash(hex_str: &str) -> Result<[u8; 32], hex::FromHexError> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut bytes)?;
    bytes.reverse();
    Ok(bytes)
}

/// The immutable parameters of one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainParams {
    network: Network,
    message_start: Magic,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    pos_limit: Target,
    alert_public_key: Vec<u8>,
    checkpoint_public_key: Vec<u8>,
    base58_prefixes: Base58Prefixes,
    genesis: GenesisBlock,
    genesis_hash: BlockHash,
    fixed_seeds: Vec<PeerAddress>,
    consensus: ConsensusTunables,
    data_dir: String,
    require_rpc_password: bool,
}

impl ChainParams {
    /// Builds and checks the parameter set of `network`.
    ///
    /// # Errors
    ///
    /// * [`ParamsError::Genesis`] - the genesis block does not hash to, or
    ///   carry the merkle root of, its published constants
    /// * [`ParamsError::InvalidConstant`] - a key or hash table entry is not
    ///   valid hex
    pub fn build(network: Network) -> Result<Self, ParamsError> {
        Self::from_layer(network, &ParamsLayer::for_network(network))
    }

    /// Builds a parameter set from explicit layered values.
    ///
    /// # Errors
    ///
    /// See [`ChainParams::build`].
    pub fn from_layer(network: Network, layer: &ParamsLayer) -> Result<Self, ParamsError> {
        let invalid = |what: &'static str| {
            move |source: hex::FromHexError| ParamsError::InvalidConstant { network, what, source }
        };
        let genesis_err = |source: ForgeError| ParamsError::Genesis { network, source };

        let expected_hash = BlockHash::from_byte_array(
            decode_hash(layer.genesis.hash).map_err(invalid("genesis hash"))?,
        );
        let expected_merkle = TxMerkleNode::from_byte_array(
            decode_hash(layer.genesis.merkle_root).map_err(invalid("genesis merkle root"))?,
        );
        let alert_public_key =
            hex::decode(layer.alert_public_key).map_err(invalid("alert public key"))?;
        let checkpoint_public_key =
            hex::decode(layer.checkpoint_public_key).map_err(invalid("checkpoint public key"))?;

        let block = layer.genesis_template().build().map_err(genesis_err)?;
        block.check_merkle_root(expected_merkle).map_err(genesis_err)?;
        let forged = GenesisForge::new()
            .finalize(
                block,
                expected_hash,
                layer.genesis.search_on_mismatch,
                &SearchConfig::default(),
            )
            .map_err(genesis_err)?;

        let fixed_seeds = seeds::fixed_seeds(layer.seeds);
        debug!(
            %network,
            genesis = %forged.hash,
            seeds = fixed_seeds.len(),
            "chain parameters built"
        );

        Ok(Self {
            network,
            message_start: layer.message_start,
            default_port: layer.default_port,
            rpc_port: layer.rpc_port,
            pow_limit: layer.pow_limit,
            pos_limit: layer.pos_limit,
            alert_public_key,
            checkpoint_public_key,
            base58_prefixes: layer.base58_prefixes,
            genesis: forged.block,
            genesis_hash: forged.hash,
            fixed_seeds,
            consensus: layer.consensus,
            data_dir: layer.data_dir.to_string(),
            require_rpc_password: layer.require_rpc_password,
        })
    }

    /// The network these parameters belong to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Prefix of every wire message.
    pub fn message_start(&self) -> Magic {
        self.message_start
    }

    /// P2P listening port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// RPC listening port.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest proof-of-work target allowed.
    pub fn pow_limit(&self) -> Target {
        self.pow_limit
    }

    /// Easiest proof-of-stake target allowed.
    pub fn pos_limit(&self) -> Target {
        self.pos_limit
    }

    /// Alert signing key.
    pub fn alert_public_key(&self) -> &[u8] {
        &self.alert_public_key
    }

    /// Checkpoint signing key.
    pub fn checkpoint_public_key(&self) -> &[u8] {
        &self.checkpoint_public_key
    }

    /// Base58 version prefix for `kind`.
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// The verified genesis block.
    pub fn genesis(&self) -> &GenesisBlock {
        &self.genesis
    }

    /// Identity hash of the genesis block.
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// Bootstrap peers, converted once at construction.
    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    /// Proof-of-stake and monetary parameters.
    pub fn consensus(&self) -> &ConsensusTunables {
        &self.consensus
    }

    /// Chain launch time, the main network genesis timestamp.
    pub fn launch_time(&self) -> u32 {
        self.consensus.launch_time
    }

    /// Data directory name relative to the node's root; empty on main.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// Whether the RPC server demands a password.
    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// A serializable view of these parameters.
    pub fn summary(&self) -> ParamsSummary {
        let c = &self.consensus;
        ParamsSummary {
            network: self.network,
            message_start: self.message_start.to_string(),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: self.pow_limit,
            pos_limit: self.pos_limit,
            alert_public_key: hex::encode(&self.alert_public_key),
            checkpoint_public_key: hex::encode(&self.checkpoint_public_key),
            base58_prefixes: self.base58_prefixes,
            genesis: self.genesis.summary(),
            fixed_seeds: self
                .fixed_seeds
                .iter()
                .map(|peer| peer.socket_addr().to_string())
                .collect(),
            pow_reward: c.pow_reward.to_sat(),
            coinbase_maturity: c.coinbase_maturity,
            stake_min_confirmations: c.stake_min_confirmations,
            stake_min_age: c.stake_min_age,
            modifier_interval: c.modifier_interval,
            stake_coin_year_reward: c.stake_coin_year_reward.to_sat(),
            first_pos_block: c.first_pos_block,
            target_spacing: c.target_spacing,
            target_timespan: c.target_timespan,
            min_delay: c.min_delay,
            max_money: c.max_money.to_sat(),
            launch_time: c.launch_time,
            data_dir: self.data_dir.clone(),
            require_rpc_password: self.require_rpc_password,
        }
    }
}

/// Display form of [`ChainParams`]. Amounts are in satoshis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParamsSummary {
    /// Network name.
    pub network: Network,
    /// Message start, hex.
    pub message_start: String,
    /// P2P listening port.
    pub default_port: u16,
    /// RPC listening port.
    pub rpc_port: u16,
    /// Proof-of-work limit.
    pub pow_limit: Target,
    /// Proof-of-stake limit.
    pub pos_limit: Target,
    /// Alert signing key, hex.
    pub alert_public_key: String,
    /// Checkpoint signing key, hex.
    pub checkpoint_public_key: String,
    /// Base58 version prefixes.
    pub base58_prefixes: Base58Prefixes,
    /// Genesis header.
    pub genesis: GenesisSummary,
    /// Bootstrap peers.
    pub fixed_seeds: Vec<String>,
    /// Proof-of-work subsidy.
    pub pow_reward: u64,
    /// Coinbase maturity in blocks.
    pub coinbase_maturity: u32,
    /// Confirmations before staking.
    pub stake_min_confirmations: u32,
    /// Seconds before staking.
    pub stake_min_age: u32,
    /// Stake modifier interval in seconds.
    pub modifier_interval: u32,
    /// Yearly stake reward per coin.
    pub stake_coin_year_reward: u64,
    /// First proof-of-stake height.
    pub first_pos_block: u32,
    /// Target block spacing in seconds.
    pub target_spacing: u32,
    /// Retarget window in seconds.
    pub target_timespan: u32,
    /// Minimum block delay in seconds.
    pub min_delay: u32,
    /// Money supply cap.
    pub max_money: u64,
    /// Chain launch time.
    pub launch_time: u32,
    /// Data directory name.
    pub data_dir: String,
    /// Whether RPC needs a password.
    pub require_rpc_password: bool,
}
