//! Genesis block construction for the Step networks.
//!
//! A genesis block is built from a fixed [`GenesisTemplate`] and then
//! finalized by [`GenesisForge`]: the header's identity hash is compared with
//! the constant every node of the network has baked in. When they differ and
//! the caller allows it, a nonce search runs first; the comparison is the
//! final gate either way.

use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use bitcoin::{
    BlockHash, TxMerkleNode,
    block::{Header, Version},
    script::PushBytesError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::step::{
    blockdata::transaction::GenesisTransaction,
    hashes::Hash,
    pow::{CompactTarget, CompactTargetError, PowHash, Sha256dPow, Target},
};

/// Errors that stop a nonce search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The header's difficulty bits do not decode to a valid target.
    #[error("malformed difficulty bits: {0}")]
    MalformedBits(#[from] CompactTargetError),
    /// The caller's cancellation flag was raised.
    #[error("search cancelled after {iterations} hashes (time {time}, nonce {nonce})")]
    Cancelled {
        /// Hashes evaluated before cancellation.
        iterations: u64,
        /// Header time at cancellation.
        time: u32,
        /// Next nonce that would have been tried.
        nonce: u32,
    },
    /// The configured iteration budget ran out.
    #[error("no solution within {0} hashes")]
    IterationLimit(u64),
    /// The nonce space wrapped with the header time already at its maximum.
    #[error("nonce space exhausted at the maximum header time")]
    TimeExhausted,
}

/// Errors raised while building or finalizing a genesis block.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The coinbase message cannot be pushed in one script operation.
    #[error("invalid coinbase message: {0}")]
    Script(#[from] PushBytesError),
    /// The computed block hash is not the published one.
    #[error("genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisMismatch {
        /// The published hash.
        expected: BlockHash,
        /// The hash of the block as built.
        computed: BlockHash,
    },
    /// The computed merkle root is not the published one.
    #[error("genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleMismatch {
        /// The published merkle root.
        expected: TxMerkleNode,
        /// The merkle root of the block as built.
        computed: TxMerkleNode,
    },
    /// The nonce search did not produce a solution.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// The fixed inputs a genesis block is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisTemplate {
    /// Human-readable message embedded in the coinbase input.
    pub coinbase_message: &'static str,
    /// Constant pushed before the message.
    pub extra_nonce: i64,
    /// Coinbase transaction timestamp.
    pub tx_time: u32,
    /// Block version.
    pub version: i32,
    /// Header timestamp.
    pub time: u32,
    /// Initial difficulty.
    pub bits: CompactTarget,
    /// Initial nonce.
    pub nonce: u32,
}

impl GenesisTemplate {
    /// Builds the unsigned genesis block and its merkle root.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Script`] if the coinbase message does not fit in
    /// a single push.
    pub fn build(&self) -> Result<GenesisBlock, ForgeError> {
        let coinbase =
            GenesisTransaction::coinbase(self.coinbase_message, self.extra_nonce, self.tx_time)?;
        let header = Header {
            version: Version::from_consensus(self.version),
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root: coinbase.merkle_root(),
            time: self.time,
            bits: self.bits.into(),
            nonce: self.nonce,
        };

        Ok(GenesisBlock { header, coinbase })
    }
}

/// The height-0 block of a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisBlock {
    header: Header,
    coinbase: GenesisTransaction,
}

impl GenesisBlock {
    /// The block header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The single coinbase transaction.
    pub fn coinbase(&self) -> &GenesisTransaction {
        &self.coinbase
    }

    /// The identity hash (double SHA-256 of the header).
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// The merkle root committed to by the header.
    pub fn merkle_root(&self) -> TxMerkleNode {
        self.header.merkle_root
    }

    /// Header timestamp.
    pub fn time(&self) -> u32 {
        self.header.time
    }

    /// Header difficulty bits.
    pub fn bits(&self) -> CompactTarget {
        self.header.bits.into()
    }

    /// Header nonce.
    pub fn nonce(&self) -> u32 {
        self.header.nonce
    }

    /// Checks the merkle root against a published value.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::MerkleMismatch`] when they differ.
    pub fn check_merkle_root(&self, expected: TxMerkleNode) -> Result<(), ForgeError> {
        let computed = self.merkle_root();
        if computed == expected {
            Ok(())
        } else {
            Err(ForgeError::MerkleMismatch { expected, computed })
        }
    }

    /// A serializable summary of the header.
    pub fn summary(&self) -> GenesisSummary {
        GenesisSummary {
            hash: self.block_hash(),
            merkle_root: self.merkle_root(),
            time: self.time(),
            bits: format!("{:08x}", self.bits()),
            nonce: self.nonce(),
            version: self.header.version.to_consensus(),
        }
    }

    fn with_solution(mut self, time: u32, nonce: u32) -> Self {
        self.header.time = time;
        self.header.nonce = nonce;
        self
    }
}

impl fmt::Display for GenesisBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GenesisBlock(hash={}, ver={}, prev={}, merkle={}, time={}, bits={:08x}, nonce={}, \
             vtx=1)",
            self.block_hash(),
            self.header.version.to_consensus(),
            self.header.prev_blockhash,
            self.merkle_root(),
            self.time(),
            self.bits(),
            self.nonce(),
        )
    }
}

/// Genesis header fields in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisSummary {
    /// Identity hash.
    pub hash: BlockHash,
    /// Merkle root.
    pub merkle_root: TxMerkleNode,
    /// Header timestamp.
    pub time: u32,
    /// Compact difficulty, as 8 hex digits.
    pub bits: String,
    /// Nonce.
    pub nonce: u32,
    /// Block version.
    pub version: i32,
}

/// Limits for a nonce search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchConfig<'a> {
    /// Give up after this many hashes. `None` searches until a solution is
    /// found or the header time runs out.
    pub max_iterations: Option<u64>,
    /// Checked before every hash; the search stops once it reads `true`.
    pub cancel: Option<&'a AtomicBool>,
}

/// Result of a successful nonce search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Header time of the solution.
    pub time: u32,
    /// Nonce of the solution.
    pub nonce: u32,
    /// Proof-of-work hash of the solution, internal byte order.
    pub pow_hash: [u8; 32],
    /// Hashes evaluated, including the solution.
    pub iterations: u64,
    /// Times the nonce wrapped and the header time was advanced.
    pub time_bumps: u32,
}

/// Searches for the first nonce whose proof-of-work hash meets the target
/// encoded in `header.bits`.
///
/// The header's own nonce is tried first, then each following one. When the
/// nonce wraps to zero the header time advances by one second and the search
/// continues from there. `header` itself is not modified.
///
/// # Errors
///
/// * [`SearchError::MalformedBits`] - `header.bits` does not decode
/// * [`SearchError::Cancelled`] - the cancellation flag was raised
/// * [`SearchError::IterationLimit`] - `max_iterations` hashes found nothing
/// * [`SearchError::TimeExhausted`] - the nonce wrapped at `u32::MAX` time
pub fn search_nonce<P: PowHash + ?Sized>(
    header: &Header,
    pow: &P,
    config: &SearchConfig<'_>,
) -> Result<SearchOutcome, SearchError> {
    let target = Target::from_compact(header.bits.into())?;
    let mut candidate = *header;
    let mut iterations: u64 = 0;
    let mut time_bumps: u32 = 0;

    loop {
        if config.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(SearchError::Cancelled {
                iterations,
                time: candidate.time,
                nonce: candidate.nonce,
            });
        }
        if config.max_iterations.is_some_and(|max| iterations >= max) {
            return Err(SearchError::IterationLimit(iterations));
        }

        let pow_hash = pow.pow_hash(&candidate);
        iterations = iterations.saturating_add(1);
        if target.is_met_by(&pow_hash) {
            return Ok(SearchOutcome {
                time: candidate.time,
                nonce: candidate.nonce,
                pow_hash,
                iterations,
                time_bumps,
            });
        }

        candidate.nonce = candidate.nonce.wrapping_add(1);
        if candidate.nonce == 0 {
            candidate.time = candidate
                .time
                .checked_add(1)
                .ok_or(SearchError::TimeExhausted)?;
            time_bumps = time_bumps.saturating_add(1);
            warn!(
                time = candidate.time,
                "nonce space exhausted, advancing genesis time"
            );
        }
    }
}

/// A genesis block whose hash has been checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForgedGenesis {
    /// The block, with the solved time and nonce if a search ran.
    pub block: GenesisBlock,
    /// The block's identity hash.
    pub hash: BlockHash,
    /// Details of the search, if one was needed.
    pub search: Option<SearchOutcome>,
}

/// Finalizes genesis blocks with a given proof-of-work hash.
#[derive(Clone, Debug, Default)]
pub struct GenesisForge<P = Sha256dPow> {
    pow: P,
}

impl GenesisForge<Sha256dPow> {
    /// A forge using double SHA-256 proof of work.
    pub fn new() -> Self {
        Self { pow: Sha256dPow }
    }
}

impl<P: PowHash> GenesisForge<P> {
    /// A forge using the given proof-of-work hash.
    pub fn with_pow(pow: P) -> Self {
        Self { pow }
    }

    /// Checks `block` against the published `expected` hash.
    ///
    /// A matching block is returned untouched. Otherwise, if
    /// `search_on_mismatch` is set, a nonce search runs and its result must
    /// match `expected`.
    ///
    /// # Errors
    ///
    /// * [`ForgeError::GenesisMismatch`] - the final hash is not `expected`;
    ///   the block and the published constant have drifted apart
    /// * [`ForgeError::Search`] - the search stopped without a solution
    pub fn finalize(
        &self,
        block: GenesisBlock,
        expected: BlockHash,
        search_on_mismatch: bool,
        config: &SearchConfig<'_>,
    ) -> Result<ForgedGenesis, ForgeError> {
        let computed = block.block_hash();
        if computed == expected {
            debug!(hash = %computed, "genesis hash verified");
            return Ok(ForgedGenesis {
                block,
                hash: computed,
                search: None,
            });
        }
        if !search_on_mismatch {
            return Err(ForgeError::GenesisMismatch { expected, computed });
        }

        warn!(
            %expected,
            %computed,
            "genesis hash mismatch, searching for a nonce"
        );
        let forged = self.mine(block, config)?;
        if forged.hash != expected {
            return Err(ForgeError::GenesisMismatch {
                expected,
                computed: forged.hash,
            });
        }
        Ok(forged)
    }

    /// Searches for a solution to `block` without comparing it to anything.
    ///
    /// This is the offline path used to produce new genesis constants.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Search`] if the search stops without a solution.
    pub fn mine(
        &self,
        block: GenesisBlock,
        config: &SearchConfig<'_>,
    ) -> Result<ForgedGenesis, ForgeError> {
        let outcome = search_nonce(block.header(), &self.pow, config)?;
        let block = block.with_solution(outcome.time, outcome.nonce);
        let hash = block.block_hash();

        info!(
            %hash,
            pow_hash = %hex::encode(outcome.pow_hash.iter().rev().copied().collect::<Vec<u8>>()),
            merkle_root = %block.merkle_root(),
            time = outcome.time,
            nonce = outcome.nonce,
            iterations = outcome.iterations,
            "genesis nonce found"
        );

        Ok(ForgedGenesis {
            block,
            hash,
            search: Some(outcome),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const REGTEST_HASH: &str = "cc37164ad5e4bb75b6c61b893d2831beb02f080cb813aba94e7bab84981c7086";

    fn regtest_template(nonce: u32) -> GenesisTemplate {
        GenesisTemplate {
            coinbase_message: "05/08/2016 00:00 Step by step",
            extra_nonce: 42,
            tx_time: 1470355200,
            version: 1,
            time: 1470000000,
            bits: CompactTarget::from_consensus(0x207fffff),
            nonce,
        }
    }

    fn hash(hex: &str) -> BlockHash {
        BlockHash::from_str(hex).unwrap()
    }

    /// Accepts exactly one nonce, so a search must walk up to it.
    struct OnlyNonce(u32);

    impl PowHash for OnlyNonce {
        fn pow_hash(&self, header: &Header) -> [u8; 32] {
            if header.nonce == self.0 {
                [0u8; 32]
            } else {
                [0xffu8; 32]
            }
        }
    }

    /// Rejects every header at one timestamp.
    struct RejectTime(u32);

    impl PowHash for RejectTime {
        fn pow_hash(&self, header: &Header) -> [u8; 32] {
            if header.time == self.0 {
                [0xffu8; 32]
            } else {
                [0u8; 32]
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = regtest_template(617537).build().unwrap();
        let b = regtest_template(617537).build().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.block_hash(), hash(REGTEST_HASH));
        assert_eq!(
            a.merkle_root().to_string(),
            "0702c16b56cc2c512663ce6e0629f41ffc21b3cbaa8e735f62403b21edeccd7b"
        );
    }

    #[test]
    fn test_finalize_matching_hash_skips_search() {
        let block = regtest_template(617537).build().unwrap();
        let forge = GenesisForge::with_pow(OnlyNonce(0));
        let forged = forge
            .finalize(block.clone(), hash(REGTEST_HASH), true, &SearchConfig::default())
            .unwrap();
        assert_eq!(forged.block, block);
        assert_eq!(forged.search, None);
    }

    #[test]
    fn test_finalize_mismatch_without_search_fails() {
        let block = regtest_template(0).build().unwrap();
        let err = GenesisForge::new()
            .finalize(block, hash(REGTEST_HASH), false, &SearchConfig::default())
            .unwrap_err();
        match err {
            ForgeError::GenesisMismatch { expected, computed } => {
                assert_eq!(expected, hash(REGTEST_HASH));
                assert_eq!(
                    computed,
                    hash("218c27a67805a9efd5a632bd59839e05e2a734f4ec1090d239163690263a9c7e")
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_regtest_search_from_zero_finds_published_nonce() {
        let block = regtest_template(0).build().unwrap();
        let forge = GenesisForge::with_pow(OnlyNonce(617537));
        let forged = forge
            .finalize(block, hash(REGTEST_HASH), true, &SearchConfig::default())
            .unwrap();

        let outcome = forged.search.unwrap();
        assert_eq!(outcome.nonce, 617537);
        assert_eq!(outcome.time, 1470000000);
        assert_eq!(outcome.iterations, 617538);
        assert_eq!(outcome.time_bumps, 0);
        assert_eq!(forged.hash, hash(REGTEST_HASH));
        assert_eq!(forged.block.nonce(), 617537);
    }

    #[test]
    fn test_search_that_lands_elsewhere_is_rejected() {
        let block = regtest_template(0).build().unwrap();
        let err = GenesisForge::new()
            .finalize(block, hash(REGTEST_HASH), true, &SearchConfig::default())
            .unwrap_err();
        assert!(matches!(err, ForgeError::GenesisMismatch { .. }));
    }

    #[test]
    fn test_sha256d_search_checks_starting_nonce() {
        let block = regtest_template(0).build().unwrap();
        let forged = GenesisForge::new().mine(block, &SearchConfig::default()).unwrap();
        let outcome = forged.search.unwrap();
        assert_eq!(outcome.nonce, 0);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(
            forged.hash,
            hash("218c27a67805a9efd5a632bd59839e05e2a734f4ec1090d239163690263a9c7e")
        );
    }

    #[test]
    fn test_sha256d_search_walks_nonces() {
        let block = regtest_template(617537).build().unwrap();
        let forged = GenesisForge::new().mine(block, &SearchConfig::default()).unwrap();
        let outcome = forged.search.unwrap();
        assert_eq!(outcome.nonce, 617546);
        assert_eq!(outcome.iterations, 10);
        assert_eq!(
            forged.hash,
            hash("1d5d961cf0e722ca864522b02c5c371167b0dd579b6c9b815bdc8b724bf735c9")
        );
        let target = Target::from_compact(forged.block.bits()).unwrap();
        assert!(target.is_met_by(&outcome.pow_hash));
    }

    #[test]
    fn test_nonce_wrap_advances_time() {
        let block = regtest_template(u32::MAX).build().unwrap();
        let forged = GenesisForge::new().mine(block, &SearchConfig::default()).unwrap();
        let outcome = forged.search.unwrap();
        assert_eq!(outcome.nonce, 0);
        assert_eq!(outcome.time, 1470000001);
        assert_eq!(outcome.time_bumps, 1);
        assert_eq!(outcome.iterations, 2);
        assert_eq!(
            forged.hash,
            hash("03fdc8e7c7be7bcdd0bb4670e491b4d84c82e6a318f69bca6ed26f087bfbc13a")
        );
    }

    #[test]
    fn test_nonce_wrap_with_stub_pow() {
        let mut template = regtest_template(u32::MAX - 2);
        template.time = 1_600_000_000;
        let block = template.build().unwrap();
        let outcome = search_nonce(
            block.header(),
            &RejectTime(1_600_000_000),
            &SearchConfig::default(),
        )
        .unwrap();
        assert_eq!((outcome.time, outcome.nonce), (1_600_000_001, 0));
        assert_eq!(outcome.iterations, 4);
        // The input header is left alone.
        assert_eq!(block.time(), 1_600_000_000);
        assert_eq!(block.nonce(), u32::MAX - 2);
    }

    #[test]
    fn test_time_exhaustion() {
        let mut template = regtest_template(u32::MAX);
        template.time = u32::MAX;
        let block = template.build().unwrap();
        let err = search_nonce(block.header(), &RejectTime(u32::MAX), &SearchConfig::default())
            .unwrap_err();
        assert_eq!(err, SearchError::TimeExhausted);
    }

    #[test]
    fn test_iteration_limit() {
        let block = regtest_template(0).build().unwrap();
        let config = SearchConfig {
            max_iterations: Some(100),
            cancel: None,
        };
        let err = search_nonce(block.header(), &OnlyNonce(617537), &config).unwrap_err();
        assert_eq!(err, SearchError::IterationLimit(100));
    }

    #[test]
    fn test_cancellation() {
        let cancel = AtomicBool::new(true);
        let block = regtest_template(5).build().unwrap();
        let config = SearchConfig {
            max_iterations: None,
            cancel: Some(&cancel),
        };
        let err = search_nonce(block.header(), &OnlyNonce(617537), &config).unwrap_err();
        assert_eq!(
            err,
            SearchError::Cancelled {
                iterations: 0,
                time: 1470000000,
                nonce: 5,
            }
        );
    }

    #[test]
    fn test_malformed_bits() {
        let mut template = regtest_template(0);
        template.bits = CompactTarget::from_consensus(0x04923456);
        let block = template.build().unwrap();
        let err = search_nonce(block.header(), &Sha256dPow, &SearchConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SearchError::MalformedBits(CompactTargetError::Negative(0x04923456))
        );
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let forge = GenesisForge::with_pow(OnlyNonce(617537));
        let run = || {
            forge
                .finalize(
                    regtest_template(0).build().unwrap(),
                    hash(REGTEST_HASH),
                    true,
                    &SearchConfig::default(),
                )
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_merkle_check() {
        let block = regtest_template(617537).build().unwrap();
        assert!(block.check_merkle_root(block.merkle_root()).is_ok());
        let err = block.check_merkle_root(TxMerkleNode::all_zeros()).unwrap_err();
        assert!(matches!(err, ForgeError::MerkleMismatch { .. }));
    }

    #[test]
    fn test_display_and_summary() {
        let block = regtest_template(617537).build().unwrap();
        let text = block.to_string();
        assert!(text.contains(REGTEST_HASH));
        assert!(text.contains("bits=207fffff"));
        assert!(text.contains("nonce=617537"));

        let summary = serde_json::to_value(block.summary()).unwrap();
        assert_eq!(summary["hash"], REGTEST_HASH);
        assert_eq!(summary["bits"], "207fffff");
        assert_eq!(summary["time"], 1470000000);
    }
}
