/// Genesis block construction, verification and nonce search.
pub mod genesis;

/// The coinbase transaction of a genesis block.
pub mod transaction;
