/// Genesis block and coinbase structures.
pub mod blockdata;
/// Consensus encoding.
pub mod consensus;
/// Hash functions and types.
pub mod hashes;
/// I/O traits used by consensus encoding.
pub mod io;
/// Network identifiers.
pub mod network;
/// Wire-level network constants.
pub mod p2p;
/// Per-network chain parameters.
pub mod params;
/// Proof of work targets and hashing.
pub mod pow;
/// The active parameter set of a process.
pub mod registry;
/// Network selection from command line flags.
pub mod selection;
/// Hardcoded bootstrap peers.
pub mod seeds;
