//! Step network parameters.
//!
//! This library defines the consensus constants of the Step main, test and
//! regression-test networks, builds and verifies their genesis blocks, and
//! holds the single parameter set a node process runs with.

#![cfg_attr(test, allow(clippy::arithmetic_side_effects))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::cast_sign_loss))]
#![cfg_attr(test, allow(clippy::indexing_slicing))]
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]

/// Types and functions related to the Step chain.
pub mod step;

// Paths expected by `step_derive::ConsensusEncode`.
pub(crate) use step::{consensus, io};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
