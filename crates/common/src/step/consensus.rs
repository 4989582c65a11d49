pub use bitcoin::consensus::encode::{Encodable, serialize};
pub use step_derive::ConsensusEncode;
