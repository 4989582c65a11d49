pub use bitcoin::hashes::{Hash, sha256d};
