use bitcoin::{
    Amount, OutPoint, ScriptBuf, Sequence, TxIn, TxMerkleNode, TxOut, Txid, Witness,
    script::{Builder, PushBytesBuf, PushBytesError},
};

use crate::step::{
    consensus::{ConsensusEncode, serialize},
    hashes::{Hash, sha256d},
};

/// The coinbase transaction of a genesis block.
///
/// Step transactions carry their own timestamp right after the version, so
/// the standard Bitcoin transaction layout cannot be reused here.
#[derive(Clone, Debug, PartialEq, Eq, ConsensusEncode)]
pub struct GenesisTransaction {
    /// Transaction version.
    pub version: i32,
    /// Transaction timestamp.
    pub time: u32,
    /// Inputs; a single null-outpoint input for a coinbase.
    pub input: Vec<TxIn>,
    /// Outputs; a single empty output for the genesis coinbase.
    pub output: Vec<TxOut>,
    /// Lock time.
    pub lock_time: u32,
}

impl GenesisTransaction {
    /// Builds the genesis coinbase.
    ///
    /// The input script pushes `0`, the extra nonce and the timestamp
    /// message. The single output is empty and worth nothing, so the coinbase
    /// can never be spent.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is too long to push in one script
    /// operation.
    pub fn coinbase(message: &str, extra_nonce: i64, time: u32) -> Result<Self, PushBytesError> {
        let message = PushBytesBuf::try_from(message.as_bytes().to_vec())?;
        let script_sig = Builder::new()
            .push_int(0)
            .push_int(extra_nonce)
            .push_slice(message)
            .into_script();

        Ok(Self {
            version: 1,
            time,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: Sequence::MAX,
                witness: Witness::default(),
            }],
            output: vec![TxOut {
                value: Amount::ZERO,
                script_pubkey: ScriptBuf::new(),
            }],
            lock_time: 0,
        })
    }

    /// Computes the transaction id.
    pub fn txid(&self) -> Txid {
        Txid::from_raw_hash(sha256d::Hash::hash(&serialize(self)))
    }

    /// Merkle root of a block holding only this transaction.
    pub fn merkle_root(&self) -> TxMerkleNode {
        TxMerkleNode::from_raw_hash(self.txid().to_raw_hash())
    }
}
