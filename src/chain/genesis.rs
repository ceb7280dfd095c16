//! Genesis block construction for Chaincoin (CHC) networks
//!
//! Materializes the immutable first block of a chain and checks it against
//! its expected identity anchors.

use super::{script_num, Block, BlockHeader, OutPoint, Script, Transaction, TxIn, TxOut};
use super::{OP_CHECKSIG, SEQUENCE_FINAL};
use crate::crypto::{compute_merkle_root, Hash256};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Headline embedded in the coinbase of every network's genesis block
pub const GENESIS_COINBASE_PAYLOAD: &str =
    "18-01-14 - Anti-fracking campaigners chain themselves to petrol pumps";

/// Founder public key paid by the genesis output
const GENESIS_OUTPUT_KEY: &str = "04becedf6ebadd4596964d890f677f8d2e74fdcc313c6416434384a66d6d8758d1c92de272dc6713e4a81d98841dfdfdc95e204ba915447d2fe9313435c78af3e8";

/// Build a genesis block from first principles.
///
/// The block carries a single coinbase transaction whose input script embeds
/// `timestamp_payload` behind the customary marker bytes, and whose single
/// output pays `reward` base units to `output_script`. The header commits to
/// the zero previous-block hash and the merkle root of the one transaction.
///
/// Construction is pure. Identical inputs produce a byte-for-byte identical
/// block on every call; it never reads the clock or any ambient state.
pub fn build_genesis(
    timestamp_payload: &[u8],
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: i64,
) -> Block {
    let mut script_sig = Script::new();
    script_sig.push_int(486_604_799);
    script_sig.push_slice(&script_num(4));
    script_sig.push_slice(timestamp_payload);

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            prev_out: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: output_script,
        }],
        lock_time: 0,
    };

    let merkle_root = compute_merkle_root(&[coinbase.txid()]);
    let header = BlockHeader::new(version, Hash256::zero(), merkle_root, time, bits, nonce);
    Block::new(header, vec![coinbase])
}

/// Build the Chaincoin genesis block for the given header parameters.
///
/// Every network shares the headline payload and the founder key output;
/// only time, nonce, bits, version, and reward vary.
pub fn coin_genesis(time: u32, nonce: u32, bits: u32, version: i32, reward: i64) -> Block {
    let key = hex::decode(GENESIS_OUTPUT_KEY).expect("hard-coded key parses");
    let mut output_script = Script::new();
    output_script.push_slice(&key);
    output_script.push_opcode(OP_CHECKSIG);
    build_genesis(
        GENESIS_COINBASE_PAYLOAD.as_bytes(),
        output_script,
        time,
        nonce,
        bits,
        version,
        reward,
    )
}

/// Which derived genesis value disagreed with its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisField {
    BlockHash,
    MerkleRoot,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisField::BlockHash => write!(f, "block hash"),
            GenesisField::MerkleRoot => write!(f, "merkle root"),
        }
    }
}

/// Disagreement between a constructed genesis block and its expected anchors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("genesis {field} mismatch: computed {computed}, expected {expected}")]
pub struct GenesisMismatch {
    pub field: GenesisField,
    pub computed: Hash256,
    pub expected: Hash256,
}

/// A genesis block together with its verified identity values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlock {
    pub block: Block,
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

impl GenesisBlock {
    /// Recompute the block's identity values and compare them against the
    /// expected anchors.
    ///
    /// The merkle root is checked first so a content error is reported as
    /// such instead of as the hash disagreement it also causes.
    pub fn verified(
        block: Block,
        expected_hash: &Hash256,
        expected_merkle_root: &Hash256,
    ) -> Result<Self, GenesisMismatch> {
        let merkle_root = block.merkle_root();
        if merkle_root != *expected_merkle_root {
            return Err(GenesisMismatch {
                field: GenesisField::MerkleRoot,
                computed: merkle_root,
                expected: *expected_merkle_root,
            });
        }

        let hash = block.hash();
        if hash != *expected_hash {
            return Err(GenesisMismatch {
                field: GenesisField::BlockHash,
                computed: hash,
                expected: *expected_hash,
            });
        }

        Ok(GenesisBlock {
            block,
            hash,
            merkle_root,
        })
    }
}
