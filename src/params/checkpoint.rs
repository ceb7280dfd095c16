//! Hard-coded chain checkpoints

use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};

/// A height pinned to a known block hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

/// Checkpoint list plus sync-progress statistics taken at the newest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointData {
    /// Pinned blocks in strictly increasing height order
    pub checkpoints: Vec<Checkpoint>,
    /// UNIX timestamp of the newest checkpointed block
    pub last_checkpoint_time: u64,
    /// Transactions between genesis and that block
    pub total_transactions: u64,
    /// Estimated transactions per day after that block
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// The newest checkpoint
    pub fn last(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// The pinned hash at a height, if one exists
    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints
            .iter()
            .find(|c| c.height == height)
            .map(|c| &c.hash)
    }
}
