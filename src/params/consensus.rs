//! Consensus rule constants

use super::{Deployment, DeploymentId};
use crate::crypto::Hash256;
use serde::{Deserialize, Serialize};

/// Network-scoped consensus rules.
///
/// Every field is a constant of its chain. Nothing here is configurable at
/// runtime; validation and mining read these values, they never write them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusRules {
    /// Blocks between block-subsidy halvings
    pub subsidy_halving_interval: u32,
    /// First block paying a masternode share
    pub masternode_payments_start_block: u32,
    /// Block at which the masternode share begins stepping up
    pub masternode_payments_increase_block: u32,
    /// Blocks between masternode share steps
    pub masternode_payments_increase_period: u32,
    /// Depth an instant-send lock keeps inputs frozen
    pub instant_send_keep_lock: u32,
    /// First block subject to budget payments
    pub budget_payments_start_block: u32,
    /// Blocks per budget cycle
    pub budget_payments_cycle_blocks: u32,
    /// Blocks at the start of a cycle in which budget payments may appear
    pub budget_payments_window_blocks: u32,
    /// Seconds a proposal must exist before entering a budget
    pub budget_proposal_establishing_time: u32,
    /// First block at which superblocks can occur
    pub superblock_start_block: u32,
    /// Blocks per superblock cycle
    pub superblock_cycle: u32,
    /// Minimum absolute yes-votes for governance objects
    pub governance_min_quorum: u32,
    /// Bloom-filter sizing for governance object sync
    pub governance_filter_elements: u32,
    /// Confirmations before a masternode collateral is usable
    pub masternode_minimum_confirmations: u32,
    /// Upgraded blocks out of majority_window that enforce a new version
    pub majority_enforce_block_upgrade: u32,
    /// Upgraded blocks out of majority_window that reject the old version
    pub majority_reject_block_outdated: u32,
    /// Window of recent blocks consulted for version majorities
    pub majority_window: u32,
    /// Height at which BIP34 activated, None when never scheduled
    pub bip34_height: Option<u32>,
    /// Hash of the BIP34 activation block
    pub bip34_hash: Hash256,
    /// Highest (easiest) admissible proof-of-work target
    pub pow_limit: Hash256,
    /// Seconds per retargeting period
    pub pow_target_timespan: u32,
    /// Target seconds between blocks
    pub pow_target_spacing: u32,
    /// Blocks per legacy retarget step
    pub pow_retarget_interval: u32,
    /// Blocks averaged by the difficulty filter
    pub pow_averaging_interval: u32,
    /// Allow min-difficulty blocks after a long spacing gap
    pub pow_allow_min_difficulty_blocks: bool,
    /// Never retarget at all (regression testing)
    pub pow_no_retargeting: bool,
    /// Default signaling blocks required to lock a deployment in
    pub rule_change_activation_threshold: u32,
    /// Default version-bits signaling window
    pub miner_confirmation_window: u32,
    /// Deployment schedules, indexed by DeploymentId
    pub deployments: [Deployment; DeploymentId::COUNT],
    /// Least cumulative work an acceptable chain must carry
    pub minimum_chain_work: Hash256,
    /// Block whose ancestors are assumed script-valid
    pub assume_valid: Hash256,
}

impl ConsensusRules {
    /// Blocks per legacy difficulty adjustment period
    pub fn difficulty_adjustment_interval(&self) -> u32 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Schedule for one deployment
    pub fn deployment(&self, id: DeploymentId) -> &Deployment {
        &self.deployments[id as usize]
    }

    /// Effective signaling window for one deployment
    pub fn deployment_window(&self, id: DeploymentId) -> u32 {
        self.deployment(id)
            .confirmation_window(self.miner_confirmation_window)
    }

    /// Effective lock-in threshold for one deployment
    pub fn deployment_threshold(&self, id: DeploymentId) -> u32 {
        self.deployment(id)
            .activation_threshold(self.rule_change_activation_threshold)
    }
}
