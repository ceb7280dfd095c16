//! The per-network parameter descriptor

use super::{CheckpointData, ConsensusRules, Network};
use crate::chain::GenesisBlock;
use crate::crypto::Hash256;
use serde::Serialize;
use std::net::SocketAddr;

/// Version bytes for Base58Check encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash addresses
    pub pubkey_address: &'static [u8],
    /// Pay-to-script-hash addresses
    pub script_address: &'static [u8],
    /// WIF private keys
    pub secret_key: &'static [u8],
    /// BIP32 extended public keys
    pub ext_public_key: &'static [u8],
    /// BIP32 extended secret keys
    pub ext_secret_key: &'static [u8],
}

/// Everything that distinguishes one network from another.
///
/// Descriptors are built once by the preset table and handed out as
/// immutable `&'static` references; consumers only ever read them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    /// Which network this descriptor belongs to
    pub network: Network,
    /// Consensus rules
    pub consensus: ConsensusRules,
    /// Wire protocol message prefix
    pub message_start: [u8; 4],
    /// P2P listen port
    pub default_port: u16,
    /// JSON-RPC listen port
    pub default_rpc_port: u16,
    /// Alert-system public key (hex), empty when unused
    pub alert_key: &'static str,
    /// Spork-signing public key (hex), empty when unused
    pub spork_key: &'static str,
    /// Seconds behind the wall clock at which the tip counts as stale
    pub max_tip_age: u64,
    /// Seconds to keep delaying getheaders while the tip is stale
    pub delay_get_headers_time: u64,
    /// Earliest height a pruned node may forget
    pub prune_after_height: u64,
    /// Mixing pool transaction cap
    pub pool_max_transactions: u32,
    /// Seconds a fulfilled peer request stays cached
    pub fulfilled_request_expire_time: u64,
    /// Base58Check version bytes
    pub base58_prefixes: Base58Prefixes,
    /// BIP44 coin type
    pub ext_coin_type: u32,
    /// Hostnames answering DNS seed queries
    pub dns_seeds: &'static [&'static str],
    /// Last-resort peer addresses as "ip:port" entries
    pub fixed_seeds: &'static [&'static str],
    /// Hard-coded checkpoints and sync statistics
    pub checkpoints: CheckpointData,
    /// The verified genesis block
    pub genesis: GenesisBlock,
    /// Refuse to mine without peer connections
    pub mining_requires_peers: bool,
    /// Run expensive container self-checks by default
    pub default_consistency_checks: bool,
    /// Relay only standard transactions by default
    pub require_standard: bool,
    /// Produce blocks on RPC demand instead of by mining
    pub mine_blocks_on_demand: bool,
    /// Report the legacy "testnet" field over RPC
    pub testnet_rpc_defaults: bool,
}

impl ChainParams {
    /// The canonical network token
    pub fn network_id(&self) -> &'static str {
        self.network.as_str()
    }

    /// The verified genesis block hash
    pub fn genesis_hash(&self) -> &Hash256 {
        &self.genesis.hash
    }

    /// Parse the fixed seed list into socket addresses,
    /// dropping any entry that fails to parse
    pub fn seed_addresses(&self) -> Vec<SocketAddr> {
        self.fixed_seeds
            .iter()
            .filter_map(|seed| parse_seed(seed))
            .collect()
    }
}

/// Parse one "ip:port" seed entry
pub fn parse_seed(seed: &str) -> Option<SocketAddr> {
    seed.parse().ok()
}
