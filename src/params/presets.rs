//! The three network presets
//!
//! Each preset is hand-authored literal data. Building one runs the genesis
//! constructor and proves the computed identity hash and merkle root against
//! their hard-coded anchors; a process whose genesis does not verify must
//! not run, so the table initializer aborts with the mismatch diagnostic.

use super::{
    Base58Prefixes, ChainParams, Checkpoint, CheckpointData, ConsensusRules, Deployment, Network,
    ParamsError,
};
use crate::chain::{coin_genesis, GenesisBlock};
use crate::constants::GENESIS_REWARD;
use crate::crypto::Hash256;
use std::sync::OnceLock;

/// Merkle root shared by every network's genesis (the coinbase is identical)
const GENESIS_MERKLE_ROOT: &str =
    "fa6ef9872494fa9662cf0fecf8c0135a6932e76d7a8764e1155207f3205c7c88";

const MAIN_GENESIS_HASH: &str =
    "0000001e91c1c6e10969310a6a443eaadc712b33cb5dd4944e35cc3f67353ce1";
const TEST_GENESIS_HASH: &str =
    "00000012559e9eb908d2207380c3ce0083026424dd7a8c48593fb0bde1aaec9c";
const REGTEST_GENESIS_HASH: &str =
    "2fa24da0db9c1fe79912b71186ada13cf9aa8022e4471a8453126052027ab425";

const MAIN_DNS_SEEDS: &[&str] = &[
    "seed1.chaincoin.org",
    "seed2.chaincoin.org",
    "seed3.chaincoin.org",
    "seed4.chaincoin.org",
    "seed5.chaincoin.org",
    "seed6.chaincoin.org",
    "seed7.chaincoin.org",
    "seed8.chaincoin.org",
    "chc1.ignorelist.com",
    "chc2.ignorelist.com",
    "chc3.ignorelist.com",
    "chc4.ignorelist.com",
];

/// Last-resort main network peers, tried when DNS seeding fails
const MAIN_FIXED_SEEDS: &[&str] = &[
    "104.238.166.114:11994",
    "149.28.47.201:11994",
    "45.77.68.152:11994",
    "95.179.144.7:11994",
    "192.99.3.29:11994",
    "51.15.86.190:11994",
    "[2001:19f0:5:299b::5]:11994",
    "[2a01:4f8:162:4348::2]:11994",
];

const TEST_FIXED_SEEDS: &[&str] = &["104.207.135.57:21994", "45.32.161.82:21994"];

const MAIN_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[28],
    script_address: &[4],
    secret_key: &[28 + 128],
    ext_public_key: &[0x02, 0xFE, 0x52, 0xF8],
    ext_secret_key: &[0x02, 0xFE, 0x52, 0xCC],
};

const TEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[80],
    script_address: &[44],
    secret_key: &[88 + 128],
    ext_public_key: &[0x3A, 0x80, 0x61, 0xA0],
    ext_secret_key: &[0x3A, 0x80, 0x58, 0x37],
};

/// Regtest keeps test's extended-key versions but gets its own address
/// bytes, so no encoded address is valid on more than one network
const REGTEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[111],
    script_address: &[196],
    secret_key: &[111 + 128],
    ext_public_key: &[0x3A, 0x80, 0x61, 0xA0],
    ext_secret_key: &[0x3A, 0x80, 0x58, 0x37],
};

fn hash256(hex: &str) -> Hash256 {
    hex.parse().expect("hard-coded hash parses")
}

fn checkpoint(height: u32, hex: &str) -> Checkpoint {
    Checkpoint {
        height,
        hash: hash256(hex),
    }
}

/// Construct and verify one network's genesis block
fn verified_genesis(
    network: Network,
    time: u32,
    nonce: u32,
    bits: u32,
    expected_hash: &str,
) -> Result<GenesisBlock, ParamsError> {
    let block = coin_genesis(time, nonce, bits, 1, GENESIS_REWARD);
    GenesisBlock::verified(block, &hash256(expected_hash), &hash256(GENESIS_MERKLE_ROOT))
        .map_err(|mismatch| ParamsError::GenesisMismatch { network, mismatch })
}

/// Main network
fn main_params() -> Result<ChainParams, ParamsError> {
    let genesis = verified_genesis(Network::Main, 1390078220, 926887, 0x1e0fffff, MAIN_GENESIS_HASH)?;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 700_800, // two years
        masternode_payments_start_block: 100_000,
        masternode_payments_increase_block: 2_580_000,
        masternode_payments_increase_period: 576 * 30,
        instant_send_keep_lock: 24,
        budget_payments_start_block: 1_500_000,
        budget_payments_cycle_blocks: 28_800,
        budget_payments_window_blocks: 100,
        budget_proposal_establishing_time: 60 * 60 * 24,
        superblock_start_block: 1_600_000,
        superblock_cycle: 28_800,
        governance_min_quorum: 10,
        governance_filter_elements: 20_000,
        masternode_minimum_confirmations: 15,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: Some(1),
        bip34_hash: hash256("0x00000012f1c40ff12a9e6b0e9076fe4fa7ad27012e256a5ad7bcb80dc02c0409"),
        pow_limit: hash256("00000fffff000000000000000000000000000000000000000000000000000000"),
        pow_target_timespan: 90, // retarget every block
        pow_target_spacing: 90,
        pow_retarget_interval: 1,
        pow_averaging_interval: 8,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1916, // 95% of 2016
        miner_confirmation_window: 2016,
        deployments: [
            // testdummy: January 1st, 2008 - December 31st, 2008
            Deployment::new(28, 1_199_145_601, 1_230_767_999),
            // csv: October 15th, 2017 - October 15th, 2018
            Deployment::new(0, 1_508_025_600, 1_539_561_600),
            // dip0001, same dates, 80% of its own 4032-block window
            Deployment::with_window(1, 1_508_025_600, 1_539_561_600, 4032, 3226),
        ],
        minimum_chain_work: hash256(
            "0x0000000000000000000000000000000000000000000000000298679dd6a9ca29",
        ),
        assume_valid: hash256(
            "0x00000000006ca24b6c4eaf5235cae10e6fa3cb8717280cc1d79d438c46c01978",
        ),
    };

    let checkpoints = CheckpointData {
        checkpoints: vec![
            Checkpoint { height: 0, hash: genesis.hash },
            checkpoint(6143, "0x0000000026fb51f5bc9943ed69d9ff7697ecf7fed419d88b417655f93a487ce1"),
            checkpoint(12797, "0x000000002c29644e179baa188fa6b9b9454721f1f21f2b9f31eebe9acc1a31db"),
            checkpoint(30092, "0x0000000098a23e1c503f71a6d61c333c5abaabb4c5fa1b474012e004db4bfbbe"),
            checkpoint(80998, "0x000000010ebcfe9a00a99f2b61104f4a141555a707f1c007aba8a978f6030cfb"),
            checkpoint(144759, "0x000000047e7b7bfd63b4f019a0a24c8d65b10afa6eb80721e10fa7c49ce6fb6e"),
            checkpoint(189046, "0x00000000bd507c435b46ee8a13b25b85ec38fdb0eb5b00faeaa0611cd6a483d3"),
            checkpoint(277316, "0x00000016a20503fe496e79d34fb85c33f633059315c046ffa1b4826d08a1e856"),
            checkpoint(483849, "0x000001eb7f8124282ab62296e63d3145ff6c84cf18afae4d4b8e02cd3182b6a8"),
            checkpoint(1066428, "0x000000012dc5256d977b50270d1ca5642726308dcf26b6c219985edb8f2ab8f6"),
        ],
        last_checkpoint_time: 1_490_629_503,
        total_transactions: 1_179_921,
        transactions_per_day: 960.0,
    };

    Ok(ChainParams {
        network: Network::Main,
        consensus,
        message_start: [0xa3, 0xd2, 0x7a, 0x03],
        default_port: 11994,
        default_rpc_port: 11995,
        alert_key: "04c5788ca1e268a7474763fa965210b6fa6b04a45f52d21056c62fb19a2de991aa15aa1d1c516f34d2a0016f51a87959c89f51a148db30c839f71bc525dde8c480",
        spork_key: "04d30fc81685398b8a9f560145ca994f23cc38775e731ebf50f89ef7ead069c312c733ce17450b2c24fff3ed945e5bd096866d1445424f7ed81710f1a8e667ea5d",
        max_tip_age: 6 * 60 * 60, // ~240 blocks behind, twice the fork detection time
        delay_get_headers_time: 24 * 60 * 60,
        prune_after_height: 100_000,
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 60 * 60,
        base58_prefixes: MAIN_BASE58_PREFIXES,
        ext_coin_type: 5,
        dns_seeds: MAIN_DNS_SEEDS,
        fixed_seeds: MAIN_FIXED_SEEDS,
        checkpoints,
        genesis,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_rpc_defaults: false,
    })
}

/// Public test network
fn test_params() -> Result<ChainParams, ParamsError> {
    let genesis = verified_genesis(Network::Test, 1388868139, 715566, 0x1e0fffff, TEST_GENESIS_HASH)?;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 21_024,
        masternode_payments_start_block: 4010,
        masternode_payments_increase_block: 4030,
        masternode_payments_increase_period: 10,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 4100,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        budget_proposal_establishing_time: 60 * 20,
        superblock_start_block: 4200, // must stay above budget_payments_start_block
        superblock_cycle: 24,         // superblocks can be issued hourly
        governance_min_quorum: 1,
        governance_filter_elements: 500,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        bip34_height: Some(1),
        bip34_hash: hash256("0x00000352de593a01e0efcbaec00345ec80d20c7bd2024ec7c2beec048af0e6d9"),
        pow_limit: hash256("00000fffff000000000000000000000000000000000000000000000000000000"),
        pow_target_timespan: 90,
        pow_target_spacing: 90,
        pow_retarget_interval: 1,
        pow_averaging_interval: 8,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1512, // 75% for testchains
        miner_confirmation_window: 2016,
        deployments: [
            // testdummy: January 1st, 2008 - December 31st, 2008
            Deployment::new(28, 1_199_145_601, 1_230_767_999),
            // csv: September 28th, 2017 - September 28th, 2018
            Deployment::new(0, 1_506_556_800, 1_538_092_800),
            // dip0001: September 18th, 2017 - September 18th, 2018, 50% of 100
            Deployment::with_window(1, 1_505_692_800, 1_537_228_800, 100, 50),
        ],
        minimum_chain_work: hash256(
            "000000000000000000000000000000000000000000000000000000060e06d35d",
        ),
        assume_valid: hash256(
            "000000d9bd4820c3f64f31fb69d520baa5698d2700b5addfa4f27b264f2bc298",
        ),
    };

    let checkpoints = CheckpointData {
        checkpoints: vec![Checkpoint { height: 0, hash: genesis.hash }],
        last_checkpoint_time: 0,
        total_transactions: 0,
        transactions_per_day: 0.0,
    };

    Ok(ChainParams {
        network: Network::Test,
        consensus,
        message_start: [0xfb, 0xc2, 0x11, 0x02],
        default_port: 21994,
        default_rpc_port: 21995,
        alert_key: "040d3090a194381599d0f53f89ec60b9ec77f0e7b61978ef445142c8a4f1e154ca3441a5e46e12910540352edbd8af43fc1ee1da9a935c1c252fe7426c323d3d32",
        spork_key: "04d436c5ea78789b7bd4708c296b61cf2c0a14d0870245d164078e3c126dec0dd7ee041538437afd72508def9862f0f65160de94c9f48861a6a7b25bd59879eeef",
        max_tip_age: 0x7fff_ffff, // allow mining on top of old blocks
        delay_get_headers_time: 24 * 60 * 60,
        prune_after_height: 1000,
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        base58_prefixes: TEST_BASE58_PREFIXES,
        ext_coin_type: 1,
        dns_seeds: &[],
        fixed_seeds: TEST_FIXED_SEEDS,
        checkpoints,
        genesis,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_rpc_defaults: true,
    })
}

/// Regression test network
fn regtest_params() -> Result<ChainParams, ParamsError> {
    let genesis =
        verified_genesis(Network::Regtest, 1296688602, 0, 0x207fffff, REGTEST_GENESIS_HASH)?;

    let consensus = ConsensusRules {
        subsidy_halving_interval: 150,
        masternode_payments_start_block: 240,
        masternode_payments_increase_block: 350,
        masternode_payments_increase_period: 10,
        instant_send_keep_lock: 6,
        budget_payments_start_block: 1000,
        budget_payments_cycle_blocks: 50,
        budget_payments_window_blocks: 10,
        budget_proposal_establishing_time: 60 * 20,
        superblock_start_block: 1500,
        superblock_cycle: 10,
        governance_min_quorum: 1,
        governance_filter_elements: 100,
        masternode_minimum_confirmations: 1,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: None, // never scheduled on regtest
        bip34_hash: Hash256::zero(),
        pow_limit: hash256("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_target_timespan: 90,
        pow_target_spacing: 90,
        pow_retarget_interval: 1,
        pow_averaging_interval: 8,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108, // 75% of the faster window
        miner_confirmation_window: 144,
        deployments: [
            Deployment::new(28, 0, Deployment::NO_TIMEOUT), // testdummy
            Deployment::new(0, 0, Deployment::NO_TIMEOUT),  // csv
            Deployment::new(1, 0, Deployment::NO_TIMEOUT),  // dip0001
        ],
        minimum_chain_work: hash256("0x00"),
        assume_valid: hash256("0x00"),
    };

    let checkpoints = CheckpointData {
        checkpoints: vec![Checkpoint { height: 0, hash: genesis.hash }],
        last_checkpoint_time: 0,
        total_transactions: 0,
        transactions_per_day: 0.0,
    };

    Ok(ChainParams {
        network: Network::Regtest,
        consensus,
        message_start: [0xfc, 0x1f, 0xc3, 0x56],
        default_port: 18444,
        default_rpc_port: 21995,
        alert_key: "",
        spork_key: "",
        max_tip_age: 6 * 60 * 60,
        delay_get_headers_time: 0, // never delay getheaders
        prune_after_height: 1000,
        pool_max_transactions: 0,
        fulfilled_request_expire_time: 5 * 60,
        base58_prefixes: REGTEST_BASE58_PREFIXES,
        ext_coin_type: 1,
        dns_seeds: &[],
        fixed_seeds: &[],
        checkpoints,
        genesis,
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_rpc_defaults: false,
    })
}

static PRESETS: OnceLock<[ChainParams; 3]> = OnceLock::new();

fn build(network: Network) -> ChainParams {
    let params = match network {
        Network::Main => main_params(),
        Network::Test => test_params(),
        Network::Regtest => regtest_params(),
    };
    params.unwrap_or_else(|e| panic!("refusing to start: {e}"))
}

/// Immutable parameters for a network.
///
/// The whole table is built and verified on first access; afterwards every
/// call hands out the same `&'static` reference.
pub fn chain_params(network: Network) -> &'static ChainParams {
    let table = PRESETS.get_or_init(|| Network::ALL.map(build));
    &table[network as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DeploymentId;

    #[test]
    fn test_main_genesis_anchors() {
        let params = chain_params(Network::Main);
        assert_eq!(params.genesis_hash().to_hex(), MAIN_GENESIS_HASH);
        assert_eq!(params.genesis.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);

        let header = &params.genesis.block.header;
        assert_eq!(header.time, 1390078220);
        assert_eq!(header.nonce, 926887);
        assert_eq!(header.bits, 0x1e0fffff);
        assert_eq!(header.version, 1);
    }

    #[test]
    fn test_test_genesis_anchors() {
        let params = chain_params(Network::Test);
        assert_eq!(params.genesis_hash().to_hex(), TEST_GENESIS_HASH);
        assert_eq!(params.genesis.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
        assert_eq!(params.genesis.block.header.time, 1388868139);
        assert_eq!(params.genesis.block.header.nonce, 715566);
    }

    #[test]
    fn test_regtest_genesis_anchors() {
        let params = chain_params(Network::Regtest);
        assert_eq!(params.genesis_hash().to_hex(), REGTEST_GENESIS_HASH);
        assert_eq!(params.genesis.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
        assert_eq!(params.genesis.block.header.time, 1296688602);
        assert_eq!(params.genesis.block.header.nonce, 0);
        assert_eq!(params.genesis.block.header.bits, 0x207fffff);
    }

    #[test]
    fn test_presets_carry_their_own_tag() {
        for network in Network::ALL {
            assert_eq!(chain_params(network).network, network);
            assert_eq!(chain_params(network).network_id(), network.as_str());
        }
    }

    #[test]
    fn test_repeated_access_returns_same_reference() {
        for network in Network::ALL {
            assert!(std::ptr::eq(chain_params(network), chain_params(network)));
        }
    }

    #[test]
    fn test_main_spot_values() {
        let params = chain_params(Network::Main);
        assert_eq!(params.message_start, [0xa3, 0xd2, 0x7a, 0x03]);
        assert_eq!(params.default_port, 11994);
        assert_eq!(params.default_rpc_port, 11995);
        assert_eq!(params.consensus.subsidy_halving_interval, 700_800);
        assert_eq!(params.consensus.masternode_payments_increase_period, 17_280);
        assert_eq!(params.ext_coin_type, 5);
        assert_eq!(params.dns_seeds.len(), 12);
        assert!(params.mining_requires_peers);
        assert!(!params.mine_blocks_on_demand);
        assert_eq!(params.base58_prefixes.pubkey_address, &[28]);
        assert_eq!(params.base58_prefixes.secret_key, &[156]);
    }

    #[test]
    fn test_test_spot_values() {
        let params = chain_params(Network::Test);
        assert_eq!(params.message_start, [0xfb, 0xc2, 0x11, 0x02]);
        assert_eq!(params.default_port, 21994);
        assert_eq!(params.consensus.rule_change_activation_threshold, 1512);
        assert_eq!(params.max_tip_age, 0x7fff_ffff);
        assert!(params.dns_seeds.is_empty());
        assert!(!params.fixed_seeds.is_empty());
        assert!(params.testnet_rpc_defaults);
        assert!(params.consensus.pow_allow_min_difficulty_blocks);
    }

    #[test]
    fn test_regtest_spot_values() {
        let params = chain_params(Network::Regtest);
        assert_eq!(params.message_start, [0xfc, 0x1f, 0xc3, 0x56]);
        assert_eq!(params.default_port, 18444);
        assert_eq!(params.consensus.miner_confirmation_window, 144);
        assert_eq!(params.consensus.bip34_height, None);
        assert!(params.consensus.bip34_hash.is_zero());
        assert!(params.consensus.minimum_chain_work.is_zero());
        assert!(params.consensus.pow_no_retargeting);
        assert!(params.mine_blocks_on_demand);
        assert!(params.dns_seeds.is_empty() && params.fixed_seeds.is_empty());
        assert!(params.alert_key.is_empty() && params.spork_key.is_empty());
    }

    #[test]
    fn test_regtest_deployments_always_active() {
        let consensus = &chain_params(Network::Regtest).consensus;
        for id in DeploymentId::ALL {
            assert!(consensus.deployment(id).is_always_active(), "{}", id.name());
        }
    }

    #[test]
    fn test_main_checkpoint_tip() {
        let checkpoints = &chain_params(Network::Main).checkpoints;
        let last = checkpoints.last().unwrap();
        assert_eq!(last.height, 1_066_428);
        assert_eq!(
            last.hash.to_hex(),
            "000000012dc5256d977b50270d1ca5642726308dcf26b6c219985edb8f2ab8f6"
        );
        assert_eq!(checkpoints.checkpoints.len(), 10);
        assert_eq!(checkpoints.total_transactions, 1_179_921);
    }

    #[test]
    fn test_pow_limits() {
        assert_eq!(
            chain_params(Network::Main).consensus.pow_limit.to_hex(),
            "00000fffff000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            chain_params(Network::Regtest).consensus.pow_limit.to_hex(),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_genesis_rewards_match() {
        for network in Network::ALL {
            let coinbase = &chain_params(network).genesis.block.transactions[0];
            assert_eq!(coinbase.outputs[0].value, GENESIS_REWARD);
        }
    }
}
