//! Chaincoin (CHC) Chain Parameter Inspector
//!
//! Resolves one network preset, verifies its genesis block, and prints the
//! resulting parameters.
//! CHC is the short form used in addresses, tickers, and protocol identifiers.

use chc_core::constants::COIN;
use chc_core::params::{current_params, select_network, ChainParams, DeploymentId};
use serde::Serialize;

#[derive(Serialize)]
struct GenesisSummary {
    hash: String,
    merkle_root: String,
    time: u32,
    bits: String,
    nonce: u32,
    reward: i64,
}

#[derive(Serialize)]
struct DeploymentSummary {
    name: &'static str,
    bit: u8,
    start_time: u64,
    timeout: u64,
    window: u32,
    threshold: u32,
    always_active: bool,
}

#[derive(Serialize)]
struct ParamsSummary {
    network: &'static str,
    message_start: String,
    default_port: u16,
    default_rpc_port: u16,
    genesis: GenesisSummary,
    subsidy_halving_interval: u32,
    pow_target_spacing: u32,
    pow_limit: String,
    miner_confirmation_window: u32,
    rule_change_activation_threshold: u32,
    deployments: Vec<DeploymentSummary>,
    checkpoint_count: usize,
    checkpoint_tip_height: Option<u32>,
    dns_seeds: usize,
    fixed_seeds: usize,
}

impl ParamsSummary {
    fn new(params: &ChainParams) -> Self {
        let header = &params.genesis.block.header;
        let consensus = &params.consensus;

        ParamsSummary {
            network: params.network_id(),
            message_start: hex::encode(params.message_start),
            default_port: params.default_port,
            default_rpc_port: params.default_rpc_port,
            genesis: GenesisSummary {
                hash: params.genesis.hash.to_hex(),
                merkle_root: params.genesis.merkle_root.to_hex(),
                time: header.time,
                bits: format!("0x{:08x}", header.bits),
                nonce: header.nonce,
                reward: params.genesis.block.transactions[0].outputs[0].value,
            },
            subsidy_halving_interval: consensus.subsidy_halving_interval,
            pow_target_spacing: consensus.pow_target_spacing,
            pow_limit: consensus.pow_limit.to_hex(),
            miner_confirmation_window: consensus.miner_confirmation_window,
            rule_change_activation_threshold: consensus.rule_change_activation_threshold,
            deployments: DeploymentId::ALL
                .iter()
                .map(|&id| {
                    let deployment = consensus.deployment(id);
                    DeploymentSummary {
                        name: id.name(),
                        bit: deployment.bit,
                        start_time: deployment.start_time,
                        timeout: deployment.timeout,
                        window: consensus.deployment_window(id),
                        threshold: consensus.deployment_threshold(id),
                        always_active: deployment.is_always_active(),
                    }
                })
                .collect(),
            checkpoint_count: params.checkpoints.checkpoints.len(),
            checkpoint_tip_height: params.checkpoints.last().map(|c| c.height),
            dns_seeds: params.dns_seeds.len(),
            fixed_seeds: params.fixed_seeds.len(),
        }
    }
}

fn print_usage() {
    println!("Usage: chc-params [NETWORK] [--json]");
    println!();
    println!("Prints the chain parameters for NETWORK (default: main).");
    println!("Networks: main, test, regtest");
}

fn print_report(params: &ChainParams) {
    let header = &params.genesis.block.header;
    let consensus = &params.consensus;

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║             CHAINCOIN (CHC) CHAIN PARAMETERS             ║");
    println!("║                  Main · Test · Regtest                   ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("Network:       {}", params.network_id());
    println!("Magic:         {}", hex::encode(params.message_start));
    println!("P2P Port:      {}", params.default_port);
    println!("RPC Port:      {}", params.default_rpc_port);
    println!();

    println!("Genesis Block:");
    println!("  Hash:        {}", params.genesis.hash);
    println!("  Merkle Root: {}", params.genesis.merkle_root);
    println!("  Time:        {}", header.time);
    println!("  Bits:        0x{:08x}", header.bits);
    println!("  Nonce:       {}", header.nonce);
    println!(
        "  Reward:      {} CHC",
        params.genesis.block.transactions[0].outputs[0].value / COIN
    );
    println!();

    println!("Consensus:");
    println!("  Halving Interval:     {}", consensus.subsidy_halving_interval);
    println!("  Target Spacing:       {}s", consensus.pow_target_spacing);
    println!("  Retarget Interval:    {}", consensus.pow_retarget_interval);
    println!("  Averaging Interval:   {}", consensus.pow_averaging_interval);
    println!("  Confirmation Window:  {}", consensus.miner_confirmation_window);
    println!("  Activation Threshold: {}", consensus.rule_change_activation_threshold);
    println!("  PoW Limit:            {}", consensus.pow_limit);
    println!();

    println!("Deployments:");
    for id in DeploymentId::ALL {
        let deployment = consensus.deployment(id);
        if deployment.is_always_active() {
            println!("  {:<10} bit {:>2}  always active", id.name(), deployment.bit);
        } else {
            println!(
                "  {:<10} bit {:>2}  {} -> {}  window {}  threshold {}",
                id.name(),
                deployment.bit,
                deployment.start_time,
                deployment.timeout,
                consensus.deployment_window(id),
                consensus.deployment_threshold(id),
            );
        }
    }
    println!();

    println!("Checkpoints:   {}", params.checkpoints.checkpoints.len());
    if let Some(tip) = params.checkpoints.last() {
        println!("  Tip:         height {} / {}", tip.height, tip.hash);
    }
    println!();

    println!(
        "Seeds:         {} dns, {} fixed",
        params.dns_seeds.len(),
        params.fixed_seeds.len()
    );
    println!(
        "Base58:        pubkey {:?}, script {:?}, secret {:?}",
        params.base58_prefixes.pubkey_address,
        params.base58_prefixes.script_address,
        params.base58_prefixes.secret_key,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut network: Option<String> = None;
    let mut json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            name if !name.starts_with('-') && network.is_none() => {
                network = Some(name.to_string());
            }
            other => {
                eprintln!("Error: unrecognized argument \"{other}\"");
                eprintln!();
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let network = network.unwrap_or_else(|| "main".to_string());

    if let Err(e) = select_network(&network) {
        eprintln!("Error: {e}");
        eprintln!("Known networks: main, test, regtest");
        std::process::exit(1);
    }

    let params = current_params();

    if json {
        println!("{}", serde_json::to_string_pretty(&ParamsSummary::new(params))?);
    } else {
        print_report(params);
    }

    Ok(())
}
