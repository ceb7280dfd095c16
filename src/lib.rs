//! Chaincoin (CHC) Chain Parameters Library
//!
//! Deterministic genesis construction and the network parameter registry
//! for the main, test, and regression-test chains.
//!
//! CHC is the short form used in addresses, tickers, and protocol identifiers.

pub mod chain;
pub mod crypto;
pub mod params;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Genesis block reward (in base units)
    pub const GENESIS_REWARD: i64 = 16 * COIN;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name (short form for tickers/logos)
    pub const CHAIN_NAME: &str = "CHC";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Chaincoin";
}
