//! Network identifiers

use super::ParamsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three chains a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production chain
    Main,
    /// The public test chain
    Test,
    /// The private regression-test chain
    Regtest,
}

impl Network {
    /// All networks, in preset-table order
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// The canonical token, exactly as `select_network` accepts it
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    /// Tokens are matched case-sensitively; anything else is rejected with
    /// the offending string preserved in the error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
