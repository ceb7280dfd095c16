//! Chain parameter error taxonomy

use super::Network;
use crate::chain::GenesisMismatch;
use thiserror::Error;

/// Chain parameter errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// A network preset failed genesis verification. The process must not
    /// run with an unverifiable genesis; the preset table turns this into
    /// a startup abort.
    #[error("Genesis verification failed for {network}: {mismatch}")]
    GenesisMismatch {
        network: Network,
        mismatch: GenesisMismatch,
    },
    /// The given name is not one of the case-sensitive network tokens
    #[error("Unknown network \"{0}\"")]
    UnknownNetwork(String),
    /// Parameters were requested before any network was selected
    #[error("No network selected - call select_network first")]
    RegistryNotSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_network_names_the_token() {
        let err = ParamsError::UnknownNetwork("mainnet".to_string());
        assert!(err.to_string().contains("\"mainnet\""));
    }
}
