//! Process-wide network selection
//!
//! A node serves exactly one network per process. The registry records which
//! one was picked at startup and hands out that network's parameters to the
//! rest of the codebase. Reading parameters before a selection was made is a
//! programming error and aborts.

use super::{chain_params, ChainParams, Network, ParamsError};
use std::sync::Mutex;

/// Holds the network selection for one process.
///
/// The global instance behind [`select_network`] and [`current_params`] is
/// what production code uses; tests construct their own instances so they
/// can run in parallel without sharing state.
pub struct ParamsRegistry {
    selected: Mutex<Option<Network>>,
}

impl ParamsRegistry {
    pub const fn new() -> Self {
        ParamsRegistry {
            selected: Mutex::new(None),
        }
    }

    /// Select the network by its canonical id ("main", "test", "regtest").
    ///
    /// An unknown id leaves any previous selection untouched.
    pub fn select(&self, name: &str) -> Result<(), ParamsError> {
        let network: Network = name.parse()?;
        self.bind(network);
        Ok(())
    }

    /// Select a network that is already resolved
    pub fn bind(&self, network: Network) {
        *self.selected.lock().unwrap() = Some(network);
    }

    /// Parameters of the selected network, aborting if none was selected
    pub fn current(&self) -> &'static ChainParams {
        self.try_current().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Parameters of the selected network
    pub fn try_current(&self) -> Result<&'static ChainParams, ParamsError> {
        self.selected
            .lock()
            .unwrap()
            .map(chain_params)
            .ok_or(ParamsError::RegistryNotSelected)
    }

    pub fn selected(&self) -> Option<Network> {
        *self.selected.lock().unwrap()
    }
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: ParamsRegistry = ParamsRegistry::new();

/// Select the process-wide network by id
pub fn select_network(name: &str) -> Result<(), ParamsError> {
    GLOBAL.select(name)
}

/// Parameters of the process-wide network, aborting if none was selected
pub fn current_params() -> &'static ChainParams {
    GLOBAL.current()
}

/// Parameters of the process-wide network
pub fn try_current_params() -> Result<&'static ChainParams, ParamsError> {
    GLOBAL.try_current()
}

/// Parameters for a network id without touching the process-wide selection
pub fn params_for(name: &str) -> Result<&'static ChainParams, ParamsError> {
    Ok(chain_params(name.parse()?))
}
