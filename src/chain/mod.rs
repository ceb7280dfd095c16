//! Chain primitives - scripts, transactions, blocks, genesis construction

mod block;
mod genesis;
mod script;
mod transaction;

pub use block::*;
pub use genesis::*;
pub use script::*;
pub use transaction::*;
