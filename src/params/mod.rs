//! Network parameters - presets, descriptors, and the selection registry

mod checkpoint;
mod consensus;
mod deployment;
mod descriptor;
mod error;
mod network;
mod presets;
mod registry;

pub use checkpoint::*;
pub use consensus::*;
pub use deployment::*;
pub use descriptor::*;
pub use error::*;
pub use network::*;
pub use presets::*;
pub use registry::*;
