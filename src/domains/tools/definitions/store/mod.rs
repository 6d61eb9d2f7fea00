//! Store tools: inventory lookup.

pub mod inventory;

pub use inventory::{GetInventoryParams, GetInventoryTool};
