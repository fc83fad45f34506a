//! Avatar storage providers.

pub mod local;
pub mod memory;
