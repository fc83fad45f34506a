//! Traits implemented by infrastructure crates.

pub mod avatar;

pub use avatar::{AvatarStorage, StoredAvatar};
