//! In-memory implementations of the store traits.
//!
//! Rows live in insertion order behind a `tokio::sync::RwLock`. Ids are
//! UUIDv7 and timestamps are taken at insert time, so insertion order,
//! `created_at` order and id order all agree.

pub mod appointment;
pub mod message;
pub mod user;

pub use appointment::MemoryAppointmentStore;
pub use message::MemoryMessageStore;
pub use user::MemoryUserStore;
