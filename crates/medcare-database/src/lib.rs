//! # medcare-database
//!
//! Persistence for MedCare. The store traits in [`store`] are the only way
//! the rest of the system touches users, appointments and messages; they
//! are implemented over PostgreSQL ([`repositories`]) and in process
//! memory ([`memory`]).

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use medcare_core::config::{DatabaseBackend, DatabaseConfig};
use medcare_core::error::AppError;

pub use connection::connect_pool;
pub use store::{AppointmentStore, MessageStore, UserStore};

/// The full set of stores the application runs against.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User collection.
    pub users: Arc<dyn UserStore>,
    /// Appointment collection.
    pub appointments: Arc<dyn AppointmentStore>,
    /// Message collection.
    pub messages: Arc<dyn MessageStore>,
}

impl Stores {
    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(memory::MemoryUserStore::new()),
            appointments: Arc::new(memory::MemoryAppointmentStore::new()),
            messages: Arc::new(memory::MemoryMessageStore::new()),
        }
    }

    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            users: Arc::new(repositories::UserRepository::new(pool.clone())),
            appointments: Arc::new(repositories::AppointmentRepository::new(pool.clone())),
            messages: Arc::new(repositories::MessageRepository::new(pool)),
        }
    }

    /// Build the stores selected by configuration, connecting and migrating
    /// when the backend is PostgreSQL.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.backend {
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                Ok(Self::memory())
            }
            DatabaseBackend::Postgres => {
                let pool = connect_pool(config).await?;
                migration::run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
        }
    }
}
