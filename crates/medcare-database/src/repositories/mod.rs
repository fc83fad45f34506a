//! PostgreSQL implementations of the store traits.

pub mod appointment;
pub mod message;
pub mod user;

pub use appointment::AppointmentRepository;
pub use message::MessageRepository;
pub use user::UserRepository;
