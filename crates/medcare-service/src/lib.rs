//! # medcare-service
//!
//! Business logic for MedCare. Services receive their stores and helpers
//! as `Arc`s at construction and are shared across requests.

pub mod appointment;
pub mod message;
pub mod user;
pub mod validation;

pub use appointment::{AppointmentReconciler, AppointmentService};
pub use message::MessageService;
pub use user::{AuthSession, DoctorService, UserService};
