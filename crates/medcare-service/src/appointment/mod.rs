//! Appointment booking and administration.

pub mod reconciler;
pub mod service;

pub use reconciler::{AppointmentReconciler, AppointmentRequest};
pub use service::{AppointmentService, UpdateAppointmentRequest};
