//! Appointment domain entities.

pub mod model;
pub mod status;

pub use model::{Appointment, CreateAppointment, UpdateAppointment};
pub use status::AppointmentStatus;
