//! Account services: registration, login, admin and doctor management.

pub mod doctor;
pub mod service;

pub use doctor::{AddDoctorRequest, AvatarUpload, DoctorService};
pub use service::{AddAdminRequest, AuthSession, LoginRequest, RegisterPatientRequest, UserService};
