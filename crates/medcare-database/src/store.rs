//! Store traits.
//!
//! Services depend on these traits only, so the same business logic runs
//! against PostgreSQL in production and against the in-memory stores in
//! tests and local development.

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use medcare_core::result::AppResult;
use medcare_entity::appointment::{Appointment, CreateAppointment, UpdateAppointment};
use medcare_entity::message::{CreateMessage, Message};
use medcare_entity::user::{CreateUser, User, UserRole};

/// Message used when an insert collides with an existing email.
pub const DUPLICATE_EMAIL: &str = "Duplicate email Entered";

/// Persistence for users of every role.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find the doctor with the given name in the given department.
    ///
    /// When several match, the earliest-created one wins, ties broken by id.
    async fn find_doctor(
        &self,
        first_name: &str,
        last_name: &str,
        department: &str,
    ) -> AppResult<Option<User>>;

    /// All users holding `role`, oldest first.
    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Number of users holding `role`.
    async fn count_by_role(&self, role: UserRole) -> AppResult<u64>;

    /// Insert a user. Fails with a conflict when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Replace a user's password hash. Returns false if no such user.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool>;

    /// Remove a user. Returns false if no such user.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence for appointments.
#[async_trait]
pub trait AppointmentStore: Send + Sync + Debug + 'static {
    /// Insert an appointment with status `Pending`.
    async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment>;

    /// Find an appointment by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;

    /// Every appointment, oldest first.
    async fn list_all(&self) -> AppResult<Vec<Appointment>>;

    /// Appointments booked with one doctor, oldest first.
    async fn list_by_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<Appointment>>;

    /// Apply the set fields of `data`. Returns `None` if no such appointment.
    async fn update(&self, id: Uuid, data: &UpdateAppointment) -> AppResult<Option<Appointment>>;

    /// Remove an appointment. Returns false if no such appointment.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Persistence for contact messages.
#[async_trait]
pub trait MessageStore: Send + Sync + Debug + 'static {
    /// Insert a message.
    async fn create(&self, data: &CreateMessage) -> AppResult<Message>;

    /// Find a message by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>>;

    /// Every message, oldest first.
    async fn list_all(&self) -> AppResult<Vec<Message>>;

    /// Remove a message. Returns false if no such message.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
