//! Shared application state for Axum handlers.

use std::sync::Arc;

use medcare_auth::bootstrap::BootstrapPolicy;
use medcare_auth::jwt::TokenCodec;
use medcare_auth::password::PasswordHasher;
use medcare_auth::resolver::AuthResolver;
use medcare_core::config::AppConfig;
use medcare_core::traits::avatar::AvatarStorage;
use medcare_database::Stores;
use medcare_service::{
    AppointmentReconciler, AppointmentService, DoctorService, MessageService, UserService,
};

/// Application state shared across all handlers via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // -- Auth --
    /// Token to user resolution.
    pub resolver: AuthResolver,
    /// Admin creation policy.
    pub bootstrap: Arc<BootstrapPolicy>,

    // -- Services --
    /// Registration, login and admin creation.
    pub user_service: Arc<UserService>,
    /// Doctor onboarding and removal.
    pub doctor_service: Arc<DoctorService>,
    /// Appointment booking and administration.
    pub appointment_service: Arc<AppointmentService>,
    /// Contact messages.
    pub message_service: Arc<MessageService>,
}

impl AppState {
    /// Wire services over the given stores and avatar storage.
    pub fn new(config: AppConfig, stores: Stores, avatars: Arc<dyn AvatarStorage>) -> Self {
        let codec = Arc::new(TokenCodec::new(&config.auth));
        let hasher = Arc::new(PasswordHasher::new());
        let password_min_length = config.auth.password_min_length;

        let resolver = AuthResolver::new(Arc::clone(&codec), Arc::clone(&stores.users));
        let bootstrap = BootstrapPolicy::new(Arc::clone(&stores.users), resolver.clone());

        let user_service = UserService::new(
            Arc::clone(&stores.users),
            Arc::clone(&hasher),
            codec,
            password_min_length,
        );
        let doctor_service = DoctorService::new(
            Arc::clone(&stores.users),
            avatars,
            hasher,
            password_min_length,
            config.storage.max_avatar_bytes,
        );
        let appointment_service = AppointmentService::new(
            stores.appointments,
            AppointmentReconciler::new(Arc::clone(&stores.users)),
        );
        let message_service = MessageService::new(stores.messages);

        Self {
            config: Arc::new(config),
            resolver,
            bootstrap: Arc::new(bootstrap),
            user_service: Arc::new(user_service),
            doctor_service: Arc::new(doctor_service),
            appointment_service: Arc::new(appointment_service),
            message_service: Arc::new(message_service),
        }
    }
}
