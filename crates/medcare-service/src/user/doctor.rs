//! Doctor onboarding and removal.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, warn};
use uuid::Uuid;

use medcare_auth::password::PasswordHasher;
use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_core::traits::avatar::AvatarStorage;
use medcare_database::store::UserStore;
use medcare_entity::user::{User, UserRole};

use super::service::AccountFields;
use crate::validation::{FILL_FULL_FORM, filled};

/// Avatar MIME types accepted for doctors.
pub const ALLOWED_AVATAR_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// An uploaded avatar image.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// Raw image bytes.
    pub data: Bytes,
    /// Declared content type.
    pub mime_type: String,
}

/// Text fields of a doctor creation form.
#[derive(Debug, Clone, Default)]
pub struct AddDoctorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub did: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub password: Option<String>,
    pub doctor_department: Option<String>,
}

/// Admin-side doctor management backed by the avatar store.
#[derive(Debug, Clone)]
pub struct DoctorService {
    users: Arc<dyn UserStore>,
    avatars: Arc<dyn AvatarStorage>,
    hasher: Arc<PasswordHasher>,
    password_min_length: usize,
    max_avatar_bytes: usize,
}

impl DoctorService {
    /// Creates a new doctor service.
    pub fn new(
        users: Arc<dyn UserStore>,
        avatars: Arc<dyn AvatarStorage>,
        hasher: Arc<PasswordHasher>,
        password_min_length: usize,
        max_avatar_bytes: usize,
    ) -> Self {
        Self {
            users,
            avatars,
            hasher,
            password_min_length,
            max_avatar_bytes,
        }
    }

    /// Register a doctor with an avatar.
    pub async fn add_doctor(
        &self,
        admin: &User,
        req: AddDoctorRequest,
        avatar: Option<AvatarUpload>,
    ) -> AppResult<User> {
        let avatar = avatar
            .filter(|a| !a.data.is_empty())
            .ok_or_else(|| AppError::validation("Doctor Avatar Required!"))?;
        if !ALLOWED_AVATAR_TYPES.contains(&avatar.mime_type.as_str()) {
            return Err(AppError::validation("File Format Not Supported!"));
        }
        if avatar.data.len() > self.max_avatar_bytes {
            return Err(AppError::validation(format!(
                "Doctor Avatar Must Not Exceed {} Bytes!",
                self.max_avatar_bytes
            )));
        }

        let (Some(first_name), Some(last_name), Some(email), Some(phone), Some(did)) = (
            filled(&req.first_name),
            filled(&req.last_name),
            filled(&req.email),
            filled(&req.phone),
            filled(&req.did),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        let (Some(dob), Some(gender), Some(password), Some(department)) = (
            filled(&req.dob),
            filled(&req.gender),
            req.password.as_deref().filter(|p| !p.is_empty()),
            filled(&req.doctor_department),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };

        let fields = AccountFields {
            first_name,
            last_name,
            email,
            phone: phone.to_string(),
            external_id: did.to_string(),
            dob,
            gender,
            password,
        };
        let mut data = fields.into_create(UserRole::Doctor, &self.hasher, self.password_min_length)?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Doctor With This Email Already Exists!"));
        }

        let stored = self
            .avatars
            .upload(avatar.data, &avatar.mime_type)
            .await
            .map_err(|e| {
                error!(error = %e, provider = self.avatars.provider_type(), "Avatar upload failed");
                AppError::internal("Failed To Upload Doctor Avatar")
            })?;

        data.doctor_department = Some(department.to_string());
        data.avatar_public_id = Some(stored.public_id.clone());
        data.avatar_url = Some(stored.url);

        match self.users.create(&data).await {
            Ok(doctor) => {
                info!(
                    doctor_id = %doctor.id,
                    created_by = %admin.id,
                    department,
                    "Doctor registered"
                );
                Ok(doctor)
            }
            Err(e) => {
                if let Err(cleanup) = self.avatars.destroy(&stored.public_id).await {
                    warn!(error = %cleanup, public_id = %stored.public_id, "Orphaned avatar");
                }
                Err(e)
            }
        }
    }

    /// Remove a doctor and their avatar.
    pub async fn delete_doctor(&self, id: Uuid) -> AppResult<()> {
        let doctor = self
            .users
            .find_by_id(id)
            .await?
            .filter(User::is_doctor)
            .ok_or_else(|| AppError::not_found("Doctor Not Found!"))?;

        if let Some(public_id) = doctor.avatar_public_id.as_deref() {
            if let Err(e) = self.avatars.destroy(public_id).await {
                warn!(error = %e, public_id, "Failed to remove doctor avatar");
            }
        }

        self.users.delete(doctor.id).await?;
        info!(doctor_id = %doctor.id, "Doctor deleted");
        Ok(())
    }
}
