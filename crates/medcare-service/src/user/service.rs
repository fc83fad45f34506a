//! Registration, login, admin creation and password reset.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use medcare_auth::bootstrap::AdminAdmission;
use medcare_auth::jwt::TokenCodec;
use medcare_auth::password::PasswordHasher;
use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_database::store::UserStore;
use medcare_entity::user::{CreateUser, User, UserRole};

use crate::validation::{FILL_FULL_FORM, FieldErrors, Scalar, filled, filled_scalar};

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Signed token for the user.
    pub token: String,
}

/// Body of a patient self-registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Scalar>,
    pub did: Option<Scalar>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub password: Option<String>,
    /// Accepted for compatibility and ignored: self-registration always
    /// creates a patient.
    pub role: Option<String>,
}

/// Body of a login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    /// When given, must match the account's role.
    pub role: Option<String>,
}

/// Body of an admin creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAdminRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Scalar>,
    #[serde(rename = "Aid")]
    pub aid: Option<Scalar>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub password: Option<String>,
}

/// Fields every account carries, after presence checks.
pub(crate) struct AccountFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: String,
    pub external_id: String,
    pub dob: &'a str,
    pub gender: &'a str,
    pub password: &'a str,
}

impl AccountFields<'_> {
    /// Validate formats and build the insert payload for `role`.
    pub(crate) fn into_create(
        self,
        role: UserRole,
        hasher: &PasswordHasher,
        password_min_length: usize,
    ) -> AppResult<CreateUser> {
        let mut errors = FieldErrors::new();
        errors.phone(&self.phone);
        errors.email(self.email);
        errors.min_chars(self.first_name, 3, "First Name");
        errors.min_chars(self.last_name, 3, "Last Name");
        let gender = errors.gender(self.gender);
        let dob = errors.dob(self.dob);
        errors.min_chars(self.password, password_min_length, "Password");
        errors.finish()?;

        let (Some(gender), Some(dob)) = (gender, dob) else {
            return Err(AppError::validation("Invalid gender or dob"));
        };

        Ok(CreateUser {
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            email: self.email.to_string(),
            phone: self.phone,
            dob,
            gender,
            role,
            external_id: self.external_id,
            password_hash: hasher.hash_password(self.password)?,
            doctor_department: None,
            avatar_public_id: None,
            avatar_url: None,
        })
    }
}

/// Account operations that end in a token, plus doctor listing and
/// password reset.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    codec: Arc<TokenCodec>,
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
        password_min_length: usize,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
            password_min_length,
        }
    }

    /// Self-registration of a patient.
    pub async fn register_patient(&self, req: RegisterPatientRequest) -> AppResult<AuthSession> {
        let (Some(first_name), Some(last_name), Some(email), Some(phone), Some(did)) = (
            filled(&req.first_name),
            filled(&req.last_name),
            filled(&req.email),
            filled_scalar(&req.phone),
            filled_scalar(&req.did),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        let (Some(dob), Some(gender), Some(password)) = (
            filled(&req.dob),
            filled(&req.gender),
            req.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };

        if let Some(role) = filled(&req.role).filter(|r| *r != UserRole::Patient.as_str()) {
            warn!(requested_role = role, "Ignoring role on patient registration");
        }

        let fields = AccountFields {
            first_name,
            last_name,
            email,
            phone: phone.to_text(),
            external_id: did.to_text(),
            dob,
            gender,
            password,
        };
        let user = self.create_account(fields, UserRole::Patient).await?;
        info!(user_id = %user.id, "Patient registered");
        self.session(user)
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, req: LoginRequest) -> AppResult<AuthSession> {
        let email = filled(&req.email);
        let password = req.password.as_deref().filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };

        let invalid = || AppError::validation("Invalid Email Or Password!");
        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;
        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        if let Some(role) = filled(&req.role) {
            if role != user.role.as_str() {
                return Err(AppError::validation("User Not Found With This Role!"));
            }
        }

        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.session(user)
    }

    /// Create an admin once the request has been admitted.
    pub async fn add_admin(
        &self,
        admission: &AdminAdmission,
        req: AddAdminRequest,
    ) -> AppResult<AuthSession> {
        let (Some(first_name), Some(last_name), Some(email), Some(phone), Some(aid)) = (
            filled(&req.first_name),
            filled(&req.last_name),
            filled(&req.email),
            filled_scalar(&req.phone),
            filled_scalar(&req.aid),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        let (Some(dob), Some(gender), Some(password)) = (
            filled(&req.dob),
            filled(&req.gender),
            req.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };

        let fields = AccountFields {
            first_name,
            last_name,
            email,
            phone: phone.to_text(),
            external_id: aid.to_text(),
            dob,
            gender,
            password,
        };
        let user = self.create_account(fields, UserRole::Admin).await?;

        match admission {
            AdminAdmission::Bootstrap => {
                info!(user_id = %user.id, "First admin created");
            }
            AdminAdmission::Guarded(by) => {
                info!(user_id = %user.id, created_by = %by.id, "Admin created");
            }
        }
        self.session(user)
    }

    /// Every doctor, oldest first.
    pub async fn list_doctors(&self) -> AppResult<Vec<User>> {
        self.users.list_by_role(UserRole::Doctor).await
    }

    /// Re-hash and store a new password for the account with `email`.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> AppResult<User> {
        let mut errors = FieldErrors::new();
        errors.min_chars(new_password, self.password_min_length, "Password");
        errors.finish()?;

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No user with email {email}")))?;

        let hash = self.hasher.hash_password(new_password)?;
        if !self.users.update_password(user.id, &hash).await? {
            return Err(AppError::not_found(format!("No user with email {email}")));
        }

        info!(user_id = %user.id, "Password reset");
        Ok(user)
    }

    async fn create_account(&self, fields: AccountFields<'_>, role: UserRole) -> AppResult<User> {
        let data = fields.into_create(role, &self.hasher, self.password_min_length)?;
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }
        self.users.create(&data).await
    }

    fn session(&self, user: User) -> AppResult<AuthSession> {
        let token = self.codec.issue(user.id)?;
        Ok(AuthSession { user, token })
    }
}
