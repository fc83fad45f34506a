//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_entity::user::{CreateUser, User, UserRole};

use crate::store::{DUPLICATE_EMAIL, UserStore};

/// Process-local [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_doctor(
        &self,
        first_name: &str,
        last_name: &str,
        department: &str,
    ) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| {
                u.role == UserRole::Doctor
                    && u.first_name == first_name
                    && u.last_name == last_name
                    && u.doctor_department.as_deref() == Some(department)
            })
            .min_by_key(|u| (u.created_at, u.id))
            .cloned())
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn count_by_role(&self, role: UserRole) -> AppResult<u64> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.role == role).count() as u64)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict(DUPLICATE_EMAIL));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            dob: data.dob,
            gender: data.gender,
            role: data.role,
            external_id: data.external_id.clone(),
            password_hash: data.password_hash.clone(),
            doctor_department: data.doctor_department.clone(),
            avatar_public_id: data.avatar_public_id.clone(),
            avatar_url: data.avatar_url.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() != before)
    }
}
