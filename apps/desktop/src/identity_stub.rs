use async_trait::async_trait;
use chrono::Utc;
use client_core::IdentityService;
use shared::{
    domain::{Department, Role, UserId, UserProfile},
    error::{ApiError, ErrorCode},
    protocol::{ProfilePatch, RegistrationRequest},
};
use tokio::sync::Mutex;

/// In-memory identity service backing the demo screens with mock data.
///
/// Mirrors the real service's observable behavior where it matters to the
/// controllers: updates are normalized before being committed, and duplicate
/// registrations are rejected with a conflict.
pub struct InMemoryIdentityService {
    profile: Mutex<UserProfile>,
    registered: Mutex<Vec<RegistrationRequest>>,
}

impl InMemoryIdentityService {
    pub fn seeded(name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            profile: Mutex::new(UserProfile {
                user_id: UserId(1),
                name: name.to_string(),
                email: email.to_string(),
                phone: "555-0100".into(),
                department: Department::It,
                role: Role::Agent,
                is_active: true,
                avatar_url: None,
                last_active: now,
                created_at: now,
            }),
            registered: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn current_profile(&self) -> Result<UserProfile, ApiError> {
        Ok(self.profile.lock().await.clone())
    }

    async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile, ApiError> {
        if patch.email.trim().is_empty() {
            return Err(ApiError::new(
                ErrorCode::Validation,
                "email must not be empty",
            ));
        }
        let mut profile = self.profile.lock().await;
        profile.name = patch.name.trim().to_string();
        profile.email = patch.email.trim().to_string();
        profile.phone = patch.phone.trim().to_string();
        profile.department = patch.department;
        profile.last_active = Utc::now();
        Ok(profile.clone())
    }

    async fn register(&self, request: RegistrationRequest) -> Result<(), ApiError> {
        let mut registered = self.registered.lock().await;
        let taken = self.profile.lock().await.email == request.email
            || registered.iter().any(|r| r.email == request.email);
        if taken {
            return Err(ApiError::new(
                ErrorCode::Conflict,
                "email already registered",
            ));
        }
        registered.push(request);
        Ok(())
    }
}
