use async_trait::async_trait;
use shared::{
    domain::UserProfile,
    error::{ApiError, ErrorCode},
    protocol::{ProfilePatch, RegistrationRequest},
};

pub mod error;
pub mod profile;
pub mod registration;
pub mod screens;
pub mod validation;

pub use error::FormError;
pub use profile::ProfileEditor;
pub use registration::{RegistrationDraft, RegistrationForm, RegistrationPhase};
pub use validation::{password_strength, strength_label, ValidationReport};

/// Route the client navigates to once registration completes.
pub const LOGIN_ROUTE: &str = "/login";

/// Identity/session capability. Authentication and persistence live behind
/// this seam; the controllers only ever see the committed records it returns.
///
/// At most one call is outstanding per controller instance.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn current_profile(&self) -> Result<UserProfile, ApiError>;
    async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile, ApiError>;
    async fn register(&self, request: RegistrationRequest) -> Result<(), ApiError>;
}

pub struct MissingIdentityService;

#[async_trait]
impl IdentityService for MissingIdentityService {
    async fn current_profile(&self) -> Result<UserProfile, ApiError> {
        Err(ApiError::new(
            ErrorCode::Unavailable,
            "identity service is unavailable",
        ))
    }

    async fn update_profile(&self, _patch: ProfilePatch) -> Result<UserProfile, ApiError> {
        Err(ApiError::new(
            ErrorCode::Unavailable,
            "identity service is unavailable",
        ))
    }

    async fn register(&self, _request: RegistrationRequest) -> Result<(), ApiError> {
        Err(ApiError::new(
            ErrorCode::Unavailable,
            "identity service is unavailable",
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Toast-notification capability. Fire and forget; nothing in the core
/// consumes a return value from it.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str);
}

pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _kind: NoticeKind, _title: &str, _description: &str) {}
}

/// Navigation capability, invoked once after a successful registration.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate_to(&self, _route: &str) {}
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod profile_tests;

#[cfg(test)]
#[path = "tests/registration_tests.rs"]
mod registration_tests;
