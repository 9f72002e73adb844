//! Registration draft collection, derived validation, and submit gating.

use std::sync::Arc;

use chrono::Utc;
use shared::{
    domain::{Department, Role},
    protocol::RegistrationRequest,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    error::FormError,
    validation::{fields_match, password_strength, ValidationReport},
    IdentityService, Navigator, NoticeKind, Notifier, LOGIN_ROUTE,
};

/// The in-memory draft behind the registration form. Created empty at mount,
/// mutated per event, consumed once on successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Local-only confirmation field; stripped from the request payload.
    pub password_confirmation: String,
    pub department: Option<Department>,
    pub phone: String,
    pub terms_accepted: bool,
}

impl RegistrationDraft {
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            name_non_empty: !self.name.is_empty(),
            email_present: !self.email.is_empty(),
            password_present: !self.password.is_empty(),
            passwords_match: fields_match(&self.password, &self.password_confirmation),
            terms_accepted: self.terms_accepted,
        }
    }

    pub fn password_strength(&self) -> u8 {
        password_strength(&self.password)
    }

    /// Snapshot sent to the identity service. New accounts register as
    /// active employees; the confirmation field stays local.
    fn to_request(&self) -> RegistrationRequest {
        let now = Utc::now();
        RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            department: self.department,
            phone: self.phone.clone(),
            role: Role::Employee,
            is_active: true,
            last_active: now,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    Editing,
    Submitting,
    /// Terminal; the draft has been consumed and the screen navigates away.
    Submitted,
}

pub struct RegistrationForm {
    identity: Arc<dyn IdentityService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<FormState>,
}

struct FormState {
    draft: RegistrationDraft,
    phase: RegistrationPhase,
}

impl RegistrationForm {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            notifier,
            navigator,
            inner: Mutex::new(FormState {
                draft: RegistrationDraft::default(),
                phase: RegistrationPhase::Editing,
            }),
        }
    }

    pub async fn phase(&self) -> RegistrationPhase {
        self.inner.lock().await.phase
    }

    pub async fn draft(&self) -> RegistrationDraft {
        self.inner.lock().await.draft.clone()
    }

    /// Recomputed from the current draft on every call; never cached.
    pub async fn validate(&self) -> ValidationReport {
        self.inner.lock().await.draft.validate()
    }

    pub async fn password_strength(&self) -> u8 {
        self.inner.lock().await.draft.password_strength()
    }

    /// Mutates one draft field. Field names follow the UI wiring: `name`,
    /// `email`, `password`, `password_confirmation`, `department`, `phone`.
    ///
    /// Accepted while a submit is in flight (the pending request already
    /// holds its own snapshot); rejected once registration has completed.
    pub async fn set_field(&self, field: &str, value: &str) -> Result<(), FormError> {
        let mut inner = self.inner.lock().await;
        if inner.phase == RegistrationPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let draft = &mut inner.draft;
        match field {
            "name" => draft.name = value.to_string(),
            "email" => draft.email = value.to_string(),
            "password" => draft.password = value.to_string(),
            "password_confirmation" => draft.password_confirmation = value.to_string(),
            "phone" => draft.phone = value.to_string(),
            "department" => {
                draft.department = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse::<Department>()
                            .map_err(|_| FormError::InvalidField(format!("department={value}")))?,
                    )
                };
            }
            other => return Err(FormError::InvalidField(other.to_string())),
        }
        debug!(field, "registration: draft field updated");
        Ok(())
    }

    /// Flips the terms gate and returns the new value. Ignored once the
    /// draft has been consumed.
    pub async fn toggle_terms_accepted(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.phase != RegistrationPhase::Submitted {
            inner.draft.terms_accepted = !inner.draft.terms_accepted;
        }
        inner.draft.terms_accepted
    }

    /// Validates the draft and, if eligible, registers the account.
    ///
    /// An ineligible draft fails locally without touching the identity
    /// service. On remote failure the draft is preserved in full so the user
    /// can correct and resubmit without retyping.
    pub async fn submit(&self) -> Result<(), FormError> {
        let request = {
            let mut inner = self.inner.lock().await;
            match inner.phase {
                RegistrationPhase::Submitting => return Err(FormError::OperationInProgress),
                RegistrationPhase::Submitted => return Err(FormError::AlreadySubmitted),
                RegistrationPhase::Editing => {}
            }
            let report = inner.draft.validate();
            if !report.submit_eligible() {
                self.advise_ineligible(&report);
                return Err(FormError::ValidationFailed(report));
            }
            inner.phase = RegistrationPhase::Submitting;
            inner.draft.to_request()
        };

        let result = self.identity.register(request).await;

        let mut inner = self.inner.lock().await;
        match result {
            Ok(()) => {
                inner.phase = RegistrationPhase::Submitted;
                inner.draft = RegistrationDraft::default();
                info!("registration: account created");
                self.notifier.notify(
                    NoticeKind::Info,
                    "Account created!",
                    "Your account has been created successfully.",
                );
                self.navigator.navigate_to(LOGIN_ROUTE);
                Ok(())
            }
            Err(err) => {
                inner.phase = RegistrationPhase::Editing;
                warn!(error = %err, "registration: submit failed, draft preserved");
                self.notifier.notify(
                    NoticeKind::Error,
                    "Registration failed",
                    "An error occurred during registration. Please try again.",
                );
                Err(err.into())
            }
        }
    }

    fn advise_ineligible(&self, report: &ValidationReport) {
        if !report.passwords_match {
            self.notifier.notify(
                NoticeKind::Error,
                "Password mismatch",
                "Passwords do not match. Please check and try again.",
            );
        } else if !report.terms_accepted {
            self.notifier.notify(
                NoticeKind::Error,
                "Terms required",
                "Please accept the terms and conditions to continue.",
            );
        } else {
            self.notifier.notify(
                NoticeKind::Error,
                "Missing information",
                "Name, email, and password are required.",
            );
        }
    }
}
