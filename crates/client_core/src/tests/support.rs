use std::{collections::VecDeque, sync::Arc};

use chrono::{TimeZone, Utc};
use shared::domain::{Department, Role, UserId};
use tokio::sync::{Mutex, Notify};

use super::*;

pub fn sample_profile() -> UserProfile {
    UserProfile {
        user_id: UserId(7),
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        phone: "555-0100".into(),
        department: Department::It,
        role: Role::Agent,
        is_active: true,
        avatar_url: None,
        last_active: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        created_at: Utc.with_ymd_and_hms(2023, 1, 15, 9, 30, 0).unwrap(),
    }
}

/// In-memory identity capability with scripted failures, recorded calls, and
/// an optional gate that holds requests open until the test releases them.
pub struct TestIdentityService {
    base: Mutex<UserProfile>,
    update_failures: Mutex<VecDeque<ApiError>>,
    register_failures: Mutex<VecDeque<ApiError>>,
    gate: Option<Arc<Notify>>,
    pub update_calls: Mutex<Vec<ProfilePatch>>,
    pub register_calls: Mutex<Vec<RegistrationRequest>>,
}

impl TestIdentityService {
    pub fn new(base: UserProfile) -> Self {
        Self {
            base: Mutex::new(base),
            update_failures: Mutex::new(VecDeque::new()),
            register_failures: Mutex::new(VecDeque::new()),
            gate: None,
            update_calls: Mutex::new(Vec::new()),
            register_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_update_failure(mut self, err: ApiError) -> Self {
        self.update_failures.get_mut().push_back(err);
        self
    }

    pub fn with_register_failure(mut self, err: ApiError) -> Self {
        self.register_failures.get_mut().push_back(err);
        self
    }

    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub async fn update_call_count(&self) -> usize {
        self.update_calls.lock().await.len()
    }

    pub async fn register_call_count(&self) -> usize {
        self.register_calls.lock().await.len()
    }
}

/// The fake server normalizes input the way the real one does: surrounding
/// whitespace is trimmed before the record is committed.
fn apply(profile: &UserProfile, patch: &ProfilePatch) -> UserProfile {
    let mut updated = profile.clone();
    updated.name = patch.name.trim().to_string();
    updated.email = patch.email.trim().to_string();
    updated.phone = patch.phone.trim().to_string();
    updated.department = patch.department;
    updated
}

#[async_trait]
impl IdentityService for TestIdentityService {
    async fn current_profile(&self) -> Result<UserProfile, ApiError> {
        Ok(self.base.lock().await.clone())
    }

    async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile, ApiError> {
        self.update_calls.lock().await.push(patch.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(err) = self.update_failures.lock().await.pop_front() {
            return Err(err);
        }
        let mut base = self.base.lock().await;
        let updated = apply(&base, &patch);
        *base = updated.clone();
        Ok(updated)
    }

    async fn register(&self, request: RegistrationRequest) -> Result<(), ApiError> {
        self.register_calls.lock().await.push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(err) = self.register_failures.lock().await.pop_front() {
            return Err(err);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: std::sync::Mutex<Vec<(NoticeKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .expect("notices lock")
            .iter()
            .map(|(_, title, _)| title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        self.notices.lock().expect("notices lock").push((
            kind,
            title.to_string(),
            description.to_string(),
        ));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: std::sync::Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes
            .lock()
            .expect("routes lock")
            .push(route.to_string());
    }
}

pub fn editor_with(
    service: TestIdentityService,
) -> (
    Arc<ProfileEditor>,
    Arc<TestIdentityService>,
    Arc<RecordingNotifier>,
) {
    let service = Arc::new(service);
    let notifier = Arc::new(RecordingNotifier::default());
    let editor = ProfileEditor::new(
        sample_profile(),
        Arc::clone(&service) as Arc<dyn IdentityService>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );
    (Arc::new(editor), service, notifier)
}

pub fn form_with(
    service: TestIdentityService,
) -> (
    Arc<RegistrationForm>,
    Arc<TestIdentityService>,
    Arc<RecordingNotifier>,
    Arc<RecordingNavigator>,
) {
    let service = Arc::new(service);
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let form = RegistrationForm::new(
        Arc::clone(&service) as Arc<dyn IdentityService>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    (Arc::new(form), service, notifier, navigator)
}

/// Fills the draft with the canonical submit-eligible values and accepts the
/// terms.
pub async fn fill_valid_draft(form: &RegistrationForm) {
    for (field, value) in [
        ("name", "Jane Doe"),
        ("email", "jane@x.com"),
        ("password", "Abc12345!"),
        ("password_confirmation", "Abc12345!"),
        ("department", "IT"),
        ("phone", "555-0100"),
    ] {
        form.set_field(field, value).await.expect("set field");
    }
    assert!(form.toggle_terms_accepted().await);
}
