//! Edit/view state machine for the signed-in user's profile record.
//!
//! The committed record is never observed in a partially edited state: edits
//! accumulate in a staged copy of the editable fields and only reach the
//! identity service as a whole on save.

use std::sync::Arc;

use shared::{
    domain::{Department, UserProfile},
    protocol::ProfilePatch,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{error::FormError, IdentityService, NoticeKind, Notifier};

pub struct ProfileEditor {
    identity: Arc<dyn IdentityService>,
    notifier: Arc<dyn Notifier>,
    inner: Mutex<EditorState>,
}

struct EditorState {
    committed: UserProfile,
    /// `Some` exactly while in edit mode; always a structurally complete
    /// copy of the editable fields.
    staged: Option<ProfilePatch>,
    save_in_flight: bool,
    /// Bumped by cancel so a save completing afterwards cannot touch a
    /// buffer that no longer exists.
    edit_epoch: u64,
}

impl EditorState {
    fn view(&self) -> UserProfile {
        let mut view = self.committed.clone();
        if let Some(staged) = &self.staged {
            view.name = staged.name.clone();
            view.email = staged.email.clone();
            view.phone = staged.phone.clone();
            view.department = staged.department;
        }
        view
    }
}

impl ProfileEditor {
    pub fn new(
        committed: UserProfile,
        identity: Arc<dyn IdentityService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            identity,
            notifier,
            inner: Mutex::new(EditorState {
                committed,
                staged: None,
                save_in_flight: false,
                edit_epoch: 0,
            }),
        }
    }

    /// Fetches the committed record from the identity service and wraps it
    /// in a fresh editor in viewing mode.
    pub async fn load(
        identity: Arc<dyn IdentityService>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, FormError> {
        let committed = identity.current_profile().await?;
        Ok(Self::new(committed, identity, notifier))
    }

    pub async fn is_editing(&self) -> bool {
        self.inner.lock().await.staged.is_some()
    }

    /// The committed record, ignoring any staged edits.
    pub async fn committed(&self) -> UserProfile {
        self.inner.lock().await.committed.clone()
    }

    /// The record as the screen should present it: committed values while
    /// viewing, the staged values while editing.
    pub async fn current_view(&self) -> UserProfile {
        self.inner.lock().await.view()
    }

    /// Enters edit mode, staging an exact copy of the editable fields.
    /// A no-op while already editing; the existing buffer is preserved.
    pub async fn begin_edit(&self) {
        let mut inner = self.inner.lock().await;
        if inner.staged.is_none() {
            inner.staged = Some(ProfilePatch::from_profile(&inner.committed));
            debug!(user = inner.committed.user_id.0, "profile: entering edit mode");
        }
    }

    /// Mutates one staged field. Field names follow the UI wiring:
    /// `name`, `email`, `phone`, `department`.
    pub async fn update_field(&self, field: &str, value: &str) -> Result<(), FormError> {
        let mut inner = self.inner.lock().await;
        let Some(staged) = inner.staged.as_mut() else {
            return Err(FormError::NotEditing);
        };
        match field {
            "name" => staged.name = value.to_string(),
            "email" => staged.email = value.to_string(),
            "phone" => staged.phone = value.to_string(),
            "department" => {
                staged.department = value
                    .parse::<Department>()
                    .map_err(|_| FormError::InvalidField(format!("department={value}")))?;
            }
            other => return Err(FormError::InvalidField(other.to_string())),
        }
        debug!(field, "profile: staged field updated");
        Ok(())
    }

    /// Discards the staged buffer and returns to viewing mode. The committed
    /// record is untouched. A no-op while viewing.
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        if inner.staged.take().is_some() {
            inner.edit_epoch += 1;
            debug!("profile: edit cancelled, staged buffer discarded");
        }
    }

    /// Commits the staged edits through the identity service.
    ///
    /// The service is handed an immutable snapshot of the buffer; edits and
    /// cancels issued while the call is in flight apply to the in-memory
    /// buffer immediately but never alter the request. On success the
    /// committed record is replaced by the record the service returned, which
    /// may differ from the staged values through server-side normalization.
    pub async fn save(&self) -> Result<UserProfile, FormError> {
        let (patch, epoch) = {
            let mut inner = self.inner.lock().await;
            if inner.save_in_flight {
                return Err(FormError::OperationInProgress);
            }
            let Some(staged) = inner.staged.clone() else {
                return Err(FormError::NotEditing);
            };
            inner.save_in_flight = true;
            (staged, inner.edit_epoch)
        };

        let result = self.identity.update_profile(patch).await;

        let mut inner = self.inner.lock().await;
        inner.save_in_flight = false;
        let cancelled = inner.edit_epoch != epoch;
        match result {
            Ok(updated) => {
                inner.committed = updated.clone();
                if cancelled {
                    // The edit session is gone; keep the server's record but
                    // leave whatever mode the user is in now alone.
                    warn!("profile: save completed after cancel, refreshing committed record only");
                } else {
                    inner.staged = None;
                    info!(user = updated.user_id.0, "profile: update committed");
                    self.notifier.notify(
                        NoticeKind::Info,
                        "Profile updated",
                        "Your profile has been successfully updated.",
                    );
                }
                Ok(updated)
            }
            Err(err) => {
                if cancelled {
                    warn!(error = %err, "profile: ignoring failure that completed after cancel");
                    return Err(err.into());
                }
                warn!(error = %err, "profile: update failed, staged edits preserved");
                self.notifier.notify(
                    NoticeKind::Error,
                    "Update failed",
                    "Failed to update profile. Please try again.",
                );
                Err(err.into())
            }
        }
    }
}
