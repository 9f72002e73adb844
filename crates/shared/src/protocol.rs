use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Department, Role, UserProfile};

/// The editable subset of a [`UserProfile`]. A full copy of these fields is
/// staged when edit mode is entered and submitted as a whole on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
}

impl ProfilePatch {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            department: profile.department,
        }
    }
}

/// Payload sent to the identity service when creating an account.
///
/// The password confirmation field is local to the registration form and has
/// no counterpart here; new accounts always start as active employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub phone: String,
    pub role: Role,
    pub is_active: bool,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: UserId(7),
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-0100".into(),
            department: Department::It,
            role: Role::Agent,
            is_active: true,
            avatar_url: None,
            last_active: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn patch_copies_every_editable_field() {
        let profile = profile();
        let patch = ProfilePatch::from_profile(&profile);
        assert_eq!(patch.name, profile.name);
        assert_eq!(patch.email, profile.email);
        assert_eq!(patch.phone, profile.phone);
        assert_eq!(patch.department, profile.department);
    }

    #[test]
    fn department_serializes_snake_case() {
        let patch = ProfilePatch::from_profile(&profile());
        let value = serde_json::to_value(&patch).expect("serialize");
        assert_eq!(value["department"], "it");
    }
}
