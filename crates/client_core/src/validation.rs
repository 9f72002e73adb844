//! Password-strength scoring and cross-field draft validation.
//!
//! Everything here is pure and synchronous: a report is always derived from
//! the draft it was asked about, never cached.

/// Number of satisfied strength criteria, 0-4.
///
/// Criteria are evaluated independently (no sequential gating): length of at
/// least 8 characters, an ASCII uppercase letter, an ASCII digit, and a
/// character outside `[A-Za-z0-9]`.
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;
    if password.chars().count() >= 8 {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }
    strength
}

/// Label shown next to the strength meter. Strength 0 renders nothing.
pub fn strength_label(strength: u8) -> &'static str {
    match strength {
        0 => "",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}

/// Exact string equality, used for the password confirmation check.
pub fn fields_match(a: &str, b: &str) -> bool {
    a == b
}

/// Derived validation state of a registration draft.
///
/// `passwords_match` is true for two empty passwords; eligibility separately
/// requires a non-empty password, so an untouched form never submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub name_non_empty: bool,
    pub email_present: bool,
    pub password_present: bool,
    pub passwords_match: bool,
    pub terms_accepted: bool,
}

impl ValidationReport {
    /// Department and phone are optional and never gate submission.
    pub fn submit_eligible(&self) -> bool {
        self.name_non_empty
            && self.email_present
            && self.password_present
            && self.passwords_match
            && self.terms_accepted
    }
}
