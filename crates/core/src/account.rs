//! Account rules: membership plans and email normalization/validation.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Well-known membership plan names.
///
/// These must match the `ck_users_plan` check constraint in
/// `20260301000001_create_users_table.sql`.
pub const PLAN_STANDARD: &str = "standard";
pub const PLAN_PREMIUM: &str = "premium";

/// All valid membership plans.
pub const VALID_PLANS: &[&str] = &[PLAN_STANDARD, PLAN_PREMIUM];

/// Check whether a plan name is one of the known plans.
pub fn is_valid_plan(plan: &str) -> bool {
    VALID_PLANS.contains(&plan)
}

/// Normalize an email address for storage and lookup.
///
/// Emails are stored lowercased and trimmed so the unique index on
/// `users.email` is effectively case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address shape.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}
