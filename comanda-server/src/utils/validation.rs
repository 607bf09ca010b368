//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the CRUD
//! handlers. Limits are UX bounds, not storage constraints - the stores
//! accept whatever the boundary lets through.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: organization, category, item, staff, customer, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions (order notes, item descriptions)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: table number, phone, color codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty (after trimming) and within
/// the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
