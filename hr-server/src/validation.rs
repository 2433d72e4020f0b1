//! Input validation helpers
//!
//! Text length limits of the HR record columns. SQLite TEXT has no built-in
//! length enforcement, so the limits are checked here before any write.
//! Lengths are counted in characters, after trimming surrounding whitespace.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{EmployeeCreate, EmployeeUpdate};

// ── Text length limits ──────────────────────────────────────────────

/// Last name, name, patronymic
pub const MAX_NAME_LEN: usize = 30;

/// Postal address
pub const MAX_ADDRESS_LEN: usize = 100;

/// Position and division titles
pub const MAX_TITLE_LEN: usize = 50;

// ── Helpers ─────────────────────────────────────────────────────────

fn too_long(field: &str, len: usize, max_len: usize) -> AppError {
    AppError::with_message(
        ErrorCode::ValueTooLong,
        format!("{field} is too long ({len} chars, max {max_len})"),
    )
    .with_detail("field", field)
    .with_detail("max", max_len)
}

/// Trim a required string and check it is non-empty and within the limit
pub fn required_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::required_field(field));
    }
    bounded_text(value, field, max_len)
}

/// Trim a string that may be empty and check the limit
pub fn bounded_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.trim();
    let len = value.chars().count();
    if len > max_len {
        return Err(too_long(field, len, max_len));
    }
    Ok(value.to_string())
}

/// Optional variant of [`required_text`]: when present, the value must not be blank
pub fn optional_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    value
        .map(|v| required_text(&v, field, max_len))
        .transpose()
}

// ── Payloads ────────────────────────────────────────────────────────

pub fn employee_create(data: EmployeeCreate) -> AppResult<EmployeeCreate> {
    Ok(EmployeeCreate {
        last_name: required_text(&data.last_name, "last_name", MAX_NAME_LEN)?,
        name: required_text(&data.name, "name", MAX_NAME_LEN)?,
        patronymic: required_text(&data.patronymic, "patronymic", MAX_NAME_LEN)?,
        address: bounded_text(&data.address, "address", MAX_ADDRESS_LEN)?,
        birth_date: data.birth_date,
    })
}

pub fn employee_update(data: EmployeeUpdate) -> AppResult<EmployeeUpdate> {
    Ok(EmployeeUpdate {
        last_name: optional_text(data.last_name, "last_name", MAX_NAME_LEN)?,
        name: optional_text(data.name, "name", MAX_NAME_LEN)?,
        patronymic: optional_text(data.patronymic, "patronymic", MAX_NAME_LEN)?,
        address: data
            .address
            .map(|a| bounded_text(&a, "address", MAX_ADDRESS_LEN))
            .transpose()?,
        birth_date: data.birth_date,
    })
}

pub fn title(value: &str) -> AppResult<String> {
    required_text(value, "title", MAX_TITLE_LEN)
}
