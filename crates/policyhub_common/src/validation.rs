//! Required-field checks for JSON request bodies.

use crate::error::{validation_error, PolicyHubError};

/// Returns the value of a required text field, or `None` when it is missing.
///
/// Absent, `null` and empty strings all count as missing.
pub fn required<'a>(value: Option<&'a str>) -> Option<&'a str> {
    value.filter(|v| !v.is_empty())
}

/// Collects every required field in one pass and fails with a single message.
///
/// ```
/// use policyhub_common::validation::require_all;
///
/// let name = Some("Ada".to_string());
/// let email: Option<String> = None;
/// let err = require_all(&[("name", name.as_deref()), ("email", email.as_deref())]).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required fields: email");
/// ```
pub fn require_all(fields: &[(&str, Option<&str>)]) -> Result<(), PolicyHubError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| required(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(validation_error(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}
