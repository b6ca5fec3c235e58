//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! [`TriageService`](crate::TriageService). Nothing in the core reads environment variables
//! itself; binaries look them up and hand the raw values to the helpers here.

use crate::constants::DEFAULT_CLINIC_NAME;
use crate::{TriageError, TriageResult};
use triage_types::NonEmptyText;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    clinic_name: NonEmptyText,
}

impl CoreConfig {
    pub fn new(clinic_name: NonEmptyText) -> Self {
        Self { clinic_name }
    }

    /// Name of the clinic this desk serves, attached to every log event.
    pub fn clinic_name(&self) -> &str {
        self.clinic_name.as_str()
    }
}

/// Resolve the clinic name from an optional raw value.
///
/// `None` or a blank value yields [`DEFAULT_CLINIC_NAME`]. Anything else is trimmed and must not
/// contain line breaks (it ends up in single-line log records).
pub fn clinic_name_from_env_value(value: Option<String>) -> TriageResult<NonEmptyText> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => NonEmptyText::new(DEFAULT_CLINIC_NAME)
            .map_err(|e| TriageError::InvalidConfig(e.to_string())),
        Some(v) if v.contains(['\n', '\r']) => Err(TriageError::InvalidConfig(
            "clinic name cannot contain line breaks".into(),
        )),
        Some(v) => NonEmptyText::new(v).map_err(|e| TriageError::InvalidConfig(e.to_string())),
    }
}
