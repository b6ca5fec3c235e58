use crate::constants::{
    MSG_DUPLICATE_CPF, MSG_EMPTY_QUEUE, MSG_INVALID_BIRTH_DATE, MSG_INVALID_CPF,
    MSG_INVALID_EMAIL, MSG_INVALID_NAME, MSG_PATIENT_NOT_REGISTERED,
};

/// Rejected intake input.
///
/// Each variant renders a fixed message so callers can match on it or show it as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MSG_INVALID_NAME)]
    InvalidName,
    #[error("{}", MSG_INVALID_CPF)]
    InvalidCpf,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", MSG_INVALID_BIRTH_DATE)]
    InvalidBirthDate,
    #[error("{}", MSG_DUPLICATE_CPF)]
    DuplicateCpf,
    #[error("{}", MSG_PATIENT_NOT_REGISTERED)]
    PatientNotRegistered,
}

/// `next()` was called on a queue with nobody waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", MSG_EMPTY_QUEUE)]
pub struct EmptyQueueError;

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
