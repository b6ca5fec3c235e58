//! # Triage Core
//!
//! Core logic for a walk-in clinic's triage desk:
//! - intake validation rules for patient identity data
//! - patient registration with CPF uniqueness per [`PatientRegistry`]
//! - encounters pairing a patient with a [`RiskLevel`] and an arrival time
//! - the [`TriageQueue`], which always serves the most urgent, earliest-arrived patient first
//!
//! **No I/O**: storage, servers, and user interfaces belong in the crates that embed this one.
//! Everything here is synchronous and single-threaded; wrap a queue or registry in a `Mutex`
//! before sharing it across threads.

pub mod config;
pub mod constants;
pub mod encounter;
pub mod error;
pub mod patient;
pub mod queue;
pub mod risk;
pub mod service;
pub mod validation;

pub use config::CoreConfig;
pub use encounter::Encounter;
pub use error::{EmptyQueueError, TriageError, TriageResult, ValidationError};
pub use patient::{Patient, PatientRegistry};
pub use queue::TriageQueue;
pub use risk::{RiskLevel, UnknownRiskLevel};
pub use service::TriageService;

pub use triage_types::NonEmptyText;
pub use triage_uuid::{ArrivalClock, ArrivalStamp, EncounterId};
