//! An encounter: a triaged patient waiting to be seen.

use crate::{Patient, RiskLevel, ValidationError};
use std::sync::Arc;
use triage_uuid::{ArrivalClock, ArrivalStamp, EncounterId};

/// A patient, the risk level assigned at triage, and the time they joined the queue.
///
/// The patient is shared: the same registered patient may appear in several encounters over a
/// day. Nothing about an encounter changes after construction.
#[derive(Clone, Debug)]
pub struct Encounter {
    id: EncounterId,
    patient: Arc<Patient>,
    risk: RiskLevel,
    entry: ArrivalStamp,
}

impl Encounter {
    /// Creates an encounter stamped with the next arrival time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PatientNotRegistered` if `patient` is `None`.
    pub fn new(
        patient: Option<Arc<Patient>>,
        risk: RiskLevel,
        clock: &ArrivalClock,
    ) -> Result<Self, ValidationError> {
        let patient = patient.ok_or(ValidationError::PatientNotRegistered)?;

        Ok(Self {
            id: EncounterId::new(),
            patient,
            risk,
            entry: clock.stamp(),
        })
    }

    /// Creates an encounter with an arrival time recorded elsewhere, e.g. when replaying a log.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PatientNotRegistered` if `patient` is `None`.
    pub fn with_entry(
        patient: Option<Arc<Patient>>,
        risk: RiskLevel,
        entry: ArrivalStamp,
    ) -> Result<Self, ValidationError> {
        let patient = patient.ok_or(ValidationError::PatientNotRegistered)?;

        Ok(Self {
            id: EncounterId::new(),
            patient,
            risk,
            entry,
        })
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    pub fn patient(&self) -> &Arc<Patient> {
        &self.patient
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    /// When the encounter was created.
    pub fn entry(&self) -> ArrivalStamp {
        self.entry
    }
}
