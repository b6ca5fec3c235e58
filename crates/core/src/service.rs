//! Front-desk workflow over one registry and one queue.
//!
//! [`TriageService`] strings the core types together the way a clinic uses them:
//! register the patient, triage them, put them in the queue, call the next one.
//! Every step is logged with the clinic name; identity data (CPF, e-mail) never reaches the logs.

use crate::{
    CoreConfig, Encounter, Patient, PatientRegistry, RiskLevel, TriageQueue, TriageResult,
};
use std::sync::Arc;
use triage_uuid::{ArrivalClock, EncounterId};

#[derive(Debug)]
pub struct TriageService {
    cfg: Arc<CoreConfig>,
    registry: PatientRegistry,
    queue: TriageQueue,
    clock: ArrivalClock,
}

impl TriageService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            registry: PatientRegistry::new(),
            queue: TriageQueue::new(),
            clock: ArrivalClock::new(),
        }
    }

    /// Registers a patient after running the intake validation rules.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Validation` for the first failing rule or a duplicate CPF.
    pub fn register_patient(
        &mut self,
        name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> TriageResult<Arc<Patient>> {
        match Patient::register(&mut self.registry, name, cpf, email, birth_date) {
            Ok(patient) => {
                tracing::info!(
                    clinic = self.cfg.clinic_name(),
                    registered = self.registry.len(),
                    "patient registered"
                );
                Ok(Arc::new(patient))
            }
            Err(e) => {
                tracing::warn!(clinic = self.cfg.clinic_name(), reason = %e, "registration rejected");
                Err(e.into())
            }
        }
    }

    /// Assigns a risk level to a registered patient.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Validation` if `patient` is `None`.
    pub fn triage(
        &self,
        patient: Option<Arc<Patient>>,
        risk: RiskLevel,
    ) -> TriageResult<Encounter> {
        match Encounter::new(patient, risk, &self.clock) {
            Ok(encounter) => {
                tracing::info!(
                    clinic = self.cfg.clinic_name(),
                    encounter = %encounter.id(),
                    risk = %risk,
                    entry = %encounter.entry(),
                    "patient triaged"
                );
                Ok(encounter)
            }
            Err(e) => {
                tracing::warn!(clinic = self.cfg.clinic_name(), reason = %e, "triage rejected");
                Err(e.into())
            }
        }
    }

    pub fn enqueue(&mut self, encounter: Encounter) {
        self.queue.insert(encounter);
        tracing::info!(
            clinic = self.cfg.clinic_name(),
            waiting = self.queue.size(),
            "encounter added to queue"
        );
    }

    /// Triages a patient and puts the encounter straight into the queue.
    pub fn admit(
        &mut self,
        patient: Option<Arc<Patient>>,
        risk: RiskLevel,
    ) -> TriageResult<EncounterId> {
        let encounter = self.triage(patient, risk)?;
        let id = encounter.id();
        self.enqueue(encounter);
        Ok(id)
    }

    /// Calls the most urgent waiting patient.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::EmptyQueue` if nobody is waiting.
    pub fn call_next(&mut self) -> TriageResult<Encounter> {
        match self.queue.next() {
            Ok(encounter) => {
                tracing::info!(
                    clinic = self.cfg.clinic_name(),
                    encounter = %encounter.id(),
                    risk = %encounter.risk(),
                    waiting = self.queue.size(),
                    "patient called"
                );
                Ok(encounter)
            }
            Err(e) => {
                tracing::warn!(clinic = self.cfg.clinic_name(), "called next on empty queue");
                Err(e.into())
            }
        }
    }

    pub fn waiting(&self) -> usize {
        self.queue.size()
    }

    pub fn has_waiting(&self) -> bool {
        self.queue.has_next()
    }

    pub fn queue(&self) -> &TriageQueue {
        &self.queue
    }

    pub fn registry(&self) -> &PatientRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }
}
