//! Patient identity records and the CPF registry that keeps them unique.

use crate::validation::{local_today, parse_birth_date, validate_cpf, validate_email, validate_name};
use crate::ValidationError;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Set of CPF numbers already registered.
///
/// Whoever creates patients owns one of these; uniqueness holds within a registry, not across
/// the process. Nothing is ever removed except by [`PatientRegistry::clear`].
#[derive(Debug, Default, Clone)]
pub struct PatientRegistry {
    cpfs: HashSet<String>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `cpf`. Returns `false` if it was already present.
    pub fn register(&mut self, cpf: &str) -> bool {
        self.cpfs.insert(cpf.to_owned())
    }

    pub fn contains(&self, cpf: &str) -> bool {
        self.cpfs.contains(cpf)
    }

    pub fn len(&self) -> usize {
        self.cpfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpfs.is_empty()
    }

    /// Forgets every registered CPF.
    pub fn clear(&mut self) {
        self.cpfs.clear();
    }
}

/// A registered patient.
///
/// Fields hold exactly what was supplied at registration and cannot change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    name: String,
    cpf: String,
    email: String,
    birth_date: String,
    birth_date_parsed: NaiveDate,
}

impl Patient {
    /// Validates the given identity data and registers the patient.
    ///
    /// Birth dates are judged against today's local date. See [`Patient::register_on`].
    pub fn register(
        registry: &mut PatientRegistry,
        name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::register_on(registry, local_today(), name, cpf, email, birth_date)
    }

    /// Validates the given identity data against `today` and registers the patient.
    ///
    /// Rules run in a fixed order and the first failure is returned:
    /// 1. name is not blank
    /// 2. CPF is 11 digits
    /// 3. e-mail is shaped like `local@domain.tld`
    /// 4. birth date is `DD/MM/YYYY` and not after `today`
    /// 5. CPF is not already in `registry`
    ///
    /// The registry is only touched once every check has passed.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing rule, or
    /// `ValidationError::DuplicateCpf` if the CPF was registered before.
    pub fn register_on(
        registry: &mut PatientRegistry,
        today: NaiveDate,
        name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let cpf = cpf.into();
        let email = email.into();
        let birth_date = birth_date.into();

        validate_name(&name)?;
        validate_cpf(&cpf)?;
        validate_email(&email)?;
        let birth_date_parsed = parse_birth_date(&birth_date, today)?;

        if !registry.register(&cpf) {
            return Err(ValidationError::DuplicateCpf);
        }

        Ok(Self {
            name,
            cpf,
            email,
            birth_date,
            birth_date_parsed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Birth date exactly as typed (`DD/MM/YYYY`).
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn birth_date_parsed(&self) -> NaiveDate {
        self.birth_date_parsed
    }
}
