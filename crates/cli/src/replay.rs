//! Replays a file of arrivals through the triage desk.
//!
//! The file is a YAML list:
//!
//! ```yaml
//! - name: João Silva
//!   cpf: "12345678901"
//!   email: joao@example.com
//!   birth_date: 01/01/1990
//!   risk: verde
//! ```
//!
//! Arrivals are registered, triaged, and queued in file order. Rejected arrivals are collected
//! with their reason and skipped; the rest are then called in service order.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use triage_core::{RiskLevel, TriageService};

/// One line of the arrivals file.
#[derive(Debug, Clone, Deserialize)]
pub struct Arrival {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub birth_date: String,
    pub risk: String,
}

/// A patient called from the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Called {
    pub name: String,
    pub risk: RiskLevel,
}

/// An arrival that did not make it into the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// Zero-based position in the file.
    pub index: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ReplayReport {
    pub called: Vec<Called>,
    pub rejected: Vec<Rejected>,
}

pub fn load_arrivals(path: &Path) -> anyhow::Result<Vec<Arrival>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read arrivals file {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse arrivals file {}", path.display()))
}

pub fn replay(service: &mut TriageService, arrivals: Vec<Arrival>) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (index, arrival) in arrivals.into_iter().enumerate() {
        let name = arrival.name.clone();
        if let Err(reason) = admit(service, arrival) {
            tracing::debug!(index, %reason, "arrival skipped");
            report.rejected.push(Rejected {
                index,
                name,
                reason,
            });
        }
    }

    while service.has_waiting() {
        match service.call_next() {
            Ok(encounter) => report.called.push(Called {
                name: encounter.patient().name().to_string(),
                risk: encounter.risk(),
            }),
            Err(_) => break,
        }
    }

    report
}

fn admit(service: &mut TriageService, arrival: Arrival) -> Result<(), String> {
    // Parse the risk first so a typo in it does not burn the CPF in the registry.
    let risk: RiskLevel = arrival.risk.parse().map_err(|e| format!("{e}"))?;
    let patient = service
        .register_patient(arrival.name, arrival.cpf, arrival.email, arrival.birth_date)
        .map_err(|e| e.to_string())?;
    service
        .admit(Some(patient), risk)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use triage_core::config::clinic_name_from_env_value;
    use triage_core::CoreConfig;

    fn service() -> TriageService {
        let cfg = CoreConfig::new(clinic_name_from_env_value(None).unwrap());
        TriageService::new(Arc::new(cfg))
    }

    const ARRIVALS: &str = r#"
- name: Maria Oliveira
  cpf: "98765432109"
  email: maria@example.com
  birth_date: 15/05/1985
  risk: verde
- name: Carlos Souza
  cpf: "45678912309"
  email: carlos@example.com
  birth_date: 20/10/1975
  risk: VERMELHO
- name: Ana Costa
  cpf: "12345678901"
  email: ana@example.com
  birth_date: 05/12/2000
  risk: green
- name: Pedro Sem Email
  cpf: "11122233344"
  email: pedroexample.com
  birth_date: 01/01/1980
  risk: amarelo
- name: Repetido
  cpf: "98765432109"
  email: repetido@example.com
  birth_date: 01/01/1980
  risk: red
"#;

    #[test]
    fn replay_calls_in_service_order_and_reports_rejections() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(ARRIVALS.as_bytes()).unwrap();

        let arrivals = load_arrivals(file.path()).expect("arrivals should parse");
        assert_eq!(arrivals.len(), 5);

        let mut svc = service();
        let report = replay(&mut svc, arrivals);

        let called: Vec<&str> = report.called.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(called, ["Carlos Souza", "Maria Oliveira", "Ana Costa"]);
        assert_eq!(report.called[0].risk, RiskLevel::Red);

        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].index, 3);
        assert_eq!(report.rejected[0].reason, "E-mail inválido.");
        assert_eq!(report.rejected[1].name, "Repetido");
        assert_eq!(report.rejected[1].reason, "CPF já cadastrado");
        assert!(!svc.has_waiting());
    }

    #[test]
    fn unknown_risk_does_not_register_the_patient() {
        let mut svc = service();
        let arrivals = vec![Arrival {
            name: "João Silva".into(),
            cpf: "12345678901".into(),
            email: "joao@example.com".into(),
            birth_date: "01/01/1990".into(),
            risk: "laranja".into(),
        }];

        let report = replay(&mut svc, arrivals);

        assert!(report.called.is_empty());
        assert_eq!(report.rejected.len(), 1);
        assert!(report.rejected[0].reason.contains("laranja"));
        assert!(svc.registry().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_arrivals(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read arrivals file"));
    }
}
