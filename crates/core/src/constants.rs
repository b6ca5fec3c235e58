//! Constants used throughout the triage core crate.
//!
//! The user-facing messages are kept verbatim in Portuguese: front desks match on them.

/// Format of birth dates as typed at registration (`DD/MM/YYYY`).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Clinic name used when none is configured.
pub const DEFAULT_CLINIC_NAME: &str = "Pronto Socorro";

/// Environment variable holding the clinic name.
pub const CLINIC_NAME_ENV: &str = "TRIAGE_CLINIC_NAME";

pub const MSG_INVALID_NAME: &str = "Nome inválido: O nome do paciente é obrigatório.";
pub const MSG_INVALID_CPF: &str = "CPF inválido, deve conter 11 dígitos numéricos.";
pub const MSG_INVALID_EMAIL: &str = "E-mail inválido.";
pub const MSG_INVALID_BIRTH_DATE: &str = "Data de nascimento inválida, use o formato DD/MM/YYYY.";
pub const MSG_DUPLICATE_CPF: &str = "CPF já cadastrado";
pub const MSG_PATIENT_NOT_REGISTERED: &str = "Paciente não registrado";
pub const MSG_EMPTY_QUEUE: &str = "Não tem nenhum paciente na fila de atendimento";
