//! Risk scale assigned at triage.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Severity assigned at triage.
///
/// The scale is closed and totally ordered: `Red > Yellow > Green > Blue`. Comparing two levels
/// with `>` answers "should this one be seen first?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Emergency, immediate care.
    Red,
    /// Urgent.
    Yellow,
    /// Less urgent.
    Green,
    /// Not urgent; could be seen in primary care.
    Blue,
}

impl RiskLevel {
    /// Every level, most urgent first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Red,
        RiskLevel::Yellow,
        RiskLevel::Green,
        RiskLevel::Blue,
    ];

    /// Numeric priority; higher is served first.
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::Red => 3,
            RiskLevel::Yellow => 2,
            RiskLevel::Green => 1,
            RiskLevel::Blue => 0,
        }
    }

    /// Label used on the triage desk wristbands.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Red => "VERMELHO",
            RiskLevel::Yellow => "AMARELO",
            RiskLevel::Green => "VERDE",
            RiskLevel::Blue => "AZUL",
        }
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk level: '{0}'")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    /// Accepts the English or Portuguese name in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" | "vermelho" => Ok(RiskLevel::Red),
            "yellow" | "amarelo" => Ok(RiskLevel::Yellow),
            "green" | "verde" => Ok(RiskLevel::Green),
            "blue" | "azul" => Ok(RiskLevel::Blue),
            _ => Err(UnknownRiskLevel(s.to_string())),
        }
    }
}
