//! Wire-level intake and validation for simulation requests.
//!
//! Every field is optional at the deserialization stage so that a missing
//! field becomes a validation message instead of a parse failure. All
//! violations are collected in one pass; the engine only ever sees a fully
//! populated [`ApplicantProfile`].

use super::domain::{ApplicantProfile, HomeOwnership, House, MaritalStatus, Vehicle};
use serde::{Deserialize, Deserializer};

/// Validation failure carrying one human-readable message per violated
/// constraint.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid simulation request: {}", .violations.join("; "))]
pub struct IntakeError {
    pub violations: Vec<String>,
}

/// Incoming simulation payload as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequest {
    pub age: Option<i64>,
    pub dependents: Option<i64>,
    pub house: Option<HouseField>,
    pub income: Option<i64>,
    pub marital_status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_answers")]
    pub risk_questions: Option<Vec<bool>>,
    pub vehicle: Option<VehicleField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseField {
    pub ownership_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleField {
    pub year: Option<i64>,
}

impl SimulationRequest {
    /// Validate the payload and build the closed profile the engine runs on.
    ///
    /// Checks are not short-circuited: the returned error lists every
    /// violated constraint so a client can fix the payload in one round
    /// trip.
    pub fn into_profile(self) -> Result<ApplicantProfile, IntakeError> {
        let mut violations = Vec::new();

        let age = require_non_negative(self.age, "age", &mut violations);
        let dependents = require_non_negative(self.dependents, "dependents", &mut violations);
        let income = require_non_negative(self.income, "income", &mut violations);

        let marital_status = match self.marital_status.as_deref() {
            None => {
                violations.push("Field 'marital_status' is required".to_string());
                None
            }
            Some(raw) => {
                let parsed = MaritalStatus::parse(raw);
                if parsed.is_none() {
                    violations.push(
                        "Field 'marital_status' must have the values 'SINGLE' or 'MARRIED'"
                            .to_string(),
                    );
                }
                parsed
            }
        };

        if self.risk_questions.is_none() {
            violations.push("Field 'risk_questions' is required".to_string());
        }

        let house = match self.house {
            None => None,
            Some(field) => match field.ownership_status.as_deref() {
                None => {
                    violations.push("Field 'house.ownership_status' is required".to_string());
                    None
                }
                Some(raw) => {
                    let parsed = HomeOwnership::parse(raw);
                    if parsed.is_none() {
                        violations.push(
                            "Field 'house.ownership_status' must have the values 'OWNED' or 'MORTGAGED'"
                                .to_string(),
                        );
                    }
                    parsed.map(|ownership| House { ownership })
                }
            },
        };

        let vehicle = match self.vehicle {
            None => None,
            Some(field) => match field.year {
                None => {
                    violations.push("Field 'vehicle.year' is required".to_string());
                    None
                }
                Some(year) if year < 1 => {
                    violations
                        .push("Field 'vehicle.year' must be greater than 0".to_string());
                    None
                }
                Some(year) => match i32::try_from(year) {
                    Ok(year) => Some(Vehicle { year }),
                    Err(_) => {
                        violations.push(
                            "Field 'vehicle.year' must have a value within the supported range"
                                .to_string(),
                        );
                        None
                    }
                },
            },
        };

        if !violations.is_empty() {
            return Err(IntakeError { violations });
        }

        // No violations were recorded, so every required value is present;
        // the fallbacks below are never taken.
        Ok(ApplicantProfile {
            age: age.unwrap_or_default(),
            dependents: dependents.unwrap_or_default(),
            income: income.unwrap_or_default(),
            marital_status: marital_status.unwrap_or(MaritalStatus::Single),
            risk_answers: self.risk_questions.unwrap_or_default(),
            house,
            vehicle,
        })
    }
}

fn require_non_negative(
    value: Option<i64>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<u32> {
    match value {
        None => {
            violations.push(format!("Field '{field}' is required"));
            None
        }
        Some(value) if value < 0 => {
            violations.push(format!(
                "Field '{field}' must have value equal or greater than 0"
            ));
            None
        }
        Some(value) => match u32::try_from(value) {
            Ok(value) => Some(value),
            Err(_) => {
                violations.push(format!(
                    "Field '{field}' must have a value within the supported range"
                ));
                None
            }
        },
    }
}

/// Accepts `true`/`false` as well as the 0/1 integer form some existing
/// clients send for the survey answers.
fn deserialize_answers<'de, D>(deserializer: D) -> Result<Option<Vec<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Answer {
        Flag(bool),
        Digit(i64),
    }

    let raw = Option::<Vec<Answer>>::deserialize(deserializer)?;
    raw.map(|answers| {
        answers
            .into_iter()
            .map(|answer| match answer {
                Answer::Flag(flag) => Ok(flag),
                Answer::Digit(0) => Ok(false),
                Answer::Digit(1) => Ok(true),
                Answer::Digit(other) => Err(serde::de::Error::custom(format!(
                    "risk answer must be a boolean or 0/1, got {other}"
                ))),
            })
            .collect::<Result<Vec<bool>, D::Error>>()
    })
    .transpose()
}
