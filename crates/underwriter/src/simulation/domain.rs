use serde::{Deserialize, Serialize};

/// Fully validated applicant profile handed to the risk engine.
///
/// Every required field is populated by the time a value of this type
/// exists; the intake layer refuses to construct one otherwise. Only the
/// insurable assets (`house`, `vehicle`) are genuinely optional, where
/// absence means "nothing to insure" rather than "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u32,
    pub dependents: u32,
    pub income: u32,
    pub marital_status: MaritalStatus,
    pub risk_answers: Vec<bool>,
    pub house: Option<House>,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    /// Case-insensitive parse of the wire representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeOwnership {
    Owned,
    Mortgaged,
}

impl HomeOwnership {
    /// Case-insensitive parse of the wire representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owned" => Some(Self::Owned),
            "mortgaged" => Some(Self::Mortgaged),
            _ => None,
        }
    }
}

/// Home the applicant wants covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub ownership: HomeOwnership,
}

/// Vehicle the applicant wants covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub year: i32,
}
