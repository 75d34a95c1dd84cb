//! Risk simulation engine for the four insurance lines.
//!
//! The engine is a pure fold: a baseline score seeded from the risk survey,
//! threaded through six underwriting rules in a fixed order, then classified
//! into a pricing tier per product. The rule order is a contract of the
//! engine, not an implementation detail: a deduction applied by a later rule
//! operates on whatever value the earlier rules left behind.

pub mod domain;
pub mod intake;
pub mod router;
mod rules;
pub mod score;
pub mod tier;

pub use intake::{IntakeError, SimulationRequest};
pub use router::simulation_router;
pub use score::{Product, ScoreCard};
pub use tier::Tier;

use domain::ApplicantProfile;
use serde::{Deserialize, Serialize};
use tier::classify;

/// Per-product tier recommendation returned to the caller.
///
/// Serializes as a flat object with four lowercase string fields, which is
/// the wire shape of the simulation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub auto: Tier,
    pub disability: Tier,
    pub home: Tier,
    pub life: Tier,
}

/// Score a validated applicant profile.
///
/// `current_year` is the wall-clock year as seen by the caller; the engine
/// never reads the clock itself so results stay reproducible in tests.
pub fn calculate_risk(profile: &ApplicantProfile, current_year: i32) -> RiskAssessment {
    let baseline = profile
        .risk_answers
        .iter()
        .filter(|answered| **answered)
        .count() as i32;

    let score = ScoreCard::baseline(baseline);
    let score = rules::income_rule(profile.income, score);
    let score = rules::age_rule(profile.age, score);
    let score = rules::house_rule(profile.house.as_ref(), score);
    let score = rules::dependents_rule(profile.dependents, score);
    let score = rules::marriage_rule(profile.marital_status, score);
    let score = rules::vehicle_rule(profile.vehicle.as_ref(), current_year, score);

    RiskAssessment {
        auto: classify(score.auto),
        disability: classify(score.disability),
        home: classify(score.home),
        life: classify(score.life),
    }
}

#[cfg(test)]
mod tests {
    use super::domain::{ApplicantProfile, House, HomeOwnership, MaritalStatus, Vehicle};
    use super::{calculate_risk, Tier};

    fn base_profile() -> ApplicantProfile {
        ApplicantProfile {
            age: 35,
            dependents: 2,
            income: 200,
            marital_status: MaritalStatus::Married,
            risk_answers: vec![true, false, true],
            house: Some(House {
                ownership: HomeOwnership::Mortgaged,
            }),
            vehicle: Some(Vehicle { year: 2018 }),
        }
    }

    #[test]
    fn baseline_counts_affirmative_answers_only() {
        let mut profile = base_profile();
        profile.risk_answers = vec![false, false, false];
        let all_no = calculate_risk(&profile, 2018);

        profile.risk_answers = vec![true, true, true];
        let all_yes = calculate_risk(&profile, 2018);

        // Two extra baseline points push life from regular into responsible.
        assert_eq!(all_no.life, Tier::Regular);
        assert_eq!(all_yes.life, Tier::Responsible);
    }

    #[test]
    fn empty_survey_seeds_zero_baseline() {
        let mut profile = base_profile();
        profile.risk_answers = Vec::new();
        let assessment = calculate_risk(&profile, 2018);
        assert_eq!(assessment.home, Tier::Economic);
    }

    #[test]
    fn assessment_serializes_as_flat_lowercase_object() {
        let assessment = calculate_risk(&base_profile(), 2018);
        let value = serde_json::to_value(assessment).expect("assessment serializes");
        assert_eq!(value["auto"], "regular");
        assert_eq!(value["life"], "responsible");
    }
}
