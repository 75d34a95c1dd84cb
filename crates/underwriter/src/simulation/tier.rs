use serde::{Deserialize, Serialize};

/// Eligibility and pricing tier for a single insurance line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Economic,
    Regular,
    Responsible,
    Ineligible,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Economic => "economic",
            Tier::Regular => "regular",
            Tier::Responsible => "responsible",
            Tier::Ineligible => "ineligible",
        }
    }
}

/// Map a final product score to its tier.
///
/// Total over all integers. Anything outside the three named bands falls
/// through to `Ineligible`; that is how the 999 sentinel lands there, and
/// also where a score that drifted above 10 through cumulative additions
/// ends up.
pub fn classify(score: i32) -> Tier {
    match score {
        i32::MIN..=0 => Tier::Economic,
        1..=2 => Tier::Regular,
        3..=10 => Tier::Responsible,
        _ => Tier::Ineligible,
    }
}
