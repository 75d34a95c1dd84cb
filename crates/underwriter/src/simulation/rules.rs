//! The six underwriting rules, one function per rule.
//!
//! Each rule reads the profile attribute it cares about plus the running
//! score card and returns a replacement card. Rules are applied by the
//! engine in the order they appear in this file.

use super::domain::{HomeOwnership, House, MaritalStatus, Vehicle};
use super::score::{Product, ScoreCard};

/// No declared income disqualifies disability cover; high earners get a
/// point back on everything.
pub(crate) fn income_rule(income: u32, score: ScoreCard) -> ScoreCard {
    match income {
        0 => score.mark_ineligible(Product::Disability),
        200_000.. => score.deduct(Product::All, 1),
        _ => score,
    }
}

/// Age bands. The 0..=30 and 30..=40 arms intentionally overlap at 30:
/// first match wins, so a 30-year-old deducts 2. This mirrors the original
/// rate card and is a contract, not an off-by-one.
pub(crate) fn age_rule(age: u32, score: ScoreCard) -> ScoreCard {
    match age {
        60.. => score
            .mark_ineligible(Product::Disability)
            .mark_ineligible(Product::Life),
        0..=30 => score.deduct(Product::All, 2),
        30..=40 => score.deduct(Product::All, 1),
        _ => score,
    }
}

pub(crate) fn house_rule(house: Option<&House>, score: ScoreCard) -> ScoreCard {
    match house {
        None => score.mark_ineligible(Product::Home),
        Some(house) if house.ownership == HomeOwnership::Mortgaged => {
            score.add(Product::Home, 1).add(Product::Disability, 1)
        }
        Some(_) => score,
    }
}

pub(crate) fn dependents_rule(dependents: u32, score: ScoreCard) -> ScoreCard {
    if dependents > 0 {
        score.add(Product::Disability, 1).add(Product::Life, 1)
    } else {
        score
    }
}

pub(crate) fn marriage_rule(status: MaritalStatus, score: ScoreCard) -> ScoreCard {
    match status {
        MaritalStatus::Married => score.add(Product::Life, 1).deduct(Product::Disability, 1),
        MaritalStatus::Single => score,
    }
}

/// `current_year` comes from the caller's clock so the five-year recency
/// window stays testable.
pub(crate) fn vehicle_rule(
    vehicle: Option<&Vehicle>,
    current_year: i32,
    score: ScoreCard,
) -> ScoreCard {
    match vehicle {
        None => score.mark_ineligible(Product::Auto),
        Some(vehicle) if current_year - vehicle.year <= 5 => score.add(Product::Auto, 1),
        Some(_) => score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::score::INELIGIBLE_SENTINEL;

    fn card() -> ScoreCard {
        ScoreCard::baseline(2)
    }

    #[test]
    fn zero_income_disqualifies_disability_only() {
        let result = income_rule(0, card());
        assert_eq!(result.disability, INELIGIBLE_SENTINEL);
        assert_eq!(result.auto, 2);
    }

    #[test]
    fn high_income_deducts_one_everywhere() {
        let result = income_rule(200_000, card());
        assert_eq!(result, ScoreCard::baseline(1));
    }

    #[test]
    fn moderate_income_is_a_noop() {
        assert_eq!(income_rule(199_999, card()), card());
    }

    #[test]
    fn sixty_and_over_disqualifies_disability_and_life() {
        let result = age_rule(60, card());
        assert_eq!(result.disability, INELIGIBLE_SENTINEL);
        assert_eq!(result.life, INELIGIBLE_SENTINEL);
        assert_eq!(result.auto, 2);
        assert_eq!(result.home, 2);
    }

    #[test]
    fn under_thirty_deducts_two() {
        assert_eq!(age_rule(18, card()), ScoreCard::baseline(0));
    }

    #[test]
    fn age_thirty_takes_the_first_band() {
        // Overlap at 30: the young-applicant arm wins and deducts 2.
        assert_eq!(age_rule(30, card()), ScoreCard::baseline(0));
    }

    #[test]
    fn thirties_deduct_one() {
        assert_eq!(age_rule(31, card()), ScoreCard::baseline(1));
        assert_eq!(age_rule(40, card()), ScoreCard::baseline(1));
    }

    #[test]
    fn over_forty_is_a_noop() {
        assert_eq!(age_rule(41, card()), card());
    }

    #[test]
    fn no_house_disqualifies_home() {
        let result = house_rule(None, card());
        assert_eq!(result.home, INELIGIBLE_SENTINEL);
        assert_eq!(result.life, 2);
    }

    #[test]
    fn mortgaged_house_raises_home_and_disability() {
        let house = House {
            ownership: HomeOwnership::Mortgaged,
        };
        let result = house_rule(Some(&house), card());
        assert_eq!(result.home, 3);
        assert_eq!(result.disability, 3);
        assert_eq!(result.auto, 2);
    }

    #[test]
    fn owned_house_is_a_noop() {
        let house = House {
            ownership: HomeOwnership::Owned,
        };
        assert_eq!(house_rule(Some(&house), card()), card());
    }

    #[test]
    fn dependents_raise_disability_and_life() {
        let result = dependents_rule(3, card());
        assert_eq!(result.disability, 3);
        assert_eq!(result.life, 3);
        assert_eq!(result.auto, 2);
    }

    #[test]
    fn no_dependents_is_a_noop() {
        assert_eq!(dependents_rule(0, card()), card());
    }

    #[test]
    fn marriage_shifts_life_up_and_disability_down() {
        let result = marriage_rule(MaritalStatus::Married, card());
        assert_eq!(result.life, 3);
        assert_eq!(result.disability, 1);
    }

    #[test]
    fn single_is_a_noop() {
        assert_eq!(marriage_rule(MaritalStatus::Single, card()), card());
    }

    #[test]
    fn no_vehicle_disqualifies_auto() {
        let result = vehicle_rule(None, 2018, card());
        assert_eq!(result.auto, INELIGIBLE_SENTINEL);
        assert_eq!(result.home, 2);
    }

    #[test]
    fn recent_vehicle_raises_auto() {
        let vehicle = Vehicle { year: 2013 };
        let result = vehicle_rule(Some(&vehicle), 2018, card());
        assert_eq!(result.auto, 3);
    }

    #[test]
    fn old_vehicle_is_a_noop() {
        let vehicle = Vehicle { year: 2012 };
        assert_eq!(vehicle_rule(Some(&vehicle), 2018, card()), card());
    }
}
