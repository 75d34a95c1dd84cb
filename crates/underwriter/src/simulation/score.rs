/// Score value that guarantees an `ineligible` classification. Large enough
/// that no realistic sequence of rule adjustments brings the product back
/// into a priced band.
pub const INELIGIBLE_SENTINEL: i32 = 999;

/// Selects which product line(s) a score operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Auto,
    Disability,
    Home,
    Life,
    All,
}

/// Running per-product scores threaded through the rule set.
///
/// Every operation consumes the card and returns a new one; rules never see
/// a mutable accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub auto: i32,
    pub disability: i32,
    pub home: i32,
    pub life: i32,
}

impl ScoreCard {
    /// Seed all four products with the survey baseline.
    pub fn baseline(score: i32) -> Self {
        Self {
            auto: score,
            disability: score,
            home: score,
            life: score,
        }
    }

    pub fn add(self, product: Product, amount: i32) -> Self {
        self.apply(product, |score| score + amount)
    }

    pub fn deduct(self, product: Product, amount: i32) -> Self {
        self.apply(product, |score| score - amount)
    }

    pub fn mark_ineligible(self, product: Product) -> Self {
        self.apply(product, |_| INELIGIBLE_SENTINEL)
    }

    fn apply(self, product: Product, op: impl Fn(i32) -> i32) -> Self {
        match product {
            Product::Auto => Self {
                auto: op(self.auto),
                ..self
            },
            Product::Disability => Self {
                disability: op(self.disability),
                ..self
            },
            Product::Home => Self {
                home: op(self.home),
                ..self
            },
            Product::Life => Self {
                life: op(self.life),
                ..self
            },
            Product::All => Self {
                auto: op(self.auto),
                disability: op(self.disability),
                home: op(self.home),
                life: op(self.life),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::tier::{classify, Tier};

    #[test]
    fn add_touches_only_the_named_product() {
        let card = ScoreCard::baseline(1).add(Product::Life, 2);
        assert_eq!(card.life, 3);
        assert_eq!(card.auto, 1);
        assert_eq!(card.disability, 1);
        assert_eq!(card.home, 1);
    }

    #[test]
    fn deduct_all_applies_to_every_product() {
        let card = ScoreCard::baseline(2).deduct(Product::All, 2);
        assert_eq!(card, ScoreCard::baseline(0));
    }

    #[test]
    fn operations_return_new_cards() {
        let original = ScoreCard::baseline(1);
        let _ = original.add(Product::Auto, 5);
        assert_eq!(original, ScoreCard::baseline(1));
    }

    #[test]
    fn mark_ineligible_sets_the_sentinel() {
        let card = ScoreCard::baseline(3).mark_ineligible(Product::Disability);
        assert_eq!(card.disability, INELIGIBLE_SENTINEL);
        assert_eq!(card.home, 3);
    }

    #[test]
    fn ineligibility_is_sticky_under_later_adjustments() {
        let card = ScoreCard::baseline(0)
            .mark_ineligible(Product::Life)
            .deduct(Product::All, 2)
            .add(Product::Life, 1);
        assert_eq!(classify(card.life), Tier::Ineligible);
    }
}
