use crate::model::RawOffer;
use std::collections::HashMap;

/// Latest offer per food name, in order of first appearance.
#[derive(Debug, Default)]
pub struct VisitedFoods {
    index: HashMap<String, usize>,
    offers: Vec<RawOffer>,
    pub skipped_without_calories: usize,
}

impl VisitedFoods {
    /// Offers without calories are ignored. A later date replaces the stored
    /// offer in place; an equal or earlier one is dropped.
    pub fn visit(&mut self, offer: RawOffer) {
        if offer.nutrition.calories.is_none() {
            self.skipped_without_calories += 1;
            return;
        }

        match self.index.get(&offer.alias) {
            Some(&slot) => {
                if offer.date > self.offers[slot].date {
                    self.offers[slot] = offer;
                }
            }
            None => {
                self.index.insert(offer.alias.clone(), self.offers.len());
                self.offers.push(offer);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn values(&self) -> &[RawOffer] {
        &self.offers
    }
}

pub fn dedupe_latest(offers: Vec<RawOffer>) -> VisitedFoods {
    let mut visited = VisitedFoods::default();
    for offer in offers {
        visited.visit(offer);
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Nutrition;
    use crate::utils::parse_datetime;

    fn offer(alias: &str, calories: Option<f64>, date: &str) -> RawOffer {
        RawOffer {
            alias: alias.into(),
            food: None,
            date: parse_datetime(date).unwrap(),
            nutrition: Nutrition {
                calories,
                ..Nutrition::default()
            },
        }
    }

    #[test]
    fn later_date_wins() {
        let visited = dedupe_latest(vec![
            offer("Soup", Some(100.0), "2024-01-01"),
            offer("Soup", Some(120.0), "2024-01-02"),
            offer("Soup", Some(90.0), "2023-12-31"),
        ]);
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.values()[0].nutrition.calories, Some(120.0));
    }

    #[test]
    fn equal_date_keeps_first() {
        let visited = dedupe_latest(vec![
            offer("Soup", Some(100.0), "2024-01-01"),
            offer("Soup", Some(120.0), "2024-01-01"),
        ]);
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.values()[0].nutrition.calories, Some(100.0));
    }

    #[test]
    fn offers_without_calories_never_enter_or_replace() {
        let visited = dedupe_latest(vec![
            offer("Salad", None, "2024-01-01"),
            offer("Soup", Some(100.0), "2024-01-01"),
            offer("Soup", None, "2024-02-01"),
        ]);
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.values()[0].alias, "Soup");
        assert_eq!(visited.values()[0].nutrition.calories, Some(100.0));
        assert_eq!(visited.skipped_without_calories, 2);
    }

    #[test]
    fn zero_calories_is_eligible() {
        let visited = dedupe_latest(vec![offer("Water", Some(0.0), "2024-01-01")]);
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn keeps_first_seen_order_when_updating() {
        let visited = dedupe_latest(vec![
            offer("A", Some(1.0), "2024-01-01"),
            offer("B", Some(2.0), "2024-01-01"),
            offer("A", Some(3.0), "2024-01-05"),
            offer("C", Some(4.0), "2024-01-01"),
        ]);
        let names: Vec<_> = visited.values().iter().map(|o| o.alias.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(visited.values()[0].nutrition.calories, Some(3.0));
    }
}
