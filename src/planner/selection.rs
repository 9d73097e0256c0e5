use std::collections::HashSet;

use crate::models::{FoodItem, UserPreferences};
use crate::planner::scoring::{NutrientTarget, score};

/// Narrow a bucket to the items eligible under the user's constraints.
///
/// Allergen overlap excludes an item outright; diet filtering only applies to
/// items that declare diet tags. Relative order is preserved.
pub fn filter_eligible<'a>(items: &'a [FoodItem], prefs: &UserPreferences) -> Vec<&'a FoodItem> {
    items
        .iter()
        .filter(|item| !item.has_excluded_allergen(&prefs.allergens))
        .filter(|item| item.matches_diets(&prefs.diets))
        .collect()
}

/// Pick the highest-scoring candidate whose id is not yet used.
///
/// Ties keep the earliest candidate in input order: the running best is only
/// replaced on a strictly greater score. Returns `None` when every candidate
/// is used up, signalling that the slot cannot be filled.
pub fn select_best<'a>(
    candidates: &[&'a FoodItem],
    target: &NutrientTarget,
    used: &HashSet<String>,
) -> Option<&'a FoodItem> {
    let mut best: Option<(&'a FoodItem, f64)> = None;

    for &item in candidates {
        if used.contains(&item.id) {
            continue;
        }

        let fit = score(item, target);
        if best.map_or(true, |(_, best_fit)| fit > best_fit) {
            best = Some((item, fit));
        }
    }

    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, cal: f64, protein: f64, allergens: &[&str], diets: &[&str]) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            calories: cal,
            protein,
            carbs: 30.0,
            fat: 10.0,
            fiber: 2.0,
            serving: "1 serving".to_string(),
            allergens: allergens.iter().map(|s| s.to_string()).collect(),
            diets: diets.iter().map(|s| s.to_string()).collect(),
            categories: Vec::new(),
            prep_time: 10,
        }
    }

    fn target() -> NutrientTarget {
        NutrientTarget {
            calories: 350.0,
            protein: 20.0,
            carbs: 30.0,
            fat: 10.0,
        }
    }

    #[test]
    fn test_filter_excludes_allergen_overlap() {
        let items = vec![
            make_item("a", 400.0, 20.0, &[], &[]),
            make_item("b", 450.0, 25.0, &["nuts"], &[]),
            make_item("c", 500.0, 30.0, &[], &[]),
        ];
        let mut prefs = UserPreferences::new(2000.0, 150.0, 200.0, 65.0);
        prefs.allergens = vec!["nuts".to_string()];

        let eligible = filter_eligible(&items, &prefs);
        let ids: Vec<&str> = eligible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_diet_rules() {
        let items = vec![
            make_item("tagged-match", 400.0, 20.0, &[], &["vegan"]),
            make_item("tagged-miss", 400.0, 20.0, &[], &["keto"]),
            make_item("untagged", 400.0, 20.0, &[], &[]),
        ];
        let mut prefs = UserPreferences::new(2000.0, 150.0, 200.0, 65.0);
        prefs.diets = vec!["vegan".to_string()];

        let eligible = filter_eligible(&items, &prefs);
        let ids: Vec<&str> = eligible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["tagged-match", "untagged"]);
    }

    #[test]
    fn test_filter_no_constraints_keeps_everything() {
        let items = vec![
            make_item("a", 400.0, 20.0, &["nuts"], &["keto"]),
            make_item("b", 450.0, 25.0, &[], &[]),
        ];
        let prefs = UserPreferences::new(2000.0, 150.0, 200.0, 65.0);

        assert_eq!(filter_eligible(&items, &prefs).len(), 2);
    }

    #[test]
    fn test_select_best_prefers_closer_item() {
        let items = vec![
            make_item("close", 300.0, 20.0, &[], &[]),
            make_item("far", 500.0, 10.0, &[], &[]),
        ];
        let refs: Vec<&FoodItem> = items.iter().collect();

        let chosen = select_best(&refs, &target(), &HashSet::new()).unwrap();
        assert_eq!(chosen.id, "close");
    }

    #[test]
    fn test_select_best_tie_keeps_first() {
        let items = vec![
            make_item("first", 300.0, 20.0, &[], &[]),
            make_item("twin", 300.0, 20.0, &[], &[]),
        ];
        let refs: Vec<&FoodItem> = items.iter().collect();

        let chosen = select_best(&refs, &target(), &HashSet::new()).unwrap();
        assert_eq!(chosen.id, "first");
    }

    #[test]
    fn test_select_best_skips_used() {
        let items = vec![
            make_item("first", 300.0, 20.0, &[], &[]),
            make_item("second", 500.0, 10.0, &[], &[]),
        ];
        let refs: Vec<&FoodItem> = items.iter().collect();
        let used: HashSet<String> = ["first".to_string()].into_iter().collect();

        let chosen = select_best(&refs, &target(), &used).unwrap();
        assert_eq!(chosen.id, "second");
    }

    #[test]
    fn test_select_best_exhausted_returns_none() {
        let items = vec![make_item("only", 300.0, 20.0, &[], &[])];
        let refs: Vec<&FoodItem> = items.iter().collect();
        let used: HashSet<String> = ["only".to_string()].into_iter().collect();

        assert!(select_best(&refs, &target(), &used).is_none());
        assert!(select_best(&[], &target(), &HashSet::new()).is_none());
    }
}
