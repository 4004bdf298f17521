use recipe::RecipeRecord;

use crate::scorer::{FRESH, RecipeMatch};

/// Explicit zero-candidate strategy: when scoring produces nothing, surface
/// a few low-barrier recipes so the presentation layer always has content.
/// Invoked from exactly one place, the session's recommendation pass.
pub struct FallbackStrategy;

impl FallbackStrategy {
    pub const DEFAULT_LIMIT: usize = 3;

    /// Fewest-ingredient recipes first: the easiest things to cook from a
    /// sparse pantry. Scores stay at zero; these were not selected on
    /// ingredient merit.
    pub fn candidates(catalog: &[RecipeRecord], limit: usize) -> Vec<RecipeMatch> {
        let mut by_simplicity: Vec<&RecipeRecord> = catalog.iter().collect();
        by_simplicity.sort_by_key(|recipe| recipe.ingredients.len());
        by_simplicity
            .into_iter()
            .take(limit)
            .map(|recipe| RecipeMatch {
                recipe: recipe.clone(),
                matched_ingredients: Vec::new(),
                match_score: 0.0,
                freshness: FRESH,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with(id: &str, ingredients: &[&str]) -> RecipeRecord {
        RecipeRecord {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec![],
            cuisine_type: String::new(),
            cooking_technique: String::new(),
            dietary_info: vec![],
            cook_time: String::new(),
            difficulty: String::new(),
            servings: 4,
        }
    }

    #[test]
    fn prefers_shorter_ingredient_lists() {
        let catalog = vec![
            recipe_with("long", &["a", "b", "c", "d", "e"]),
            recipe_with("short", &["a", "b"]),
            recipe_with("mid", &["a", "b", "c"]),
        ];
        let picks = FallbackStrategy::candidates(&catalog, 2);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].recipe.id, "short");
        assert_eq!(picks[1].recipe.id, "mid");
        assert!(picks.iter().all(|m| m.match_score == 0.0));
        assert!(picks.iter().all(|m| m.matched_ingredients.is_empty()));
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(FallbackStrategy::candidates(&[], 3).is_empty());
    }
}
