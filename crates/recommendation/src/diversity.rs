use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use recipe::RecipeRecord;

use crate::scorer::{FRESH, RecipeMatch};

/// Fraction of the result slots one cuisine may hold before the corrective
/// substitution kicks in.
pub const DOMINANCE_THRESHOLD: f32 = 0.6;

/// Markdown applied to a substitute that was not selected on ingredient merit.
pub const SUBSTITUTE_MARKDOWN: f32 = 0.8;

/// Rebalances a top-N result set so no single cuisine dominates.
pub struct DiversityFilter;

impl DiversityFilter {
    /// At most one substitution per call: this is a corrective pass, not an
    /// iterative rebalancer, and it never grows the list. The lowest-ranked
    /// slot of the dominant cuisine is replaced by a random unseen
    /// other-cuisine candidate, when one exists.
    ///
    /// `seed` pins the substitute choice for reproducible results; `None`
    /// seeds from the clock.
    pub fn diversify(
        mut matches: Vec<RecipeMatch>,
        candidates: &[RecipeRecord],
        seen_ids: &HashSet<String>,
        seed: Option<u64>,
    ) -> Vec<RecipeMatch> {
        if matches.len() < 2 {
            return matches;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in &matches {
            *counts.entry(m.recipe.cuisine_type.as_str()).or_insert(0) += 1;
        }
        let Some((dominant, dominant_count)) = counts.into_iter().max_by_key(|(_, count)| *count)
        else {
            return matches;
        };

        let share = dominant_count as f32 / matches.len() as f32;
        if share <= DOMINANCE_THRESHOLD || dominant_count < 2 {
            return matches;
        }
        let dominant = dominant.to_string();

        let Some(slot) = matches
            .iter()
            .rposition(|m| m.recipe.cuisine_type == dominant)
        else {
            return matches;
        };

        let in_results: HashSet<&str> = matches.iter().map(|m| m.recipe.id.as_str()).collect();
        let alternatives: Vec<&RecipeRecord> = candidates
            .iter()
            .filter(|recipe| recipe.cuisine_type != dominant)
            .filter(|recipe| !seen_ids.contains(&recipe.id))
            .filter(|recipe| !in_results.contains(recipe.id.as_str()))
            .collect();

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                use std::time::SystemTime;
                let now = SystemTime::now()
                    .duration_since(SystemTime::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                StdRng::seed_from_u64(now)
            }
        };

        if let Some(substitute) = alternatives.choose(&mut rng) {
            let marked_down = matches[slot].match_score * SUBSTITUTE_MARKDOWN;
            tracing::debug!(
                "Diversity pass: swapping {} for {} ({} held {:.0}% of slots)",
                matches[slot].recipe.id,
                substitute.id,
                dominant,
                share * 100.0
            );
            matches[slot] = RecipeMatch {
                recipe: (*substitute).clone(),
                matched_ingredients: Vec::new(),
                match_score: marked_down,
                freshness: FRESH,
            };
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with(id: &str, cuisine: &str) -> RecipeRecord {
        RecipeRecord {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            ingredients: vec!["something".into()],
            instructions: vec![],
            cuisine_type: cuisine.to_string(),
            cooking_technique: String::new(),
            dietary_info: vec![],
            cook_time: String::new(),
            difficulty: String::new(),
            servings: 4,
        }
    }

    fn match_with(id: &str, cuisine: &str, score: f32) -> RecipeMatch {
        RecipeMatch {
            recipe: recipe_with(id, cuisine),
            matched_ingredients: vec!["something".into()],
            match_score: score,
            freshness: FRESH,
        }
    }

    #[test]
    fn dominant_cuisine_gets_one_substitution() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
            match_with("r3", "Italian", 0.7),
            match_with("r4", "Italian", 0.6),
            match_with("r5", "Mexican", 0.5),
        ];
        let candidates = vec![recipe_with("alt1", "Asian"), recipe_with("alt2", "French")];

        let result =
            DiversityFilter::diversify(matches, &candidates, &HashSet::new(), Some(7));

        assert_eq!(result.len(), 5);
        let italian = result
            .iter()
            .filter(|m| m.recipe.cuisine_type == "Italian")
            .count();
        assert_eq!(italian, 3);

        // the lowest-ranked Italian slot (index 3) was replaced and marked down
        let substitute = &result[3];
        assert_ne!(substitute.recipe.cuisine_type, "Italian");
        assert!((substitute.match_score - 0.6 * SUBSTITUTE_MARKDOWN).abs() < 1e-6);
        assert!(substitute.matched_ingredients.is_empty());
    }

    #[test]
    fn sixty_percent_exactly_is_tolerated() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
            match_with("r3", "Italian", 0.7),
            match_with("r4", "Mexican", 0.6),
            match_with("r5", "Asian", 0.5),
        ];
        let candidates = vec![recipe_with("alt1", "French")];

        let result =
            DiversityFilter::diversify(matches.clone(), &candidates, &HashSet::new(), Some(7));
        let ids: Vec<&str> = result.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn no_substitution_without_alternatives() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
        ];
        // only dominant-cuisine candidates available
        let candidates = vec![recipe_with("alt1", "Italian")];

        let result =
            DiversityFilter::diversify(matches.clone(), &candidates, &HashSet::new(), Some(7));
        let ids: Vec<&str> = result.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn seen_candidates_are_not_substituted_in() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
        ];
        let candidates = vec![recipe_with("alt1", "Asian")];
        let seen: HashSet<String> = ["alt1".to_string()].into();

        let result = DiversityFilter::diversify(matches.clone(), &candidates, &seen, Some(7));
        let ids: Vec<&str> = result.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn single_representative_is_never_replaced() {
        let matches = vec![match_with("r1", "Italian", 0.9)];
        let candidates = vec![recipe_with("alt1", "Asian")];

        let result =
            DiversityFilter::diversify(matches.clone(), &candidates, &HashSet::new(), Some(7));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].recipe.id, "r1");
    }

    #[test]
    fn never_grows_the_list() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
            match_with("r3", "Italian", 0.7),
        ];
        let candidates: Vec<RecipeRecord> =
            (0..10).map(|i| recipe_with(&format!("alt{}", i), "Asian")).collect();

        let result =
            DiversityFilter::diversify(matches, &candidates, &HashSet::new(), Some(7));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let matches = vec![
            match_with("r1", "Italian", 0.9),
            match_with("r2", "Italian", 0.8),
        ];
        let candidates: Vec<RecipeRecord> =
            (0..10).map(|i| recipe_with(&format!("alt{}", i), "Asian")).collect();

        let a = DiversityFilter::diversify(
            matches.clone(),
            &candidates,
            &HashSet::new(),
            Some(42),
        );
        let b = DiversityFilter::diversify(matches, &candidates, &HashSet::new(), Some(42));
        assert_eq!(a[1].recipe.id, b[1].recipe.id);
    }
}
