use std::collections::{HashMap, HashSet};

use ingredients::{IngredientContext, MealType, TimeOfDay, loosely_matches};
use recipe::{CookingTimePreference, DietaryInference, RecipeRecord, parse_cook_time_minutes};
use serde::{Deserialize, Serialize};

/// Blend weights for the final score. Fixed constants kept for behavioral
/// parity; they do not sum to 1.0 because the freshness penalty applies
/// multiplicatively afterward.
pub const INGREDIENT_WEIGHT: f32 = 0.6;
pub const CONTEXT_WEIGHT: f32 = 0.2;
pub const PREFERENCE_WEIGHT: f32 = 0.1;

/// Additive context bonuses, likewise fixed.
pub const MEAL_TYPE_BONUS: f32 = 0.1;
pub const COOK_TIME_BONUS: f32 = 0.15;
pub const DIETARY_BONUS: f32 = 0.2;

/// Freshness multiplier for recipes already shown this session. Flat, with
/// no decay across refreshes; a penalized recipe can still resurface when
/// nothing else scores higher.
pub const SEEN_FRESHNESS_PENALTY: f32 = 0.3;
pub const FRESH: f32 = 1.0;

/// Size of the scored candidate set handed to the diversity pass.
pub const TOP_N: usize = 5;

/// Contextual signals accompanying a query: inferred from the ingredient
/// set, or supplied directly by the natural-language query collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryContext {
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub cooking_time: Option<CookingTimePreference>,
    pub time_of_day: Option<TimeOfDay>,
}

impl QueryContext {
    pub fn from_ingredient_context(context: &IngredientContext) -> Self {
        QueryContext {
            meal_type: context.meal_type,
            dietary_restrictions: context.dietary_preferences.clone(),
            cooking_time: None,
            time_of_day: Some(context.time_of_day),
        }
    }
}

/// A scored candidate. Created per scoring pass and never persisted; scores
/// are always recomputed fresh when the ingredient set changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub recipe: RecipeRecord,
    pub matched_ingredients: Vec<String>,
    pub match_score: f32,
    pub freshness: f32,
}

/// Stateless multi-factor scorer over the candidate catalog.
pub struct RecipeScorer;

impl RecipeScorer {
    /// Score one recipe. Returns `None` when the recipe cannot appear in
    /// results: no usable ingredient list, or nothing matched a non-empty
    /// query. An empty query keeps every recipe in play so the session can
    /// still show something.
    pub fn score(
        recipe: &RecipeRecord,
        user_ingredients: &[String],
        context: Option<&QueryContext>,
        preferences: &HashMap<String, f32>,
        seen_ids: &HashSet<String>,
    ) -> Option<RecipeMatch> {
        if recipe.ingredients.is_empty() {
            return None;
        }

        let matched: Vec<String> = recipe
            .ingredients
            .iter()
            .filter(|recipe_ingredient| {
                user_ingredients
                    .iter()
                    .any(|user_ingredient| loosely_matches(recipe_ingredient, user_ingredient))
            })
            .cloned()
            .collect();

        if matched.is_empty() && !user_ingredients.is_empty() {
            return None;
        }

        let ingredient_score = matched.len() as f32 / recipe.ingredients.len() as f32;
        let context_score = context.map_or(0.0, |ctx| Self::context_score(recipe, ctx));
        let preference_score = preferences
            .get(&recipe.cuisine_type)
            .copied()
            .unwrap_or(0.0);
        let freshness = if seen_ids.contains(&recipe.id) {
            SEEN_FRESHNESS_PENALTY
        } else {
            FRESH
        };

        let match_score = (ingredient_score * INGREDIENT_WEIGHT
            + context_score * CONTEXT_WEIGHT
            + preference_score * PREFERENCE_WEIGHT)
            * freshness;

        Some(RecipeMatch {
            recipe: recipe.clone(),
            matched_ingredients: matched,
            match_score,
            freshness,
        })
    }

    /// Additive context bonus, roughly [0, 0.45]. Deliberately not
    /// normalized; the blend weight above scales it.
    fn context_score(recipe: &RecipeRecord, context: &QueryContext) -> f32 {
        let mut score = 0.0;

        if context.meal_type.is_some() {
            score += MEAL_TYPE_BONUS;
        }

        if let (Some(preference), Some(minutes)) = (
            context.cooking_time,
            parse_cook_time_minutes(&recipe.cook_time),
        ) && preference.matches_minutes(minutes)
        {
            score += COOK_TIME_BONUS;
        }

        if !context.dietary_restrictions.is_empty() {
            let tags = DietaryInference::effective_tags(recipe);
            let matched_restrictions = context
                .dietary_restrictions
                .iter()
                .filter(|restriction| tags.iter().any(|tag| loosely_matches(tag, restriction)))
                .count();
            score += DIETARY_BONUS
                * (matched_restrictions as f32 / context.dietary_restrictions.len() as f32);
        }

        score
    }

    /// Score the whole catalog, sort descending, keep the best five.
    pub fn rank(
        catalog: &[RecipeRecord],
        user_ingredients: &[String],
        context: Option<&QueryContext>,
        preferences: &HashMap<String, f32>,
        seen_ids: &HashSet<String>,
    ) -> Vec<RecipeMatch> {
        let mut matches: Vec<RecipeMatch> = catalog
            .iter()
            .filter_map(|recipe| {
                Self::score(recipe, user_ingredients, context, preferences, seen_ids)
            })
            .collect();
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(TOP_N);
        matches
    }
}
