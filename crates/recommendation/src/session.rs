use std::collections::{HashMap, HashSet};

use chrono::Utc;
use ingredients::{ContextAnalyzer, TimeOfDay};
use recipe::{CookingTimePreference, RecipeRecord, parse_cook_time_minutes, retain_usable};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::diversity::DiversityFilter;
use crate::error::RecommendationError;
use crate::fallback::FallbackStrategy;
use crate::scorer::{QueryContext, RecipeMatch, RecipeScorer};

/// Current snapshot schema. Bump when the persisted shape changes.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

// Preference deltas per interaction. Damped increments with no decay and no
// clamping: repeated likes accumulate.
const LIKED_DELTA: f32 = 0.2;
const DISLIKED_DELTA: f32 = -0.3;
const VIEWED_DELTA: f32 = 0.1;

/// How the user engaged with a recommended recipe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    Liked,
    Disliked,
    Viewed,
}

/// What a recommendation pass hands to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub recipes: Vec<RecipeMatch>,
    pub message: String,
    pub context_message: Option<String>,
}

/// Persisted session fields, serialized as versioned JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub schema_version: u32,
    pub seen_recipe_ids: HashSet<String>,
    pub user_preferences: HashMap<String, f32>,
    pub last_query_ingredients: Vec<String>,
    pub last_recommendation: Vec<String>,
    pub started_at: String,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Stateful per-user coordinator over repeated recommendation queries.
///
/// Tracks which recipes have been shown ("freshness"), accumulates cuisine
/// preference signal, and replays the last query on refresh. One instance
/// per user session, never shared across users; a host serving concurrent
/// requests wraps it in the per-key [`crate::store::SessionStore`].
#[derive(Debug)]
pub struct RecommendationSession {
    catalog: Vec<RecipeRecord>,
    seen_recipe_ids: HashSet<String>,
    user_preferences: HashMap<String, f32>,
    last_query_ingredients: Vec<String>,
    last_recommendation: Vec<String>,
    started_at: String,
}

impl RecommendationSession {
    pub fn new(catalog: Vec<RecipeRecord>) -> Self {
        RecommendationSession {
            catalog: retain_usable(catalog),
            seen_recipe_ids: HashSet::new(),
            user_preferences: HashMap::new(),
            last_query_ingredients: Vec::new(),
            last_recommendation: Vec::new(),
            started_at: Utc::now().to_rfc3339(),
        }
    }

    /// Run a full recommendation pass for the given ingredient names.
    ///
    /// `context` overrides the analyzer-derived context (the NL-query path
    /// supplies one); `seed` pins the diversity substitution for tests.
    pub fn get_recommendations(
        &mut self,
        ingredients: &[String],
        context: Option<QueryContext>,
        seed: Option<u64>,
    ) -> Recommendation {
        self.last_query_ingredients = ingredients.to_vec();

        let context = context.unwrap_or_else(|| {
            QueryContext::from_ingredient_context(&ContextAnalyzer::analyze(ingredients))
        });

        let ranked = RecipeScorer::rank(
            &self.catalog,
            ingredients,
            Some(&context),
            &self.user_preferences,
            &self.seen_recipe_ids,
        );
        let recipes =
            DiversityFilter::diversify(ranked, &self.catalog, &self.seen_recipe_ids, seed);

        let (recipes, message) = if recipes.is_empty() {
            (
                FallbackStrategy::candidates(&self.catalog, FallbackStrategy::DEFAULT_LIMIT),
                "No close matches found. Try adding a few more common ingredients like onion, \
                 garlic, or olive oil."
                    .to_string(),
            )
        } else if ingredients.is_empty() {
            (
                recipes,
                "Add some ingredients to get tailored matches; here are a few ideas to start \
                 with."
                    .to_string(),
            )
        } else {
            let top_score = recipes.first().map(|m| m.match_score).unwrap_or(0.0);
            let message = if top_score > 0.7 {
                "Found great recipes for your ingredients!"
            } else if top_score > 0.4 {
                "Some of your ingredients match these recipes. You may need a few extra items."
            } else {
                "Few strong matches. Adding more ingredients would unlock better recipes."
            }
            .to_string();
            (recipes, message)
        };

        let context_message = Self::context_message(&context, &recipes);

        self.last_recommendation = recipes.iter().map(|m| m.recipe.id.clone()).collect();
        tracing::debug!(
            "Recommendation pass: {} results for {} ingredients",
            recipes.len(),
            ingredients.len()
        );

        Recommendation {
            recipes,
            message,
            context_message,
        }
    }

    /// Mark everything from the last pass as seen, then re-run the same
    /// query. Previously shown recipes drop to the penalized freshness, so
    /// repeated refreshes rotate through the catalog without ever fully
    /// excluding a recipe.
    pub fn refresh(&mut self, seed: Option<u64>) -> Recommendation {
        let shown: Vec<String> = self.last_recommendation.drain(..).collect();
        self.seen_recipe_ids.extend(shown);
        let ingredients = self.last_query_ingredients.clone();
        self.get_recommendations(&ingredients, None, seed)
    }

    /// Clear freshness tracking only; learned preferences survive.
    pub fn reset(&mut self) {
        self.seen_recipe_ids.clear();
    }

    /// Nudge the cuisine preference for `recipe` by the interaction delta.
    pub fn update_preferences(&mut self, recipe: &RecipeRecord, interaction: Interaction) {
        let delta = match interaction {
            Interaction::Liked => LIKED_DELTA,
            Interaction::Disliked => DISLIKED_DELTA,
            Interaction::Viewed => VIEWED_DELTA,
        };
        *self
            .user_preferences
            .entry(recipe.cuisine_type.clone())
            .or_insert(0.0) += delta;
    }

    pub fn seen_recipe_ids(&self) -> &HashSet<String> {
        &self.seen_recipe_ids
    }

    pub fn user_preferences(&self) -> &HashMap<String, f32> {
        &self.user_preferences
    }

    pub fn last_query_ingredients(&self) -> &[String] {
        &self.last_query_ingredients
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            seen_recipe_ids: self.seen_recipe_ids.clone(),
            user_preferences: self.user_preferences.clone(),
            last_query_ingredients: self.last_query_ingredients.clone(),
            last_recommendation: self.last_recommendation.clone(),
            started_at: self.started_at.clone(),
        }
    }

    /// Rebuild a session from a persisted snapshot.
    pub fn restore(
        catalog: Vec<RecipeRecord>,
        snapshot: SessionSnapshot,
    ) -> Result<Self, RecommendationError> {
        if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(RecommendationError::UnsupportedSnapshotVersion(
                snapshot.schema_version,
            ));
        }
        Ok(RecommendationSession {
            catalog: retain_usable(catalog),
            seen_recipe_ids: snapshot.seen_recipe_ids,
            user_preferences: snapshot.user_preferences,
            last_query_ingredients: snapshot.last_query_ingredients,
            last_recommendation: snapshot.last_recommendation,
            started_at: snapshot.started_at,
        })
    }

    fn context_message(context: &QueryContext, recipes: &[RecipeMatch]) -> Option<String> {
        if context.time_of_day == Some(TimeOfDay::Morning)
            && recipes.iter().any(|m| m.recipe.cuisine_type == "American")
        {
            return Some(
                "Included breakfast-friendly options for your morning cooking.".to_string(),
            );
        }
        if context.cooking_time == Some(CookingTimePreference::Quick)
            && recipes.iter().any(|m| {
                parse_cook_time_minutes(&m.recipe.cook_time).is_some_and(|minutes| minutes <= 20)
            })
        {
            return Some("Prioritized quick recipes to fit your schedule.".to_string());
        }
        None
    }
}
