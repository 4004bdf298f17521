use ingredients::{ContextAnalyzer, MealType};
use recipe::CookingTimePreference;
use serde::Deserialize;

use crate::scorer::QueryContext;

/// What the natural-language query collaborator extracts from a free-text
/// request. Optional path: the vision pipeline bypasses this entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedQuery {
    pub extracted_ingredients: Vec<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cooking_time: Option<CookingTimePreference>,
}

impl ExtractedQuery {
    /// Split into ingredient names and a query context. Extracted fields
    /// override what the analyzer infers from the ingredient set.
    pub fn into_parts(self) -> (Vec<String>, QueryContext) {
        let ExtractedQuery {
            extracted_ingredients,
            meal_type,
            dietary_restrictions,
            cooking_time,
        } = self;

        let analyzed = ContextAnalyzer::analyze(&extracted_ingredients);
        let mut context = QueryContext::from_ingredient_context(&analyzed);
        if meal_type.is_some() {
            context.meal_type = meal_type;
        }
        if !dietary_restrictions.is_empty() {
            context.dietary_restrictions = dietary_restrictions;
        }
        context.cooking_time = cooking_time;

        (extracted_ingredients, context)
    }
}
