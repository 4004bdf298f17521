use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// Catalog recipe as delivered by the external catalog collaborator.
///
/// Records are read-only to the engine and identified by `id`. Third-party
/// catalogs are frequently incomplete, so every field beyond `id` and
/// `title` deserializes leniently with a default. `cook_time` stays free
/// text ("45 minutes", "1 hour 30 minutes") and is parsed on demand by
/// [`crate::cook_time::parse_cook_time_minutes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub cooking_technique: String,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
}

fn default_servings() -> u32 {
    4
}

impl RecipeRecord {
    /// Check that the record carries enough data to be scored.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.id.trim().is_empty() {
            return Err(RecipeError::MissingId);
        }
        if self.title.trim().is_empty() {
            return Err(RecipeError::EmptyTitle(self.id.clone()));
        }
        if self.ingredients.is_empty() {
            return Err(RecipeError::NoIngredients(self.id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_shape() {
        let json = r#"{
            "id": "r1",
            "title": "Spaghetti Aglio e Olio",
            "ingredients": ["pasta", "garlic", "olive oil"],
            "instructions": ["Boil pasta", "Saute garlic", "Toss"],
            "cuisineType": "Italian",
            "cookingTechnique": "Boiling",
            "cookTime": "20 minutes",
            "difficulty": "easy",
            "servings": 2
        }"#;

        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "r1");
        assert_eq!(record.cuisine_type, "Italian");
        assert_eq!(record.ingredients.len(), 3);
        assert!(record.dietary_info.is_empty());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": "r2", "title": "Mystery Stew", "ingredients": ["beef"]}"#;
        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cuisine_type, "");
        assert_eq!(record.servings, 4);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_ingredients() {
        let json = r#"{"id": "r3", "title": "Air Soup"}"#;
        let record: RecipeRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(
            record.validate(),
            Err(RecipeError::NoIngredients(id)) if id == "r3"
        ));
    }
}
