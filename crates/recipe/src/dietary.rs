//! Conservative dietary-tag inference for untagged catalog records.
//!
//! Tags are only assigned when no restricted ingredient shows up in the
//! list: a missed tag is acceptable, a wrong one is not.

use crate::types::RecipeRecord;

const MEAT_AND_FISH: &[&str] = &[
    "chicken", "beef", "pork", "fish", "lamb", "turkey", "shrimp", "salmon", "tuna", "bacon",
    "ham", "sausage", "anchovy", "meat",
];

const ANIMAL_PRODUCTS: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "cream",
    "egg",
    "yogurt",
    "honey",
    "whey",
    "gelatin",
    "mayonnaise",
];

const GLUTEN_SOURCES: &[&str] = &[
    "flour",
    "wheat",
    "bread",
    "pasta",
    "noodle",
    "barley",
    "rye",
    "couscous",
    "breadcrumb",
    "cracker",
];

pub struct DietaryInference;

impl DietaryInference {
    /// Infer dietary tags from ingredient names alone.
    pub fn infer(ingredients: &[String]) -> Vec<String> {
        let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

        let mut tags = Vec::new();
        if !Self::any_keyword(&lowered, MEAT_AND_FISH) {
            tags.push("vegetarian".to_string());
            if !Self::any_keyword(&lowered, ANIMAL_PRODUCTS) {
                tags.push("vegan".to_string());
            }
        }
        if Self::is_gluten_free(&lowered) {
            tags.push("gluten-free".to_string());
        }
        tags
    }

    /// A record's declared tags, or inferred ones when the catalog left the
    /// field empty.
    pub fn effective_tags(record: &RecipeRecord) -> Vec<String> {
        if record.dietary_info.is_empty() {
            Self::infer(&record.ingredients)
        } else {
            record.dietary_info.clone()
        }
    }

    fn any_keyword(names: &[String], keywords: &[&str]) -> bool {
        names
            .iter()
            .any(|name| keywords.iter().any(|keyword| name.contains(keyword)))
    }

    fn is_gluten_free(names: &[String]) -> bool {
        // "gluten-free pasta" counts as safe even though it mentions pasta
        if names
            .iter()
            .any(|name| name.contains("gluten-free") || name.contains("gluten free"))
        {
            return true;
        }
        !Self::any_keyword(names, GLUTEN_SOURCES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plant_only_is_vegan_and_vegetarian() {
        let tags = DietaryInference::infer(&names(&["tomato", "lettuce", "olive oil"]));
        assert!(tags.contains(&"vegetarian".to_string()));
        assert!(tags.contains(&"vegan".to_string()));
    }

    #[test]
    fn dairy_blocks_vegan_only() {
        let tags = DietaryInference::infer(&names(&["rice", "butter", "peas"]));
        assert!(tags.contains(&"vegetarian".to_string()));
        assert!(!tags.contains(&"vegan".to_string()));
    }

    #[test]
    fn meat_blocks_both() {
        let tags = DietaryInference::infer(&names(&["chicken", "rice"]));
        assert!(!tags.contains(&"vegetarian".to_string()));
        assert!(!tags.contains(&"vegan".to_string()));
    }

    #[test]
    fn gluten_free_variant_is_safe() {
        let tags = DietaryInference::infer(&names(&["gluten-free pasta", "tomato"]));
        assert!(tags.contains(&"gluten-free".to_string()));
    }

    #[test]
    fn wheat_blocks_gluten_free() {
        let tags = DietaryInference::infer(&names(&["flour", "sugar"]));
        assert!(!tags.contains(&"gluten-free".to_string()));
    }

    #[test]
    fn declared_tags_win_over_inference() {
        let record = RecipeRecord {
            id: "r1".into(),
            title: "Tagged".into(),
            ingredients: vec!["chicken".into()],
            instructions: vec![],
            cuisine_type: String::new(),
            cooking_technique: String::new(),
            dietary_info: vec!["halal".into()],
            cook_time: String::new(),
            difficulty: String::new(),
            servings: 4,
        };
        assert_eq!(DietaryInference::effective_tags(&record), vec!["halal"]);
    }
}
