use crate::context::IngredientContext;
use crate::matching::loosely_matches;

/// Fixed co-occurrence table: what people usually cook an ingredient with.
const ASSOCIATIONS: &[(&str, &[&str])] = &[
    ("tomato", &["garlic", "onion", "basil", "olive oil"]),
    ("pasta", &["garlic", "parmesan", "olive oil", "tomato"]),
    ("chicken", &["garlic", "lemon", "thyme", "onion"]),
    ("rice", &["soy sauce", "green onion", "egg", "peas"]),
    ("potato", &["butter", "rosemary", "garlic", "cheese"]),
    ("egg", &["bacon", "cheese", "milk", "chives"]),
    ("bread", &["butter", "garlic", "cheese"]),
    ("beef", &["onion", "garlic", "mushroom", "thyme"]),
    ("fish", &["lemon", "garlic", "dill", "butter"]),
    ("onion", &["garlic", "celery", "carrot", "butter"]),
];

/// Cuisine staples appended after direct associations when the context
/// already points at the cuisine.
const ITALIAN_STAPLES: &[&str] = &["basil", "parmesan", "olive oil", "garlic"];
const ASIAN_STAPLES: &[&str] = &["soy sauce", "ginger", "sesame oil", "green onion"];

pub const MAX_SUGGESTIONS: usize = 5;

/// Proposes likely-missing ingredients from co-occurrence associations and
/// the inferred cuisine. Direct associations take priority; cuisine staples
/// only fill whatever room is left under the cap.
pub struct IngredientSuggester;

impl IngredientSuggester {
    pub fn suggest_missing(current: &[String], context: &IngredientContext) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();

        for name in current {
            for (key, associated) in ASSOCIATIONS {
                if loosely_matches(name, key) {
                    for candidate in *associated {
                        push_candidate(&mut suggestions, current, candidate);
                    }
                }
            }
        }

        for (cuisine, staples) in [("Italian", ITALIAN_STAPLES), ("Asian", ASIAN_STAPLES)] {
            if context.possible_cuisines.iter().any(|c| c == cuisine) {
                for candidate in staples {
                    push_candidate(&mut suggestions, current, candidate);
                }
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

fn push_candidate(suggestions: &mut Vec<String>, current: &[String], candidate: &str) {
    let already_present = current.iter().any(|name| loosely_matches(name, candidate));
    let already_suggested = suggestions.iter().any(|s| s == candidate);
    if !already_present && !already_suggested {
        suggestions.push(candidate.to_string());
    }
}
