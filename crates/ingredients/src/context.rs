use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::matching::loosely_matches;

/// Meal the user is probably cooking for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Morning is [5, 12), afternoon [12, 17), evening everything else.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..12 => TimeOfDay::Morning,
            12..17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}

/// Inferred cooking context for the current ingredient set.
///
/// Derived, not authoritative: any single signature hit includes a cuisine,
/// so several cuisines commonly co-occur. The whole struct is recomputed
/// from scratch whenever the ingredient set changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientContext {
    pub possible_cuisines: Vec<String>,
    pub cooking_techniques: Vec<String>,
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    pub time_of_day: TimeOfDay,
}

const CUISINE_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "Italian",
        &[
            "pasta",
            "tomato",
            "basil",
            "mozzarella",
            "parmesan",
            "olive oil",
            "oregano",
            "garlic",
        ],
    ),
    (
        "Mexican",
        &[
            "tortilla",
            "black beans",
            "avocado",
            "cilantro",
            "lime",
            "jalapeno",
            "cumin",
            "salsa",
        ],
    ),
    (
        "Asian",
        &[
            "soy sauce",
            "ginger",
            "rice",
            "sesame oil",
            "green onion",
            "tofu",
            "noodles",
        ],
    ),
    (
        "Indian",
        &[
            "curry",
            "turmeric",
            "garam masala",
            "lentils",
            "cumin",
            "coriander",
            "yogurt",
        ],
    ),
    (
        "Mediterranean",
        &[
            "olive oil",
            "feta",
            "chickpeas",
            "lemon",
            "olives",
            "tahini",
            "eggplant",
        ],
    ),
    (
        "American",
        &[
            "ground beef",
            "cheddar",
            "potato",
            "bacon",
            "corn",
            "barbecue sauce",
            "butter",
        ],
    ),
    (
        "French",
        &[
            "butter",
            "cream",
            "white wine",
            "thyme",
            "shallot",
            "dijon mustard",
            "leek",
        ],
    ),
];

// Techniques need two distinct signature hits: single shared staples like
// garlic show up in nearly every table and would fire everything at once.
const TECHNIQUE_MIN_MATCHES: usize = 2;

const TECHNIQUE_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "Baking",
        &[
            "flour",
            "butter",
            "sugar",
            "egg",
            "baking powder",
            "vanilla",
            "yeast",
        ],
    ),
    (
        "Roasting",
        &["potato", "carrot", "chicken", "beef", "rosemary", "olive oil"],
    ),
    (
        "Stir-frying",
        &[
            "soy sauce",
            "ginger",
            "garlic",
            "sesame oil",
            "rice",
            "bell pepper",
            "green onion",
        ],
    ),
    (
        "Sautéing",
        &["onion", "garlic", "mushroom", "butter", "olive oil", "shallot"],
    ),
    (
        "Boiling",
        &["pasta", "potato", "egg", "rice", "lentils", "corn"],
    ),
    (
        "Grilling",
        &[
            "chicken",
            "steak",
            "corn",
            "zucchini",
            "barbecue sauce",
            "asparagus",
        ],
    ),
];

const BREAKFAST_SIGNATURES: &[&str] = &[
    "egg",
    "bacon",
    "toast",
    "oat",
    "pancake",
    "milk",
    "banana",
    "yogurt",
    "maple syrup",
];

const DINNER_SIGNATURES: &[&str] = &[
    "chicken", "beef", "pasta", "potato", "fish", "rice", "salmon", "pork",
];

/// Stateless service inferring probable cuisines, techniques, and meal type
/// from the current ingredient names.
pub struct ContextAnalyzer;

impl ContextAnalyzer {
    /// Analyze with the current wall-clock hour. Reading the clock is the
    /// only impure input; [`Self::analyze_at_hour`] is the pure core.
    pub fn analyze(names: &[String]) -> IngredientContext {
        Self::analyze_at_hour(names, Local::now().hour())
    }

    pub fn analyze_at_hour(names: &[String], hour: u32) -> IngredientContext {
        let possible_cuisines = CUISINE_SIGNATURES
            .iter()
            .filter(|(_, signatures)| Self::count_matches(names, signatures) >= 1)
            .map(|(cuisine, _)| cuisine.to_string())
            .collect();

        let cooking_techniques = TECHNIQUE_SIGNATURES
            .iter()
            .filter(|(_, signatures)| {
                Self::count_matches(names, signatures) >= TECHNIQUE_MIN_MATCHES
            })
            .map(|(technique, _)| technique.to_string())
            .collect();

        let breakfast_hits = Self::count_matches(names, BREAKFAST_SIGNATURES);
        let dinner_hits = Self::count_matches(names, DINNER_SIGNATURES);
        let meal_type = if breakfast_hits > dinner_hits {
            Some(MealType::Breakfast)
        } else if dinner_hits > 0 {
            Some(MealType::Dinner)
        } else {
            None
        };

        IngredientContext {
            possible_cuisines,
            cooking_techniques,
            meal_type,
            dietary_preferences: Vec::new(),
            time_of_day: TimeOfDay::from_hour(hour),
        }
    }

    /// Number of distinct signature entries matched by any ingredient.
    fn count_matches(names: &[String], signatures: &[&str]) -> usize {
        signatures
            .iter()
            .filter(|signature| names.iter().any(|name| loosely_matches(name, signature)))
            .count()
    }
}
