use std::collections::HashSet;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Raw `{name, confidence}` pair from the vision collaborator. Ephemeral:
/// consumed immediately by [`IngredientNormalizer::process_detections`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetection {
    pub name: String,
    pub confidence: f32,
}

/// Preparation state detected in a raw ingredient string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PrepState {
    Chopped,
    Diced,
    Sliced,
    Minced,
    Grated,
    Ground,
    Shredded,
    Crushed,
    Peeled,
}

/// Ingredient after boundary normalization.
///
/// Produced once at the detection boundary so everything downstream works
/// with a single shape instead of branching on raw detection forms. Name is
/// title-cased with quantity and preparation state stripped; names are
/// unique case-insensitively within a session's list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedIngredient {
    pub name: String,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PrepState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl ProcessedIngredient {
    pub fn from_name(name: impl Into<String>, confidence: f32) -> Self {
        ProcessedIngredient {
            name: name.into(),
            confidence,
            state: None,
            freshness: None,
            quantity: None,
        }
    }
}

// Leading "<number> [unit] [of]" prefix. The unit alternation lists longer
// spellings first so "g" cannot shadow "grams".
static RE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d+(?:\.\d+)?)\s*(cups?|tablespoons?|tbsps?|teaspoons?|tsps?|ounces?|oz|pounds?|lbs?|grams?|kilograms?|kg|milliliters?|ml|liters?|g|l)?\b\s*(?:of\s+)?",
    )
    .unwrap()
});

static RE_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(chopped|diced|sliced|minced|grated|ground|shredded|crushed|peeled)\b")
        .unwrap()
});

/// Names that contain one of these terms are containers or utensils the
/// vision service tends to detect alongside food.
const NON_FOOD_TERMS: &[&str] = &[
    "table",
    "chair",
    "plate",
    "spoon",
    "fork",
    "knife",
    "cup",
    "glass",
    "bowl",
    "napkin",
    "container",
    "package",
    "wrapper",
    "box",
    "jar",
    "can",
    "bottle",
];

/// Static freshness estimate for common perishables. Not a sensor, just a
/// fixed prior so perishable produce sorts ahead in the UI.
const PERISHABLES: &[&str] = &["tomato", "lettuce", "cucumber", "pepper", "carrot"];
const PERISHABLE_FRESHNESS: f32 = 0.9;

/// Stateless boundary service that turns raw vision detections into the
/// [`ProcessedIngredient`] shape the rest of the engine consumes.
pub struct IngredientNormalizer;

impl IngredientNormalizer {
    /// Clean a raw ingredient string: strip a leading quantity+unit prefix,
    /// remove preparation-state words anywhere, trim and title-case.
    ///
    /// Pure and total: input that fits no pattern comes back trimmed and
    /// title-cased, and the function is idempotent.
    pub fn normalize(raw: &str) -> String {
        let without_quantity = RE_QUANTITY.replace(raw, "");
        let without_state = RE_STATE.replace_all(&without_quantity, " ");
        let cleaned = title_case(&without_state);
        if cleaned.is_empty() {
            // Quantity-only strings like "2 cups" keep their original form.
            title_case(raw)
        } else {
            cleaned
        }
    }

    /// Drop non-food detections and case-insensitive duplicates, keeping the
    /// first occurrence. Detections pre-sorted by confidence therefore keep
    /// their highest-confidence entry.
    pub fn filter_and_dedupe(items: Vec<ProcessedIngredient>) -> Vec<ProcessedIngredient> {
        let mut seen: HashSet<String> = HashSet::new();
        items
            .into_iter()
            .filter(|item| {
                let lowered = item.name.to_lowercase();
                if lowered.is_empty() {
                    return false;
                }
                if NON_FOOD_TERMS.iter().any(|term| lowered.contains(term)) {
                    tracing::debug!("Dropping non-food detection: {}", item.name);
                    return false;
                }
                seen.insert(lowered)
            })
            .collect()
    }

    /// Enrich items with preparation state, captured quantity text, and a
    /// static freshness prior. `raw_names` are the pre-strip detection
    /// strings aligned by index; the state keyword is looked up there since
    /// normalization already removed it from the cleaned name.
    pub fn enrich(
        items: Vec<ProcessedIngredient>,
        raw_names: &[String],
    ) -> Vec<ProcessedIngredient> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, mut item)| {
                let raw = raw_names.get(i).map(String::as_str).unwrap_or(&item.name);
                if item.state.is_none() {
                    item.state = detect_state(raw);
                }
                if item.quantity.is_none() {
                    item.quantity = capture_quantity(raw);
                }
                if item.freshness.is_none() && is_perishable(&item.name) {
                    item.freshness = Some(PERISHABLE_FRESHNESS);
                }
                item
            })
            .collect()
    }

    /// The full boundary pipeline: normalize each detection, enrich from the
    /// raw strings, then filter and dedupe.
    pub fn process_detections(detections: &[RawDetection]) -> Vec<ProcessedIngredient> {
        let items = detections
            .iter()
            .map(|d| ProcessedIngredient::from_name(Self::normalize(&d.name), d.confidence))
            .collect();
        let raw_names: Vec<String> = detections.iter().map(|d| d.name.clone()).collect();
        Self::filter_and_dedupe(Self::enrich(items, &raw_names))
    }
}

fn detect_state(raw: &str) -> Option<PrepState> {
    RE_STATE
        .find(raw)
        .and_then(|m| PrepState::from_str(&m.as_str().to_lowercase()).ok())
}

fn capture_quantity(raw: &str) -> Option<String> {
    let captures = RE_QUANTITY.captures(raw)?;
    let number = captures.get(1)?.as_str();
    let quantity = match captures.get(2) {
        Some(unit) => format!("{} {}", number, unit.as_str().to_lowercase()),
        None => number.to_string(),
    };
    Some(quantity)
}

fn is_perishable(name: &str) -> bool {
    let lowered = name.to_lowercase();
    PERISHABLES.iter().any(|term| lowered.contains(term))
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
