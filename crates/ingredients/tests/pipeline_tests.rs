use ingredients::{
    ContextAnalyzer, IngredientNormalizer, IngredientSuggester, MealType, PrepState, RawDetection,
};

fn detection(name: &str, confidence: f32) -> RawDetection {
    RawDetection {
        name: name.to_string(),
        confidence,
    }
}

#[test]
fn photo_detections_become_a_clean_ingredient_list() {
    // typical vision output: quantities, prep states, utensils, duplicates
    let detections = vec![
        detection("2 cups chopped Tomatoes", 0.97),
        detection("glass bowl", 0.93),
        detection("3 cloves minced garlic", 0.89),
        detection("tomatoes", 0.42),
        detection("fresh basil", 0.81),
        detection("plastic wrapper", 0.77),
    ];

    let items = IngredientNormalizer::process_detections(&detections);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, vec!["Tomatoes", "Cloves Garlic", "Fresh Basil"]);
    assert_eq!(items[0].state, Some(PrepState::Chopped));
    assert_eq!(items[0].quantity.as_deref(), Some("2 cups"));
    assert_eq!(items[0].freshness, Some(0.9));
    assert_eq!(items[1].state, Some(PrepState::Minced));
}

#[test]
fn normalization_is_idempotent_over_detected_names() {
    let raws = [
        "2 cups chopped Tomatoes",
        "1.5 lbs of ground beef",
        "500 g shredded cheese",
        "olive oil",
        "  Peeled  Carrots ",
    ];
    for raw in raws {
        let once = IngredientNormalizer::normalize(raw);
        assert_eq!(once, IngredientNormalizer::normalize(&once));
    }
}

#[test]
fn analyzed_context_feeds_the_suggester() {
    let current = vec![
        "Soy Sauce".to_string(),
        "Ginger".to_string(),
        "Rice".to_string(),
    ];

    let context = ContextAnalyzer::analyze_at_hour(&current, 19);
    assert!(context.possible_cuisines.contains(&"Asian".to_string()));
    assert!(context.cooking_techniques.contains(&"Stir-frying".to_string()));
    assert_eq!(context.meal_type, Some(MealType::Dinner));

    let suggestions = IngredientSuggester::suggest_missing(&current, &context);
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);
    // rice associations lead; the Asian staples fill the rest
    assert!(suggestions.contains(&"green onion".to_string()));
    assert!(suggestions.contains(&"sesame oil".to_string()));
    // never re-suggest what is already on the counter
    assert!(!suggestions.iter().any(|s| s == "soy sauce" || s == "ginger"));
}
