pub mod context;
pub mod matching;
pub mod normalize;
pub mod suggest;

pub use context::{ContextAnalyzer, IngredientContext, MealType, TimeOfDay};
pub use matching::loosely_matches;
pub use normalize::{IngredientNormalizer, PrepState, ProcessedIngredient, RawDetection};
pub use suggest::{IngredientSuggester, MAX_SUGGESTIONS};
