pub mod diversity;
pub mod error;
pub mod fallback;
pub mod query;
pub mod scorer;
pub mod session;
pub mod store;

pub use diversity::DiversityFilter;
pub use error::RecommendationError;
pub use fallback::FallbackStrategy;
pub use query::ExtractedQuery;
pub use scorer::{QueryContext, RecipeMatch, RecipeScorer, SEEN_FRESHNESS_PENALTY, TOP_N};
pub use session::{
    Interaction, Recommendation, RecommendationSession, SNAPSHOT_SCHEMA_VERSION, SessionSnapshot,
};
pub use store::{IngredientListSnapshot, InMemoryStore, KeyValueStore, SessionStore};
