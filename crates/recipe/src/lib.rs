pub mod catalog;
pub mod cook_time;
pub mod dietary;
pub mod error;
pub mod types;

pub use catalog::{retain_usable, sanitize_catalog};
pub use cook_time::{CookingTimePreference, parse_cook_time_minutes};
pub use dietary::DietaryInference;
pub use error::RecipeError;
pub use types::RecipeRecord;
