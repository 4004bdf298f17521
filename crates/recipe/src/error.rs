use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("recipe record is missing an id")]
    MissingId,

    #[error("recipe {0} has an empty title")]
    EmptyTitle(String),

    #[error("recipe {0} has no ingredients")]
    NoIngredients(String),
}
