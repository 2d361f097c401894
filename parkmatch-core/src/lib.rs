pub mod catalog;
pub mod matching;
pub mod models;

pub use catalog::{Catalog, CatalogError};
pub use matching::{compute_match, MatchError};
pub use models::{AnswerOption, AnswerSet, MatchOutcome, Park, Question};
