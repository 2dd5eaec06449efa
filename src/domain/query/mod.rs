//! Query module - question flow values and validation.

mod validation;
mod values;

pub use validation::{validate_query, EMPTY_QUERY_MESSAGE, QUERY_FIELD};
pub use values::{AnswerBlock, MediaType, QueryAnswer};
