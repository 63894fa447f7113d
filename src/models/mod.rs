//! Domain models for generated model metadata.

mod model_info;
mod mutant_type;

pub use model_info::ModelInfo;
pub use mutant_type::{MutantType, ParseMutantTypeError};
