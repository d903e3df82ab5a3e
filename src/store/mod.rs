pub mod memory;

pub use memory::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

impl StoreError {
    pub(crate) fn not_found(entity_type: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub(crate) fn duplicate(entity_type: &str, id: impl std::fmt::Display) -> Self {
        Self::ConstraintViolation(format!("{entity_type} {id} is already stored"))
    }
}
