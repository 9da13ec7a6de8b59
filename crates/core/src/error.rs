use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Edit limit reached: report already has {edit_count} edits")]
    EditLimitExceeded { edit_count: u32 },

    #[error("Not authorized: {0}")]
    NotAuthorized(String),
}
