use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Sort a failed write into the taxonomy: foreign-key violations become
    /// `on_missing`, unique violations become a `Conflict` carrying `conflict`.
    pub(crate) fn from_write(
        err: sqlx::Error,
        on_missing: impl FnOnce() -> StoreError,
        conflict: impl FnOnce() -> String,
    ) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return on_missing();
            }
            if db_err.is_unique_violation() {
                tracing::debug!("Unique violation: {}", db_err.message());
                return StoreError::Conflict(conflict());
            }
        }
        StoreError::Database(err)
    }
}
