use std::sync::Arc;

use async_graphql::ErrorExtensions;
use infra::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// Every failure a resolver reports goes through this enum so clients can
/// tell the cases apart from `extensions.code`:
///   - `NotFound`   → `NOT_FOUND`
///   - `Conflict`   → `CONFLICT`
///   - `Internal`   → `INTERNAL` (detail logged server-side, sanitized for clients)
///
/// Convert with [`GqlResultExt::gql`] or `GqlError::extend()`; a bare `?`
/// would go through async-graphql's `Display` conversion and drop the code.
#[derive(Debug)]
pub enum GqlError {
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl GqlError {
    pub fn code(&self) -> &'static str {
        match self {
            GqlError::NotFound(_) => "NOT_FOUND",
            GqlError::Conflict(_) => "CONFLICT",
            GqlError::Internal(_) => "INTERNAL",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::NotFound(msg) | GqlError::Conflict(msg) => write!(f, "{msg}"),
            GqlError::Internal(_) => write!(f, "Internal database error"),
        }
    }
}

impl std::error::Error for GqlError {}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => GqlError::NotFound(e.to_string()),
            StoreError::Conflict(msg) => GqlError::Conflict(msg),
            StoreError::Database(db_err) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {db_err}");
                GqlError::Internal(db_err.to_string())
            }
        }
    }
}

/// Loader errors arrive shared between every key of the batch.
impl From<Arc<StoreError>> for GqlError {
    fn from(e: Arc<StoreError>) -> Self {
        match e.as_ref() {
            StoreError::NotFound { .. } => GqlError::NotFound(e.to_string()),
            StoreError::Conflict(msg) => GqlError::Conflict(msg.clone()),
            StoreError::Database(db_err) => {
                tracing::error!("Database error in loader: {db_err}");
                GqlError::Internal(db_err.to_string())
            }
        }
    }
}

/// Extension trait turning store results into `async_graphql::Result` with the
/// error code attached.
///
/// Usage: `state.store.delete_post(id).await.gql()?`
pub trait GqlResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<GqlError>> GqlResultExt<T> for std::result::Result<T, E> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            let err: GqlError = e.into();
            err.extend()
        })
    }
}
