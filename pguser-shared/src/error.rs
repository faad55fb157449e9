//! Error types for the record accessor
//!
//! A query that matches no rows is reported as `NotFound`. Every other
//! failure (connecting, running the query, decoding a row) is `Database`.

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the lookup
    #[error("user not found")]
    NotFound,

    /// Connection, query, or decode failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Returns true if this error means the lookup matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(StoreError::NotFound.to_string(), "user not found");
        assert!(StoreError::NotFound.is_not_found());
    }

    #[test]
    fn test_database_error_from_sqlx() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("database error:"));
    }
}
