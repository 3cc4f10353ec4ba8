/// Unified database error type for all database operations
///
/// This provides a consistent error interface across database backends.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver errors
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display_carries_cause() {
        let err = DatabaseError::ConnectionFailed("server selection timed out".to_string());
        assert_eq!(
            err.to_string(),
            "Connection failed: server selection timed out"
        );
    }
}
