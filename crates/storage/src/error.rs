use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Classify a write failure into an explicit error kind.
    ///
    /// Inspects the SQLSTATE code (23505 = unique_violation, 23503 =
    /// foreign_key_violation) so callers match on enum variants instead of
    /// digging through driver errors.
    pub fn from_write_error(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = || db_err.constraint().unwrap_or("unnamed").to_string();
            match db_err.code().as_deref() {
                Some("23505") => return StorageError::UniqueViolation(constraint()),
                Some("23503") => return StorageError::ForeignKeyViolation(constraint()),
                _ => {}
            }
        }

        StorageError::Database(err)
    }
}
