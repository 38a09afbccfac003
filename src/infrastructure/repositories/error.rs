use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            // SQLite reports the offending columns in the message,
            // e.g. "UNIQUE constraint failed: articles.slug".
            ErrorKind::UniqueViolation => {
                DomainError::Conflict(unique_violation_message(db_err.message()).into())
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence("database connection unavailable".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn unique_violation_message(message: &str) -> &'static str {
    if message.contains("articles.slug") {
        "slug already exists"
    } else if message.contains("categories.name") {
        "category name already exists"
    } else if message.contains("categories.slug") {
        "category slug already exists"
    } else {
        "unique constraint violated"
    }
}
