//! Classification of PostgreSQL constraint failures.

use alumnet_core::AppError;
use sqlx::error::ErrorKind;

/// Constraint that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Unique,
    ForeignKey,
    Check,
}

pub fn violation(err: &sqlx::Error) -> Option<Violation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(Violation::Unique),
        ErrorKind::ForeignKeyViolation => Some(Violation::ForeignKey),
        ErrorKind::CheckViolation => Some(Violation::Check),
        _ => None,
    }
}

/// Wraps a sqlx error as a storage error with `context` on top of the chain.
pub fn storage(err: sqlx::Error, context: &'static str) -> AppError {
    AppError::database(anyhow::Error::new(err).context(context))
}
