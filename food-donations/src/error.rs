use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}

/// Failures surfaced by every database call site.
///
/// Connectivity and authentication failures are kept apart from statement
/// failures so callers can tell "the database is down" from "this query broke".
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database is unreachable: {0}")]
    Unreachable(sqlx::Error),

    #[error("Database authentication failed: {0}")]
    Authentication(sqlx::Error),

    #[error("Query failed: {0}")]
    Query(sqlx::Error),
}

/// SQLSTATE class 28, "invalid authorization specification".
fn is_auth_failure(code: Option<&str>) -> bool {
    matches!(code, Some("28000" | "28P01"))
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::Unreachable(err),
            sqlx::Error::Database(db_err) if is_auth_failure(db_err.code().as_deref()) => {
                DbError::Authentication(err)
            }
            _ => DbError::Query(err),
        }
    }
}

impl DbError {
    /// True when the failure is about reaching the database at all, as opposed
    /// to a single statement going wrong.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            DbError::Unreachable(_) | DbError::Authentication(_) | DbError::Config(_)
        )
    }

    pub fn sqlstate(&self) -> Option<String> {
        match self {
            DbError::Query(sqlx::Error::Database(db_err)) => {
                db_err.code().map(|code| code.into_owned())
            }
            _ => None,
        }
    }

    /// The database refused the values it was given: a constraint violation
    /// (class 23) or a data exception such as an out-of-range number (class 22).
    pub fn is_rejected_input(&self) -> bool {
        self.sqlstate()
            .is_some_and(|code| code.starts_with("23") || code.starts_with("22"))
    }
}
