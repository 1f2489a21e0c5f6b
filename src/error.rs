use thiserror::Error;

/// SQLSTATE raised by PostgreSQL on a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE raised by PostgreSQL on a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Every failure a directory operation can report.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("database `{0}` does not exist")]
    DatabaseMissing(String),

    #[error("connected to database `{connected}`, expected `{expected}`")]
    DatabaseMismatch { expected: String, connected: String },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("no client fields to update")]
    EmptyUpdate,

    #[error("no search criteria given")]
    EmptyFilter,

    #[error("client {0} not found")]
    ClientNotFound(i32),

    #[error("phone `{0}` is already registered")]
    DuplicatePhone(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl DirectoryError {
    pub(crate) fn blank(field: &'static str) -> Self {
        Self::InvalidField {
            field,
            reason: "must not be blank".to_string(),
        }
    }

    /// Map a failed phone insert onto the constraint it tripped.
    pub(crate) fn from_phone_insert(err: sqlx::Error, client_id: i32, phone: &str) -> Self {
        match sqlstate(&err).as_deref() {
            Some(UNIQUE_VIOLATION) => Self::DuplicatePhone(phone.to_string()),
            Some(FOREIGN_KEY_VIOLATION) => Self::ClientNotFound(client_id),
            _ => Self::Database(err),
        }
    }

    /// True for failures caused by bad input rather than by the database.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidField { .. } | Self::EmptyUpdate | Self::EmptyFilter
        )
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}
