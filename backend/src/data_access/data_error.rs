use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("redb: {0}")]
    Storage(String),
    #[error("cannot encode record: {0}")]
    Encode(serde_json::Error),
    #[error("cannot decode record: {0}")]
    Decode(serde_json::Error),
    #[error("write attempted through a read-only unit of work")]
    ReadOnly,
    #[error("cannot hash password: {0}")]
    PasswordHash(String),
}

macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for DataError {
            fn from(e: $t) -> Self { DataError::Storage(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);
