use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Store-native error chained onto a persistence failure.
pub type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// Closed taxonomy for repository failures.
///
/// Backends translate diesel/mongodb errors into these variants at the
/// repository boundary; callers branch on the kind, never on message
/// content, and nothing above the repository sees a store-native type.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The target record is absent.
    #[error("dish {0} not found")]
    NotFound(Uuid),

    /// Connectivity, constraint, or query failure.
    #[error("{op} failed: {source}")]
    Persistence {
        op: &'static str,
        #[source]
        source: BoxedSource,
    },

    /// A stored structured field failed to decode, or a field refused to
    /// encode on the way in. The whole read or write is aborted.
    #[error("{op}: invalid {field} payload: {message}")]
    Serialization {
        op: &'static str,
        field: &'static str,
        message: String,
    },

    /// Unrecognized backend type or missing settings block. Fatal at
    /// startup; the process does not start.
    #[error("database configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    pub(crate) fn persistence(
        op: &'static str,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            op,
            source: Box::new(source),
        }
    }

    pub(crate) fn serialization(
        op: &'static str,
        field: &'static str,
        message: impl fmt::Display,
    ) -> Self {
        Self::Serialization {
            op,
            field,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_dish() {
        let id = Uuid::new_v4();
        let message = RepositoryError::NotFound(id).to_string();
        assert!(message.contains(&id.to_string()));
    }

    #[test]
    fn serialization_names_operation_and_field() {
        let err = RepositoryError::serialization("get dish", "nutrition", "expected an object");
        assert_eq!(
            err.to_string(),
            "get dish: invalid nutrition payload: expected an object"
        );
    }
}
