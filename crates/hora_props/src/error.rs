//! Error types for property lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from property-table lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PropsError {
    /// The key is not part of the table's domain.
    UnknownIdentifier {
        /// Name of the table that was consulted.
        table: &'static str,
        /// The key as given by the caller.
        key: String,
    },
}

impl PropsError {
    pub(crate) fn unknown(table: &'static str, key: impl Into<String>) -> Self {
        let key = key.into();
        tracing::trace!(table, key = %key, "identifier not in table");
        Self::UnknownIdentifier { table, key }
    }
}

impl Display for PropsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { table, key } => {
                write!(f, "unknown identifier in {table}: {key:?}")
            }
        }
    }
}

impl Error for PropsError {}
