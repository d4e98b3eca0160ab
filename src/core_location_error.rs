use crate::prelude::*;
use thiserror::Error as ThisError;

/// The only error a location or geocoding request is ever rejected with.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum CoreLocationError {
    /// A terminal error reported by the platform service, with its native
    /// domain and code.
    #[error("Platform service failed, domain: '{domain}', code: {code}, description: '{description}'")]
    Service {
        domain: String,
        code: i64,
        description: String,
    },

    #[error("Service completed without results and without an error")]
    NoResults,

    #[error("Listener was released before the request was settled")]
    Abandoned,
}

impl From<ServiceError> for CoreLocationError {
    fn from(value: ServiceError) -> Self {
        Self::Service {
            domain: value.domain,
            code: value.code,
            description: value.description,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum ConfigurationError {
    #[error("Unable to JSON deserialize info dictionary: {underlying}")]
    InvalidInfoDictionaryJSON { underlying: String },
}
