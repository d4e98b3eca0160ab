use crate::prelude::*;

/// Domain of errors reported by the platform location services.
pub const CL_ERROR_DOMAIN: &str = "kCLErrorDomain";

/// The location is currently unknown, but the manager keeps trying.
pub const CL_ERROR_LOCATION_UNKNOWN: i64 = 0;

/// A native error as reported by the platform, e.g. an `NSError`.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct ServiceError {
    pub domain: String,
    pub code: i64,
    pub description: String,
}

impl ServiceError {
    pub fn new(domain: impl AsRef<str>, code: i64, description: impl AsRef<str>) -> Self {
        Self {
            domain: domain.as_ref().to_owned(),
            code,
            description: description.as_ref().to_owned(),
        }
    }

    pub fn is_location_unknown(&self) -> bool {
        self.domain == CL_ERROR_DOMAIN && self.code == CL_ERROR_LOCATION_UNKNOWN
    }
}
