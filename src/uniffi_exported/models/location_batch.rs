use crate::prelude::*;

/// FFI representation of an [`Aggregated`] batch of locations, `primary` is
/// the first of `all`.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct LocationBatch {
    pub primary: Location,
    pub all: Vec<Location>,
}

impl From<Aggregated<Location>> for LocationBatch {
    fn from(value: Aggregated<Location>) -> Self {
        Self {
            primary: value.primary().clone(),
            all: value.into_all(),
        }
    }
}
