use crate::prelude::*;

/// FFI representation of an [`Aggregated`] batch of placemarks, `primary` is
/// the first of `all`.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct PlacemarkBatch {
    pub primary: Placemark,
    pub all: Vec<Placemark>,
}

impl From<Aggregated<Placemark>> for PlacemarkBatch {
    fn from(value: Aggregated<Placemark>) -> Self {
        Self {
            primary: value.primary().clone(),
            all: value.into_all(),
        }
    }
}
