use crate::prelude::*;

/// The arguments of a geocoder completion handler: placemarks on success, an
/// error on failure.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeCompletion {
    pub placemarks: Option<Vec<Placemark>>,
    pub error: Option<ServiceError>,
}

impl GeocodeCompletion {
    /// The error wins if both are set, neither (or no placemarks) is
    /// [`CoreLocationError::NoResults`].
    pub fn into_result(self) -> Result<Aggregated<Placemark>, CoreLocationError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.placemarks
            .and_then(Aggregated::new)
            .ok_or(CoreLocationError::NoResults)
    }
}
