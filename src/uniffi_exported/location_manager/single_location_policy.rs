use crate::prelude::*;

/// Failures a location request waits out instead of failing.
///
/// Only "location unknown" qualifies: the manager could not get a fix yet but
/// keeps trying.
pub fn is_ignorable_location_failure(error: &ServiceError) -> bool {
    error.is_location_unknown()
}

/// Settles with the first batch of locations, or the first failure which is
/// not [ignorable](is_ignorable_location_failure).
pub struct SingleLocationPolicy;

impl NotificationPolicy for SingleLocationPolicy {
    type Notification = LocationNotification;
    type Output = Result<Aggregated<Location>, CoreLocationError>;

    fn classify(&self, notification: LocationNotification) -> Disposition<Self::Output> {
        match notification {
            LocationNotification::DidUpdateLocations(locations) => {
                match Aggregated::new(locations) {
                    Some(locations) => Disposition::Terminal(Ok(locations)),
                    None => Disposition::Ignore,
                }
            }
            LocationNotification::DidFailWithError(error)
                if is_ignorable_location_failure(&error) =>
            {
                Disposition::Ignore
            }
            LocationNotification::DidFailWithError(error) => {
                Disposition::Terminal(Err(error.into()))
            }
            LocationNotification::DidChangeAuthorization(_) => Disposition::Ignore,
        }
    }
}
