use crate::prelude::*;

/// Everything a [`LocationManagerDelegate`] can be told.
#[derive(Clone, Debug, PartialEq, EnumAsInner)]
pub enum LocationNotification {
    DidUpdateLocations(Vec<Location>),
    DidFailWithError(ServiceError),
    DidChangeAuthorization(AuthorizationStatus),
}
