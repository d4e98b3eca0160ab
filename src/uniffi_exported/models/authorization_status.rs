use crate::prelude::*;

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::NotDetermined)
    }
}
