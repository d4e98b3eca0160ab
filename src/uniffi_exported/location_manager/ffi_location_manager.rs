use crate::prelude::*;

/// The platform location manager, implemented FFI side (e.g. wrapping a
/// `CLLocationManager` in Swift).
///
/// A manager reports to at most one [`LocationManagerDelegate`] at a time.
#[uniffi::export(with_foreign)]
pub trait FFILocationManager: Send + Sync {
    /// Rust passes `Some` to start receiving notifications and `None` to stop.
    /// Once replaced the previous delegate SHOULD be released, anything it is
    /// sent afterwards is ignored.
    fn set_delegate(&self, delegate: Option<Arc<LocationManagerDelegate>>);

    fn authorization_status(&self) -> AuthorizationStatus;

    fn request_when_in_use_authorization(&self);

    fn request_always_authorization(&self);

    fn start_updating_location(&self);

    fn stop_updating_location(&self);
}
