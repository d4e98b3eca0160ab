use crate::prelude::*;

/// The platform geocoder, implemented FFI side (e.g. wrapping a `CLGeocoder`
/// in Swift).
///
/// Every geocode call MUST eventually be answered by calling
/// [`GeocodeCompletionListener::notify_completion`] on the passed in
/// `completion`, unless cancelled.
#[uniffi::export(with_foreign)]
pub trait FFIGeocoder: Send + Sync {
    fn reverse_geocode_location(
        &self,
        location: Location,
        completion: Arc<GeocodeCompletionListener>,
    );

    fn geocode_address_dictionary(
        &self,
        address: HashMap<String, String>,
        completion: Arc<GeocodeCompletionListener>,
    );

    fn geocode_address_string(
        &self,
        address: String,
        region: Option<CircularRegion>,
        completion: Arc<GeocodeCompletionListener>,
    );

    /// Cancels the geocode request in flight, if any.
    fn cancel_geocode(&self);
}
