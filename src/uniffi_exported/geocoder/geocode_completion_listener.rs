use crate::prelude::*;

/// Completion handler passed FFI side with each geocode call.
#[derive(Object)]
pub struct GeocodeCompletionListener {
    listener: Weak<dyn NotificationSink<GeocodeCompletion>>,
    in_flight: Arc<AtomicBool>,
}

impl GeocodeCompletionListener {
    pub(crate) fn new(
        listener: Weak<dyn NotificationSink<GeocodeCompletion>>,
        in_flight: Arc<AtomicBool>,
    ) -> Self {
        Self {
            listener,
            in_flight,
        }
    }
}

#[export]
impl GeocodeCompletionListener {
    /// This is called from FFI side when the geocoder finishes, with the same
    /// arguments a `CLGeocodeCompletionHandler` receives.
    pub fn notify_completion(
        &self,
        placemarks: Option<Vec<Placemark>>,
        error: Option<ServiceError>,
    ) {
        self.in_flight.store(false, Ordering::SeqCst);
        match self.listener.upgrade() {
            Some(listener) => listener.notify(GeocodeCompletion { placemarks, error }),
            None => trace!("Geocode completed after its request was torn down"),
        }
    }
}
