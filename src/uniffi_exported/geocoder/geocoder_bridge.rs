use crate::prelude::*;

/// Rust side of one [`FFIGeocoder`], at most one request in flight.
pub struct GeocoderBridge {
    geocoder: Arc<dyn FFIGeocoder>,
    listener: Mutex<Option<Weak<dyn NotificationSink<GeocodeCompletion>>>>,
    in_flight: Mutex<Option<Arc<AtomicBool>>>,
}

impl GeocoderBridge {
    pub fn new(geocoder: Arc<dyn FFIGeocoder>) -> Self {
        Self {
            geocoder,
            listener: Mutex::new(None),
            in_flight: Mutex::new(None),
        }
    }
}

impl BridgedService for GeocoderBridge {
    type Notification = GeocodeCompletion;
    type Parameters = GeocodeRequest;

    fn register(&self, listener: Weak<dyn NotificationSink<GeocodeCompletion>>) {
        let mut slot = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        assert!(
            slot.is_none(),
            "A geocode request is already outstanding on this geocoder, concurrent requests on one geocoder are not supported."
        );
        *slot = Some(listener);
    }

    fn start(&self, parameters: GeocodeRequest) {
        let Some(listener) = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        else {
            return;
        };
        let in_flight = Arc::new(AtomicBool::new(true));
        *self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(in_flight.clone());
        let completion = Arc::new(GeocodeCompletionListener::new(listener, in_flight));

        debug!("Starting geocode request: {parameters:?}");
        match parameters {
            GeocodeRequest::ReverseLocation { location } => {
                self.geocoder.reverse_geocode_location(location, completion)
            }
            GeocodeRequest::AddressDictionary { address } => {
                self.geocoder.geocode_address_dictionary(address, completion)
            }
            GeocodeRequest::AddressString { address, region } => {
                self.geocoder
                    .geocode_address_string(address, region, completion)
            }
        }
    }

    fn unregister(&self) {
        self.listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    fn stop(&self) {
        let in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if in_flight.is_some_and(|flag| flag.swap(false, Ordering::SeqCst)) {
            debug!("Cancelling geocode request in flight");
            self.geocoder.cancel_geocode();
        }
    }
}
