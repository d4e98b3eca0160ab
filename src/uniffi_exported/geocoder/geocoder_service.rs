use crate::prelude::*;

/// Awaitable forward and reverse geocoding on top of a platform geocoder.
///
/// Like the platform geocoder itself it handles one request at a time,
/// starting another before the previous one settled panics.
#[derive(Object)]
pub struct GeocoderService {
    adapter: RequestAdapter<GeocoderBridge>,
}

impl GeocoderService {
    /// Submits `request`, settling with every placemark the geocoder returned.
    /// Dropping the promise before it settles cancels the request.
    pub fn geocode(&self, request: GeocodeRequest) -> Promise<Aggregated<Placemark>> {
        self.adapter.request(
            PendingOperation::promise(),
            GeocodePolicy,
            Retention::ByFuture,
            |_| {},
            request,
        )
    }

    async fn geocode_batch(
        &self,
        request: GeocodeRequest,
    ) -> Result<PlacemarkBatch, CoreLocationError> {
        self.geocode(request).await.map(PlacemarkBatch::from)
    }
}

#[export]
impl GeocoderService {
    #[uniffi::constructor]
    pub fn new(geocoder: Arc<dyn FFIGeocoder>) -> Self {
        Self {
            adapter: RequestAdapter::new(Arc::new(GeocoderBridge::new(geocoder))),
        }
    }

    pub async fn reverse_geocode(
        &self,
        location: Location,
    ) -> Result<PlacemarkBatch, CoreLocationError> {
        self.geocode_batch(GeocodeRequest::ReverseLocation { location })
            .await
    }

    pub async fn geocode_address_dictionary(
        &self,
        address: HashMap<String, String>,
    ) -> Result<PlacemarkBatch, CoreLocationError> {
        self.geocode_batch(GeocodeRequest::AddressDictionary { address })
            .await
    }

    pub async fn geocode_address_string(
        &self,
        address: String,
    ) -> Result<PlacemarkBatch, CoreLocationError> {
        self.geocode_batch(GeocodeRequest::AddressString {
            address,
            region: None,
        })
        .await
    }

    pub async fn geocode_address_string_in_region(
        &self,
        address: String,
        region: Option<CircularRegion>,
    ) -> Result<PlacemarkBatch, CoreLocationError> {
        self.geocode_batch(GeocodeRequest::AddressString { address, region })
            .await
    }
}
