use crate::prelude::*;

/// Single-shot, awaitable access to a platform location manager.
///
/// At most one request may be outstanding at a time, starting a second one
/// before the first has settled or been dropped panics.
#[derive(Object)]
pub struct LocationManagerService {
    adapter: RequestAdapter<LocationManagerBridge>,
    info: Arc<dyn FFIInfoDictionary>,
}

impl LocationManagerService {
    /// Requests authorization per `authorization_type`, starts updating
    /// location and settles with the first batch of locations delivered.
    /// Updates stop as soon as the promise is settled or dropped.
    pub fn location(
        &self,
        authorization_type: RequestAuthorizationType,
    ) -> Promise<Aggregated<Location>> {
        let request = authorization_type.resolve(self.info.as_ref());
        self.adapter.request(
            PendingOperation::promise(),
            SingleLocationPolicy,
            Retention::ByFuture,
            |manager| manager.request_authorization(request),
            LocationActivity::UpdatingLocation,
        )
    }

    /// Settles with the authorization status once the user has made a
    /// choice, immediately if they already have.
    ///
    /// The immediate settlement registers no delegate and starts nothing, so
    /// it has nothing to clean up. It leaves the manager untouched, including
    /// the delegate of any other outstanding request.
    pub fn authorization(
        &self,
        authorization_type: RequestAuthorizationType,
    ) -> Guarantee<AuthorizationStatus> {
        let status = self.adapter.service().authorization_status();
        if status.is_determined() {
            debug!("Authorization already determined: {status:?}");
            return Guarantee::settled(status);
        }
        let request = authorization_type.resolve(self.info.as_ref());
        self.adapter.request(
            PendingOperation::guarantee(),
            AuthorizationChangePolicy,
            Retention::BySelf,
            |manager| manager.request_authorization(request),
            LocationActivity::MonitoringAuthorization,
        )
    }
}

#[export]
impl LocationManagerService {
    #[uniffi::constructor]
    pub fn new(manager: Arc<dyn FFILocationManager>, info: Arc<dyn FFIInfoDictionary>) -> Self {
        Self {
            adapter: RequestAdapter::new(Arc::new(LocationManagerBridge::new(manager))),
            info,
        }
    }

    /// `info_dictionary_json` is a JSON object of strings, see [`InfoDictionary`].
    #[uniffi::constructor]
    pub fn with_info_dictionary_json(
        manager: Arc<dyn FFILocationManager>,
        info_dictionary_json: String,
    ) -> Result<Arc<Self>, ConfigurationError> {
        let info = InfoDictionary::from_json(info_dictionary_json)?;
        Ok(Arc::new(Self::new(manager, Arc::new(info))))
    }

    pub async fn request_location(
        &self,
        authorization_type: RequestAuthorizationType,
    ) -> Result<LocationBatch, CoreLocationError> {
        self.location(authorization_type)
            .await
            .map(LocationBatch::from)
    }

    pub async fn request_authorization(
        &self,
        authorization_type: RequestAuthorizationType,
    ) -> AuthorizationStatus {
        self.authorization(authorization_type).await
    }
}
