use crate::prelude::*;

/// What a started [`LocationManagerBridge`] is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationActivity {
    /// Continuous location updates, until stopped.
    UpdatingLocation,
    /// Nothing to start, authorization changes are delivered unprompted.
    MonitoringAuthorization,
}

/// Rust side of one [`FFILocationManager`], owning its delegate link.
pub struct LocationManagerBridge {
    manager: Arc<dyn FFILocationManager>,
    delegate: Mutex<Option<Arc<LocationManagerDelegate>>>,
    updating: AtomicBool,
}

impl LocationManagerBridge {
    pub fn new(manager: Arc<dyn FFILocationManager>) -> Self {
        Self {
            manager,
            delegate: Mutex::new(None),
            updating: AtomicBool::new(false),
        }
    }

    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.manager.authorization_status()
    }

    pub fn request_authorization(&self, request: AuthorizationRequest) {
        debug!("Requesting {request:?} location authorization");
        match request {
            AuthorizationRequest::Always => self.manager.request_always_authorization(),
            AuthorizationRequest::WhenInUse => self.manager.request_when_in_use_authorization(),
        }
    }
}

impl BridgedService for LocationManagerBridge {
    type Notification = LocationNotification;
    type Parameters = LocationActivity;

    fn register(&self, listener: Weak<dyn NotificationSink<LocationNotification>>) {
        let delegate = Arc::new(LocationManagerDelegate::new(listener));
        let mut slot = self
            .delegate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        assert!(
            slot.is_none(),
            "A request is already outstanding on this location manager, concurrent requests on one manager are not supported."
        );
        *slot = Some(delegate.clone());
        drop(slot);
        self.manager.set_delegate(Some(delegate));
    }

    fn start(&self, parameters: LocationActivity) {
        match parameters {
            LocationActivity::UpdatingLocation => {
                self.updating.store(true, Ordering::SeqCst);
                self.manager.start_updating_location();
            }
            LocationActivity::MonitoringAuthorization => {
                trace!("Waiting for authorization change")
            }
        }
    }

    fn unregister(&self) {
        let delegate = self
            .delegate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if delegate.is_some() {
            self.manager.set_delegate(None);
        }
    }

    fn stop(&self) {
        if self.updating.swap(false, Ordering::SeqCst) {
            self.manager.stop_updating_location();
        }
    }
}
