use crate::prelude::*;

/// The delegate FFI side calls back into, forwarding to whichever listener
/// registered it. It only holds a weak link to that listener, so once the
/// request is torn down every call is a no-op.
#[derive(Object)]
pub struct LocationManagerDelegate {
    listener: Weak<dyn NotificationSink<LocationNotification>>,
}

impl LocationManagerDelegate {
    pub(crate) fn new(listener: Weak<dyn NotificationSink<LocationNotification>>) -> Self {
        Self { listener }
    }

    fn forward(&self, notification: LocationNotification) {
        match self.listener.upgrade() {
            Some(listener) => listener.notify(notification),
            None => trace!("Delegate outlived its listener, dropping {notification:?}"),
        }
    }
}

#[export]
impl LocationManagerDelegate {
    /// Called FFI side with the new locations, oldest first.
    pub fn did_update_locations(&self, locations: Vec<Location>) {
        self.forward(LocationNotification::DidUpdateLocations(locations))
    }

    pub fn did_fail_with_error(&self, error: ServiceError) {
        self.forward(LocationNotification::DidFailWithError(error))
    }

    pub fn did_change_authorization(&self, status: AuthorizationStatus) {
        self.forward(LocationNotification::DidChangeAuthorization(status))
    }
}
