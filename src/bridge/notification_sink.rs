/// Receiving end of a registration: whatever the service calls back into.
pub trait NotificationSink<N>: Send + Sync {
    fn notify(&self, notification: N);
}
