use crate::prelude::*;

/// The capability a [`RequestAdapter`] drives: a platform service which
/// accepts exactly one listener at a time and reports back to it.
///
/// The service only ever holds a [`Weak`] link to its listener, keeping the
/// listener alive is the adapter's job.
pub trait BridgedService: Send + Sync + 'static {
    type Notification;
    type Parameters;

    /// Links `listener` to the service.
    ///
    /// # Panics
    /// Panics if a listener is already registered. Running two requests
    /// concurrently against one service is a precondition violation.
    fn register(&self, listener: Weak<dyn NotificationSink<Self::Notification>>);

    fn start(&self, parameters: Self::Parameters);

    /// Clears the listener link. Must be a no-op if nothing is registered.
    fn unregister(&self);

    /// Halts any ongoing activity. Must be a no-op if nothing was started.
    fn stop(&self);
}
