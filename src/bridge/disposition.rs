use crate::prelude::*;

/// What a [`BridgeListener`] does with a single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition<V> {
    /// A known transient condition, never surfaced. The listener stays
    /// registered.
    Ignore,
    /// A status update which does not determine the outcome yet. The listener
    /// stays registered.
    Undetermined,
    /// Conclusive, settle with the value and unregister.
    Terminal(V),
}

/// Service specific classification of notifications, the single place which
/// decides what is ignorable and what is terminal for one kind of request.
///
/// The [`NotificationPolicy::Output`] is `Result<T, CoreLocationError>` for
/// requests which can fail, and a plain `T` for those which cannot, so a
/// policy of the latter kind has no way to express a failure.
pub trait NotificationPolicy: Send + Sync + 'static {
    type Notification;
    type Output: Send + 'static;

    fn classify(&self, notification: Self::Notification) -> Disposition<Self::Output>;
}
