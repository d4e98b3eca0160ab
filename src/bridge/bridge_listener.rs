use crate::prelude::*;

/// The transient listener standing in for a platform delegate for the
/// duration of one request.
///
/// Each notification is classified by its [`NotificationPolicy`]: ignorable
/// and undetermined ones leave everything as is, the first terminal one
/// settles the seal and tears the registration down. Anything arriving after
/// settlement is dropped.
pub struct BridgeListener<P: NotificationPolicy> {
    seal: Seal<P::Output>,
    policy: P,
    teardown: Arc<Teardown>,
    /// Set while nothing but the service's weak link refers to this listener.
    retained_self: Mutex<Option<Arc<Self>>>,
}

impl<P: NotificationPolicy> BridgeListener<P> {
    pub(crate) fn new(seal: Seal<P::Output>, policy: P, teardown: Arc<Teardown>) -> Self {
        Self {
            seal,
            policy,
            teardown,
            retained_self: Mutex::new(None),
        }
    }

    pub(crate) fn retain_self(self: &Arc<Self>) {
        *self
            .retained_self
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(self.clone());
    }

    pub(crate) fn release_self(&self) {
        let retained = self
            .retained_self
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if retained.is_some() {
            trace!("Listener released its self reference");
        }
    }

    pub fn is_retaining_self(&self) -> bool {
        self.retained_self
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn is_settled(&self) -> bool {
        self.seal.is_settled()
    }
}

impl<P: NotificationPolicy> NotificationSink<P::Notification> for BridgeListener<P> {
    fn notify(&self, notification: P::Notification) {
        if self.seal.is_settled() {
            trace!("Ignoring notification delivered after settlement");
            return;
        }
        match self.policy.classify(notification) {
            Disposition::Ignore => trace!("Ignoring transient notification"),
            Disposition::Undetermined => trace!("Outcome still undetermined, staying registered"),
            Disposition::Terminal(output) => {
                // The awaiting side must not see the output before the
                // registration is torn down, wherever this notification runs.
                let settled = self.seal.settle_after(output, || {
                    self.teardown.run();
                });
                if settled {
                    debug!("Listener settled by terminal notification");
                }
                self.release_self();
            }
        }
    }
}
