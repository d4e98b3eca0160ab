use crate::prelude::*;

/// How the listener of a request is kept alive while the request is
/// outstanding, the service itself only holds a weak link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// The returned future owns the listener, dropping the future releases it.
    ByFuture,
    /// The listener owns itself until it settles. The returned future only
    /// holds a weak link, dropping it still releases the listener.
    BySelf,
}

/// Turns one request against a [`BridgedService`] into a single settlement.
///
/// Every call to [`RequestAdapter::request`] walks
/// `Idle -> Registered -> {Fulfilled, Rejected} -> Cleaned`, where cleaning
/// up unregisters the listener and stops the service exactly once, either
/// because a terminal notification arrived or because the returned future
/// completed or was dropped.
pub struct RequestAdapter<S: BridgedService> {
    service: Arc<S>,
}

impl<S: BridgedService> RequestAdapter<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Registers a listener classifying notifications with `policy`, applies
    /// `configure` and starts the service with `parameters`.
    ///
    /// If a notification settles the operation synchronously during
    /// registration or configuration the remaining steps are skipped.
    ///
    /// # Panics
    /// Panics if another request is outstanding against the same service.
    pub fn request<P>(
        &self,
        operation: PendingOperation<P::Output>,
        policy: P,
        retention: Retention,
        configure: impl FnOnce(&S),
        parameters: S::Parameters,
    ) -> Pending<P::Output>
    where
        P: NotificationPolicy<Notification = S::Notification>,
    {
        let PendingOperation { future, seal } = operation;

        let teardown = Arc::new(Teardown::new({
            let service = self.service.clone();
            move || {
                service.unregister();
                service.stop();
            }
        }));

        let listener = Arc::new(BridgeListener::new(seal, policy, teardown.clone()));
        if retention == Retention::BySelf {
            // Before registering, a synchronous settlement must be able to
            // release it again.
            listener.retain_self();
        }

        let sink: Arc<dyn NotificationSink<S::Notification>> = listener.clone();
        self.service.register(Arc::downgrade(&sink));
        drop(sink);
        debug!("Listener registered");

        if !teardown.has_run() {
            configure(&self.service);
        }
        if !teardown.has_run() {
            self.service.start(parameters);
        }

        match retention {
            Retention::ByFuture => future.ensure(move || {
                teardown.run();
                drop(listener);
            }),
            Retention::BySelf => {
                let listener = Arc::downgrade(&listener);
                future.ensure(move || {
                    teardown.run();
                    if let Some(listener) = listener.upgrade() {
                        listener.release_self();
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeService {
        listener: Mutex<Option<Weak<dyn NotificationSink<u8>>>>,
        events: Mutex<Vec<&'static str>>,
        echo_on_register: Mutex<Option<u8>>,
    }

    impl FakeService {
        fn events(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }

        fn deliver(&self, notification: u8) {
            let listener = self.listener.lock().unwrap().clone();
            if let Some(listener) = listener.and_then(|weak| weak.upgrade()) {
                listener.notify(notification);
            }
        }
    }

    impl BridgedService for FakeService {
        type Notification = u8;
        type Parameters = &'static str;

        fn register(&self, listener: Weak<dyn NotificationSink<u8>>) {
            let busy = self.listener.lock().unwrap().replace(listener).is_some();
            assert!(!busy, "busy");
            self.events.lock().unwrap().push("register");
            let echo = self.echo_on_register.lock().unwrap().take();
            if let Some(notification) = echo {
                self.deliver(notification);
            }
        }

        fn start(&self, parameters: &'static str) {
            self.events.lock().unwrap().push(parameters);
        }

        fn unregister(&self) {
            if self.listener.lock().unwrap().take().is_some() {
                self.events.lock().unwrap().push("unregister");
            }
        }

        fn stop(&self) {
            self.events.lock().unwrap().push("stop");
        }
    }

    /// Zero is transient, anything else is terminal.
    struct NonZero;

    impl NotificationPolicy for NonZero {
        type Notification = u8;
        type Output = u8;

        fn classify(&self, notification: u8) -> Disposition<u8> {
            match notification {
                0 => Disposition::Ignore,
                n => Disposition::Terminal(n),
            }
        }
    }

    fn request(adapter: &RequestAdapter<FakeService>, retention: Retention) -> Guarantee<u8> {
        adapter.request(
            PendingOperation::guarantee(),
            NonZero,
            retention,
            |service| service.events.lock().unwrap().push("configure"),
            "start",
        )
    }

    #[tokio::test]
    async fn cleans_up_once_after_settlement() {
        let adapter = RequestAdapter::new(Arc::new(FakeService::default()));
        let future = request(&adapter, Retention::ByFuture);
        adapter.service().deliver(0);
        adapter.service().deliver(4);
        adapter.service().deliver(5);
        assert_eq!(future.await, 4);
        assert_eq!(
            adapter.service().events(),
            vec!["register", "configure", "start", "unregister", "stop"]
        );
    }

    #[test]
    fn dropping_the_future_cleans_up() {
        let adapter = RequestAdapter::new(Arc::new(FakeService::default()));
        let future = request(&adapter, Retention::ByFuture);
        adapter.service().deliver(0);
        drop(future);
        adapter.service().deliver(9);
        assert_eq!(
            adapter.service().events(),
            vec!["register", "configure", "start", "unregister", "stop"]
        );
    }

    #[tokio::test]
    async fn synchronous_settlement_skips_configure_and_start() {
        let service = FakeService::default();
        *service.echo_on_register.lock().unwrap() = Some(2);
        let adapter = RequestAdapter::new(Arc::new(service));
        assert_eq!(request(&adapter, Retention::ByFuture).await, 2);
        assert_eq!(
            adapter.service().events(),
            vec!["register", "unregister", "stop"]
        );
    }

    #[tokio::test]
    async fn self_retained_listener_outlives_the_call() {
        let adapter = RequestAdapter::new(Arc::new(FakeService::default()));
        let mut future = request(&adapter, Retention::BySelf);
        let waited = tokio::time::timeout(Duration::from_millis(10), &mut future).await;
        assert!(waited.is_err());
        adapter.service().deliver(3);
        assert_eq!(future.await, 3);
    }

    #[test]
    fn dropping_a_self_retaining_future_releases_the_listener() {
        let adapter = RequestAdapter::new(Arc::new(FakeService::default()));
        let future = request(&adapter, Retention::BySelf);
        let listener = adapter.service().listener.lock().unwrap().clone().unwrap();
        assert!(listener.upgrade().is_some());
        drop(future);
        assert!(listener.upgrade().is_none());
        assert_eq!(
            adapter.service().events(),
            vec!["register", "configure", "start", "unregister", "stop"]
        );
    }

    #[test]
    #[should_panic(expected = "busy")]
    fn concurrent_requests_are_a_precondition_violation() {
        let adapter = RequestAdapter::new(Arc::new(FakeService::default()));
        let _first = request(&adapter, Retention::ByFuture);
        let _second = request(&adapter, Retention::ByFuture);
    }
}
