use crate::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A cleanup action attached to a [`Pending`] value with [`Pending::ensure`].
pub type Finalizer = Box<dyn FnOnce() + Send + 'static>;

/// A value that is settled exactly once through its [`Seal`], awaited as a
/// [`Future`].
///
/// Finalizers attached with [`Pending::ensure`] run exactly once: right
/// after the value has been received and before it is handed to the awaiting
/// caller, or when this is dropped unsettled.
pub struct Pending<V> {
    receiver: Option<Receiver<V>>,
    on_abandoned: fn() -> Option<V>,
    finalizers: Vec<Finalizer>,
}

/// A pending value which can fail.
pub type Promise<T> = Pending<Result<T, CoreLocationError>>;

/// A pending value which cannot fail. If its seal is dropped without being
/// settled it never completes.
pub type Guarantee<T> = Pending<T>;

impl<V> Pending<V> {
    pub(crate) fn new(receiver: Receiver<V>, on_abandoned: fn() -> Option<V>) -> Self {
        Self {
            receiver: Some(receiver),
            on_abandoned,
            finalizers: Vec::new(),
        }
    }

    /// An already settled value, no seal is handed out.
    pub fn settled(value: V) -> Self {
        let (sender, receiver) = channel();
        Seal::new(sender).settle(value);
        Self::new(receiver, || None)
    }

    /// Attaches `finalizer`, finalizers run in the order they were attached.
    pub fn ensure(mut self, finalizer: impl FnOnce() + Send + 'static) -> Self {
        self.finalizers.push(Box::new(finalizer));
        self
    }

    fn run_finalizers(&mut self) {
        for finalizer in self.finalizers.drain(..) {
            finalizer();
        }
    }
}

impl<V> Future for Pending<V> {
    type Output = V;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<V> {
        let this = &mut *self;
        let Some(receiver) = this.receiver.as_mut() else {
            return Poll::Pending;
        };
        let outcome = match Pin::new(receiver).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Ok(value)) => Some(value),
            Poll::Ready(Err(_)) => {
                debug!("Seal dropped without settling");
                (this.on_abandoned)()
            }
        };
        this.receiver = None;
        this.run_finalizers();
        match outcome {
            Some(value) => Poll::Ready(value),
            None => Poll::Pending,
        }
    }
}

impl<V> Drop for Pending<V> {
    fn drop(&mut self) {
        if !self.finalizers.is_empty() {
            trace!("Pending value dropped, running remaining finalizers");
        }
        self.run_finalizers();
    }
}
