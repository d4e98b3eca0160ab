use crate::prelude::*;

/// The write-once handle used to settle a [`Pending`] value.
///
/// Only the first call to [`Seal::settle`] (or [`Seal::fulfill`] /
/// [`Seal::reject`] for promises) has any effect, every later call is
/// silently discarded. Clones share the same underlying cell.
pub struct Seal<V> {
    sender: Arc<Mutex<Option<Sender<V>>>>,
}

impl<V> Clone for Seal<V> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<V> Seal<V> {
    pub(crate) fn new(sender: Sender<V>) -> Self {
        Self {
            sender: Arc::new(Mutex::new(Some(sender))),
        }
    }

    /// Settles the cell with `value`, returns `true` if this call was the one
    /// which settled it.
    pub fn settle(&self, value: V) -> bool {
        self.settle_after(value, || {})
    }

    /// Like [`Seal::settle`], but if this call wins it runs `before` first and
    /// only then delivers `value`. The cell counts as settled while `before`
    /// runs, so the awaiting side cannot observe the value until it returns.
    pub fn settle_after(&self, value: V, before: impl FnOnce()) -> bool {
        let Some(sender) = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            trace!("Discarding settlement, cell is already settled");
            return false;
        };
        before();
        if sender.send(value).is_err() {
            trace!("Settled a cell nobody is awaiting anymore");
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl<T, E> Seal<Result<T, E>> {
    pub fn fulfill(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    pub fn reject(&self, error: E) -> bool {
        self.settle(Err(error))
    }
}
