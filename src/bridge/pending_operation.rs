use crate::prelude::*;

/// A [`Pending`] value together with the only [`Seal`] able to settle it.
pub struct PendingOperation<V> {
    pub future: Pending<V>,
    pub seal: Seal<V>,
}

impl<T> PendingOperation<Result<T, CoreLocationError>> {
    /// A [`Promise`], rejecting with [`CoreLocationError::Abandoned`] if the
    /// seal is dropped unsettled.
    pub fn promise() -> Self {
        let (sender, receiver) = channel();
        Self {
            future: Pending::new(receiver, || Some(Err(CoreLocationError::Abandoned))),
            seal: Seal::new(sender),
        }
    }
}

impl<V> PendingOperation<V> {
    /// A [`Guarantee`], which has no reject path.
    pub fn guarantee() -> Self {
        let (sender, receiver) = channel();
        Self {
            future: Pending::new(receiver, || None),
            seal: Seal::new(sender),
        }
    }
}
