use crate::prelude::*;

/// The first result of a batch together with the whole batch, in delivery
/// order. Never empty, `primary` is always `all[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregated<T> {
    primary: T,
    all: Vec<T>,
}

impl<T: Clone> Aggregated<T> {
    /// `None` if `all` is empty.
    pub fn new(all: Vec<T>) -> Option<Self> {
        let primary = all.first()?.clone();
        Some(Self { primary, all })
    }
}

impl<T> Aggregated<T> {
    pub fn primary(&self) -> &T {
        &self.primary
    }

    pub fn all(&self) -> &[T] {
        &self.all
    }

    pub fn into_primary(self) -> T {
        self.primary
    }

    pub fn into_all(self) -> Vec<T> {
        self.all
    }
}
