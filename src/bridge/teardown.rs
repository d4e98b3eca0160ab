use crate::prelude::*;

/// Idempotent cleanup shared between a listener and the future it settles,
/// whichever calls [`Teardown::run`] first performs the action.
pub struct Teardown {
    action: Mutex<Option<Finalizer>>,
}

impl Teardown {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self {
            action: Mutex::new(Some(Box::new(action))),
        }
    }

    /// Returns `true` if this call performed the action.
    pub fn run(&self) -> bool {
        let action = self
            .action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match action {
            Some(action) => {
                debug!("Tearing down registration");
                action();
                true
            }
            None => false,
        }
    }

    pub fn has_run(&self) -> bool {
        self.action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
