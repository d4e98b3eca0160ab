mod bridge;
mod core_location_error;
mod uniffi_exported;

pub mod prelude {
    pub use crate::bridge::*;
    pub use crate::core_location_error::*;
    pub use crate::uniffi_exported::*;

    pub(crate) use enum_as_inner::EnumAsInner;
    pub(crate) use serde::Deserialize;
    pub(crate) use std::collections::HashMap;
    pub(crate) use std::sync::atomic::{AtomicBool, Ordering};
    pub(crate) use std::sync::{Arc, Mutex, PoisonError, Weak};
    pub(crate) use tokio::sync::oneshot::{channel, Receiver, Sender};
    pub(crate) use tracing::{debug, trace, warn};
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};
}

pub use prelude::*;

uniffi::setup_scaffolding!();
