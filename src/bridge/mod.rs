mod aggregated;
mod bridge_listener;
mod bridged_service;
mod disposition;
mod notification_sink;
mod pending;
mod pending_operation;
mod request_adapter;
mod seal;
mod teardown;

pub use aggregated::*;
pub use bridge_listener::*;
pub use bridged_service::*;
pub use disposition::*;
pub use notification_sink::*;
pub use pending::*;
pub use pending_operation::*;
pub use request_adapter::*;
pub use seal::*;
pub use teardown::*;
