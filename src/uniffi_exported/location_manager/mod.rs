mod authorization_change_policy;
mod ffi_location_manager;
mod location_manager_bridge;
mod location_manager_delegate;
mod location_manager_service;
mod location_notification;
mod single_location_policy;

pub use authorization_change_policy::*;
pub use ffi_location_manager::*;
pub use location_manager_bridge::*;
pub use location_manager_delegate::*;
pub use location_manager_service::*;
pub use location_notification::*;
pub use single_location_policy::*;
