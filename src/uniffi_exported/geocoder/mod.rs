mod ffi_geocoder;
mod geocode_completion;
mod geocode_completion_listener;
mod geocode_policy;
mod geocode_request;
mod geocoder_bridge;
mod geocoder_service;

pub use ffi_geocoder::*;
pub use geocode_completion::*;
pub use geocode_completion_listener::*;
pub use geocode_policy::*;
pub use geocode_request::*;
pub use geocoder_bridge::*;
pub use geocoder_service::*;
