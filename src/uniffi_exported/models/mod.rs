mod authorization_status;
mod circular_region;
mod coordinate;
mod location;
mod location_batch;
mod placemark;
mod placemark_batch;
mod service_error;

pub use authorization_status::*;
pub use circular_region::*;
pub use coordinate::*;
pub use location::*;
pub use location_batch::*;
pub use placemark::*;
pub use placemark_batch::*;
pub use service_error::*;
