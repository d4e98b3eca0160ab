mod geocoder;
mod info_dictionary;
mod location_manager;
mod models;

pub use geocoder::*;
pub use info_dictionary::*;
pub use location_manager::*;
pub use models::*;
