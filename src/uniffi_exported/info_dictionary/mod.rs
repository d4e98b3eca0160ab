mod ffi_info_dictionary;
mod info_dictionary;
mod request_authorization_type;

pub use ffi_info_dictionary::*;
pub use info_dictionary::*;
pub use request_authorization_type::*;
