use crate::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum GeocodeRequest {
    /// Placemarks describing `location`.
    ReverseLocation { location: Location },
    /// Placemarks matching an address book style dictionary, e.g.
    /// `{"Street": "1 Infinite Loop", "City": "Cupertino"}`.
    AddressDictionary { address: HashMap<String, String> },
    /// Placemarks matching a free form address, preferring those inside
    /// `region` if given.
    AddressString {
        address: String,
        region: Option<CircularRegion>,
    },
}
