use crate::prelude::*;

/// Usage description shown when requesting authorization to use location
/// services at all times.
pub const LOCATION_ALWAYS_USAGE_DESCRIPTION_KEY: &str = "NSLocationAlwaysUsageDescription";

/// Usage description shown when requesting authorization to use location
/// services while the app is in use.
pub const LOCATION_WHEN_IN_USE_USAGE_DESCRIPTION_KEY: &str =
    "NSLocationWhenInUseUsageDescription";

/// The host application's bundle configuration, e.g. the main bundle's
/// `Info.plist` on Apple platforms.
#[uniffi::export(with_foreign)]
pub trait FFIInfoDictionary: Send + Sync {
    /// The string value for `key`, `None` if absent or not a string.
    fn object_for_info_dictionary_key(&self, key: String) -> Option<String>;
}

/// A key counts as declared only if it holds a non-empty string.
pub(crate) fn has_info_dictionary_key(info: &dyn FFIInfoDictionary, key: &str) -> bool {
    info.object_for_info_dictionary_key(key.to_owned())
        .is_some_and(|value| !value.is_empty())
}
