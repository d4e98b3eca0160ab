use crate::prelude::*;

/// Which location authorization to request before using location services.
#[derive(Enum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestAuthorizationType {
    /// Derived from the usage descriptions declared in the info dictionary:
    /// always-authorization if its description is declared, otherwise
    /// when-in-use.
    #[default]
    Automatic,
    Always,
    WhenInUse,
}

/// The authorization request actually made to the location manager.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationRequest {
    Always,
    WhenInUse,
}

impl AuthorizationRequest {
    /// The info dictionary key the platform requires for this request.
    pub fn usage_description_key(&self) -> &'static str {
        match self {
            Self::Always => LOCATION_ALWAYS_USAGE_DESCRIPTION_KEY,
            Self::WhenInUse => LOCATION_WHEN_IN_USE_USAGE_DESCRIPTION_KEY,
        }
    }
}

impl RequestAuthorizationType {
    /// Resolves against `info`, warning if the usage description the resulting
    /// request needs is missing.
    pub fn resolve(&self, info: &dyn FFIInfoDictionary) -> AuthorizationRequest {
        let request = match self {
            Self::Automatic => {
                if has_info_dictionary_key(info, LOCATION_ALWAYS_USAGE_DESCRIPTION_KEY) {
                    AuthorizationRequest::Always
                } else {
                    AuthorizationRequest::WhenInUse
                }
            }
            Self::Always => AuthorizationRequest::Always,
            Self::WhenInUse => AuthorizationRequest::WhenInUse,
        };
        let key = request.usage_description_key();
        if !has_info_dictionary_key(info, key) {
            warn!("`{key}` key not set, the authorization prompt will not be shown");
        }
        request
    }
}
