use crate::prelude::*;

/// Settles with the first determined authorization status. Its output is a
/// bare [`AuthorizationStatus`], so it has no way to fail.
pub struct AuthorizationChangePolicy;

impl NotificationPolicy for AuthorizationChangePolicy {
    type Notification = LocationNotification;
    type Output = AuthorizationStatus;

    fn classify(&self, notification: LocationNotification) -> Disposition<AuthorizationStatus> {
        let Ok(status) = notification.into_did_change_authorization() else {
            return Disposition::Ignore;
        };
        if status.is_determined() {
            Disposition::Terminal(status)
        } else {
            Disposition::Undetermined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_determined_keeps_waiting() {
        assert_eq!(
            AuthorizationChangePolicy.classify(LocationNotification::DidChangeAuthorization(
                AuthorizationStatus::NotDetermined
            )),
            Disposition::Undetermined
        );
    }

    #[test]
    fn failures_are_never_terminal() {
        for domain in [CL_ERROR_DOMAIN, "NSCocoaErrorDomain", ""] {
            for code in -3..=20 {
                let error = ServiceError::new(domain, code, "any");
                assert_eq!(
                    AuthorizationChangePolicy
                        .classify(LocationNotification::DidFailWithError(error)),
                    Disposition::Ignore
                );
            }
        }
    }
}
