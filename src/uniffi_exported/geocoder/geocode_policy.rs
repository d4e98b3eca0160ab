use crate::prelude::*;

/// A geocoder answers exactly once, so every completion is terminal.
pub struct GeocodePolicy;

impl NotificationPolicy for GeocodePolicy {
    type Notification = GeocodeCompletion;
    type Output = Result<Aggregated<Placemark>, CoreLocationError>;

    fn classify(&self, notification: GeocodeCompletion) -> Disposition<Self::Output> {
        Disposition::Terminal(notification.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placemark(name: &str) -> Placemark {
        Placemark {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn error_wins_over_placemarks() {
        let error = ServiceError::new(CL_ERROR_DOMAIN, 8, "geocode found no result");
        let completion = GeocodeCompletion {
            placemarks: Some(vec![placemark("Stockholm")]),
            error: Some(error.clone()),
        };
        assert_eq!(
            GeocodePolicy.classify(completion),
            Disposition::Terminal(Err(error.into()))
        );
    }

    #[test]
    fn neither_placemarks_nor_error_is_no_results() {
        for placemarks in [None, Some(Vec::new())] {
            let completion = GeocodeCompletion {
                placemarks,
                error: None,
            };
            assert_eq!(
                GeocodePolicy.classify(completion),
                Disposition::Terminal(Err(CoreLocationError::NoResults))
            );
        }
    }
}
