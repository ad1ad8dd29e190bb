//! Response models and result accessors.
//!
//! Only the fields the accessors read are modeled. Everything else in the
//! Google response bodies is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutesError};
use crate::types::Operation;

/// Upstream status for a successful lookup.
pub const STATUS_OK: &str = "OK";

/// Upstream status for a valid request that matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// A latitude/longitude pair as returned in `geometry.location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lng
    }
}

/// Body of a `directions/json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Instruction text, with HTML markup as sent by the API.
    pub html_instructions: String,
}

/// Body of a `geocode/json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// The parsed response of a built request.
///
/// The variant matches the [`Operation`] the request was built for, so a
/// result can only be read the way it was requested.
#[derive(Debug, Clone)]
pub enum RouteResult {
    Geocode(GeocodeResponse),
    Directions(DirectionsResponse),
}

impl RouteResult {
    /// Parse a response body for the given operation.
    pub fn parse(operation: Operation, body: &str) -> Result<Self> {
        Ok(match operation {
            Operation::Geocode => RouteResult::Geocode(serde_json::from_str(body)?),
            Operation::Directions => RouteResult::Directions(serde_json::from_str(body)?),
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            RouteResult::Geocode(_) => Operation::Geocode,
            RouteResult::Directions(_) => Operation::Directions,
        }
    }

    /// The upstream `status` field.
    pub fn status(&self) -> &str {
        match self {
            RouteResult::Geocode(response) => &response.status,
            RouteResult::Directions(response) => &response.status,
        }
    }

    /// Instructions of every step of the first leg of the first route, in
    /// the order the API returned them.
    ///
    /// # Errors
    ///
    /// - [`RoutesError::UnsupportedOperation`] for a geocode result
    /// - [`RoutesError::ZeroResults`] / [`RoutesError::Upstream`] if the status is not `OK`
    /// - [`RoutesError::MalformedResponse`] if there is no route or leg
    pub fn directions(&self) -> Result<Vec<String>> {
        let response = match self {
            RouteResult::Directions(response) => response,
            RouteResult::Geocode(_) => {
                return Err(RoutesError::UnsupportedOperation {
                    operation: Operation::Geocode,
                })
            }
        };

        check_status(
            Operation::Directions,
            &response.status,
            response.error_message.as_deref(),
        )?;

        let leg = response
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .ok_or_else(|| RoutesError::MalformedResponse {
                reason: "routes[0].legs[0] is missing".to_string(),
            })?;

        Ok(leg
            .steps
            .iter()
            .map(|step| step.html_instructions.clone())
            .collect())
    }

    /// Location of the first geocode match.
    ///
    /// # Errors
    ///
    /// - [`RoutesError::InvalidArgument`] for a directions result
    /// - [`RoutesError::ZeroResults`] / [`RoutesError::Upstream`] if the status is not `OK`
    /// - [`RoutesError::MalformedResponse`] if there is no result
    pub fn geocode(&self) -> Result<LatLng> {
        let response = match self {
            RouteResult::Geocode(response) => response,
            RouteResult::Directions(_) => {
                return Err(RoutesError::InvalidArgument {
                    reason: format!("Does not support {}", Operation::Directions),
                })
            }
        };

        check_status(
            Operation::Geocode,
            &response.status,
            response.error_message.as_deref(),
        )?;

        response
            .results
            .first()
            .map(|result| result.geometry.location)
            .ok_or_else(|| RoutesError::MalformedResponse {
                reason: "results[0] is missing".to_string(),
            })
    }
}

/// Map an upstream status to an error unless it is `OK`.
fn check_status(operation: Operation, status: &str, error_message: Option<&str>) -> Result<()> {
    match status {
        STATUS_OK => Ok(()),
        STATUS_ZERO_RESULTS => Err(RoutesError::ZeroResults { operation }),
        other => Err(RoutesError::Upstream {
            status: other.to_string(),
            message: error_message.unwrap_or_default().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS_OK: &str = r#"{
        "geocoded_waypoints": [],
        "routes": [{
            "summary": "ON-17 E",
            "legs": [{
                "distance": { "text": "483 km", "value": 483000 },
                "steps": [
                    { "html_instructions": "Head <b>east</b> on <b>Elm St</b>", "travel_mode": "DRIVING" },
                    { "html_instructions": "Turn <b>left</b> onto <b>Notre Dame Ave</b>", "travel_mode": "DRIVING" },
                    { "html_instructions": "Merge onto <b>ON-17 E</b>", "travel_mode": "DRIVING" }
                ]
            }]
        }],
        "status": "OK"
    }"#;

    const GEOCODE_OK: &str = r#"{
        "results": [{
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": {
                "location": { "lat": 37.4224764, "lng": -122.0842499 },
                "location_type": "ROOFTOP"
            }
        }],
        "status": "OK"
    }"#;

    #[test]
    fn test_directions_steps_in_order() {
        let result = RouteResult::parse(Operation::Directions, DIRECTIONS_OK).unwrap();
        assert_eq!(result.operation(), Operation::Directions);
        assert_eq!(result.status(), "OK");

        let steps = result.directions().unwrap();
        assert_eq!(
            steps,
            vec![
                "Head <b>east</b> on <b>Elm St</b>",
                "Turn <b>left</b> onto <b>Notre Dame Ave</b>",
                "Merge onto <b>ON-17 E</b>",
            ]
        );
    }

    #[test]
    fn test_geocode_location() {
        let result = RouteResult::parse(Operation::Geocode, GEOCODE_OK).unwrap();
        let location = result.geocode().unwrap();
        assert_eq!(location.latitude(), 37.4224764);
        assert_eq!(location.longitude(), -122.0842499);
    }

    #[test]
    fn test_wrong_accessor() {
        let geocode = RouteResult::parse(Operation::Geocode, GEOCODE_OK).unwrap();
        let err = geocode.directions().unwrap_err();
        assert!(matches!(
            err,
            RoutesError::UnsupportedOperation {
                operation: Operation::Geocode
            }
        ));

        let directions = RouteResult::parse(Operation::Directions, DIRECTIONS_OK).unwrap();
        let err = directions.geocode().unwrap_err();
        assert!(err.is_argument_error());
        assert_eq!(err.to_string(), "Invalid argument: Does not support directions");
    }

    #[test]
    fn test_zero_results() {
        let body = r#"{ "geocoded_waypoints": [], "routes": [], "status": "ZERO_RESULTS" }"#;
        let result = RouteResult::parse(Operation::Directions, body).unwrap();
        assert!(matches!(
            result.directions(),
            Err(RoutesError::ZeroResults {
                operation: Operation::Directions
            })
        ));

        let body = r#"{ "results": [], "status": "ZERO_RESULTS" }"#;
        let result = RouteResult::parse(Operation::Geocode, body).unwrap();
        assert!(matches!(
            result.geocode(),
            Err(RoutesError::ZeroResults {
                operation: Operation::Geocode
            })
        ));
    }

    #[test]
    fn test_upstream_error_status() {
        let body = r#"{
            "error_message": "The provided API key is invalid.",
            "results": [],
            "status": "REQUEST_DENIED"
        }"#;
        let result = RouteResult::parse(Operation::Geocode, body).unwrap();
        match result.geocode() {
            Err(RoutesError::Upstream { status, message }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_without_route() {
        let body = r#"{ "routes": [{ "legs": [] }], "status": "OK" }"#;
        let result = RouteResult::parse(Operation::Directions, body).unwrap();
        assert!(matches!(
            result.directions(),
            Err(RoutesError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RouteResult::parse(Operation::Geocode, "<html>not json</html>"),
            Err(RoutesError::Json(_))
        ));

        // Missing status field
        assert!(matches!(
            RouteResult::parse(Operation::Directions, r#"{ "routes": [] }"#),
            Err(RoutesError::Json(_))
        ));
    }
}
