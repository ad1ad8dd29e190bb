//! Validated requests and URL rendering.
//!
//! A [`RouteRequest`] only exists once every required field is present, so
//! rendering it cannot fail.
//!
//! # URL Shapes
//!
//! - geocode: `{base}geocode/json?address={number}+{street},{city},{state}&key={key}`
//! - directions: `{base}directions/json?&origin={origin}&destination={destination}&region={region}&key={key}[&mode={mode}]`
//!
//! Spaces in the street name and city are replaced with `+`. Every other value
//! is inserted verbatim.

use crate::config::MapsConfig;
use crate::types::{Mode, Operation, Region};

/// Street address for a geocode lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_number: u32,
    pub street_name: String,
    pub city: String,
    pub state_or_province: String,
}

impl Address {
    /// Render the `address=` value (e.g. `1600+Amphitheatre+Parkway,Mountain+View,CA`).
    pub fn to_query_value(&self) -> String {
        format!(
            "{}+{},{},{}",
            self.street_number,
            self.street_name.replace(' ', "+"),
            self.city.replace(' ', "+"),
            self.state_or_province
        )
    }
}

/// Origin and destination for a directions lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub region: Region,
    pub mode: Option<Mode>,
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRequest {
    Geocode(Address),
    Directions(DirectionsQuery),
}

impl RouteRequest {
    pub fn operation(&self) -> Operation {
        match self {
            RouteRequest::Geocode(_) => Operation::Geocode,
            RouteRequest::Directions(_) => Operation::Directions,
        }
    }

    /// Render the full request URL, including the API key.
    pub fn to_url(&self, config: &MapsConfig) -> String {
        let endpoint = format!("{}{}/json?", config.base_url, self.operation());

        match self {
            RouteRequest::Geocode(address) => format!(
                "{}address={}&key={}",
                endpoint,
                address.to_query_value(),
                config.api_key
            ),
            RouteRequest::Directions(query) => {
                let mut url = format!(
                    "{}&origin={}&destination={}&region={}&key={}",
                    endpoint, query.origin, query.destination, query.region, config.api_key
                );
                if let Some(mode) = query.mode {
                    url.push_str("&mode=");
                    url.push_str(mode.as_str());
                }
                url
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MapsConfig {
        MapsConfig::new("KEY")
    }

    fn sudbury_to_ottawa(mode: Option<Mode>) -> RouteRequest {
        RouteRequest::Directions(DirectionsQuery {
            origin: "Sudbury".to_string(),
            destination: "Ottawa".to_string(),
            region: Region::En,
            mode,
        })
    }

    #[test]
    fn test_address_query_value() {
        let address = Address {
            street_number: 1600,
            street_name: "Amphitheatre Parkway".to_string(),
            city: "Mountain View".to_string(),
            state_or_province: "CA".to_string(),
        };
        assert_eq!(
            address.to_query_value(),
            "1600+Amphitheatre+Parkway,Mountain+View,CA"
        );
    }

    #[test]
    fn test_geocode_url() {
        let request = RouteRequest::Geocode(Address {
            street_number: 329,
            street_name: "Templeton".to_string(),
            city: "Ottawa".to_string(),
            state_or_province: "ON".to_string(),
        });
        assert_eq!(request.operation(), Operation::Geocode);
        assert_eq!(
            request.to_url(&config()),
            "https://maps.googleapis.com/maps/api/geocode/json?address=329+Templeton,Ottawa,ON&key=KEY"
        );
    }

    #[test]
    fn test_directions_url_without_mode() {
        let url = sudbury_to_ottawa(None).to_url(&config());
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/directions/json?&origin=Sudbury&destination=Ottawa&region=en&key=KEY"
        );
        assert!(!url.contains("&mode="));
    }

    #[test]
    fn test_directions_url_with_mode() {
        let url = sudbury_to_ottawa(Some(Mode::Driving)).to_url(&config());
        assert!(url.ends_with("&key=KEY&mode=driving"));

        let url = sudbury_to_ottawa(Some(Mode::Biking)).to_url(&config());
        assert!(url.ends_with("&mode=bicycling"));
    }

    #[test]
    fn test_directions_values_are_verbatim() {
        let request = RouteRequest::Directions(DirectionsQuery {
            origin: "New York".to_string(),
            destination: "Boston, MA".to_string(),
            region: Region::Es,
            mode: None,
        });
        let url = request.to_url(&config());
        assert!(url.contains("&origin=New York&destination=Boston, MA&region=es"));
    }

    #[test]
    fn test_custom_base_url() {
        let config = MapsConfig::new("KEY").with_base_url("http://127.0.0.1:8080/maps/api");
        let url = sudbury_to_ottawa(None).to_url(&config);
        assert!(url.starts_with("http://127.0.0.1:8080/maps/api/directions/json?&origin="));
    }
}
