use serde::Deserialize;
use time::OffsetDateTime;

use crate::domain::{DriverDetailsResponse, DriverLocationResponse, Location};
use crate::transport::TransportError;

#[derive(Debug, Deserialize)]
struct DriverDetailsJsonResponse {
    name: String,
    phone: String,
    #[serde(rename = "plateNumber")]
    plate_number: String,
    #[serde(rename = "photo", default)]
    photo_url: String,
}

#[derive(Debug, Deserialize)]
struct DriverLocationJsonResponse {
    location: LocationJsonResponse,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
struct LocationJsonResponse {
    lat: String,
    lng: String,
}

pub fn decode_driver_details_response(
    json: &str,
) -> Result<DriverDetailsResponse, TransportError> {
    let parsed: DriverDetailsJsonResponse = serde_json::from_str(json)?;
    Ok(DriverDetailsResponse {
        name: parsed.name,
        phone: parsed.phone,
        plate_number: parsed.plate_number,
        photo_url: parsed.photo_url,
    })
}

pub fn decode_driver_location_response(
    json: &str,
) -> Result<DriverLocationResponse, TransportError> {
    let parsed: DriverLocationJsonResponse = serde_json::from_str(json)?;
    Ok(DriverLocationResponse {
        location: Location {
            lat: parsed.location.lat,
            lng: parsed.location.lng,
        },
        updated_at: parsed.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn decode_driver_details_maps_contact_and_vehicle() {
        let json = r#"
        {
          "name": "Arun",
          "phone": "9876501234",
          "plateNumber": "KA01AB1234",
          "photo": "https://cdn.example.com/drivers/77421.jpg"
        }
        "#;
        let response = decode_driver_details_response(json).unwrap();
        assert_eq!(response.name, "Arun");
        assert_eq!(response.phone, "9876501234");
        assert_eq!(response.plate_number, "KA01AB1234");
        assert_eq!(
            response.photo_url,
            "https://cdn.example.com/drivers/77421.jpg"
        );
    }

    #[test]
    fn decode_driver_location_parses_coordinates_and_timestamp() {
        let json = r#"
        {
          "location": {"lat": "12.9716", "lng": "77.5946"},
          "updatedAt": "2026-03-01T08:45:10Z"
        }
        "#;
        let response = decode_driver_location_response(json).unwrap();
        assert_eq!(response.location.lat, "12.9716");
        assert_eq!(response.location.lng, "77.5946");
        assert_eq!(response.updated_at, datetime!(2026-03-01 08:45:10 UTC));
    }

    #[test]
    fn decode_driver_location_rejects_malformed_timestamp() {
        let json = r#"
        {
          "location": {"lat": "12.9716", "lng": "77.5946"},
          "updatedAt": "yesterday"
        }
        "#;
        let err = decode_driver_location_response(json).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
