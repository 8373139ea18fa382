use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::domain::{Contact, DeliveryInfo, QuotationRequest, QuotationResponse, Waypoint};
use crate::transport::TransportError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QuotationJson<'a> {
    service_type: &'static str,
    stops: Vec<WaypointJson<'a>>,
    deliveries: Vec<DeliveryJson<'a>>,
    requester_contact: ContactJson<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_at: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    special_requests: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct WaypointJson<'a> {
    location: LocationJson<'a>,
    addresses: BTreeMap<&'static str, AddressJson<'a>>,
}

#[derive(Debug, Serialize)]
struct LocationJson<'a> {
    lat: &'a str,
    lng: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressJson<'a> {
    display_string: &'a str,
    country: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryJson<'a> {
    to_stop: i64,
    to_contact: ContactJson<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ContactJson<'a> {
    name: &'a str,
    phone: &'a str,
}

#[derive(Debug, Deserialize)]
struct QuotationJsonResponse {
    #[serde(rename = "totalFee")]
    total_fee: i64,
    #[serde(rename = "totalFeeCurrency")]
    total_fee_currency: String,
}

impl<'a> QuotationJson<'a> {
    pub(super) fn from_request(request: &'a QuotationRequest) -> Result<Self, TransportError> {
        let schedule_at = match request.scheduled_at() {
            Some(at) => Some(at.format(&Rfc3339)?),
            None => None,
        };
        Ok(Self {
            service_type: request.service_type().as_str(),
            stops: request.stops().iter().map(waypoint_json).collect(),
            deliveries: request.deliveries().iter().map(delivery_json).collect(),
            requester_contact: contact_json(request.requester_contact()),
            schedule_at,
            special_requests: request
                .special_request_list()
                .iter()
                .map(|special| special.as_str())
                .collect(),
        })
    }
}

fn waypoint_json(waypoint: &Waypoint) -> WaypointJson<'_> {
    WaypointJson {
        location: LocationJson {
            lat: &waypoint.location.lat,
            lng: &waypoint.location.lng,
        },
        addresses: waypoint
            .addresses
            .iter()
            .map(|(locale, address)| {
                (
                    locale.as_str(),
                    AddressJson {
                        display_string: &address.display_string,
                        country: address.country.as_str(),
                    },
                )
            })
            .collect(),
    }
}

fn delivery_json(delivery: &DeliveryInfo) -> DeliveryJson<'_> {
    DeliveryJson {
        to_stop: delivery.to_stop,
        to_contact: contact_json(&delivery.contact),
        remarks: delivery.remarks.as_deref(),
    }
}

fn contact_json(contact: &Contact) -> ContactJson<'_> {
    ContactJson {
        name: &contact.name,
        phone: &contact.phone,
    }
}

pub fn encode_quotation_body(request: &QuotationRequest) -> Result<Vec<u8>, TransportError> {
    let json = QuotationJson::from_request(request)?;
    Ok(serde_json::to_vec(&json)?)
}

pub fn decode_quotation_response(json: &str) -> Result<QuotationResponse, TransportError> {
    let parsed: QuotationJsonResponse = serde_json::from_str(json)?;
    Ok(QuotationResponse {
        amount_cents: parsed.total_fee,
        currency: parsed.total_fee_currency,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;
    use time::macros::datetime;

    use crate::domain::{
        Address, Contact, CountryCode, DeliveryInfo, Locale, Location, ServiceType,
        SpecialRequest, Waypoint,
    };

    use super::*;

    fn stop(lat: &str, lng: &str, display: &str) -> Waypoint {
        let mut addresses = BTreeMap::new();
        addresses.insert(
            Locale::SingaporeEn,
            Address {
                display_string: display.to_owned(),
                country: CountryCode::Singapore,
            },
        );
        Waypoint {
            location: Location {
                lat: lat.to_owned(),
                lng: lng.to_owned(),
            },
            addresses,
        }
    }

    fn request() -> QuotationRequest {
        QuotationRequest::new(
            ServiceType::Motorcycle,
            vec![
                stop("1.2840", "103.8510", "1 Raffles Place"),
                stop("1.3000", "103.8000", "30 Orchard Road"),
            ],
            vec![DeliveryInfo {
                to_stop: 1,
                contact: Contact {
                    name: "Lim Hui".to_owned(),
                    phone: "91234567".to_owned(),
                },
                remarks: Some("Level 12\r\nUnit 03".to_owned()),
            }],
            Contact {
                name: "Tan Wei".to_owned(),
                phone: "98765432".to_owned(),
            },
        )
        .unwrap()
    }

    #[test]
    fn encode_uses_documented_field_names() {
        let body = encode_quotation_body(&request()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "serviceType": "MOTORCYCLE",
                "stops": [
                    {
                        "location": {"lat": "1.2840", "lng": "103.8510"},
                        "addresses": {
                            "en_SG": {
                                "displayString": "1 Raffles Place",
                                "country": "SG"
                            }
                        }
                    },
                    {
                        "location": {"lat": "1.3000", "lng": "103.8000"},
                        "addresses": {
                            "en_SG": {
                                "displayString": "30 Orchard Road",
                                "country": "SG"
                            }
                        }
                    }
                ],
                "deliveries": [
                    {
                        "toStop": 1,
                        "toContact": {"name": "Lim Hui", "phone": "91234567"},
                        "remarks": "Level 12\r\nUnit 03"
                    }
                ],
                "requesterContact": {"name": "Tan Wei", "phone": "98765432"}
            })
        );
    }

    #[test]
    fn encode_includes_schedule_and_special_requests_when_set() {
        let request = request()
            .schedule_at(datetime!(2026-03-01 08:30:00 UTC))
            .special_requests(vec![SpecialRequest::Lalabag, SpecialRequest::ReturnTrip]);

        let body = encode_quotation_body(&request).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["scheduleAt"], json!("2026-03-01T08:30:00Z"));
        assert_eq!(value["specialRequests"], json!(["LALABAG", "RETURNTRIP"]));
    }

    #[test]
    fn decode_maps_fee_fields() {
        let json = r#"{"totalFee": 1550, "totalFeeCurrency": "SGD"}"#;
        let response = decode_quotation_response(json).unwrap();
        assert_eq!(response.amount_cents, 1550);
        assert_eq!(response.currency, "SGD");
    }

    #[test]
    fn decode_rejects_malformed_payload() {
        let err = decode_quotation_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
