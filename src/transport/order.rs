use serde::{Deserialize, Serialize};

use crate::domain::{
    DriverId, OrderDetailsResponse, OrderId, OrderStatus, PlaceOrderRequest, PlaceOrderResponse,
    Price,
};
use crate::transport::TransportError;
use crate::transport::quotation::QuotationJson;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderJson<'a> {
    #[serde(flatten)]
    quotation: QuotationJson<'a>,
    quoted_total_fee: PriceJson<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms: Option<bool>,
}

#[derive(Debug, Serialize)]
struct PriceJson<'a> {
    amount: i64,
    currency: &'a str,
}

#[derive(Debug, Deserialize)]
struct PlaceOrderJsonResponse {
    #[serde(rename = "orderRef")]
    order_ref: String,
    #[serde(rename = "customerOrderId", default)]
    customer_order_id: String,
}

#[derive(Debug, Deserialize)]
struct OrderDetailsJsonResponse {
    status: String,
    price: PriceJsonResponse,
    #[serde(rename = "driverId", default)]
    driver_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceJsonResponse {
    amount: i64,
    currency: String,
}

pub fn encode_place_order_body(request: &PlaceOrderRequest) -> Result<Vec<u8>, TransportError> {
    let fee = request.quoted_total_fee();
    let json = PlaceOrderJson {
        quotation: QuotationJson::from_request(request.quotation())?,
        quoted_total_fee: PriceJson {
            amount: fee.amount_cents,
            currency: &fee.currency,
        },
        sms: request.sms(),
    };
    Ok(serde_json::to_vec(&json)?)
}

pub fn decode_place_order_response(json: &str) -> Result<PlaceOrderResponse, TransportError> {
    let parsed: PlaceOrderJsonResponse = serde_json::from_str(json)?;
    Ok(PlaceOrderResponse {
        order_id: OrderId::new(parsed.order_ref)?,
        customer_order_id: parsed.customer_order_id,
    })
}

pub fn decode_order_details_response(json: &str) -> Result<OrderDetailsResponse, TransportError> {
    let parsed: OrderDetailsJsonResponse = serde_json::from_str(json)?;
    let status = OrderStatus::from_wire(&parsed.status).ok_or_else(|| {
        TransportError::UnknownOrderStatus {
            value: parsed.status.clone(),
        }
    })?;
    let driver_id = match parsed.driver_id.as_deref() {
        None | Some("") => None,
        Some(id) => Some(DriverId::new(id)?),
    };
    Ok(OrderDetailsResponse {
        status,
        price: Price {
            amount_cents: parsed.price.amount,
            currency: parsed.price.currency,
        },
        driver_id,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::domain::{
        Address, Contact, CountryCode, Locale, Location, QuotationRequest, ServiceType, Waypoint,
    };

    use super::*;

    fn quotation() -> QuotationRequest {
        let stop = |lat: &str, lng: &str| {
            let mut addresses = BTreeMap::new();
            addresses.insert(
                Locale::ThailandEn,
                Address {
                    display_string: "Sukhumvit 21".to_owned(),
                    country: CountryCode::Thailand,
                },
            );
            Waypoint {
                location: Location {
                    lat: lat.to_owned(),
                    lng: lng.to_owned(),
                },
                addresses,
            }
        };
        QuotationRequest::new(
            ServiceType::Van,
            vec![stop("13.7563", "100.5018"), stop("13.7000", "100.5100")],
            Vec::new(),
            Contact {
                name: "Somchai".to_owned(),
                phone: "0812345678".to_owned(),
            },
        )
        .unwrap()
    }

    #[test]
    fn encode_flattens_quotation_and_adds_fee() {
        let request = PlaceOrderRequest::new(
            quotation(),
            Price {
                amount_cents: 9900,
                currency: "THB".to_owned(),
            },
        );

        let body = encode_place_order_body(&request).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["serviceType"], json!("VAN"));
        assert_eq!(value["stops"].as_array().unwrap().len(), 2);
        assert_eq!(
            value["quotedTotalFee"],
            json!({"amount": 9900, "currency": "THB"})
        );
        assert!(value.get("sms").is_none());
    }

    #[test]
    fn encode_carries_sms_opt_out() {
        let request = PlaceOrderRequest::new(
            quotation(),
            Price {
                amount_cents: 9900,
                currency: "THB".to_owned(),
            },
        )
        .send_sms(false);

        let body = encode_place_order_body(&request).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["sms"], json!(false));
    }

    #[test]
    fn decode_place_order_maps_refs() {
        let json = r#"
        {
          "orderRef": "20260301123000_4821",
          "customerOrderId": "0f2f8a1e-64a4-4c52-b1f3-2b6f27f9a2bd"
        }
        "#;
        let response = decode_place_order_response(json).unwrap();
        assert_eq!(response.order_id.as_str(), "20260301123000_4821");
        assert_eq!(
            response.customer_order_id,
            "0f2f8a1e-64a4-4c52-b1f3-2b6f27f9a2bd"
        );
    }

    #[test]
    fn decode_order_details_with_driver() {
        let json = r#"
        {
          "status": "ON_GOING",
          "price": {"amount": 9900, "currency": "THB"},
          "driverId": "77421"
        }
        "#;
        let response = decode_order_details_response(json).unwrap();
        assert_eq!(response.status, OrderStatus::OnGoing);
        assert_eq!(response.price.amount_cents, 9900);
        assert_eq!(response.driver_id.as_ref().map(DriverId::as_str), Some("77421"));
    }

    #[test]
    fn decode_order_details_without_driver() {
        let json = r#"
        {
          "status": "ASSIGNING_DRIVER",
          "price": {"amount": 9900, "currency": "THB"},
          "driverId": ""
        }
        "#;
        let response = decode_order_details_response(json).unwrap();
        assert_eq!(response.status, OrderStatus::AssigningDriver);
        assert_eq!(response.driver_id, None);
    }

    #[test]
    fn decode_order_details_rejects_unknown_status() {
        let json = r#"
        {
          "status": "TELEPORTING",
          "price": {"amount": 9900, "currency": "THB"}
        }
        "#;
        let err = decode_order_details_response(json).unwrap_err();
        match err {
            TransportError::UnknownOrderStatus { value } => assert_eq!(value, "TELEPORTING"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
