//! Order building blocks: vehicle catalog, special requests, order status,
//! and the waypoint/contact/price structs shared by quotation and order
//! placement.

use std::collections::BTreeMap;

use crate::domain::geo::{CountryCode, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Vehicle type. Availability varies per market.
pub enum ServiceType {
    Car,
    Lalago,
    Lalapro,
    Minivan,
    Motorcycle,
    Mpv,
    TataAce7Ft,
    TataAce8Ft,
    ThreeWheeler,
    Truck175,
    Truck330,
    Truck550,
    UvFiorino,
    Van,
    FourByFour,
}

impl ServiceType {
    /// The service type code as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Lalago => "LALAGO",
            Self::Lalapro => "LALAPRO",
            Self::Minivan => "MINIVAN",
            Self::Motorcycle => "MOTORCYCLE",
            Self::Mpv => "MPV",
            Self::TataAce7Ft => "TATA7FT",
            Self::TataAce8Ft => "TATA8FT",
            Self::ThreeWheeler => "THREE_WHEELER",
            Self::Truck175 => "TRUCK175",
            Self::Truck330 => "TRUCK330",
            Self::Truck550 => "TRUCK550",
            Self::UvFiorino => "UV_FIORINO",
            Self::Van => "VAN",
            Self::FourByFour => "4X4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Add-on service for an order. Availability varies per market and must
/// match the selected service type.
pub enum SpecialRequest {
    OneHelperTier1,
    OneHelperTier2,
    OneHelperTier3,
    AdditionalAssistantTier1,
    AdditionalAssistantTier2,
    AdditionalAssistantTier3,
    InsulatedBag,
    UvVan,
    Lalabag,
    LalabagBig,
    Door2Door,
    Door2DoorDriver,
    Door2DoorTruck330,
    Door2DoorTruck550,
    Door2Door1HelperTruck175,
    Door2Door1HelperTruck330,
    Door2Door1HelperTruck550,
    Door2Door2HelperTruck330,
    Door2Door2HelperTruck550,
    CashOnDelivery,
    PurchaseService,
    PurchaseServiceTier2,
    ExtraHelper,
    ExtraHelperTruck175,
    RoundtripMotorcycle,
    RoundtripTruck175,
    RoundtripTruck330,
    QueueingMotorcycle,
    ReturnTrip,
    ReturnTripLorry,
    LoadingService,
    FoodService,
    DriverCarries,
    OneAssistant1To2Drops,
    OneAssistant3To4Drops,
    OneAssistant5PlusDrops,
    Restricted,
    MovingDriver,
    MovingDriver1Helper,
    MovingDriver2Helper,
    MovingDriver1HelperVan,
    MovingDriver2HelperVan,
    Tailgate,
    Covered,
    HelpBuy,
    GroundFloorOneWay,
    GroundFloorOneWay2,
    UpstairDownstairOneWay,
    UpstairDownstairOneWay2,
}

impl SpecialRequest {
    /// The special request code as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHelperTier1 => "1HELPER_TIER1",
            Self::OneHelperTier2 => "1HELPER_TIER2",
            Self::OneHelperTier3 => "1HELPER_TIER3",
            Self::AdditionalAssistantTier1 => "ADDITIONAL_ASSISTANT_TIER1",
            Self::AdditionalAssistantTier2 => "ADDITIONAL_ASSISTANT_TIER2",
            Self::AdditionalAssistantTier3 => "ADDITIONAL_ASSISTANT_TIER3",
            Self::InsulatedBag => "INSULATED_BAG",
            Self::UvVan => "UV_VAN",
            Self::Lalabag => "LALABAG",
            Self::LalabagBig => "LALABAG_BIG",
            Self::Door2Door => "DOOR2DOOR",
            Self::Door2DoorDriver => "DOOR2DOOR_DRIVER",
            Self::Door2DoorTruck330 => "DOOR2DOOR_TRUCK330",
            Self::Door2DoorTruck550 => "DOOR2DOOR_TRUCK550",
            Self::Door2Door1HelperTruck175 => "DOOR2DOOR_1HELPER_TRUCK175",
            Self::Door2Door1HelperTruck330 => "DOOR2DOOR_1HELPER_TRUCK330",
            Self::Door2Door1HelperTruck550 => "DOOR2DOOR_1HELPER_TRUCK550",
            Self::Door2Door2HelperTruck330 => "DOOR2DOOR_2HELPER_TRUCK330",
            Self::Door2Door2HelperTruck550 => "DOOR2DOOR_2HELPER_TRUCK550",
            Self::CashOnDelivery => "COD",
            Self::PurchaseService => "PURCHASE_SERVICE",
            Self::PurchaseServiceTier2 => "PURCHASE_SERVICE_TIER_2",
            Self::ExtraHelper => "EXTRA_HELPER",
            Self::ExtraHelperTruck175 => "EXTRA_HELPER_TRUCK175",
            Self::RoundtripMotorcycle => "ROUNDTRIP_MOTORYCYCLE",
            Self::RoundtripTruck175 => "ROUNDTRIP_TRUCK175",
            Self::RoundtripTruck330 => "ROUNDTRIP_TRUCK330",
            Self::QueueingMotorcycle => "QUEUEING_MOTORCYCLE",
            Self::ReturnTrip => "RETURNTRIP",
            Self::ReturnTripLorry => "RETURNTRIP_LORRY",
            Self::LoadingService => "LOADING_SERVICE",
            Self::FoodService => "FOOD_SERVICE",
            Self::DriverCarries => "DRIVER_CARRIES",
            Self::OneAssistant1To2Drops => "1ASSISTANT_1_MINUS_2DROPS",
            Self::OneAssistant3To4Drops => "1ASSISTANT_3_MINUS_4DROPS",
            Self::OneAssistant5PlusDrops => "1ASSISTANT_5_PLUS_DROPS",
            Self::Restricted => "RESTRICTED",
            Self::MovingDriver => "MOVING_DRIVER",
            Self::MovingDriver1Helper => "MOVING_DRIVER_1HELPER",
            Self::MovingDriver2Helper => "MOVING_DRIVER_2HELPER",
            Self::MovingDriver1HelperVan => "MOVING_DRIVER_1HELPER_VAN",
            Self::MovingDriver2HelperVan => "MOVING_DRIVER_2HELPER_VAN",
            Self::Tailgate => "TAILGATE",
            Self::Covered => "COVERED",
            Self::HelpBuy => "HELP_BUY",
            Self::GroundFloorOneWay => "GROUND_FLOOR_ONE_WAY",
            Self::GroundFloorOneWay2 => "GROUND_FLOOR_ONE_WAY_2",
            Self::UpstairDownstairOneWay => "UPSTAIR_DOWNSTAIR_ONE_WAY",
            Self::UpstairDownstairOneWay2 => "UPSTAIR_DOWNSTAIR_ONE_WAY_2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Server-side order lifecycle state.
pub enum OrderStatus {
    /// Trying to match the shipment with a driver.
    AssigningDriver,
    /// A driver has accepted the order.
    OnGoing,
    /// The driver has picked up the shipment.
    PickedUp,
    /// Delivered successfully, transaction concluded.
    Completed,
    /// The user canceled the order.
    Canceled,
    /// Matched and rejected twice by two drivers in a row.
    Rejected,
    /// No driver accepted the order before it expired.
    Expired,
}

impl OrderStatus {
    /// The status code as reported on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssigningDriver => "ASSIGNING_DRIVER",
            Self::OnGoing => "ON_GOING",
            Self::PickedUp => "PICKED_UP",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Parse a wire status code; `None` for codes this client does not know.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "ASSIGNING_DRIVER" => Some(Self::AssigningDriver),
            "ON_GOING" => Some(Self::OnGoing),
            "PICKED_UP" => Some(Self::PickedUp),
            "COMPLETED" => Some(Self::Completed),
            "CANCELED" => Some(Self::Canceled),
            "REJECTED" => Some(Self::Rejected),
            "EXPIRED" => Some(Self::Expired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A contact person: the requester at the pick-up point or the recipient at
/// a delivery stop.
pub struct Contact {
    /// Name of the contact person.
    pub name: String,
    /// Phone number; validation varies per market (see
    /// [`Country::phone_regex`](crate::domain::Country)).
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Geographic coordinates, decimal degrees as strings.
pub struct Location {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Street address in plain text. Building, floor, and flat go into
/// [`DeliveryInfo::remarks`].
pub struct Address {
    pub display_string: String,
    /// Must match the `X-LLM-Country` header of the request carrying it.
    pub country: CountryCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A stop on the route: coordinates plus localized addresses.
pub struct Waypoint {
    pub location: Location,
    pub addresses: BTreeMap<Locale, Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recipient details for one delivery stop.
pub struct DeliveryInfo {
    /// Index of the waypoint this delivery is bound to. Must be >= 1: the
    /// first stop's contact is the requester.
    pub to_stop: i64,
    /// Contact person at the stop.
    pub contact: Contact,
    /// Additional info (building, floor, flat). `\r\n` separates lines.
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fee in the smallest currency unit.
pub struct Price {
    pub amount_cents: i64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_wire_codes_round_trip() {
        let statuses = [
            OrderStatus::AssigningDriver,
            OrderStatus::OnGoing,
            OrderStatus::PickedUp,
            OrderStatus::Completed,
            OrderStatus::Canceled,
            OrderStatus::Rejected,
            OrderStatus::Expired,
        ];
        for status in statuses {
            assert_eq!(OrderStatus::from_wire(status.as_str()), Some(status));
        }
    }

    #[test]
    fn order_status_rejects_unknown_codes() {
        assert_eq!(OrderStatus::from_wire("IN_TRANSIT"), None);
        assert_eq!(OrderStatus::from_wire(""), None);
    }
}
