//! Booking entities
//!
//! Field names match the JSON documents on disk.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record stored in its own collection and identified by a natural key
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Collection name; also the JSON file stem
    const COLLECTION: &'static str;

    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub phone_number: String,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl Entity for Customer {
    const COLLECTION: &'static str = "customers";

    fn key(&self) -> &str {
        &self.customer_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub num_rooms: u32,
    /// Location
    pub ubication: String,
}

impl Hotel {
    pub fn new(name: impl Into<String>, num_rooms: u32, ubication: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_rooms,
            ubication: ubication.into(),
        }
    }
}

impl Entity for Hotel {
    const COLLECTION: &'static str = "hotels";

    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_code: String,
    pub customer_id: String,
    pub hotel_name: String,
    pub room: String,
    pub active: bool,
}

impl Reservation {
    /// New active reservation with a random v4 UUID code
    pub fn new(
        customer_id: impl Into<String>,
        hotel_name: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            reservation_code: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            hotel_name: hotel_name.into(),
            room: room.into(),
            active: true,
        }
    }
}

impl Entity for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn key(&self) -> &str {
        &self.reservation_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_document() {
        let customer = Customer::new("123", "Ana", "555-0100");
        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({"customer_id": "123", "name": "Ana", "phone_number": "555-0100"})
        );
        assert_eq!(customer.key(), "123");
    }

    #[test]
    fn test_hotel_document() {
        let hotel: Hotel =
            serde_json::from_value(json!({"name": "Sol", "num_rooms": 40, "ubication": "Cancun"}))
                .unwrap();
        assert_eq!(hotel, Hotel::new("Sol", 40, "Cancun"));
        assert_eq!(Hotel::COLLECTION, "hotels");
    }

    #[test]
    fn test_reservation_starts_active_with_unique_code() {
        let a = Reservation::new("123", "Sol", "101");
        let b = Reservation::new("123", "Sol", "101");
        assert!(a.active);
        assert_ne!(a.reservation_code, b.reservation_code);
        assert!(Uuid::parse_str(a.key()).is_ok());
    }
}
