//! Booking operations over the three collections

use crate::entity::{Customer, Entity, Hotel, Reservation};
use crate::error::{BookingError, BookingResult};
use crate::repository::{Repository, StoreRepository};
use crate::storage::Storage;
use tracing::info;

/// Customers, hotels and reservations sharing one storage backend
pub struct BookingService<S: Storage + Clone> {
    customers: StoreRepository<Customer, S>,
    hotels: StoreRepository<Hotel, S>,
    reservations: StoreRepository<Reservation, S>,
}

fn require(field: &'static str, value: &str) -> BookingResult<()> {
    if value.trim().is_empty() {
        return Err(BookingError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Empty replacement values leave a field unchanged
fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl<S: Storage + Clone> BookingService<S> {
    pub fn open(storage: S) -> BookingResult<Self> {
        Ok(Self {
            customers: StoreRepository::open(storage.clone())?,
            hotels: StoreRepository::open(storage.clone())?,
            reservations: StoreRepository::open(storage)?,
        })
    }

    // ------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------

    pub fn create_customer(
        &mut self,
        customer_id: &str,
        name: &str,
        phone_number: &str,
    ) -> BookingResult<Customer> {
        require("customer_id", customer_id)?;
        require("name", name)?;

        let customer = Customer::new(customer_id, name, phone_number);
        self.customers.insert(customer.clone())?;
        info!(customer_id, "Created customer");
        Ok(customer)
    }

    pub fn show_customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.find(customer_id)
    }

    pub fn update_customer(
        &mut self,
        customer_id: &str,
        name: Option<&str>,
        phone_number: Option<&str>,
    ) -> BookingResult<Customer> {
        let updated = self.customers.update(customer_id, |c| {
            if let Some(name) = provided(name) {
                c.name = name.to_string();
            }
            if let Some(phone) = provided(phone_number) {
                c.phone_number = phone.to_string();
            }
        })?;
        updated
            .cloned()
            .ok_or_else(|| BookingError::not_found(Customer::COLLECTION, customer_id))
    }

    pub fn delete_customer(&mut self, customer_id: &str) -> BookingResult<bool> {
        Ok(self.customers.delete(customer_id)?.is_some())
    }

    pub fn list_customers(&self) -> &[Customer] {
        self.customers.list()
    }

    // ------------------------------------------------------------------
    // Hotels
    // ------------------------------------------------------------------

    pub fn create_hotel(&mut self, name: &str, num_rooms: u32, ubication: &str) -> BookingResult<Hotel> {
        require("name", name)?;

        let hotel = Hotel::new(name, num_rooms, ubication);
        self.hotels.insert(hotel.clone())?;
        info!(name, num_rooms, "Created hotel");
        Ok(hotel)
    }

    pub fn show_hotel(&self, name: &str) -> Option<&Hotel> {
        self.hotels.find(name)
    }

    /// A room count of zero leaves the count unchanged
    pub fn update_hotel(
        &mut self,
        name: &str,
        num_rooms: Option<u32>,
        ubication: Option<&str>,
    ) -> BookingResult<Hotel> {
        let updated = self.hotels.update(name, |h| {
            if let Some(rooms) = num_rooms.filter(|r| *r > 0) {
                h.num_rooms = rooms;
            }
            if let Some(ubication) = provided(ubication) {
                h.ubication = ubication.to_string();
            }
        })?;
        updated
            .cloned()
            .ok_or_else(|| BookingError::not_found(Hotel::COLLECTION, name))
    }

    pub fn delete_hotel(&mut self, name: &str) -> BookingResult<bool> {
        Ok(self.hotels.delete(name)?.is_some())
    }

    pub fn list_hotels(&self) -> &[Hotel] {
        self.hotels.list()
    }

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------

    pub fn create_reservation(
        &mut self,
        customer_id: &str,
        hotel_name: &str,
        room: &str,
    ) -> BookingResult<Reservation> {
        require("customer_id", customer_id)?;
        require("hotel_name", hotel_name)?;
        require("room", room)?;

        let reservation = Reservation::new(customer_id, hotel_name, room);
        self.reservations.insert(reservation.clone())?;
        info!(code = %reservation.reservation_code, customer_id, hotel_name, "Created reservation");
        Ok(reservation)
    }

    pub fn show_reservation(&self, code: &str) -> Option<&Reservation> {
        self.reservations.find(code)
    }

    /// Mark a reservation inactive; the record is kept
    pub fn cancel_reservation(&mut self, code: &str) -> BookingResult<Reservation> {
        let cancelled = self.reservations.update(code, |r| r.active = false)?;
        cancelled
            .cloned()
            .ok_or_else(|| BookingError::not_found(Reservation::COLLECTION, code))
    }

    pub fn delete_reservation(&mut self, code: &str) -> BookingResult<bool> {
        Ok(self.reservations.delete(code)?.is_some())
    }

    pub fn list_reservations(&self) -> &[Reservation] {
        self.reservations.list()
    }
}
