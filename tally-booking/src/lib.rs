//! # tally-booking
//!
//! Customers, hotels and reservations stored as JSON documents.
//!
//! Each entity type lives in its own collection and is addressed by its
//! natural key (customer id, hotel name, reservation code). A
//! [`StoreRepository`] loads a collection once, indexes it by key and
//! rewrites the document after every change. The [`Storage`] trait
//! decouples the repositories from the filesystem.
//!
//! ## Example
//!
//! ```
//! use tally_booking::{BookingService, MemoryStorage};
//!
//! let mut booking = BookingService::open(MemoryStorage::new()).unwrap();
//! booking.create_hotel("Sol", 40, "Cancun").unwrap();
//! let reservation = booking.create_reservation("123", "Sol", "101").unwrap();
//! assert!(booking.cancel_reservation(&reservation.reservation_code).is_ok());
//! ```

pub mod entity;
pub mod error;
pub mod repository;
pub mod service;
pub mod storage;

pub use entity::{Customer, Entity, Hotel, Reservation};
pub use error::{BookingError, BookingResult};
pub use repository::{Repository, StoreRepository};
pub use service::BookingService;
pub use storage::{JsonDirStorage, MemoryStorage, Storage};
